/// Derives a category slug: lowercase, with every run of whitespace collapsed to `-`
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(slugify("Fresh  Fruits"), "fresh-fruits");
        assert_eq!(slugify("  Dairy\tand Eggs "), "dairy-and-eggs");
        assert_eq!(slugify("Snacks"), "snacks");
    }

    #[test]
    fn empty_name_gives_empty_slug() {
        assert_eq!(slugify("   "), "");
    }
}
