use rand::Rng;
use sha2::{Digest, Sha256};

/// Number of digits in a one-time passcode
pub const OTP_LENGTH: usize = 6;

/// Generates a zero-padded random numeric passcode
pub fn generate_code() -> String {
    let code: u32 = rand::rng().random_range(0..1_000_000);

    format!("{:0width$}", code, width = OTP_LENGTH)
}

/// Hex encoded SHA-256 digest of a passcode, the only form in which codes are stored
pub fn hash_code(code: &str) -> String {
    let digest = Sha256::digest(code.as_bytes());

    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}

/// Whether `code` has the shape of a passcode at all
pub fn is_well_formed(code: &str) -> bool {
    code.len() == OTP_LENGTH && code.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_six_digit_codes() {
        for _ in 0..100 {
            let code = generate_code();

            assert!(is_well_formed(&code), "{code:?} is not a valid code");
        }
    }

    /// Expect the well known digest of "123456"
    #[test]
    fn hashes_with_sha256() {
        assert_eq!(
            hash_code("123456"),
            "8d969eef6ecad3c29a3a629280e686cf0c3f5d5a86aff3ca12020c923adc6c92"
        );
        assert_ne!(hash_code("123456"), hash_code("123457"));
    }

    #[test]
    fn rejects_malformed_codes() {
        assert!(!is_well_formed("12345"));
        assert!(!is_well_formed("1234567"));
        assert!(!is_well_formed("12a456"));
    }
}
