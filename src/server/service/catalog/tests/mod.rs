
use bazaar_test_utils::prelude::*;

use super::*;

fn product_input(name: &str, categories: &str) -> ProductInputDto {
    ProductInputDto {
        name: name.to_string(),
        unit: "1 kg".to_string(),
        image_url: None,
        categories: categories.to_string(),
        description: None,
        brand: None,
        in_stock: true,
        price_mrp: Some(Decimal::from(60)),
        price_selling: Some(Decimal::from(50)),
        stock: Some(10),
        is_seller_editable: false,
    }
}
