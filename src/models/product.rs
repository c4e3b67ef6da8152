use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: Decimal,
}

impl Product {
    fn sample(product_id: i32, category: &str, price: i64) -> Self {
        Self {
            product_id,
            name: format!("Product {product_id}"),
            category: category.to_string(),
            description: format!("Description {product_id}"),
            price: Decimal::from(price),
        }
    }
}

/// The fixed catalog shown on the product listing page, rebuilt per request.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::sample(1, "Category 1", 10),
        Product::sample(2, "Category 1", 20),
        Product::sample(3, "Category 1", 30),
        Product::sample(4, "Category 2", 40),
        Product::sample(5, "Category 2", 50),
        Product::sample(6, "Category 2", 50),
    ]
}
