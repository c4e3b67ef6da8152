// src/handlers/product.rs
use tracing::instrument;
use crate::dtos::view::View;
use crate::models::product::{sample_products, Product};

// GET /Product/Index - Fixed sample catalog
#[instrument]
pub async fn index() -> View<Vec<Product>> {
    View::new("Product/Index", sample_products())
}

// GET /Product/ManageView
pub async fn manage_view() -> View<()> {
    View::empty("Product/ManageView")
}
