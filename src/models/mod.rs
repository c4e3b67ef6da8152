pub mod employee;
pub mod product;
