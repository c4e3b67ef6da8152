pub mod employee;
pub mod product;
pub mod test_page;
