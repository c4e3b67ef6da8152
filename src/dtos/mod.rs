pub mod employee;
pub mod test_page;
pub mod view;
