pub mod antiforgery;
