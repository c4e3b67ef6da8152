// src/state.rs
use std::sync::Arc;
use crate::database::EmployeeDbContext;

#[derive(Clone)]
pub struct AppState {
    pub db: EmployeeDbContext,
    pub antiforgery_secret: Arc<str>,
}

impl AppState {
    pub fn new(db: EmployeeDbContext, antiforgery_secret: impl Into<Arc<str>>) -> Self {
        Self { db, antiforgery_secret: antiforgery_secret.into() }
    }
}
