// src/database/mod.rs
pub mod memory;
pub mod postgres;

use std::sync::Arc;
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::postgres::PgPoolOptions;
use crate::error::AppError;
use crate::models::employee::{Employee, NewEmployee};
use crate::state::AppState;

pub use memory::MemoryStore;
pub use postgres::PgStore;

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<sqlx::PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Hands out one session over the employee table per request.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn open(&self) -> Result<Box<dyn EmployeeSet>, sqlx::Error>;
}

/// The `Employees` entity set as seen by a single request. Every write is
/// committed before the call returns.
#[async_trait]
pub trait EmployeeSet: Send {
    async fn to_list(&mut self) -> Result<Vec<Employee>, sqlx::Error>;

    async fn find(&mut self, id: i32) -> Result<Option<Employee>, sqlx::Error>;

    async fn add(&mut self, employee: NewEmployee) -> Result<Employee, sqlx::Error>;

    /// Overwrites every column of the row with `employee.id`; `None` if no such row.
    async fn update(&mut self, employee: Employee) -> Result<Option<Employee>, sqlx::Error>;

    /// Returns whether a row was removed.
    async fn remove(&mut self, id: i32) -> Result<bool, sqlx::Error>;
}

/// Declares the employee store: a single entity set backed by the
/// `employees` table.
#[derive(Clone)]
pub struct EmployeeDbContext {
    store: Arc<dyn RecordStore>,
}

impl EmployeeDbContext {
    pub fn new(store: impl RecordStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = create_pool(database_url, max_connections).await?;
        Ok(Self::new(PgStore::new(pool)))
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStore::default())
    }

    pub async fn open(&self) -> Result<Employees, sqlx::Error> {
        Ok(Employees(self.store.open().await?))
    }
}

/// Request-scoped session on the employee store. Opened when a handler asks
/// for it and released when the handler returns.
pub struct Employees(Box<dyn EmployeeSet>);

impl std::ops::Deref for Employees {
    type Target = dyn EmployeeSet;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl std::ops::DerefMut for Employees {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0.as_mut()
    }
}

impl FromRequestParts<AppState> for Employees {
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        state.db.open().await.map_err(AppError::db)
    }
}
