// src/database/postgres.rs
use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};
use crate::models::employee::{Employee, NewEmployee};
use super::{EmployeeSet, RecordStore};

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgStore {
    async fn open(&self) -> Result<Box<dyn EmployeeSet>, sqlx::Error> {
        let conn = self.pool.acquire().await?;
        Ok(Box::new(PgEmployeeSet { conn }))
    }
}

/// Holds one pooled connection; dropping it hands the connection back.
pub struct PgEmployeeSet {
    conn: PoolConnection<Postgres>,
}

#[async_trait]
impl EmployeeSet for PgEmployeeSet {
    async fn to_list(&mut self) -> Result<Vec<Employee>, sqlx::Error> {
        sqlx::query_as::<_, Employee>(
            "SELECT id, name, email, department, salary
             FROM employees ORDER BY id"
        )
        .fetch_all(&mut *self.conn)
        .await
    }

    async fn find(&mut self, id: i32) -> Result<Option<Employee>, sqlx::Error> {
        sqlx::query_as::<_, Employee>(
            "SELECT id, name, email, department, salary
             FROM employees WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await
    }

    async fn add(&mut self, employee: NewEmployee) -> Result<Employee, sqlx::Error> {
        sqlx::query_as::<_, Employee>(
            "INSERT INTO employees (name, email, department, salary)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, email, department, salary"
        )
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.department)
        .bind(employee.salary)
        .fetch_one(&mut *self.conn)
        .await
    }

    async fn update(&mut self, employee: Employee) -> Result<Option<Employee>, sqlx::Error> {
        sqlx::query_as::<_, Employee>(
            "UPDATE employees SET
             name = $2,
             email = $3,
             department = $4,
             salary = $5
             WHERE id = $1
             RETURNING id, name, email, department, salary"
        )
        .bind(employee.id)
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.department)
        .bind(employee.salary)
        .fetch_optional(&mut *self.conn)
        .await
    }

    async fn remove(&mut self, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
