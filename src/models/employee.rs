use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A row of the `employees` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub salary: Decimal,
}

/// Column values for an insert; the identity is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub salary: Decimal,
}

impl NewEmployee {
    pub fn with_id(self, id: i32) -> Employee {
        Employee {
            id,
            name: self.name,
            email: self.email,
            department: self.department,
            salary: self.salary,
        }
    }
}
