// src/dtos/employee.rs
use std::str::FromStr;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};
use crate::models::employee::{Employee, NewEmployee};

const NAME_MAX: usize = 100;
const EMAIL_MAX: usize = 254;
const DEPARTMENT_MAX: usize = 100;
// employees.salary is NUMERIC(12, 2)
const SALARY_SCALE_MAX: u32 = 2;
const SALARY_LIMIT: i64 = 10_000_000_000;

/// Posted by the create and edit forms. `id` is ignored on create.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeForm {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub salary: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError { field, message: message.into() });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn merge(&mut self, result: Result<(), ValidationErrors>) {
        if let Err(other) = result {
            self.0.extend(other.0);
        }
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

impl EmployeeForm {
    /// Reads a posted JSON payload field by field. Fields that are missing or
    /// null take their defaults; fields of the wrong type are reported and
    /// also take their defaults, so the rest of the form is still checked.
    pub fn bind(payload: &Value) -> (Self, ValidationErrors) {
        let mut errors = ValidationErrors::default();
        let empty = Map::new();
        let fields = match payload {
            Value::Object(map) => map,
            _ => {
                errors.add("body", "Expected a JSON object");
                &empty
            }
        };
        let field = |name: &str| fields.get(name).filter(|v| !v.is_null());

        let id = match field("id") {
            None => 0,
            Some(v) => bind_id(v).unwrap_or_else(|| {
                errors.add("id", "Id must be an integer");
                0
            }),
        };

        let mut text = |name: &'static str, label: &str| match field(name) {
            None => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                errors.add(name, format!("{label} must be text"));
                None
            }
        };
        let name = text("name", "Name").unwrap_or_default();
        let email = text("email", "Email").unwrap_or_default();
        let department = text("department", "Department");

        let salary = match field("salary") {
            None => Decimal::ZERO,
            Some(v) => bind_decimal(v).unwrap_or_else(|| {
                errors.add("salary", "Salary must be a number");
                Decimal::ZERO
            }),
        };

        (Self { id, name, email, department, salary }, errors)
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", "Name is required");
        } else if name.chars().count() > NAME_MAX {
            errors.add("name", format!("Name must be at most {NAME_MAX} characters"));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.add("email", "Email is required");
        } else if email.chars().count() > EMAIL_MAX {
            errors.add("email", format!("Email must be at most {EMAIL_MAX} characters"));
        } else if !looks_like_email(email) {
            errors.add("email", "Email is not a valid address");
        }

        if let Some(dept) = &self.department {
            if dept.trim().chars().count() > DEPARTMENT_MAX {
                errors.add("department", format!("Department must be at most {DEPARTMENT_MAX} characters"));
            }
        }

        if self.salary < Decimal::ZERO {
            errors.add("salary", "Salary cannot be negative");
        } else if self.salary >= Decimal::from(SALARY_LIMIT) {
            errors.add("salary", format!("Salary must be less than {SALARY_LIMIT}"));
        } else if self.salary.scale() > SALARY_SCALE_MAX {
            errors.add("salary", format!("Salary can have at most {SALARY_SCALE_MAX} decimal places"));
        }

        if errors.0.is_empty() { Ok(()) } else { Err(errors) }
    }

    pub fn into_new(self) -> NewEmployee {
        NewEmployee {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: normalize_department(self.department),
            salary: self.salary,
        }
    }

    pub fn into_employee(self) -> Employee {
        let id = self.id;
        self.into_new().with_id(id)
    }
}

impl From<Employee> for EmployeeForm {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            name: e.name,
            email: e.email,
            department: e.department,
            salary: e.salary,
        }
    }
}

fn bind_id(v: &Value) -> Option<i32> {
    match v {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn bind_decimal(v: &Value) -> Option<Decimal> {
    match v {
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

fn normalize_department(dept: Option<String>) -> Option<String> {
    dept.map(|d| d.trim().to_string()).filter(|d| !d.is_empty())
}

// One '@', something on each side, no whitespace.
fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
