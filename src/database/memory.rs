// src/database/memory.rs
use std::collections::BTreeMap;
use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::models::employee::{Employee, NewEmployee};
use super::{EmployeeSet, RecordStore};

#[derive(Default)]
struct Table {
    last_id: i32,
    rows: BTreeMap<i32, Employee>,
}

/// Process-local employee table. Ids start at 1 and are never reused.
#[derive(Clone, Default)]
pub struct MemoryStore {
    table: Arc<Mutex<Table>>,
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn open(&self) -> Result<Box<dyn EmployeeSet>, sqlx::Error> {
        Ok(Box::new(MemoryEmployeeSet { table: Arc::clone(&self.table) }))
    }
}

pub struct MemoryEmployeeSet {
    table: Arc<Mutex<Table>>,
}

#[async_trait]
impl EmployeeSet for MemoryEmployeeSet {
    async fn to_list(&mut self) -> Result<Vec<Employee>, sqlx::Error> {
        let table = self.table.lock().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find(&mut self, id: i32) -> Result<Option<Employee>, sqlx::Error> {
        let table = self.table.lock().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn add(&mut self, employee: NewEmployee) -> Result<Employee, sqlx::Error> {
        let mut table = self.table.lock().await;
        table.last_id += 1;
        let row = employee.with_id(table.last_id);
        table.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(&mut self, employee: Employee) -> Result<Option<Employee>, sqlx::Error> {
        let mut table = self.table.lock().await;
        match table.rows.get_mut(&employee.id) {
            Some(row) => {
                *row = employee.clone();
                Ok(Some(employee))
            }
            None => Ok(None),
        }
    }

    async fn remove(&mut self, id: i32) -> Result<bool, sqlx::Error> {
        let mut table = self.table.lock().await;
        Ok(table.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn new_employee(name: &str) -> NewEmployee {
        NewEmployee {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            department: None,
            salary: Decimal::from(1000),
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_in_order_and_not_reused() {
        let store = MemoryStore::default();
        let mut set = store.open().await.unwrap();

        let a = set.add(new_employee("Ann")).await.unwrap();
        let b = set.add(new_employee("Bob")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        assert!(set.remove(b.id).await.unwrap());
        let c = set.add(new_employee("Cid")).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn sessions_share_the_table() {
        let store = MemoryStore::default();
        store.open().await.unwrap().add(new_employee("Ann")).await.unwrap();

        let rows = store.open().await.unwrap().to_list().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Ann");
    }

    #[tokio::test]
    async fn update_and_remove_of_missing_rows() {
        let mut set = MemoryStore::default().open().await.unwrap();
        let ghost = new_employee("Ghost").with_id(42);

        assert_eq!(set.update(ghost).await.unwrap(), None);
        assert!(!set.remove(42).await.unwrap());
    }
}
