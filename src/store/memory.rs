//! In-process employee store.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{RwLock, broadcast};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmployeePatch, NewEmployee};

use super::{CHANGE_FEED_CAPACITY, ChangeKind, ChangeNotice, EmployeeStore};

/// An [`EmployeeStore`] keeping records in memory, in insertion order.
pub struct InMemoryEmployeeStore {
    records: RwLock<Vec<Employee>>,
    changes: broadcast::Sender<ChangeNotice>,
}

impl std::fmt::Debug for InMemoryEmployeeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryEmployeeStore")
            .field("changes", &"<broadcast::Sender>")
            .finish_non_exhaustive()
    }
}

impl Default for InMemoryEmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEmployeeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::with_employees(Vec::new())
    }

    /// Creates a store pre-populated with existing records.
    ///
    /// Seeding publishes no change notices.
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_FEED_CAPACITY);
        Self {
            records: RwLock::new(employees),
            changes,
        }
    }

    fn notify(&self, kind: ChangeKind) {
        // No subscribers is not an error
        let _ = self.changes.send(ChangeNotice { kind });
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn list(&self) -> EngineResult<Vec<Employee>> {
        let records = self.records.read().await;
        debug!(count = records.len(), "Listed employees");
        Ok(records.clone())
    }

    async fn insert(&self, employee: NewEmployee) -> EngineResult<Employee> {
        employee.validate()?;
        let record = employee.into_employee(Uuid::new_v4(), Utc::now());

        self.records.write().await.push(record.clone());
        info!(employee_id = %record.id, "Inserted employee");
        self.notify(ChangeKind::Insert);

        Ok(record)
    }

    async fn update(&self, id: Uuid, patch: EmployeePatch) -> EngineResult<Employee> {
        patch.validate()?;

        let updated = {
            let mut records = self.records.write().await;
            let record = records
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or_else(|| EngineError::NotFound { id: id.to_string() })?;
            patch.apply_to(record, Utc::now());
            record.clone()
        };

        info!(employee_id = %id, "Updated employee");
        self.notify(ChangeKind::Update);

        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> EngineResult<()> {
        {
            let mut records = self.records.write().await;
            let position = records
                .iter()
                .position(|e| e.id == id)
                .ok_or_else(|| EngineError::NotFound { id: id.to_string() })?;
            records.remove(position);
        }

        info!(employee_id = %id, "Deleted employee");
        self.notify(ChangeKind::Delete);

        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<ChangeNotice> {
        self.changes.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tokio::sync::broadcast::error::TryRecvError;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_new_employee(name: &str) -> NewEmployee {
        NewEmployee {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            position: "Engineer".to_string(),
            department: "R&D".to_string(),
            hourly_rate: dec("75"),
            hours_worked: 40,
            overtime_hours: 5,
            bonus: dec("500"),
            deductions: dec("200"),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamps() {
        let store = InMemoryEmployeeStore::new();
        let first = store.insert(create_new_employee("Ada")).await.unwrap();
        let second = store.insert(create_new_employee("Grace")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.created_at, first.updated_at);
        assert_eq!(first.name, "Ada");
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = InMemoryEmployeeStore::new();
        for name in ["Ada", "Grace", "Linus"] {
            store.insert(create_new_employee(name)).await.unwrap();
        }

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["Ada", "Grace", "Linus"]);
    }

    #[tokio::test]
    async fn test_insert_rejects_missing_name() {
        let store = InMemoryEmployeeStore::new();
        let mut subscriber = store.subscribe();

        let result = store.insert(create_new_employee("")).await;
        assert!(matches!(
            result,
            Err(EngineError::InvalidInput { ref field, .. }) if field == "name"
        ));
        assert!(store.list().await.unwrap().is_empty());
        assert!(matches!(subscriber.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test]
    async fn test_update_applies_patch() {
        let store = InMemoryEmployeeStore::new();
        let created = store.insert(create_new_employee("Ada")).await.unwrap();

        let patch = EmployeePatch {
            hourly_rate: Some(dec("80")),
            department: Some("Platform".to_string()),
            ..Default::default()
        };
        let updated = store.update(created.id, patch).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.hourly_rate, dec("80"));
        assert_eq!(updated.department, "Platform");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(store.list().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let store = InMemoryEmployeeStore::new();
        let id = Uuid::new_v4();

        match store.update(id, EmployeePatch::default()).await {
            Err(EngineError::NotFound { id: missing }) => assert_eq!(missing, id.to_string()),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = InMemoryEmployeeStore::new();
        let ada = store.insert(create_new_employee("Ada")).await.unwrap();
        let grace = store.insert(create_new_employee("Grace")).await.unwrap();

        store.delete(ada.id).await.unwrap();
        assert_eq!(store.list().await.unwrap(), vec![grace]);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let store = InMemoryEmployeeStore::new();
        let mut subscriber = store.subscribe();

        let result = store.delete(Uuid::new_v4()).await;
        assert!(matches!(result, Err(EngineError::NotFound { .. })));
        assert!(matches!(subscriber.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test]
    async fn test_mutations_publish_change_notices() {
        let store = InMemoryEmployeeStore::new();
        let mut subscriber = store.subscribe();

        let created = store.insert(create_new_employee("Ada")).await.unwrap();
        store
            .update(created.id, EmployeePatch::default())
            .await
            .unwrap();
        store.delete(created.id).await.unwrap();

        let kinds: Vec<ChangeKind> = (0..3)
            .map(|_| subscriber.try_recv().unwrap().kind)
            .collect();
        assert_eq!(
            kinds,
            [ChangeKind::Insert, ChangeKind::Update, ChangeKind::Delete]
        );
    }

    #[tokio::test]
    async fn test_seeded_store_lists_without_notices() {
        let seed = create_new_employee("Ada").into_employee(Uuid::new_v4(), Utc::now());
        let store = InMemoryEmployeeStore::with_employees(vec![seed.clone()]);
        let mut subscriber = store.subscribe();

        assert_eq!(store.list().await.unwrap(), vec![seed]);
        assert!(matches!(subscriber.try_recv(), Err(TryRecvError::Empty)));
    }
}
