//! Employee storage for the payroll engine.
//!
//! The calculator never talks to storage directly. Callers hold an
//! [`EmployeeStore`] (injected, never global), read records from it and hand
//! them to the calculator. Every successful mutation publishes a
//! [`ChangeNotice`] on the store's change feed; the notice says only that the
//! data may have changed, and subscribers decide whether to re-list.
//!
//! ```text
//! EmployeeStore ──list()──▶ Vec<Employee> ──▶ compute_breakdown / aggregate
//!       │
//!       └──subscribe()──▶ broadcast::Receiver<ChangeNotice> ──▶ Roster::reload
//! ```

mod memory;
mod roster;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{Employee, EmployeePatch, NewEmployee};

pub use memory::InMemoryEmployeeStore;
pub use roster::{Roster, RosterStatus};

/// Capacity of a store's change feed; slow subscribers see `Lagged` past this.
pub const CHANGE_FEED_CAPACITY: usize = 64;

/// The kind of mutation that triggered a change notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// A record was inserted.
    Insert,
    /// A record was updated.
    Update,
    /// A record was deleted.
    Delete,
}

/// Signal that the store's contents may have changed.
///
/// Deliberately carries no record data; subscribers re-read from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeNotice {
    /// What kind of mutation happened.
    pub kind: ChangeKind,
}

/// A data service holding employee records.
///
/// Implementations assign ids and timestamps, reject updates and deletes of
/// unknown ids with [`EngineError::NotFound`](crate::error::EngineError), and
/// publish a [`ChangeNotice`] after each successful mutation.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Returns every record, in insertion order.
    async fn list(&self) -> EngineResult<Vec<Employee>>;

    /// Stores a new record and returns it with id and timestamps assigned.
    async fn insert(&self, employee: NewEmployee) -> EngineResult<Employee>;

    /// Applies a partial update and returns the updated record.
    async fn update(&self, id: Uuid, patch: EmployeePatch) -> EngineResult<Employee>;

    /// Removes a record.
    async fn delete(&self, id: Uuid) -> EngineResult<()>;

    /// Subscribes to the change feed.
    fn subscribe(&self) -> broadcast::Receiver<ChangeNotice>;
}
