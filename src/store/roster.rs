//! A reloading view over an employee store.
//!
//! The [`Roster`] keeps the last list of employee records read from an
//! injected store and reloads it wholesale whenever the store's change feed
//! fires. Breakdowns are never kept here; totals are recomputed from the
//! snapshot on every call.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::calculation::aggregate;
use crate::config::PayPolicy;
use crate::error::EngineResult;
use crate::models::{Employee, PayrollTotals};

use super::EmployeeStore;

/// Whether the roster reaches its store, and how many records it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterStatus {
    /// False after a reload failed, until the next one succeeds.
    pub connected: bool,
    /// Records in the current snapshot.
    pub employee_count: usize,
}

/// The current set of employee records, kept in step with a store.
pub struct Roster {
    store: Arc<dyn EmployeeStore>,
    policy: PayPolicy,
    employees: RwLock<Vec<Employee>>,
    connected: AtomicBool,
}

impl std::fmt::Debug for Roster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Roster")
            .field("policy", &self.policy)
            .field("connected", &self.is_connected())
            .finish_non_exhaustive()
    }
}

impl Roster {
    /// Creates an empty roster over `store`; call [`Roster::reload`] to fill it.
    pub fn new(store: Arc<dyn EmployeeStore>, policy: PayPolicy) -> Self {
        Self {
            store,
            policy,
            employees: RwLock::new(Vec::new()),
            connected: AtomicBool::new(true),
        }
    }

    /// Re-lists every record from the store.
    ///
    /// On failure the previous snapshot is kept, the roster is marked as
    /// disconnected and the store's error is returned unchanged.
    pub async fn reload(&self) -> EngineResult<usize> {
        let employees = match self.store.list().await {
            Ok(employees) => employees,
            Err(err) => {
                self.connected.store(false, Ordering::Relaxed);
                warn!(error = %err, "Failed to reload employees");
                return Err(err);
            }
        };

        let count = employees.len();
        match aggregate(&employees, &self.policy) {
            Ok(totals) => info!(
                employee_count = count,
                total_net_pay = %totals.net_pay,
                "Roster reloaded"
            ),
            Err(err) => warn!(employee_count = count, error = %err, "Roster reloaded with invalid records"),
        }

        *self.employees.write().await = employees;
        self.connected.store(true, Ordering::Relaxed);
        Ok(count)
    }

    /// Subscribes to the store's change feed and reloads on every notice.
    ///
    /// A lagged subscriber reloads once and carries on. The task holds only a
    /// weak reference to the roster and ends when the roster is dropped or
    /// the feed closes.
    pub fn watch(self: &Arc<Self>) -> JoinHandle<()> {
        let mut changes = self.store.subscribe();
        let roster = Arc::downgrade(self);

        tokio::spawn(async move {
            loop {
                match changes.recv().await {
                    Ok(notice) => debug!(kind = ?notice.kind, "Employee store changed"),
                    Err(RecvError::Lagged(skipped)) => debug!(skipped, "Change feed lagged"),
                    Err(RecvError::Closed) => break,
                }
                let Some(roster) = roster.upgrade() else {
                    break;
                };
                // Failures are logged by reload and leave the snapshot as is
                let _ = roster.reload().await;
            }
            debug!("Roster watcher stopped");
        })
    }

    /// Returns a copy of the current records.
    pub async fn employees(&self) -> Vec<Employee> {
        self.employees.read().await.clone()
    }

    /// Aggregates the current records with the roster's policy.
    pub async fn totals(&self) -> EngineResult<PayrollTotals> {
        aggregate(&self.employees.read().await, &self.policy)
    }

    /// Whether the last reload reached the store.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }

    /// Connection flag and snapshot size.
    pub async fn status(&self) -> RosterStatus {
        RosterStatus {
            connected: self.is_connected(),
            employee_count: self.employees.read().await.len(),
        }
    }
}
