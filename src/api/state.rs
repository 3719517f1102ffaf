//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, PayPolicy};
use crate::store::{EmployeeStore, Roster};

/// Shared application state.
///
/// Holds the injected employee store, the pay policy in force and a
/// [`Roster`] over the same store. The roster starts empty; the binary
/// reloads it and starts its watcher.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn EmployeeStore>,
    policy: PayPolicy,
    roster: Arc<Roster>,
}

impl AppState {
    /// Creates a new application state over `store` with `policy`.
    pub fn new(store: Arc<dyn EmployeeStore>, policy: PayPolicy) -> Self {
        let roster = Arc::new(Roster::new(store.clone(), policy));
        Self {
            store,
            policy,
            roster,
        }
    }

    /// Creates a new application state using the policy from a loaded config.
    pub fn from_config(store: Arc<dyn EmployeeStore>, config: &ConfigLoader) -> Self {
        Self::new(store, *config.policy())
    }

    /// Returns the employee store.
    pub fn store(&self) -> &dyn EmployeeStore {
        self.store.as_ref()
    }

    /// Returns the pay policy.
    pub fn policy(&self) -> &PayPolicy {
        &self.policy
    }

    /// Returns the roster kept in step with the store.
    pub fn roster(&self) -> &Arc<Roster> {
        &self.roster
    }
}
