//! Application state for the Tip Pool Allocation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::EngineSettings;
use crate::store::{HistoryStore, MemoryHistoryStore, MemoryRosterStore, RosterStore};

/// Shared application state.
///
/// Contains the roster and history stores plus the engine settings. Stores
/// are held behind trait objects so backends can be swapped without
/// touching the handlers.
#[derive(Clone)]
pub struct AppState {
    roster: Arc<dyn RosterStore>,
    history: Arc<dyn HistoryStore>,
    settings: Arc<EngineSettings>,
}

impl AppState {
    /// Creates application state over the given stores and settings.
    pub fn new(
        roster: Arc<dyn RosterStore>,
        history: Arc<dyn HistoryStore>,
        settings: EngineSettings,
    ) -> Self {
        Self {
            roster,
            history,
            settings: Arc::new(settings),
        }
    }

    /// Creates application state backed by in-memory stores, seeding the
    /// roster from the settings' seed list.
    pub fn in_memory(settings: EngineSettings) -> Self {
        let roster = MemoryRosterStore::with_seed(settings.seed_employees.iter().cloned());
        Self::new(
            Arc::new(roster),
            Arc::new(MemoryHistoryStore::new()),
            settings,
        )
    }

    /// Returns the roster store.
    pub fn roster(&self) -> &dyn RosterStore {
        self.roster.as_ref()
    }

    /// Returns the history store.
    pub fn history(&self) -> &dyn HistoryStore {
        self.history.as_ref()
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_state_seeds_roster() {
        let settings = EngineSettings {
            seed_employees: vec!["Rami".to_string(), "Khader".to_string()],
            ..EngineSettings::default()
        };

        let state = AppState::in_memory(settings);
        let listed = state.roster().list_employees().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "Rami");
    }

    #[test]
    fn test_state_is_cheaply_cloneable() {
        let state = AppState::in_memory(EngineSettings::default());
        let clone = state.clone();

        // Both handles see the same underlying store.
        state.roster().add_employee("Sultan").unwrap();
        assert_eq!(clone.roster().list_employees().unwrap().len(), 1);
    }
}
