//! Everything a command needs: configuration, storage, catalogs and the
//! terminal surface with the user's current preferences applied.

use crate::accessibility::AccessibilityPreferences;
use crate::catalog::Catalog;
use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::models::RoleStore;
use crate::store::{FileStorage, PersistentStore};
use crate::ui::TerminalSurface;
use tracing::{debug, warn};

/// Loaded application state for one command.
#[derive(Debug)]
pub struct Context {
    /// Configuration
    pub config: Config,
    /// Shared storage
    pub store: PersistentStore,
    /// Embedded content
    pub catalog: Catalog,
    /// Preferences, applied to the terminal
    pub preferences: AccessibilityPreferences<TerminalSurface>,
}

impl Context {
    /// Loads configuration and opens storage.
    ///
    /// Falls back to in-memory storage (with a warning) if the data
    /// directory cannot be created.
    pub fn load() -> CliResult<Self> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let store = match config
            .storage
            .resolved_data_dir()
            .and_then(FileStorage::open)
        {
            Ok(storage) => {
                debug!(data_dir = %storage.root().display(), "Opened storage");
                PersistentStore::new(storage)
            }
            Err(e) => {
                warn!(error = %e, "Data directory unavailable, changes will not be saved");
                PersistentStore::in_memory()
            }
        };

        let catalog = Catalog::load()
            .map_err(|e| CliError::io(format!("Failed to load guide content: {e:#}")))?;

        let surface = TerminalSurface::new(config.ui.theme_mode);
        let mut preferences = AccessibilityPreferences::new(store.clone(), surface);
        // The stored role is the baseline; only `role set` is a role change.
        preferences.assume_role(RoleStore::new(store.clone()).get());

        Ok(Self {
            config,
            store,
            catalog,
            preferences,
        })
    }

    /// The terminal surface in its current mode.
    #[must_use]
    pub fn surface(&self) -> &TerminalSurface {
        self.preferences.surface()
    }

    /// The role store over shared storage.
    #[must_use]
    pub fn roles(&self) -> RoleStore {
        RoleStore::new(self.store.clone())
    }
}
