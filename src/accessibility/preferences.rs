//! The accessibility preferences service.

use super::display::{DisplayMode, PresentationSurface};
use super::settings::{AccessibilitySettings, SettingsPatch};
use crate::constants::ACCESSIBILITY_KEY;
use crate::models::UserRole;
use crate::store::PersistentStore;
use anyhow::Result;
use tracing::{debug, info};

/// Owns the accessibility settings cell and keeps a presentation surface in
/// step with it.
///
/// One instance is created per front end and passed by reference to whatever
/// needs it. Settings are re-read from the store on every access, so several
/// instances over the same store stay consistent.
///
/// # Role Nudge
///
/// When a role-change event makes the role `young-person` and easy-read is
/// off, easy-read is switched on. The nudge fires once per event: observing
/// the same role again does nothing, so a later manual opt-out sticks.
/// Changing to another role and back is a new event and nudges again.
#[derive(Debug)]
pub struct AccessibilityPreferences<S: PresentationSurface> {
    store: PersistentStore,
    surface: S,
    observed_role: Option<Option<UserRole>>,
}

impl<S: PresentationSurface> AccessibilityPreferences<S> {
    /// Creates the service and applies the stored settings to `surface`.
    pub fn new(store: PersistentStore, mut surface: S) -> Self {
        let settings = read_settings(&store);
        surface.apply(DisplayMode::from(&settings));
        Self {
            store,
            surface,
            observed_role: None,
        }
    }

    /// Current settings.
    #[must_use]
    pub fn settings(&self) -> AccessibilitySettings {
        read_settings(&self.store)
    }

    /// Presentation mode for the current settings.
    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode::from(&self.settings())
    }

    /// Merges `patch` into the stored settings and re-applies the display mode.
    pub fn update_settings(&mut self, patch: SettingsPatch) -> Result<AccessibilitySettings> {
        let settings = self.store.update(
            ACCESSIBILITY_KEY,
            AccessibilitySettings::default(),
            |current| current.normalized().merged(&patch),
        )?;
        debug!(?patch, "Accessibility settings updated");
        self.surface.apply(DisplayMode::from(&settings));
        Ok(settings)
    }

    /// Replaces the stored settings with the defaults.
    pub fn reset_settings(&mut self) -> Result<AccessibilitySettings> {
        let settings = AccessibilitySettings::default();
        self.store.write(ACCESSIBILITY_KEY, &settings)?;
        self.surface.apply(DisplayMode::from(&settings));
        Ok(settings)
    }

    /// Delivers a role-change event.
    ///
    /// Returns `true` when easy-read was switched on as a result.
    pub fn observe_role(&mut self, role: Option<UserRole>) -> Result<bool> {
        if self.observed_role == Some(role) {
            return Ok(false);
        }
        self.observed_role = Some(role);

        if role != Some(UserRole::YoungPerson) || self.settings().easy_read {
            return Ok(false);
        }

        info!("Enabling easy-read for young-person role");
        self.update_settings(SettingsPatch::easy_read(true))?;
        Ok(true)
    }

    /// Records `role` as already observed without nudging.
    ///
    /// Used when restoring a session whose role was chosen earlier.
    pub fn assume_role(&mut self, role: Option<UserRole>) {
        self.observed_role = Some(role);
    }

    /// The presentation surface.
    pub const fn surface(&self) -> &S {
        &self.surface
    }
}

fn read_settings(store: &PersistentStore) -> AccessibilitySettings {
    store
        .read(ACCESSIBILITY_KEY, AccessibilitySettings::default())
        .normalized()
}
