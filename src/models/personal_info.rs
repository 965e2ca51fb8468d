//! Personal information and free-text notes kept on the device.

use crate::confirm::Confirmation;
use crate::constants::MY_INFO_KEY;
use crate::models::text::Text;
use crate::store::PersistentStore;
use anyhow::Result;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Named phase of the pathway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeStage {
    /// Before birth
    #[serde(rename = "antenatal")]
    Antenatal,
    /// First six weeks
    #[serde(rename = "birth")]
    Birth,
    /// Birth to three years
    #[serde(rename = "birth-to-3")]
    BirthTo3,
    /// Three to five years
    #[serde(rename = "3-to-5")]
    From3To5,
    /// Primary school age
    #[serde(rename = "5-to-11")]
    From5To11,
    /// Secondary school age
    #[serde(rename = "11-to-18")]
    From11To18,
    /// Moving to adult services (14+)
    #[serde(rename = "transitions")]
    Transitions,
}

impl AgeStage {
    /// All stages in pathway order.
    pub const ALL: [Self; 7] = [
        Self::Antenatal,
        Self::Birth,
        Self::BirthTo3,
        Self::From3To5,
        Self::From5To11,
        Self::From11To18,
        Self::Transitions,
    ];

    /// Wire identifier (e.g. "birth-to-3").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Antenatal => "antenatal",
            Self::Birth => "birth",
            Self::BirthTo3 => "birth-to-3",
            Self::From3To5 => "3-to-5",
            Self::From5To11 => "5-to-11",
            Self::From11To18 => "11-to-18",
            Self::Transitions => "transitions",
        }
    }

    /// Display label in both registers.
    #[must_use]
    pub fn label(self) -> Text {
        let (standard, easy) = match self {
            Self::Antenatal => ("Before Birth (Antenatal)", "Before Baby Born"),
            Self::Birth => ("At Birth (0-6 weeks)", "Just Born"),
            Self::BirthTo3 => ("Birth to 3 Years", "0-3 Years"),
            Self::From3To5 => ("3 to 5 Years", "3-5 Years"),
            Self::From5To11 => ("5 to 11 Years (Primary)", "Primary School"),
            Self::From11To18 => ("11 to 18 Years (Secondary)", "Secondary School"),
            Self::Transitions => ("Transitions (14+)", "Becoming Adult"),
        };
        Text::new(standard, easy)
    }
}

impl fmt::Display for AgeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s.trim())
            .ok_or_else(|| format!("Unknown pathway stage '{s}'"))
    }
}

/// The "about me" record: child details and personal notes.
///
/// Stored fields are strings; an empty `currentStage` means no stage chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    /// Child's name
    pub child_name: String,
    /// Date of birth as entered (YYYY-MM-DD)
    pub child_dob: String,
    /// Current pathway stage
    #[serde(with = "stage_field")]
    pub current_stage: Option<AgeStage>,
    /// Free-text notes
    pub notes: String,
}

/// Fields to change on a [`PersonalInfo`]; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfoPatch {
    /// New child name
    pub child_name: Option<String>,
    /// New date of birth
    pub child_dob: Option<String>,
    /// New stage (`Some(None)` clears it)
    pub current_stage: Option<Option<AgeStage>>,
    /// New notes
    pub notes: Option<String>,
}

impl PersonalInfoPatch {
    /// True when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.child_name.is_none()
            && self.child_dob.is_none()
            && self.current_stage.is_none()
            && self.notes.is_none()
    }
}

impl PersonalInfo {
    /// Applies the supplied fields of `patch`.
    #[must_use]
    pub fn merged(mut self, patch: PersonalInfoPatch) -> Self {
        if let Some(name) = patch.child_name {
            self.child_name = name;
        }
        if let Some(dob) = patch.child_dob {
            self.child_dob = dob;
        }
        if let Some(stage) = patch.current_stage {
            self.current_stage = stage;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        self
    }

    /// True when every field is empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

/// Persisted personal information cell.
#[derive(Debug, Clone)]
pub struct PersonalInfoStore {
    store: PersistentStore,
}

impl PersonalInfoStore {
    /// Creates the cell over `store`.
    #[must_use]
    pub const fn new(store: PersistentStore) -> Self {
        Self { store }
    }

    /// Current record (defaults when missing or malformed).
    #[must_use]
    pub fn load(&self) -> PersonalInfo {
        self.store.read(MY_INFO_KEY, PersonalInfo::default())
    }

    /// Merges `patch` into the stored record.
    pub fn update(&self, patch: PersonalInfoPatch) -> Result<PersonalInfo> {
        self.store
            .update(MY_INFO_KEY, PersonalInfo::default(), |info| info.merged(patch))
    }

    /// Resets the record to blank after confirmation.
    ///
    /// Returns `false` (and writes nothing) when the user declines.
    pub fn clear(&self, confirm: &mut dyn Confirmation) -> Result<bool> {
        let prompt = Text::new(
            "Are you sure you want to clear all your information?",
            "Delete all your information?",
        );
        if !confirm.confirm(&prompt) {
            return Ok(false);
        }
        self.store.write(MY_INFO_KEY, &PersonalInfo::default())?;
        Ok(true)
    }
}

mod stage_field {
    use super::{AgeStage, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(stage: &Option<AgeStage>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(stage.map_or("", AgeStage::as_str))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<AgeStage>, D::Error> {
        let raw = Option::<String>::deserialize(d)?.unwrap_or_default();
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(serde::de::Error::custom)
    }
}
