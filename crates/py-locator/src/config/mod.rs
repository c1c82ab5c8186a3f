//! User configuration of the hover and evaluate option sets.
//!
//! Settings follow a settings/patch split: [`LocatorSettings`] holds
//! resolved values, while the `*Patch` types mirror the JSON/TOML shape
//! with every field optional so partial payloads only touch what they name.

pub(crate) mod file;
pub(crate) mod query;

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

pub use file::{SETTINGS_FILENAME, SettingsError, find_settings_file};
use query::QueryOptionsPatch;

use crate::locate::QueryOptions;

pub const SETTINGS_SECTION_KEY: &str = "pyLocator";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocatorSettings {
    pub hover: QueryOptions,
    pub evaluate: QueryOptions,
}

impl Default for LocatorSettings {
    fn default() -> Self {
        Self {
            hover: QueryOptions::HOVER,
            evaluate: QueryOptions::EVALUATE,
        }
    }
}

impl LocatorSettings {
    pub fn from_lsp_payload(payload: Option<&Value>) -> Self {
        let mut settings = Self::default();
        if let Some(payload) = payload {
            settings = settings.merged_with_payload(payload);
        }
        settings
    }

    pub fn merged_with_payload(
        &self,
        payload: &Value,
    ) -> Self {
        let mut merged = *self;

        for candidate in payload_candidates(payload) {
            match serde_json::from_value::<LocatorSettingsPatch>(candidate.clone()) {
                Ok(patch) => merged.apply_patch(patch),
                Err(error) => tracing::debug!("Ignoring malformed locator settings: {error}"),
            }
        }

        merged
    }

    pub(crate) fn apply_patch(
        &mut self,
        patch: LocatorSettingsPatch,
    ) {
        if let Some(p) = patch.hover {
            self.hover.apply_patch(p);
        }
        if let Some(p) = patch.evaluate {
            self.evaluate.apply_patch(p);
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct LocatorSettingsPatch {
    hover: Option<QueryOptionsPatch>,
    evaluate: Option<QueryOptionsPatch>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

fn payload_candidates(payload: &Value) -> Vec<Value> {
    let mut candidates = Vec::new();
    candidates.push(payload.clone());
    if let Some(scoped) = payload.get(SETTINGS_SECTION_KEY) {
        candidates.push(scoped.clone());
    }
    candidates
}

#[cfg(test)]
#[path = "../../tests/src/config/settings_tests.rs"]
mod tests;
