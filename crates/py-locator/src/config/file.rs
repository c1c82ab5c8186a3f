use std::{
    fmt::{Display, Formatter},
    path::{Path, PathBuf},
};

use crate::config::{LocatorSettings, LocatorSettingsPatch};

pub const SETTINGS_FILENAME: &str = "pylocator.toml";

/// Walks parent directories from `start` looking for `pylocator.toml`.
/// Returns the path to the first one found, or `None`.
pub fn find_settings_file(start: &Path) -> Option<PathBuf> {
    let mut dir = if start.is_file() {
        start.parent()?
    } else {
        start
    };
    loop {
        let candidate = dir.join(SETTINGS_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

impl LocatorSettings {
    /// Parse a settings file body. Tables `[hover]` and `[evaluate]` patch the
    /// corresponding presets; keys may be camelCase or snake_case.
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        let patch: LocatorSettingsPatch = toml::from_str(content).map_err(|error| SettingsError::Parse {
            path: None,
            reason: error.to_string(),
        })?;
        let mut settings = Self::default();
        settings.apply_patch(patch);
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|error| SettingsError::Io {
            path: path.to_path_buf(),
            reason: error.to_string(),
        })?;
        Self::from_toml_str(&content).map_err(|error| match error {
            SettingsError::Parse {
                reason, ..
            } => SettingsError::Parse {
                path: Some(path.to_path_buf()),
                reason,
            },
            other => other,
        })
    }

    /// Settings for a source file: the nearest `pylocator.toml` above it, or
    /// the defaults when there is none.
    pub fn discover(source_path: &Path) -> Result<Self, SettingsError> {
        match find_settings_file(source_path) {
            Some(path) => {
                tracing::debug!("Using locator settings from {}", path.display());
                Self::load(&path)
            },
            None => Ok(Self::default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    Io {
        path: PathBuf,
        reason: String,
    },
    Parse {
        path: Option<PathBuf>,
        reason: String,
    },
}

impl Display for SettingsError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::Io {
                path,
                reason,
            } => {
                write!(f, "failed to read {}: {reason}", path.display())
            },
            Self::Parse {
                path: Some(path),
                reason,
            } => {
                write!(f, "invalid settings in {}: {reason}", path.display())
            },
            Self::Parse {
                path: None,
                reason,
            } => {
                write!(f, "invalid settings: {reason}")
            },
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
#[path = "../../tests/src/config/file_tests.rs"]
mod tests;
