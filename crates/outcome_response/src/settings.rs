//! Response mapping settings, persisted as RON.
//!
//! Defaults live in the `Default` impl; a settings file only needs the
//! fields that deviate from them. A missing or empty file means defaults.

use std::fs;
use std::path::Path;

use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ResponseError, StatusCode};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseSettings {
    /// Status used for successes. Must be 2xx.
    pub success_status: u16,
    /// Status used for failures. Must be 4xx or 5xx.
    pub failure_status: u16,
    /// Wrap every body in the `{ is_success, data, message }` envelope
    /// instead of sending the bare payload / `{ message }`.
    pub envelope: bool,
    /// Add the failure cause's text to failure bodies.
    pub include_cause: bool,
}

impl Default for ResponseSettings {
    fn default() -> Self {
        Self {
            success_status: StatusCode::OK.as_u16(),
            failure_status: StatusCode::BAD_REQUEST.as_u16(),
            envelope: false,
            include_cause: false,
        }
    }
}

impl ResponseSettings {
    pub fn from_ron_str(content: &str) -> Result<Self, ResponseError> {
        if content.trim().is_empty() {
            debug!("empty response settings, using defaults");
            return Ok(Self::default());
        }
        let settings: Self = ron::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from `path`; a missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ResponseError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(?path, "response settings file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ResponseError> {
        self.validate()?;
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        let content = ron::ser::to_string_pretty(self, PrettyConfig::default())?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ResponseError> {
        self.success_code()?;
        self.failure_code()?;
        Ok(())
    }

    pub fn success_code(&self) -> Result<StatusCode, ResponseError> {
        StatusCode::new(self.success_status)
            .filter(|code| code.is_success())
            .ok_or(ResponseError::InvalidStatus {
                field: "success_status",
                status: self.success_status,
            })
    }

    pub fn failure_code(&self) -> Result<StatusCode, ResponseError> {
        StatusCode::new(self.failure_status)
            .filter(|code| code.is_error())
            .ok_or(ResponseError::InvalidStatus {
                field: "failure_status",
                status: self.failure_status,
            })
    }
}
