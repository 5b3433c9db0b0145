//! Supported target languages (German, Swedish, ...).

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_CODE_LEN: usize = 5;
pub const MAX_NAME_LEN: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Language {
    pub id: i32,
    /// Short code such as `de` or `sv`.
    pub code: String,
    pub name: String,
    /// Whether the language reads right-to-left.
    pub is_rtl: bool,
}

/// Input for creating a language.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewLanguage {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub is_rtl: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("language code '{0}' is longer than {max} characters", max = MAX_CODE_LEN)]
    CodeTooLong(String),

    #[error("language name '{0}' is longer than {max} characters", max = MAX_NAME_LEN)]
    NameTooLong(String),
}

impl NewLanguage {
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            is_rtl: false,
        }
    }

    #[must_use]
    pub const fn rtl(mut self, is_rtl: bool) -> Self {
        self.is_rtl = is_rtl;
        self
    }

    /// Check the column limits of the `language` table.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.code.trim().is_empty() {
            return Err(ValidationError::Empty("code"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::Empty("name"));
        }
        if self.code.chars().count() > MAX_CODE_LEN {
            return Err(ValidationError::CodeTooLong(self.code.clone()));
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::NameTooLong(self.name.clone()));
        }
        Ok(())
    }
}
