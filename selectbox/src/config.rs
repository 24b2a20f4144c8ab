//! Loading widget configuration from JSON.
//!
//! ```json
//! {
//!   "placeholder": "Pick a state",
//!   "value": "OH",
//!   "options": [
//!     "Alabama",
//!     { "value": "OH", "label": "Ohio" },
//!     { "value": "PR", "label": "Puerto Rico", "disabled": true }
//!   ]
//! }
//! ```
//!
//! A top-level array is accepted as a bare option list.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::option::SelectOption;

/// Construction inputs for a string-valued select widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectConfig {
    pub options: Vec<SelectOption<String>>,
    pub placeholder: Option<String>,
    /// Initial selection, matched against option values
    pub value: Option<String>,
}

/// Option as written in a config file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawOption {
    Text(String),
    Full {
        value: String,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        disabled: bool,
    },
}

impl From<RawOption> for SelectOption<String> {
    fn from(raw: RawOption) -> Self {
        match raw {
            RawOption::Text(text) => SelectOption::simple(text),
            RawOption::Full {
                value,
                label,
                disabled,
            } => {
                let label = label.unwrap_or_else(|| value.clone());
                SelectOption::new(value, label).disabled(disabled)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawConfig {
    List(Vec<RawOption>),
    Full {
        #[serde(default)]
        options: Vec<RawOption>,
        #[serde(default)]
        placeholder: Option<String>,
        #[serde(default)]
        value: Option<String>,
    },
}

impl SelectConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        let (options, placeholder, value) = match raw {
            RawConfig::List(options) => (options, None, None),
            RawConfig::Full {
                options,
                placeholder,
                value,
            } => (options, placeholder, value),
        };

        let options: Vec<SelectOption<String>> = options.into_iter().map(Into::into).collect();
        if let Some(index) = options.iter().position(|o| o.value.is_empty()) {
            return Err(ConfigError::EmptyOption { index });
        }

        debug!(
            "SelectConfig parsed options={} placeholder={:?} value={:?}",
            options.len(),
            placeholder,
            value
        );

        Ok(Self {
            options,
            placeholder,
            value,
        })
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}
