//! Settings for a run of a front end.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::form::FormFields;

/// How results are presented
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Summary plus results table, as on the web form
    #[default]
    Table,
    /// Label grid, as in the app
    Labels,
    /// Machine-readable result
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(Self::Table),
            "labels" => Ok(Self::Labels),
            "json" => Ok(Self::Json),
            _ => Err(AppError::Usage(format!(
                "Unrecognized format `{s}`; expected one of table, labels, json"
            ))),
        }
    }
}

/// Run settings, loadable from a JSON file where every key is optional
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
#[non_exhaustive]
pub struct TuningCtx {
    /// Name of this run, used for the log file name
    pub op_name: String,

    /// Directory for a log file. Terminal logging only when absent.
    pub log_dir: Option<PathBuf>,

    /// Presentation of results
    pub format: OutputFormat,

    /// Form text used for any value not given on the command line
    pub defaults: FormFields,
}

impl Default for TuningCtx {
    fn default() -> Self {
        // Current time with seconds, without characters that are invalid in Windows file names
        let op_name = DateTime::<Utc>::from(SystemTime::now())
            .to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
            .replace(":", "");

        Self {
            op_name,
            log_dir: None,
            format: OutputFormat::default(),
            defaults: FormFields::default(),
        }
    }
}

impl TuningCtx {
    /// Parse settings from JSON text
    pub fn from_json(path: &Path, text: &str) -> Result<Self, AppError> {
        serde_json::from_str(text).map_err(|source| AppError::ConfigParse {
            path: path.to_owned(),
            source,
        })
    }

    /// Read settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(path, &text)
    }
}
