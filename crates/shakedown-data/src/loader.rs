//! Loading and resolving part reliability configurations.
//!
//! Provides format detection (RON/JSON/TOML), string and file entry points,
//! resolution of raw [`schema`] data into `shakedown-api` types, and the
//! configuration-block selection that drives the query evaluator.

use crate::schema::{FailureData, PartConfigData, PartConfigFile};
use shakedown_api::curve::ReliabilityCurve;
use shakedown_api::failure::{FailureDetails, RepairRequirement};
use shakedown_api::query::{QueryTarget, evaluate};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur while loading part configurations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {source_name}: {detail}")]
    Parse { source_name: String, detail: String },

    /// Two part config blocks share a name.
    #[error("duplicate part config '{name}' in {source_name}")]
    DuplicateName { source_name: String, name: String },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, ConfigLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(ConfigLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// Resolved config types
// ===========================================================================

/// A resolved part configuration, ready for the reliability layer.
#[derive(Debug, Clone)]
pub struct PartConfig {
    pub name: String,
    /// The configuration query attached to this block (with any `alias:`
    /// prefix intact; the evaluator strips it).
    pub configuration: String,
    pub title: String,
    pub data_rate_limit: Option<f32>,
    pub data_cap: Option<f32>,
    pub reliability_curve: ReliabilityCurve,
    pub failures: Vec<FailureConfig>,
}

/// A resolved failure definition.
#[derive(Debug, Clone)]
pub struct FailureConfig {
    pub name: String,
    pub details: FailureDetails,
    pub one_shot: bool,
    pub repair: Vec<RepairRequirement>,
}

// ===========================================================================
// Loading
// ===========================================================================

/// Parse part configs out of `content` in the given format. `source_name`
/// only labels errors.
pub fn parse_part_configs(
    content: &str,
    format: Format,
    source_name: &str,
) -> Result<Vec<PartConfig>, ConfigLoadError> {
    let parse_err = |detail: String| ConfigLoadError::Parse {
        source_name: source_name.to_string(),
        detail,
    };
    let file: PartConfigFile = match format {
        Format::Ron => ron::from_str(content).map_err(|e| parse_err(e.to_string()))?,
        Format::Json => serde_json::from_str(content).map_err(|e| parse_err(e.to_string()))?,
        Format::Toml => toml::from_str(content).map_err(|e| parse_err(e.to_string()))?,
    };
    resolve(file, source_name)
}

/// Read a part-config file, detecting its format from the extension.
pub fn load_part_configs(path: &Path) -> Result<Vec<PartConfig>, ConfigLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_part_configs(&content, format, &path.display().to_string())
}

fn resolve(file: PartConfigFile, source_name: &str) -> Result<Vec<PartConfig>, ConfigLoadError> {
    let mut seen = HashSet::new();
    let mut configs = Vec::with_capacity(file.parts.len());
    for part in file.parts {
        if !seen.insert(part.name.clone()) {
            return Err(ConfigLoadError::DuplicateName {
                source_name: source_name.to_string(),
                name: part.name,
            });
        }
        configs.push(resolve_part(part));
    }
    tracing::debug!(source = source_name, count = configs.len(), "part configs loaded");
    Ok(configs)
}

fn resolve_part(data: PartConfigData) -> PartConfig {
    let mut curve = ReliabilityCurve::new();
    for [flight_data, rate] in data.reliability_curve {
        curve.add_key(flight_data, rate);
    }
    PartConfig {
        name: data.name,
        configuration: data.configuration,
        title: data.title,
        data_rate_limit: data.data_rate_limit,
        data_cap: data.data_cap,
        reliability_curve: curve,
        failures: data.failures.into_iter().map(resolve_failure).collect(),
    }
}

fn resolve_failure(data: FailureData) -> FailureConfig {
    let title = if data.title.is_empty() {
        data.name.clone()
    } else {
        data.title
    };
    FailureConfig {
        name: data.name,
        details: FailureDetails {
            title,
            severity: data.severity,
            weight: data.weight,
            kind: data.kind,
        },
        one_shot: data.one_shot,
        repair: data
            .repair
            .into_iter()
            .map(|r| RepairRequirement {
                message: r.message,
                met: false,
                optional: r.optional,
                repair_bonus: r.repair_bonus,
            })
            .collect(),
    }
}

// ===========================================================================
// Selection
// ===========================================================================

/// The first config whose query matches `target`, in file order.
///
/// Blocks with an empty configuration match everything, so a catch-all block
/// belongs last.
pub fn select_part_config<'a>(
    configs: &'a [PartConfig],
    target: &dyn QueryTarget,
) -> Option<&'a PartConfig> {
    configs
        .iter()
        .find(|config| evaluate(&config.configuration, target))
}
