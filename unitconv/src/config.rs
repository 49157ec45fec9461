//! Demo configuration file support.
//!
//! The demo binary runs a list of conversions. The list is read from a TOML file:
//!
//! ```toml
//! [[conversions]]
//! from = "Second"
//! to = "Hour"
//! quantity = 3600.0
//! ```
//!
//! Without a file, [`DemoConfig::default`] provides the six reference conversions.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::convert::convert;
use crate::error::ConversionResult;
use crate::kind::UnitKind;
use crate::value::UnitValue;

/// Error type for loading demo configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config file {}: {}", .path.display(), .source)]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or does not match [`DemoConfig`].
    #[error("Failed to parse config file {}: {}", .path.display(), .source)]
    Parse {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// No configuration file exists in any searched location.
    #[error("No unitconv.toml found in standard locations")]
    NotFound,
}

/// One conversion to run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionSpec {
    /// Source kind.
    pub from: UnitKind,
    /// Destination kind.
    pub to: UnitKind,
    /// Source quantity.
    pub quantity: f64,
}

impl ConversionSpec {
    /// Describes converting `quantity` from `from` to `to`.
    pub const fn new(from: UnitKind, to: UnitKind, quantity: f64) -> Self {
        Self { from, to, quantity }
    }

    /// Builds the source and an empty destination, then converts.
    ///
    /// # Returns
    /// * `Ok((source, destination))` with the destination filled in
    /// * `Err(ConversionError)` if the quantity is invalid or the kinds are incompatible
    pub fn run(&self) -> ConversionResult<(UnitValue, UnitValue)> {
        let source = UnitValue::new(self.quantity, self.from)?;
        let mut destination = UnitValue::empty(self.to);
        convert(&source, &mut destination)?;
        Ok((source, destination))
    }
}

/// Demo configuration from file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Conversions to run, in order.
    #[serde(default)]
    pub conversions: Vec<ConversionSpec>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            conversions: vec![
                ConversionSpec::new(UnitKind::Second, UnitKind::Hour, 3600.0),
                ConversionSpec::new(UnitKind::Hour, UnitKind::Second, 1.0),
                ConversionSpec::new(UnitKind::Meter, UnitKind::Kilometer, 1000.0),
                ConversionSpec::new(UnitKind::Kilometer, UnitKind::Meter, 1.0),
                ConversionSpec::new(UnitKind::MetersPerSecond, UnitKind::KilometersPerHour, 1.0),
                ConversionSpec::new(UnitKind::KilometersPerHour, UnitKind::MetersPerSecond, 3.6),
            ],
        }
    }
}

impl DemoConfig {
    /// Load demo configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(DemoConfig)` if successful
    /// * `Err(ConfigError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!(
            "Loaded {} conversions from {}",
            config.conversions.len(),
            path.display()
        );
        Ok(config)
    }

    /// Parse demo configuration from TOML text.
    ///
    /// Unknown unit kinds are rejected here, by the [`UnitKind`] deserializer.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load demo configuration from the default location.
    ///
    /// Searches for `unitconv.toml` in:
    /// 1. Current directory
    /// 2. `unitconv/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("unitconv.toml"),
            PathBuf::from("unitconv/unitconv.toml"),
            PathBuf::from("../unitconv.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConversionError;
    use approx::assert_relative_eq;
    use std::io::Write;

    #[test]
    fn default_runs_reference_conversions() {
        let expected = [1.0, 3600.0, 1.0, 1000.0, 3.6, 1.0];
        let config = DemoConfig::default();
        assert_eq!(config.conversions.len(), expected.len());

        for (spec, want) in config.conversions.iter().zip(expected) {
            let (_, destination) = spec.run().unwrap();
            assert_relative_eq!(destination.quantity(), want, epsilon = 1e-9);
        }
    }

    #[test]
    fn parses_toml_conversions() {
        let config = DemoConfig::from_toml_str(
            r#"
            [[conversions]]
            from = "Kilometer"
            to = "Meter"
            quantity = 2.5

            [[conversions]]
            from = "Hour"
            to = "Second"
            quantity = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(
            config.conversions,
            vec![
                ConversionSpec::new(UnitKind::Kilometer, UnitKind::Meter, 2.5),
                ConversionSpec::new(UnitKind::Hour, UnitKind::Second, 0.5),
            ]
        );
    }

    #[test]
    fn empty_document_has_no_conversions() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert!(config.conversions.is_empty());
    }

    #[test]
    fn unknown_kind_is_a_parse_error() {
        let result = DemoConfig::from_toml_str(
            r#"
            [[conversions]]
            from = "Furlong"
            to = "Meter"
            quantity = 1.0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn from_file_reads_and_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[conversions]]\nfrom = \"Meter\"\nto = \"Kilometer\"\nquantity = 500.0"
        )
        .unwrap();

        let config = DemoConfig::from_file(file.path()).unwrap();
        assert_eq!(config.conversions.len(), 1);

        let missing = DemoConfig::from_file("/nonexistent/unitconv.toml").unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));
        assert!(missing.to_string().contains("/nonexistent/unitconv.toml"));
    }

    #[test]
    fn run_surfaces_conversion_errors() {
        let bad_value = ConversionSpec::new(UnitKind::Meter, UnitKind::Kilometer, 0.0);
        assert!(matches!(
            bad_value.run(),
            Err(ConversionError::InvalidValue { .. })
        ));

        let incompatible = ConversionSpec::new(UnitKind::Meter, UnitKind::Second, 1.0);
        assert!(matches!(
            incompatible.run(),
            Err(ConversionError::IncompatibleUnits { .. })
        ));
    }
}
