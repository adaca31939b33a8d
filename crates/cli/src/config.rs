//! Settings loading and validation commands.
//!
//! Settings are loaded from TOML files and merged with environment variables
//! prefixed with `PREBID_MOBILE__`. For example,
//! `PREBID_MOBILE__CUSTOM_IDS__CONTEXT_TYPE` overrides `custom_ids.context_type`.

use std::fs;
use std::path::Path;

use prebid_mobile_common::settings::Settings;

use crate::error::CliError;

/// Load, merge and validate settings from a TOML file.
pub(crate) fn load_settings(file: &Path) -> Result<Settings, CliError> {
    let content = fs::read_to_string(file)?;
    log::debug!("Loading settings from: {}", file.display());

    Settings::from_toml_validated(&content)
        .map_err(|e| CliError::Config(format!("Failed to load settings: {:?}", e)))
}

/// Validate a settings file and every ad unit it describes.
pub fn validate(file: &Path) -> Result<String, CliError> {
    let settings = load_settings(file)?;
    let units = settings
        .ad_unit_configurations()
        .map_err(|e| CliError::Config(format!("Invalid ad unit: {:?}", e)))?;

    let native_units = units.iter().filter(|unit| unit.is_native()).count();
    log::info!(
        "Validated {} ad units ({} native) from {}",
        units.len(),
        native_units,
        file.display()
    );

    Ok(format!(
        "Configuration is valid\n  File: {}\n  Ad units: {} ({} native)",
        file.display(),
        units.len(),
        native_units
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_settings(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("should create temp file");
        file.write_all(content.as_bytes())
            .expect("should write settings");
        file
    }

    #[test]
    fn test_validate_valid_file() {
        let file = write_settings(
            r#"
            [[ad_units]]
            config_id = "banner-1"
            formats = ["banner"]

            [[ad_units]]
            config_id = "native-1"

            [ad_units.native]
            assets = [{ type = "title", len = 25 }]
            "#,
        );

        let report = validate(file.path()).unwrap();
        assert!(report.contains("Configuration is valid"));
        assert!(report.contains("Ad units: 2 (1 native)"));
    }

    #[test]
    fn test_validate_missing_formats() {
        let file = write_settings(
            r#"
            [[ad_units]]
            config_id = "banner-1"
            "#,
        );

        assert!(matches!(validate(file.path()), Err(CliError::Config(_))));
    }

    #[test]
    fn test_validate_missing_file() {
        let result = validate(Path::new("/nonexistent/prebid-mobile.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
