//! Format classification and native request rendering commands.

use std::collections::BTreeSet;
use std::path::Path;

use prebid_mobile_common::ad_format::{AdFormat, AdUnitFormat};
use prebid_mobile_common::native::CustomIdRegistry;
use prebid_mobile_common::settings::Settings;
use serde::Serialize;

use crate::config::load_settings;
use crate::error::CliError;

/// Summary printed for every configured ad unit.
#[derive(Debug, Serialize)]
struct AdUnitSummary {
    config_id: String,
    ad_formats: BTreeSet<AdFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    native_request: Option<String>,
}

/// Classify `formats` and render the resulting ad formats as JSON.
pub fn classify(formats: &[AdUnitFormat], interstitial: bool) -> Result<String, CliError> {
    let requested: BTreeSet<AdUnitFormat> = formats.iter().copied().collect();
    let classified = AdFormat::from_set(&requested, interstitial)
        .map_err(|e| CliError::Request(format!("{:?}", e)))?;

    Ok(serde_json::to_string(&classified)?)
}

/// Load settings, register their custom IDs and render every ad unit.
pub fn render_requests(file: &Path) -> Result<String, CliError> {
    let settings = load_settings(file)?;

    let registry = CustomIdRegistry::global();
    settings
        .apply_custom_ids(registry)
        .map_err(|e| CliError::Config(format!("{:?}", e)))?;

    let summaries = build_summaries(&settings, registry)?;
    Ok(serde_json::to_string_pretty(&summaries)?)
}

fn build_summaries(
    settings: &Settings,
    registry: &CustomIdRegistry,
) -> Result<Vec<AdUnitSummary>, CliError> {
    let units = settings
        .ad_unit_configurations()
        .map_err(|e| CliError::Config(format!("{:?}", e)))?;

    units
        .iter()
        .map(|unit| {
            let native_request = if unit.is_native() {
                let request = unit
                    .native_request_string(registry)
                    .map_err(|e| CliError::Request(format!("{:?}", e)))?;
                log::debug!("Native request for '{}': {}", unit.config_id, request);
                Some(request)
            } else {
                None
            };

            Ok(AdUnitSummary {
                config_id: unit.config_id.clone(),
                ad_formats: unit.ad_formats.clone(),
                native_request,
            })
        })
        .collect()
}
