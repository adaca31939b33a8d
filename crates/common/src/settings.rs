//! SDK settings loaded from TOML.
//!
//! Values can be overridden with environment variables prefixed with
//! `PREBID_MOBILE__`, using `__` as the path separator. For example
//! `PREBID_MOBILE__CUSTOM_IDS__CONTEXT_TYPE=600` overrides
//! `custom_ids.context_type`.

use std::collections::BTreeSet;

use config::{Config, Environment, File, FileFormat};
use error_stack::{Report, ResultExt};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::ad_format::AdUnitFormat;
use crate::ad_unit::AdUnitConfiguration;
use crate::error::PrebidMobileError;
use crate::native::configuration::DEFAULT_PLACEMENT_COUNT;
use crate::native::taxonomy::{
    ContextSubtype, ContextType, CustomIdRegistry, DataType, EventTrackingMethod, EventType,
    ImageType, PlacementType, Taxonomy,
};
use crate::native::{EventTracker, NativeAdConfiguration, NativeAsset};

/// Environment variable prefix for overrides.
pub const ENVIRONMENT_PREFIX: &str = "PREBID_MOBILE";

/// Custom IDs registered at startup. Values must be in the OpenRTB
/// exchange-specific range (500 and above).
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct CustomIdSettings {
    #[validate(range(min = 500))]
    pub context_type: Option<u32>,
    #[validate(range(min = 500))]
    pub context_subtype: Option<u32>,
    #[validate(range(min = 500))]
    pub placement_type: Option<u32>,
    #[validate(range(min = 500))]
    pub event_type: Option<u32>,
    #[validate(range(min = 500))]
    pub event_tracking_method: Option<u32>,
    #[validate(range(min = 500))]
    pub image_type: Option<u32>,
    #[validate(range(min = 500))]
    pub data_type: Option<u32>,
}

impl CustomIdSettings {
    /// Write every configured custom ID into `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`PrebidMobileError::Configuration`] if a value collides with a
    /// standard taxonomy member.
    pub fn apply(&self, registry: &CustomIdRegistry) -> Result<(), Report<PrebidMobileError>> {
        apply_one::<ContextType>(registry, self.context_type)?;
        apply_one::<ContextSubtype>(registry, self.context_subtype)?;
        apply_one::<PlacementType>(registry, self.placement_type)?;
        apply_one::<EventType>(registry, self.event_type)?;
        apply_one::<EventTrackingMethod>(registry, self.event_tracking_method)?;
        apply_one::<ImageType>(registry, self.image_type)?;
        apply_one::<DataType>(registry, self.data_type)?;
        Ok(())
    }
}

fn apply_one<T: Taxonomy>(
    registry: &CustomIdRegistry,
    value: Option<u32>,
) -> Result<(), Report<PrebidMobileError>> {
    let Some(value) = value else {
        return Ok(());
    };

    registry
        .set_custom_id::<T>(value)
        .change_context(PrebidMobileError::configuration(format!(
            "Invalid custom id for {:?}",
            T::FAMILY
        )))
}

/// Native section of an ad unit.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct NativeSettings {
    pub context_type: Option<ContextType>,
    pub context_subtype: Option<ContextSubtype>,
    pub placement_type: Option<PlacementType>,
    #[serde(default = "default_placement_count")]
    pub placement_count: u32,
    #[serde(default)]
    pub seq: u32,
    #[serde(default)]
    pub a_url_support: bool,
    #[serde(default)]
    pub d_url_support: bool,
    #[serde(default)]
    pub privacy: bool,
    pub ext: Option<Value>,
    #[serde(default)]
    pub event_trackers: Vec<EventTracker>,
    #[serde(default)]
    pub assets: Vec<NativeAsset>,
}

fn default_placement_count() -> u32 {
    DEFAULT_PLACEMENT_COUNT
}

impl NativeSettings {
    /// Build the native configuration described by these settings.
    #[must_use]
    pub fn to_configuration(&self) -> NativeAdConfiguration {
        let mut config = NativeAdConfiguration::new();

        if let Some(context_type) = self.context_type {
            config.set_context_type(context_type);
        }
        if let Some(context_subtype) = self.context_subtype {
            config.set_context_subtype(context_subtype);
        }
        if let Some(placement_type) = self.placement_type {
            config.set_placement_type(placement_type);
        }
        config.set_placement_count(self.placement_count);
        config.set_seq(self.seq);
        config.set_a_url_support(self.a_url_support);
        config.set_d_url_support(self.d_url_support);
        config.set_privacy(self.privacy);
        if let Some(ext) = &self.ext {
            config.set_ext(ext.clone());
        }
        for tracker in &self.event_trackers {
            config.add_event_tracker(tracker.clone());
        }
        for asset in &self.assets {
            config.add_asset(asset.clone());
        }

        config
    }
}

/// One `[[ad_units]]` entry.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct AdUnitSettings {
    #[validate(length(min = 1))]
    pub config_id: String,
    #[serde(default)]
    pub formats: Vec<AdUnitFormat>,
    #[serde(default)]
    pub interstitial: bool,
    #[validate(nested)]
    pub native: Option<NativeSettings>,
}

impl AdUnitSettings {
    /// Build the ad-unit configuration described by this entry.
    ///
    /// Entries with a `native` table become native units and their `formats`
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PrebidMobileError::Configuration`] if a non-native entry lists
    /// no formats.
    pub fn to_configuration(&self) -> Result<AdUnitConfiguration, Report<PrebidMobileError>> {
        if let Some(native) = &self.native {
            if !self.formats.is_empty() {
                log::warn!(
                    "Ad unit '{}' is native; ignoring formats {:?}",
                    self.config_id,
                    self.formats
                );
            }
            let mut unit = AdUnitConfiguration::native(&self.config_id);
            unit.native_configuration = Some(native.to_configuration());
            return Ok(unit);
        }

        let formats: BTreeSet<AdUnitFormat> = self.formats.iter().copied().collect();
        AdUnitConfiguration::new(&self.config_id, &formats, self.interstitial).change_context(
            PrebidMobileError::configuration(format!(
                "Ad unit '{}' has an invalid format list",
                self.config_id
            )),
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct Settings {
    #[serde(default)]
    #[validate(nested)]
    pub custom_ids: CustomIdSettings,
    #[serde(default)]
    #[validate(nested)]
    pub ad_units: Vec<AdUnitSettings>,
}

impl Settings {
    /// Parse settings from a TOML string and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`PrebidMobileError::Configuration`] if the TOML is malformed or
    /// does not match the settings schema.
    pub fn from_toml(toml_str: &str) -> Result<Self, Report<PrebidMobileError>> {
        Self::from_toml_with_prefix(toml_str, ENVIRONMENT_PREFIX)
    }

    pub(crate) fn from_toml_with_prefix(
        toml_str: &str,
        env_prefix: &str,
    ) -> Result<Self, Report<PrebidMobileError>> {
        let environment = Environment::default()
            .prefix(env_prefix)
            .separator("__")
            .try_parsing(true);

        let toml = File::from_str(toml_str, FileFormat::Toml);
        let config = Config::builder()
            .add_source(toml)
            .add_source(environment)
            .build()
            .change_context(PrebidMobileError::configuration("Failed to build settings"))?;

        config
            .try_deserialize()
            .change_context(PrebidMobileError::configuration(
                "Failed to deserialize settings",
            ))
    }

    /// Parse, override and validate settings in one step.
    ///
    /// # Errors
    ///
    /// Returns [`PrebidMobileError::Configuration`] on parse or validation failure.
    pub fn from_toml_validated(toml_str: &str) -> Result<Self, Report<PrebidMobileError>> {
        let settings = Self::from_toml(toml_str)?;
        settings
            .validate()
            .change_context(PrebidMobileError::configuration(
                "Settings validation failed",
            ))?;
        Ok(settings)
    }

    /// Register the configured custom IDs in `registry`.
    ///
    /// # Errors
    ///
    /// See [`CustomIdSettings::apply`].
    pub fn apply_custom_ids(
        &self,
        registry: &CustomIdRegistry,
    ) -> Result<(), Report<PrebidMobileError>> {
        self.custom_ids.apply(registry)?;
        log::info!("Applied custom taxonomy ids from settings");
        Ok(())
    }

    /// Build every configured ad unit.
    ///
    /// # Errors
    ///
    /// Returns the first ad-unit error encountered.
    pub fn ad_unit_configurations(
        &self,
    ) -> Result<Vec<AdUnitConfiguration>, Report<PrebidMobileError>> {
        self.ad_units
            .iter()
            .map(AdUnitSettings::to_configuration)
            .collect()
    }
}
