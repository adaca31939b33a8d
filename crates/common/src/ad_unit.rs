//! Ad-unit configuration.
//!
//! Banner, interstitial and video units get their internal formats from
//! [`AdFormat::from_set`]. Native units are always `{Native}` and carry a
//! [`NativeAdConfiguration`].

use std::collections::BTreeSet;

use error_stack::{Report, ResultExt};

use crate::ad_format::{AdFormat, AdUnitFormat};
use crate::error::PrebidMobileError;
use crate::native::{CustomIdRegistry, NativeAdConfiguration};
use crate::openrtb::NativeRequest;

/// Configuration of a single ad unit, as read when its bid request is built.
#[derive(Debug, Clone, PartialEq)]
pub struct AdUnitConfiguration {
    pub config_id: String,
    pub ad_formats: BTreeSet<AdFormat>,
    pub is_interstitial: bool,
    pub native_configuration: Option<NativeAdConfiguration>,
}

impl AdUnitConfiguration {
    /// Create a banner, interstitial or video ad unit.
    ///
    /// # Errors
    ///
    /// Returns [`PrebidMobileError::InvalidArgument`] if `ad_unit_formats` is empty.
    pub fn new(
        config_id: impl Into<String>,
        ad_unit_formats: &BTreeSet<AdUnitFormat>,
        is_interstitial: bool,
    ) -> Result<Self, Report<PrebidMobileError>> {
        let config_id = config_id.into();
        let ad_formats = AdFormat::from_set(ad_unit_formats, is_interstitial)
            .attach(format!("config id: {config_id}"))?;

        Ok(Self {
            config_id,
            ad_formats,
            is_interstitial,
            native_configuration: None,
        })
    }

    /// Create a native ad unit with an empty native configuration.
    #[must_use]
    pub fn native(config_id: impl Into<String>) -> Self {
        Self {
            config_id: config_id.into(),
            ad_formats: BTreeSet::from([AdFormat::Native]),
            is_interstitial: false,
            native_configuration: Some(NativeAdConfiguration::new()),
        }
    }

    #[must_use]
    pub fn is_native(&self) -> bool {
        self.ad_formats.contains(&AdFormat::Native)
    }

    /// Mutable access to the native configuration of a native unit.
    pub fn native_configuration_mut(&mut self) -> Option<&mut NativeAdConfiguration> {
        self.native_configuration.as_mut()
    }

    /// Native request for this unit, `None` for non-native units.
    #[must_use]
    pub fn native_request(&self, registry: &CustomIdRegistry) -> Option<NativeRequest> {
        self.native_configuration
            .as_ref()
            .map(|config| NativeRequest::from_configuration(config, registry))
    }

    /// Render the native request string for this unit.
    ///
    /// # Errors
    ///
    /// Returns [`PrebidMobileError::InvalidArgument`] if the unit is not native,
    /// or [`PrebidMobileError::Serialization`] if rendering fails.
    pub fn native_request_string(
        &self,
        registry: &CustomIdRegistry,
    ) -> Result<String, Report<PrebidMobileError>> {
        let request = self.native_request(registry).ok_or_else(|| {
            Report::new(PrebidMobileError::invalid_argument(format!(
                "Ad unit '{}' has no native configuration",
                self.config_id
            )))
        })?;

        request
            .to_request_string()
            .change_context(PrebidMobileError::Serialization {
                message: format!("Failed to render native request for '{}'", self.config_id),
            })
    }
}
