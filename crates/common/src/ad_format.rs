//! Ad-unit formats and their internal dispatch formats.
//!
//! Publishers describe an ad slot with [`AdUnitFormat`]s. Internally the SDK
//! dispatches on [`AdFormat`], which also distinguishes interstitial banners
//! and native units.

use std::collections::BTreeSet;

use error_stack::{ensure, Report};
use serde::{Deserialize, Serialize};

use crate::error::PrebidMobileError;

/// Format requested by the publisher for an ad unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdUnitFormat {
    Banner,
    Video,
}

/// Internal ad format. Only the SDK decides which of these a unit gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdFormat {
    Banner,
    Interstitial,
    Native,
    Vast,
}

impl AdFormat {
    /// Map the requested ad-unit formats of a slot to internal formats.
    ///
    /// `Banner` becomes [`AdFormat::Interstitial`] when `is_interstitial` is set
    /// and [`AdFormat::Banner`] otherwise; `Video` always becomes
    /// [`AdFormat::Vast`]. [`AdFormat::Native`] is never produced here.
    ///
    /// # Errors
    ///
    /// Returns [`PrebidMobileError::InvalidArgument`] if `ad_unit_formats` is empty.
    pub fn from_set(
        ad_unit_formats: &BTreeSet<AdUnitFormat>,
        is_interstitial: bool,
    ) -> Result<BTreeSet<AdFormat>, Report<PrebidMobileError>> {
        ensure!(
            !ad_unit_formats.is_empty(),
            PrebidMobileError::invalid_argument(
                "List of ad unit formats must contain at least one item"
            )
        );

        let formats: BTreeSet<AdFormat> = ad_unit_formats
            .iter()
            .map(|format| match format {
                AdUnitFormat::Banner if is_interstitial => AdFormat::Interstitial,
                AdUnitFormat::Banner => AdFormat::Banner,
                AdUnitFormat::Video => AdFormat::Vast,
            })
            .collect();

        log::debug!(
            "Classified ad unit formats {:?} (interstitial: {}) as {:?}",
            ad_unit_formats,
            is_interstitial,
            formats
        );

        Ok(formats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set<T: Ord + Copy>(items: &[T]) -> BTreeSet<T> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_from_set_banner_not_interstitial() {
        let result = AdFormat::from_set(&set(&[AdUnitFormat::Banner]), false).unwrap();
        assert_eq!(result, set(&[AdFormat::Banner]));
    }

    #[test]
    fn test_from_set_banner_interstitial() {
        let result = AdFormat::from_set(&set(&[AdUnitFormat::Banner]), true).unwrap();
        assert_eq!(result, set(&[AdFormat::Interstitial]));
    }

    #[test]
    fn test_from_set_two_not_interstitial() {
        let input = set(&[AdUnitFormat::Video, AdUnitFormat::Banner]);
        let result = AdFormat::from_set(&input, false).unwrap();
        assert_eq!(result, set(&[AdFormat::Vast, AdFormat::Banner]));
    }

    #[test]
    fn test_from_set_two_interstitial() {
        let input = set(&[AdUnitFormat::Video, AdUnitFormat::Banner]);
        let result = AdFormat::from_set(&input, true).unwrap();
        assert_eq!(result, set(&[AdFormat::Vast, AdFormat::Interstitial]));
    }

    #[test]
    fn test_from_set_video_ignores_interstitial_flag() {
        for is_interstitial in [false, true] {
            let result =
                AdFormat::from_set(&set(&[AdUnitFormat::Video]), is_interstitial).unwrap();
            assert_eq!(result, set(&[AdFormat::Vast]));
        }
    }

    #[test]
    fn test_from_set_empty_is_rejected() {
        let err = AdFormat::from_set(&BTreeSet::new(), false).unwrap_err();
        assert!(matches!(
            err.current_context(),
            PrebidMobileError::InvalidArgument { .. }
        ));
    }

    #[test]
    fn test_from_set_membership_rules() {
        let subsets = [
            set(&[AdUnitFormat::Banner]),
            set(&[AdUnitFormat::Video]),
            set(&[AdUnitFormat::Banner, AdUnitFormat::Video]),
        ];

        for subset in &subsets {
            for is_interstitial in [false, true] {
                let result = AdFormat::from_set(subset, is_interstitial).unwrap();
                let has_banner = subset.contains(&AdUnitFormat::Banner);
                let has_video = subset.contains(&AdUnitFormat::Video);

                assert_eq!(result.contains(&AdFormat::Vast), has_video);
                assert_eq!(
                    result.contains(&AdFormat::Interstitial),
                    has_banner && is_interstitial
                );
                assert_eq!(
                    result.contains(&AdFormat::Banner),
                    has_banner && !is_interstitial
                );
                assert!(!result.contains(&AdFormat::Native));
            }
        }
    }

    #[test]
    fn test_ad_format_serializes_lowercase() {
        let json = serde_json::to_string(&set(&[AdFormat::Vast, AdFormat::Interstitial])).unwrap();
        assert_eq!(json, r#"["interstitial","vast"]"#);
    }
}
