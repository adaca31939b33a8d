//! Native ad request configuration.
//!
//! [`NativeAdConfiguration`] is filled in while an ad unit is set up and read
//! once when the bid request is built (see [`crate::openrtb::NativeRequest`]).
//! There is no build step; setters never validate.

use serde_json::Value;

use super::asset::NativeAsset;
use super::event_tracker::EventTracker;
use super::taxonomy::{ContextSubtype, ContextType, PlacementType};

/// Default number of identical placements in the ad layout (`plcmtcnt`).
pub const DEFAULT_PLACEMENT_COUNT: u32 = 1;

/// Mutable description of an OpenRTB native request.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeAdConfiguration {
    context_type: Option<ContextType>,
    context_subtype: Option<ContextSubtype>,
    placement_type: Option<PlacementType>,
    placement_count: u32,
    seq: u32,
    a_url_support: bool,
    d_url_support: bool,
    privacy: bool,
    ext: Option<Value>,
    event_trackers: Vec<EventTracker>,
    assets: Vec<NativeAsset>,
}

impl Default for NativeAdConfiguration {
    fn default() -> Self {
        Self {
            context_type: None,
            context_subtype: None,
            placement_type: None,
            placement_count: DEFAULT_PLACEMENT_COUNT,
            seq: 0,
            a_url_support: false,
            d_url_support: false,
            privacy: false,
            ext: None,
            event_trackers: Vec::new(),
            assets: Vec::new(),
        }
    }
}

impl NativeAdConfiguration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_context_type(&mut self, context_type: ContextType) {
        self.context_type = Some(context_type);
    }

    pub fn set_context_subtype(&mut self, context_subtype: ContextSubtype) {
        self.context_subtype = Some(context_subtype);
    }

    pub fn set_placement_type(&mut self, placement_type: PlacementType) {
        self.placement_type = Some(placement_type);
    }

    pub fn set_placement_count(&mut self, placement_count: u32) {
        self.placement_count = placement_count;
    }

    pub fn set_seq(&mut self, seq: u32) {
        self.seq = seq;
    }

    /// Whether the supply source supports returning an `assetsurl`.
    pub fn set_a_url_support(&mut self, supported: bool) {
        self.a_url_support = supported;
    }

    /// Whether the supply source supports returning a `dcourl`.
    pub fn set_d_url_support(&mut self, supported: bool) {
        self.d_url_support = supported;
    }

    /// Whether the supply side renders its own privacy notice.
    pub fn set_privacy(&mut self, privacy: bool) {
        self.privacy = privacy;
    }

    /// Attach a free-form `ext` object. The payload is passed through as is.
    pub fn set_ext(&mut self, ext: Value) {
        self.ext = Some(ext);
    }

    pub fn add_event_tracker(&mut self, tracker: EventTracker) {
        self.event_trackers.push(tracker);
    }

    pub fn add_asset(&mut self, asset: impl Into<NativeAsset>) {
        self.assets.push(asset.into());
    }

    #[must_use]
    pub fn context_type(&self) -> Option<ContextType> {
        self.context_type
    }

    #[must_use]
    pub fn context_subtype(&self) -> Option<ContextSubtype> {
        self.context_subtype
    }

    #[must_use]
    pub fn placement_type(&self) -> Option<PlacementType> {
        self.placement_type
    }

    #[must_use]
    pub fn placement_count(&self) -> u32 {
        self.placement_count
    }

    #[must_use]
    pub fn seq(&self) -> u32 {
        self.seq
    }

    #[must_use]
    pub fn a_url_support(&self) -> bool {
        self.a_url_support
    }

    #[must_use]
    pub fn d_url_support(&self) -> bool {
        self.d_url_support
    }

    #[must_use]
    pub fn privacy(&self) -> bool {
        self.privacy
    }

    #[must_use]
    pub fn ext(&self) -> Option<&Value> {
        self.ext.as_ref()
    }

    #[must_use]
    pub fn event_trackers(&self) -> &[EventTracker] {
        &self.event_trackers
    }

    #[must_use]
    pub fn assets(&self) -> &[NativeAsset] {
        &self.assets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::asset::{ImageAsset, TitleAsset};
    use crate::native::taxonomy::{
        CustomIdRegistry, EventTrackingMethod, EventType, Taxonomy,
    };
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = NativeAdConfiguration::new();

        assert_eq!(config.placement_count(), 1);
        assert_eq!(config.seq(), 0);
        assert!(!config.a_url_support());
        assert!(!config.d_url_support());
        assert!(!config.privacy());
        assert!(config.context_type().is_none());
        assert!(config.context_subtype().is_none());
        assert!(config.placement_type().is_none());
        assert!(config.ext().is_none());
        assert!(config.assets().is_empty());
        assert!(config.event_trackers().is_empty());
    }

    #[test]
    fn test_context_type() {
        let registry = CustomIdRegistry::new();
        let mut config = NativeAdConfiguration::new();

        config.set_context_type(ContextType::ContentCentric);
        assert_eq!(config.context_type(), Some(ContextType::ContentCentric));
        config.set_context_type(ContextType::Product);
        assert_eq!(config.context_type(), Some(ContextType::Product));
        assert_eq!(config.context_type().map(|t| t.id_in(&registry)), Some(3));

        config.set_context_type(ContextType::Custom);
        registry.set_custom_id::<ContextType>(500).unwrap();
        assert_eq!(config.context_type().map(|t| t.id_in(&registry)), Some(500));
        registry.set_custom_id::<ContextType>(600).unwrap();
        assert_eq!(config.context_type().map(|t| t.id_in(&registry)), Some(600));
        assert!(registry.set_custom_id::<ContextType>(1).is_err());
        assert_eq!(config.context_type().map(|t| t.id_in(&registry)), Some(600));
    }

    #[test]
    fn test_context_subtype_and_placement_type() {
        let mut config = NativeAdConfiguration::new();

        config.set_context_subtype(ContextSubtype::Selling);
        config.set_placement_type(PlacementType::RecommendationWidget);

        assert_eq!(config.context_subtype(), Some(ContextSubtype::Selling));
        assert_eq!(config.context_subtype().map(Taxonomy::id), Some(30));
        assert_eq!(
            config.placement_type(),
            Some(PlacementType::RecommendationWidget)
        );
        assert_eq!(config.placement_type().map(Taxonomy::id), Some(4));
    }

    #[test]
    fn test_scalar_setters() {
        let mut config = NativeAdConfiguration::new();

        config.set_placement_count(123);
        config.set_seq(1);
        config.set_a_url_support(true);
        config.set_d_url_support(true);
        config.set_privacy(true);

        assert_eq!(config.placement_count(), 123);
        assert_eq!(config.seq(), 1);
        assert!(config.a_url_support());
        assert!(config.d_url_support());
        assert!(config.privacy());
    }

    #[test]
    fn test_ext_is_passed_through() {
        let mut config = NativeAdConfiguration::new();
        config.set_ext(json!({"key": "value"}));

        assert_eq!(
            config.ext().and_then(|ext| ext.get("key")),
            Some(&json!("value"))
        );
    }

    #[test]
    fn test_event_trackers() {
        let registry = CustomIdRegistry::new();
        let mut config = NativeAdConfiguration::new();

        config.add_event_tracker(
            EventTracker::new(
                EventType::Impression,
                vec![EventTrackingMethod::Image, EventTrackingMethod::Js],
            )
            .unwrap(),
        );
        config.add_event_tracker(
            EventTracker::new(
                EventType::ViewableMrc50,
                vec![EventTrackingMethod::Custom, EventTrackingMethod::Image],
            )
            .unwrap(),
        );

        assert_eq!(config.event_trackers().len(), 2);

        let first = &config.event_trackers()[0];
        assert_eq!(first.event(), EventType::Impression);
        assert_eq!(first.event().id_in(&registry), 1);
        assert_eq!(
            first.methods(),
            &[EventTrackingMethod::Image, EventTrackingMethod::Js]
        );
        assert_eq!(first.methods()[1].id_in(&registry), 2);

        let second = &config.event_trackers()[1];
        assert_eq!(second.event(), EventType::ViewableMrc50);
        assert_eq!(second.event().id_in(&registry), 2);
        assert_eq!(second.methods()[0], EventTrackingMethod::Custom);
        assert_eq!(second.methods()[0].id_in(&registry), 500);

        registry
            .set_custom_id::<EventTrackingMethod>(600)
            .unwrap();
        assert_eq!(second.methods()[0].id_in(&registry), 600);
        assert_eq!(second.methods()[1].id_in(&registry), 1);
    }

    #[test]
    fn test_assets_keep_insertion_order() {
        let mut config = NativeAdConfiguration::new();
        config.add_asset(TitleAsset::new(25));
        config.add_asset(ImageAsset::new(20, 30));

        assert_eq!(config.assets().len(), 2);
        match &config.assets()[0] {
            NativeAsset::Title(title) => assert_eq!(title.len, 25),
            other => panic!("expected title asset, got {other:?}"),
        }
        match &config.assets()[1] {
            NativeAsset::Image(image) => {
                assert_eq!(image.w_min, 20);
                assert_eq!(image.h_min, 30);
            }
            other => panic!("expected image asset, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_assets_are_allowed() {
        let mut config = NativeAdConfiguration::new();
        config.add_asset(TitleAsset::new(10));
        config.add_asset(TitleAsset::new(10));
        assert_eq!(config.assets().len(), 2);
    }
}
