//! OpenRTB native ad configuration.
//!
//! - [`taxonomy`]: context, placement, event and asset taxonomies with a
//!   reassignable custom ID
//! - [`asset`]: title, image and data asset requests
//! - [`event_tracker`]: event tracker requests
//! - [`configuration`]: the aggregate read when the bid request is built

pub mod asset;
pub mod configuration;
pub mod event_tracker;
pub mod taxonomy;

pub use asset::{DataAsset, ImageAsset, NativeAsset, TitleAsset};
pub use configuration::NativeAdConfiguration;
pub use event_tracker::EventTracker;
pub use taxonomy::{
    ContextSubtype, ContextType, CustomIdRegistry, DataType, EventTrackingMethod, EventType,
    ImageType, PlacementType, Taxonomy, TaxonomyFamily,
};
