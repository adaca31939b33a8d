use error_stack::{Report, ResultExt};
use serde::Serialize;
use serde_json::Value;

use crate::error::PrebidMobileError;
use crate::native::asset::{DataAsset, ImageAsset, NativeAsset, TitleAsset};
use crate::native::configuration::NativeAdConfiguration;
use crate::native::event_tracker::EventTracker;
use crate::native::taxonomy::{CustomIdRegistry, Taxonomy};

/// OpenRTB Native version emitted in `ver`.
pub const NATIVE_VERSION: &str = "1.2";

/// OpenRTB Native 1.2 request object, carried as a string in `imp.native.request`.
#[derive(Debug, Serialize, PartialEq)]
pub struct NativeRequest {
    pub ver: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contextsubtype: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plcmttype: Option<u32>,
    pub plcmtcnt: u32,
    pub seq: u32,
    pub assets: Vec<Asset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aurlsupport: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub durlsupport: Option<u8>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub eventtrackers: Vec<EventTrackerRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Value>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Asset {
    /// 1-based position of the asset in the configuration.
    pub id: u32,
    pub required: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Data>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Value>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Title {
    pub len: u32,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Image {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub image_type: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<u32>,
    pub wmin: u32,
    pub hmin: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mimes: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Data {
    #[serde(rename = "type")]
    pub data_type: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub len: Option<u32>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct EventTrackerRequest {
    pub event: u32,
    pub methods: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Value>,
}

fn flag(value: bool) -> Option<u8> {
    value.then_some(1)
}

impl NativeRequest {
    /// Build the request object from `config`, resolving custom taxonomy IDs
    /// against `registry`.
    #[must_use]
    pub fn from_configuration(config: &NativeAdConfiguration, registry: &CustomIdRegistry) -> Self {
        let assets = config
            .assets()
            .iter()
            .zip(1..)
            .map(|(asset, id)| Asset::from_native(asset, id, registry))
            .collect();

        let eventtrackers = config
            .event_trackers()
            .iter()
            .map(|tracker| EventTrackerRequest::from_tracker(tracker, registry))
            .collect();

        Self {
            ver: NATIVE_VERSION,
            context: config.context_type().map(|t| t.id_in(registry)),
            contextsubtype: config.context_subtype().map(|t| t.id_in(registry)),
            plcmttype: config.placement_type().map(|t| t.id_in(registry)),
            plcmtcnt: config.placement_count(),
            seq: config.seq(),
            assets,
            aurlsupport: flag(config.a_url_support()),
            durlsupport: flag(config.d_url_support()),
            eventtrackers,
            privacy: flag(config.privacy()),
            ext: config.ext().cloned(),
        }
    }

    /// Render the request as the JSON string placed in `imp.native.request`.
    ///
    /// # Errors
    ///
    /// Returns [`PrebidMobileError::Serialization`] if JSON encoding fails.
    pub fn to_request_string(&self) -> Result<String, Report<PrebidMobileError>> {
        serde_json::to_string(self).change_context(PrebidMobileError::Serialization {
            message: "Failed to serialize native request".to_string(),
        })
    }
}

impl Asset {
    fn from_native(asset: &NativeAsset, id: u32, registry: &CustomIdRegistry) -> Self {
        let mut out = Self {
            id,
            required: u8::from(asset.is_required()),
            title: None,
            img: None,
            data: None,
            ext: None,
        };

        match asset {
            NativeAsset::Title(TitleAsset { len, ext, .. }) => {
                out.title = Some(Title { len: *len });
                out.ext = ext.clone();
            }
            NativeAsset::Image(ImageAsset {
                w_min,
                h_min,
                w,
                h,
                image_type,
                mimes,
                ext,
                ..
            }) => {
                out.img = Some(Image {
                    image_type: image_type.map(|t| t.id_in(registry)),
                    w: *w,
                    h: *h,
                    wmin: *w_min,
                    hmin: *h_min,
                    mimes: mimes.clone(),
                });
                out.ext = ext.clone();
            }
            NativeAsset::Data(DataAsset {
                data_type, len, ext, ..
            }) => {
                out.data = Some(Data {
                    data_type: data_type.id_in(registry),
                    len: *len,
                });
                out.ext = ext.clone();
            }
        }

        out
    }
}

impl EventTrackerRequest {
    fn from_tracker(tracker: &EventTracker, registry: &CustomIdRegistry) -> Self {
        Self {
            event: tracker.event().id_in(registry),
            methods: tracker
                .methods()
                .iter()
                .map(|method| method.id_in(registry))
                .collect(),
            ext: tracker.ext().cloned(),
        }
    }
}
