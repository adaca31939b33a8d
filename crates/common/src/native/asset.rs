//! Native asset requests.
//!
//! The set of asset kinds is fixed by OpenRTB Native, so assets are a closed
//! sum type rather than an open hierarchy.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::taxonomy::{DataType, ImageType};

/// A single asset requested from the bidder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NativeAsset {
    Title(TitleAsset),
    Image(ImageAsset),
    Data(DataAsset),
}

impl NativeAsset {
    /// Whether the bidder must supply this asset.
    #[must_use]
    pub fn is_required(&self) -> bool {
        match self {
            NativeAsset::Title(asset) => asset.required,
            NativeAsset::Image(asset) => asset.required,
            NativeAsset::Data(asset) => asset.required,
        }
    }
}

impl From<TitleAsset> for NativeAsset {
    fn from(asset: TitleAsset) -> Self {
        NativeAsset::Title(asset)
    }
}

impl From<ImageAsset> for NativeAsset {
    fn from(asset: ImageAsset) -> Self {
        NativeAsset::Image(asset)
    }
}

impl From<DataAsset> for NativeAsset {
    fn from(asset: DataAsset) -> Self {
        NativeAsset::Data(asset)
    }
}

/// Title text asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TitleAsset {
    /// Maximum title length in characters.
    #[serde(default)]
    pub len: u32,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<Value>,
}

impl TitleAsset {
    #[must_use]
    pub fn new(len: u32) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }
}

/// Image asset. Minimum sizes are in device-independent pixels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    #[serde(default)]
    pub w_min: u32,
    #[serde(default)]
    pub h_min: u32,
    /// Exact width, when the placement requires one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<u32>,
    /// Exact height, when the placement requires one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_type: Option<ImageType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mimes: Vec<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<Value>,
}

impl ImageAsset {
    #[must_use]
    pub fn new(w_min: u32, h_min: u32) -> Self {
        Self {
            w_min,
            h_min,
            ..Self::default()
        }
    }
}

/// Data asset (sponsor name, rating, call to action, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataAsset {
    pub data_type: DataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub len: Option<u32>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<Value>,
}

impl DataAsset {
    #[must_use]
    pub fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            len: None,
            required: false,
            ext: None,
        }
    }
}
