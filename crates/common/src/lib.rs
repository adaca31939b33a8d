//! Common functionality for the Prebid Mobile SDK core.
//!
//! This crate provides the ad-unit and native ad configuration types that the
//! request-building layer reads when it assembles an OpenRTB bid request.
//!
//! # Modules
//!
//! - [`ad_format`]: Ad-unit formats and their classification into internal formats
//! - [`ad_unit`]: Banner, interstitial, video and native ad-unit configuration
//! - [`error`]: Error types and error handling utilities
//! - [`native`]: Native ad configuration, assets, event trackers and taxonomies
//! - [`openrtb`]: OpenRTB Native 1.2 request serialization
//! - [`settings`]: Configuration loading and validation
//! - [`test_support`]: Testing utilities

pub mod ad_format;
pub mod ad_unit;
pub mod error;
pub mod native;
pub mod openrtb;
pub mod settings;
