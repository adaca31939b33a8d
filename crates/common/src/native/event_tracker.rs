//! Native event tracker requests.

use error_stack::{ensure, Report};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::taxonomy::{EventTrackingMethod, EventType};
use crate::error::PrebidMobileError;

/// Requests notification of `event` through one or more `methods`.
///
/// A tracker always has at least one method; [`EventTracker::new`] enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EventTrackerDef")]
pub struct EventTracker {
    event: EventType,
    methods: Vec<EventTrackingMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ext: Option<Value>,
}

#[derive(Deserialize)]
struct EventTrackerDef {
    event: EventType,
    methods: Vec<EventTrackingMethod>,
    #[serde(default)]
    ext: Option<Value>,
}

impl TryFrom<EventTrackerDef> for EventTracker {
    type Error = PrebidMobileError;

    fn try_from(def: EventTrackerDef) -> Result<Self, Self::Error> {
        let mut tracker =
            EventTracker::new(def.event, def.methods).map_err(|e| e.current_context().clone())?;
        tracker.ext = def.ext;
        Ok(tracker)
    }
}

impl EventTracker {
    /// Create a tracker.
    ///
    /// # Errors
    ///
    /// Returns [`PrebidMobileError::InvalidArgument`] if `methods` is empty.
    pub fn new(
        event: EventType,
        methods: Vec<EventTrackingMethod>,
    ) -> Result<Self, Report<PrebidMobileError>> {
        ensure!(
            !methods.is_empty(),
            PrebidMobileError::invalid_argument("Methods are required")
        );

        Ok(Self {
            event,
            methods,
            ext: None,
        })
    }

    #[must_use]
    pub fn with_ext(mut self, ext: Value) -> Self {
        self.ext = Some(ext);
        self
    }

    #[must_use]
    pub fn event(&self) -> EventType {
        self.event
    }

    #[must_use]
    pub fn methods(&self) -> &[EventTrackingMethod] {
        &self.methods
    }

    #[must_use]
    pub fn ext(&self) -> Option<&Value> {
        self.ext.as_ref()
    }
}
