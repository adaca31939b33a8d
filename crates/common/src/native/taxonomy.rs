//! OpenRTB native taxonomies with a reassignable `Custom` member.
//!
//! Every taxonomy is a closed enum whose standard members carry fixed IDs from
//! the OpenRTB Native 1.2 tables. The `Custom` member has no fixed ID: its
//! value lives in a [`CustomIdRegistry`] cell shared by every `Custom` of that
//! family. [`CustomIdRegistry::global`] is the process-wide registry used by
//! [`Taxonomy::id`]; callers that want isolation pass their own registry to
//! [`Taxonomy::id_in`].
//!
//! Equality is always by member. Changing the custom ID never makes `Custom`
//! equal to a standard member.

use std::sync::atomic::{AtomicU32, Ordering};

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::error::PrebidMobileError;

/// Custom ID every family starts with (first exchange-specific OpenRTB value).
pub const DEFAULT_CUSTOM_ID: u32 = 500;

/// Taxonomy families that own a custom ID cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum TaxonomyFamily {
    ContextType,
    ContextSubtype,
    PlacementType,
    EventType,
    EventTrackingMethod,
    ImageType,
    DataType,
}

impl TaxonomyFamily {
    pub const COUNT: usize = 7;

    pub const ALL: [TaxonomyFamily; Self::COUNT] = [
        TaxonomyFamily::ContextType,
        TaxonomyFamily::ContextSubtype,
        TaxonomyFamily::PlacementType,
        TaxonomyFamily::EventType,
        TaxonomyFamily::EventTrackingMethod,
        TaxonomyFamily::ImageType,
        TaxonomyFamily::DataType,
    ];

    const fn index(self) -> usize {
        self as usize
    }
}

/// One custom ID cell per [`TaxonomyFamily`].
#[derive(Debug)]
pub struct CustomIdRegistry {
    slots: [AtomicU32; TaxonomyFamily::COUNT],
}

static GLOBAL_REGISTRY: CustomIdRegistry = CustomIdRegistry::new();

impl CustomIdRegistry {
    /// Create a registry with every family at [`DEFAULT_CUSTOM_ID`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [const { AtomicU32::new(DEFAULT_CUSTOM_ID) }; TaxonomyFamily::COUNT],
        }
    }

    /// The process-wide registry read by [`Taxonomy::id`].
    #[must_use]
    pub fn global() -> &'static CustomIdRegistry {
        &GLOBAL_REGISTRY
    }

    /// Current custom ID of `family`.
    #[must_use]
    pub fn custom_id(&self, family: TaxonomyFamily) -> u32 {
        self.slots[family.index()].load(Ordering::Acquire)
    }

    /// Replace the custom ID of taxonomy `T`.
    ///
    /// Last write wins and is visible through every `T::Custom` resolved
    /// against this registry.
    ///
    /// # Errors
    ///
    /// Returns [`PrebidMobileError::InvalidArgument`] if `value` equals the ID
    /// of one of `T`'s standard members. The previous custom ID is kept.
    pub fn set_custom_id<T: Taxonomy>(&self, value: u32) -> Result<(), Report<PrebidMobileError>> {
        if T::FIXED_IDS.contains(&value) {
            log::warn!(
                "Ignoring custom {:?} id {} which collides with a standard member",
                T::FAMILY,
                value
            );
            return Err(Report::new(PrebidMobileError::invalid_argument(format!(
                "custom {:?} id {} collides with a standard member id",
                T::FAMILY,
                value
            ))));
        }

        let previous = self.slots[T::FAMILY.index()].swap(value, Ordering::AcqRel);
        log::debug!(
            "Custom {:?} id changed from {} to {}",
            T::FAMILY,
            previous,
            value
        );
        Ok(())
    }

    /// Restore every family to [`DEFAULT_CUSTOM_ID`].
    pub fn reset(&self) {
        for slot in &self.slots {
            slot.store(DEFAULT_CUSTOM_ID, Ordering::Release);
        }
    }
}

impl Default for CustomIdRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Behaviour shared by all native taxonomies.
pub trait Taxonomy: Copy + Eq + std::fmt::Debug + 'static {
    /// Family whose custom cell backs the `Custom` member.
    const FAMILY: TaxonomyFamily;

    /// IDs of the standard members, in declaration order.
    const FIXED_IDS: &'static [u32];

    /// Fixed ID of a standard member, `None` for `Custom`.
    fn fixed_id(self) -> Option<u32>;

    /// Whether this is the `Custom` member.
    fn is_custom(self) -> bool {
        self.fixed_id().is_none()
    }

    /// ID resolved against `registry`.
    fn id_in(self, registry: &CustomIdRegistry) -> u32 {
        self.fixed_id()
            .unwrap_or_else(|| registry.custom_id(Self::FAMILY))
    }

    /// ID resolved against the global registry.
    fn id(self) -> u32 {
        self.id_in(CustomIdRegistry::global())
    }

    /// Replace the family's custom ID in the global registry.
    ///
    /// # Errors
    ///
    /// See [`CustomIdRegistry::set_custom_id`].
    fn set_custom_id(value: u32) -> Result<(), Report<PrebidMobileError>> {
        CustomIdRegistry::global().set_custom_id::<Self>(value)
    }
}

macro_rules! define_taxonomy {
    (
        $(#[$meta:meta])*
        $name:ident => $family:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $id:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Integrator-assigned ID, see [`CustomIdRegistry`].
            Custom,
        }

        impl Taxonomy for $name {
            const FAMILY: TaxonomyFamily = TaxonomyFamily::$family;
            const FIXED_IDS: &'static [u32] = &[$($id),+];

            fn fixed_id(self) -> Option<u32> {
                match self {
                    $( Self::$variant => Some($id), )+
                    Self::Custom => None,
                }
            }
        }
    };
}

define_taxonomy! {
    /// Context in which the ad appears (`context`).
    ContextType => ContextType {
        /// Content-centric context such as a news feed or article.
        ContentCentric = 1,
        /// Social-centric context such as a social network feed or chat.
        SocialCentric = 2,
        /// Product context such as listings or reviews.
        Product = 3,
    }
}

define_taxonomy! {
    /// Detailed context in which the ad appears (`contextsubtype`).
    ContextSubtype => ContextSubtype {
        General = 10,
        Article = 11,
        Video = 12,
        Audio = 13,
        Image = 14,
        UserGenerated = 15,
        GeneralSocial = 20,
        Email = 21,
        ChatIm = 22,
        Selling = 30,
        ApplicationStore = 31,
        ProductReviewSites = 32,
    }
}

define_taxonomy! {
    /// Design/format of the placement (`plcmttype`).
    PlacementType => PlacementType {
        /// In the feed of content.
        ContentFeed = 1,
        /// In the atomic unit of the content.
        ContentAtomicUnit = 2,
        /// Outside the core content, e.g. a sidebar.
        OutsideCoreContent = 3,
        /// Recommendation widget.
        RecommendationWidget = 4,
    }
}

define_taxonomy! {
    /// Event a tracker is requested for.
    EventType => EventType {
        Impression = 1,
        ViewableMrc50 = 2,
        ViewableMrc100 = 3,
        ViewableVideo50 = 4,
    }
}

define_taxonomy! {
    /// How an event tracker is delivered.
    EventTrackingMethod => EventTrackingMethod {
        /// Image pixel.
        Image = 1,
        /// JavaScript tag.
        Js = 2,
    }
}

define_taxonomy! {
    /// Image asset type.
    ImageType => ImageType {
        Icon = 1,
        Main = 3,
    }
}

define_taxonomy! {
    /// Data asset type.
    DataType => DataType {
        Sponsored = 1,
        Desc = 2,
        Rating = 3,
        Likes = 4,
        Downloads = 5,
        Price = 6,
        SalePrice = 7,
        Phone = 8,
        Address = 9,
        Desc2 = 10,
        DisplayUrl = 11,
        CtaText = 12,
    }
}
