//! Content collections the search reads from.
//!
//! The stores themselves belong to the editors; search only sees them through
//! [`CollectionSource`], one accessor per collection. An accessor returning
//! `None` means the store has not loaded yet and is searched as empty.

pub mod builtin;
pub mod records;

use serde::{Deserialize, Serialize};

use crate::error::PortalResult;

pub use builtin::{destinations, Destination, NAVIGATION_CATEGORY};
pub use records::{CustomPage, Event, Form, GalleryItem, Page, Secretariat, Service};

/// Kind of record a search result was projected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Page,
    Form,
    Service,
    Secretariat,
    Event,
    Gallery,
}

impl SourceType {
    pub const ALL: [SourceType; 6] = [
        SourceType::Page,
        SourceType::Form,
        SourceType::Service,
        SourceType::Secretariat,
        SourceType::Event,
        SourceType::Gallery,
    ];

    /// Prefix used when building result ids (`<prefix>-<source id>`)
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Page => "page",
            SourceType::Form => "form",
            SourceType::Service => "service",
            SourceType::Secretariat => "secretariat",
            SourceType::Event => "event",
            SourceType::Gallery => "gallery",
        }
    }
}

/// Read-only access to the portal's content stores.
///
/// Every accessor defaults to `None`, so a host only implements the stores it
/// actually has.
pub trait CollectionSource {
    fn pages(&self) -> Option<&[Page]> {
        None
    }

    fn custom_pages(&self) -> Option<&[CustomPage]> {
        None
    }

    fn forms(&self) -> Option<&[Form]> {
        None
    }

    fn services(&self) -> Option<&[Service]> {
        None
    }

    fn secretariats(&self) -> Option<&[Secretariat]> {
        None
    }

    fn events(&self) -> Option<&[Event]> {
        None
    }

    fn gallery(&self) -> Option<&[GalleryItem]> {
        None
    }
}

/// An owned snapshot of every store, decodable from a JSON export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentSnapshot {
    pub pages: Option<Vec<Page>>,
    pub custom_pages: Option<Vec<CustomPage>>,
    pub forms: Option<Vec<Form>>,
    pub services: Option<Vec<Service>>,
    pub secretariats: Option<Vec<Secretariat>>,
    pub events: Option<Vec<Event>>,
    pub gallery: Option<Vec<GalleryItem>>,
}

impl ContentSnapshot {
    /// An empty snapshot with every store unloaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a snapshot; keys absent from the JSON stay unloaded
    pub fn from_json(json: &str) -> PortalResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl CollectionSource for ContentSnapshot {
    fn pages(&self) -> Option<&[Page]> {
        self.pages.as_deref()
    }

    fn custom_pages(&self) -> Option<&[CustomPage]> {
        self.custom_pages.as_deref()
    }

    fn forms(&self) -> Option<&[Form]> {
        self.forms.as_deref()
    }

    fn services(&self) -> Option<&[Service]> {
        self.services.as_deref()
    }

    fn secretariats(&self) -> Option<&[Secretariat]> {
        self.secretariats.as_deref()
    }

    fn events(&self) -> Option<&[Event]> {
        self.events.as_deref()
    }

    fn gallery(&self) -> Option<&[GalleryItem]> {
        self.gallery.as_deref()
    }
}
