//! Multi-collection matching.
//!
//! Every collection is projected onto the same [`SearchableItem`] shape and
//! kept when the normalized query is a substring of any matchable field.
//! Matching is case-insensitive only: no tokenization, no stemming, and
//! diacritics stay significant ("secretaria" does not find "Secretária").

use std::fmt;
use std::sync::Arc;

use crate::sources::{
    builtin, CollectionSource, CustomPage, Destination, Event, Form, GalleryItem, Page,
    Secretariat, Service, SourceType, NAVIGATION_CATEGORY,
};

/// Performs navigation to a portal route on commit.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Zero-argument operation run when a result is committed.
#[derive(Clone)]
pub struct NavigationAction(Arc<dyn Fn() + Send + Sync>);

impl NavigationAction {
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self(Arc::new(action))
    }

    pub fn invoke(&self) {
        (self.0)()
    }
}

impl fmt::Debug for NavigationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NavigationAction")
    }
}

/// Where a page result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Builtin,
    Regular,
    Custom,
}

/// Source of a result, with whatever extra data that source matches on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Page { kind: PageKind },
    Form,
    Service,
    Secretariat { services: Vec<String> },
    Event { date: Option<String> },
    Gallery,
}

impl Source {
    pub fn source_type(&self) -> SourceType {
        match self {
            Source::Page { .. } => SourceType::Page,
            Source::Form => SourceType::Form,
            Source::Service => SourceType::Service,
            Source::Secretariat { .. } => SourceType::Secretariat,
            Source::Event { .. } => SourceType::Event,
            Source::Gallery => SourceType::Gallery,
        }
    }
}

/// A record projected for matching, ranking and display.
#[derive(Debug, Clone)]
pub struct SearchableItem {
    /// `<source type>-<source id>`, or the bare id for built-in destinations
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub source: Source,
    pub route: String,
    pub navigation: Option<NavigationAction>,
}

impl SearchableItem {
    pub fn source_type(&self) -> SourceType {
        self.source.source_type()
    }

    /// True if `needle` (already lower-cased) occurs in any matchable field
    pub fn matches(&self, needle: &str) -> bool {
        let extra: &[String] = match &self.source {
            Source::Secretariat { services } => services.as_slice(),
            _ => &[],
        };
        // Built-in destinations are grouped by category but never matched on it
        let category = match self.source {
            Source::Page {
                kind: PageKind::Builtin,
            } => None,
            _ => self.category.as_deref(),
        };

        any_contains(
            [self.title.as_str(), self.description.as_str()]
                .into_iter()
                .chain(category)
                .chain(extra.iter().map(String::as_str)),
            needle,
        )
    }
}

fn any_contains<'a>(fields: impl IntoIterator<Item = &'a str>, needle: &str) -> bool {
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn item_id(source: SourceType, id: &str) -> String {
    format!("{}-{}", source.as_str(), id)
}

fn route_segment(slug: Option<&str>, id: &str) -> String {
    urlencoding::encode(slug.unwrap_or(id)).into_owned()
}

/// Scans the built-in destinations and every collection for candidates.
#[derive(Clone, Default)]
pub struct Matcher {
    navigator: Option<Arc<dyn Navigator>>,
    include_builtins: bool,
}

impl Matcher {
    pub fn new(navigator: Option<Arc<dyn Navigator>>, include_builtins: bool) -> Self {
        Self {
            navigator,
            include_builtins,
        }
    }

    /// Collect every item matching `needle`, in collection order.
    ///
    /// `needle` must already be normalized. Unloaded collections contribute
    /// nothing. No limit is applied here.
    pub fn candidates(&self, needle: &str, sources: &dyn CollectionSource) -> Vec<SearchableItem> {
        let mut results = Vec::new();

        // 1. Built-in destinations
        if self.include_builtins {
            for dest in builtin::destinations() {
                if any_contains([dest.title, dest.description], needle) {
                    results.push(self.project_destination(dest));
                }
            }
        }

        // 2. Pages
        for page in sources.pages().unwrap_or_default() {
            if any_contains([page.title.as_str(), page.content.as_str()], needle) {
                results.push(self.project_page(page));
            }
        }

        for page in sources.custom_pages().unwrap_or_default() {
            if any_contains([page.title.as_str(), page.content.as_str()], needle) {
                results.push(self.project_custom_page(page));
            }
        }

        // 3. Forms
        for form in sources.forms().unwrap_or_default() {
            let fields = [Some(form.title.as_str()), form.description.as_deref(), form.category.as_deref()];
            if any_contains(fields.into_iter().flatten(), needle) {
                results.push(self.project_form(form));
            }
        }

        // 4. Services
        for service in sources.services().unwrap_or_default() {
            let fields = [
                Some(service.title.as_str()),
                Some(service.description.as_str()),
                service.category.as_deref(),
            ];
            if any_contains(fields.into_iter().flatten(), needle) {
                results.push(self.project_service(service));
            }
        }

        // 5. Secretariats, each offered service matched on its own
        for secretariat in sources.secretariats().unwrap_or_default() {
            let fields = [Some(secretariat.name.as_str()), secretariat.description.as_deref()];
            let matches = any_contains(fields.into_iter().flatten(), needle)
                || any_contains(secretariat.services.iter().map(String::as_str), needle);
            if matches {
                results.push(self.project_secretariat(secretariat));
            }
        }

        // 6. Events, location standing in for category
        for event in sources.events().unwrap_or_default() {
            let fields = [
                Some(event.title.as_str()),
                event.description.as_deref(),
                event.location.as_deref(),
            ];
            if any_contains(fields.into_iter().flatten(), needle) {
                results.push(self.project_event(event));
            }
        }

        // 7. Gallery
        for album in sources.gallery().unwrap_or_default() {
            let fields = [album.title.as_deref(), album.description.as_deref(), album.category.as_deref()];
            if any_contains(fields.into_iter().flatten(), needle) {
                results.push(self.project_gallery(album));
            }
        }

        results
    }

    fn action_for(&self, route: &str) -> Option<NavigationAction> {
        let navigator = self.navigator.clone()?;
        let route = route.to_string();
        Some(NavigationAction::new(move || navigator.navigate(&route)))
    }

    fn item(
        &self,
        id: String,
        title: String,
        description: String,
        category: Option<String>,
        source: Source,
        route: String,
    ) -> SearchableItem {
        let navigation = self.action_for(&route);
        SearchableItem {
            id,
            title,
            description,
            category,
            source,
            route,
            navigation,
        }
    }

    fn project_destination(&self, dest: &Destination) -> SearchableItem {
        self.item(
            dest.id.to_string(),
            dest.title.to_string(),
            dest.description.to_string(),
            Some(NAVIGATION_CATEGORY.to_string()),
            Source::Page {
                kind: PageKind::Builtin,
            },
            dest.route.to_string(),
        )
    }

    fn project_page(&self, page: &Page) -> SearchableItem {
        self.item(
            item_id(SourceType::Page, &page.id),
            page.title.clone(),
            page.content.clone(),
            None,
            Source::Page {
                kind: PageKind::Regular,
            },
            format!("/pagina/{}", route_segment(page.slug.as_deref(), &page.id)),
        )
    }

    fn project_custom_page(&self, page: &CustomPage) -> SearchableItem {
        self.item(
            format!("custom-{}", item_id(SourceType::Page, &page.id)),
            page.title.clone(),
            page.content.clone(),
            None,
            Source::Page {
                kind: PageKind::Custom,
            },
            format!("/p/{}", route_segment(page.slug.as_deref(), &page.id)),
        )
    }

    fn project_form(&self, form: &Form) -> SearchableItem {
        self.item(
            item_id(SourceType::Form, &form.id),
            form.title.clone(),
            form.description.clone().unwrap_or_default(),
            form.category.clone(),
            Source::Form,
            format!("/formularios/{}", route_segment(None, &form.id)),
        )
    }

    fn project_service(&self, service: &Service) -> SearchableItem {
        self.item(
            item_id(SourceType::Service, &service.id),
            service.title.clone(),
            service.description.clone(),
            service.category.clone(),
            Source::Service,
            format!("/servicos/{}", route_segment(None, &service.id)),
        )
    }

    fn project_secretariat(&self, secretariat: &Secretariat) -> SearchableItem {
        self.item(
            item_id(SourceType::Secretariat, &secretariat.id),
            secretariat.name.clone(),
            secretariat.description.clone().unwrap_or_default(),
            None,
            Source::Secretariat {
                services: secretariat.services.clone(),
            },
            format!("/secretarias/{}", route_segment(None, &secretariat.id)),
        )
    }

    fn project_event(&self, event: &Event) -> SearchableItem {
        self.item(
            item_id(SourceType::Event, &event.id),
            event.title.clone(),
            event.description.clone().unwrap_or_default(),
            event.location.clone(),
            Source::Event {
                date: event.date.clone(),
            },
            format!("/agenda/{}", route_segment(None, &event.id)),
        )
    }

    fn project_gallery(&self, album: &GalleryItem) -> SearchableItem {
        self.item(
            item_id(SourceType::Gallery, &album.id),
            album.title.clone().unwrap_or_default(),
            album.description.clone().unwrap_or_default(),
            album.category.clone(),
            Source::Gallery,
            format!("/galeria/{}", route_segment(None, &album.id)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::ContentSnapshot;
    use std::sync::Mutex;

    fn ids(items: &[SearchableItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    fn without_builtins() -> Matcher {
        Matcher::new(None, false)
    }

    #[derive(Default)]
    struct RecordingNavigator {
        routes: Mutex<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: &str) {
            self.routes.lock().unwrap().push(route.to_string());
        }
    }

    #[test]
    fn test_builtins_match_without_collections() {
        let matcher = Matcher::new(None, true);
        let results = matcher.candidates("home", &ContentSnapshot::new());
        assert_eq!(ids(&results), vec!["home"]);
        assert_eq!(results[0].title, "Página Inicial");
        assert_eq!(results[0].source_type(), SourceType::Page);
    }

    #[test]
    fn test_builtins_ignore_their_shared_category() {
        let matcher = Matcher::new(None, true);
        let empty = ContentSnapshot::new();

        assert!(matcher.candidates("navega", &empty).is_empty());
        // Only "População" in a description, not the category label
        assert_eq!(ids(&matcher.candidates("ção", &empty)), vec!["general-data"]);

        let home = matcher.candidates("home", &empty).remove(0);
        assert_eq!(home.category.as_deref(), Some(NAVIGATION_CATEGORY));
        assert!(!home.matches("navega"));
        assert!(home.matches("home"));
    }

    #[test]
    fn test_ids_are_prefixed_by_source_type() {
        let snapshot = ContentSnapshot::from_json(
            r#"{
                "pages": [{"id": "1", "title": "Taxas", "content": ""}],
                "customPages": [{"id": "2", "title": "Taxas extras", "content": ""}],
                "forms": [{"id": "3", "title": "Taxa de lixo"}],
                "services": [{"id": "4", "title": "Taxa de alvará", "description": ""}],
                "secretariats": [{"id": "5", "name": "Fazenda", "services": ["Taxas"]}],
                "events": [{"id": "6", "title": "Mutirão de taxas"}],
                "gallery": [{"id": "7", "title": "Taxa zero"}]
            }"#,
        )
        .unwrap();

        let results = without_builtins().candidates("tax", &snapshot);
        assert_eq!(
            ids(&results),
            vec!["page-1", "custom-page-2", "form-3", "service-4", "secretariat-5", "event-6", "gallery-7"]
        );
        for item in &results {
            let prefix = format!("{}-", item.source_type().as_str());
            assert!(item.id.contains(&prefix), "{} lacks {}", item.id, prefix);
        }
    }

    #[test]
    fn test_or_semantics_across_fields() {
        let snapshot = ContentSnapshot {
            services: Some(vec![
                Service {
                    id: "1".into(),
                    title: "IPTU Online".into(),
                    ..Default::default()
                },
                Service {
                    id: "2".into(),
                    title: "Segunda via".into(),
                    description: "Boleto do iptu".into(),
                    ..Default::default()
                },
                Service {
                    id: "3".into(),
                    title: "Alvará".into(),
                    category: Some("Tributos IPTU".into()),
                    ..Default::default()
                },
                Service {
                    id: "4".into(),
                    title: "Coleta de lixo".into(),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        };

        let results = without_builtins().candidates("iptu", &snapshot);
        assert_eq!(ids(&results), vec!["service-1", "service-2", "service-3"]);
    }

    #[test]
    fn test_query_is_not_tokenized() {
        let snapshot = ContentSnapshot {
            forms: Some(vec![Form {
                id: "1".into(),
                title: "Licença ambiental".into(),
                ..Default::default()
            }]),
            ..Default::default()
        };

        let matcher = without_builtins();
        assert_eq!(matcher.candidates("licença ambiental", &snapshot).len(), 1);
        assert!(matcher.candidates("ambiental licença", &snapshot).is_empty());
    }

    #[test]
    fn test_diacritics_are_significant() {
        let snapshot = ContentSnapshot {
            secretariats: Some(vec![Secretariat {
                id: "1".into(),
                name: "Secretária de Saúde".into(),
                ..Default::default()
            }]),
            ..Default::default()
        };

        let matcher = without_builtins();
        assert!(matcher.candidates("secretaria", &snapshot).is_empty());
        assert_eq!(matcher.candidates("secretária", &snapshot).len(), 1);
    }

    #[test]
    fn test_secretariat_services_match_individually() {
        let snapshot = ContentSnapshot {
            secretariats: Some(vec![Secretariat {
                id: "7".into(),
                name: "Secretaria de Obras".into(),
                description: None,
                services: vec!["Tapa-buraco".into(), "Iluminação pública".into()],
            }]),
            ..Default::default()
        };

        let results = without_builtins().candidates("iluminação", &snapshot);
        assert_eq!(ids(&results), vec!["secretariat-7"]);
        assert!(results[0].matches("tapa"));
        // Matching does not span across separate services
        assert!(without_builtins()
            .candidates("buraco iluminação", &snapshot)
            .is_empty());
    }

    #[test]
    fn test_event_location_and_page_content() {
        let snapshot = ContentSnapshot {
            pages: Some(vec![Page {
                id: "9".into(),
                title: "Transparência".into(),
                content: "Receitas e despesas na praça central".into(),
                slug: Some("transparencia".into()),
            }]),
            events: Some(vec![Event {
                id: "3".into(),
                title: "Festa junina".into(),
                location: Some("Praça Central".into()),
                ..Default::default()
            }]),
            ..Default::default()
        };

        let results = without_builtins().candidates("praça central", &snapshot);
        assert_eq!(ids(&results), vec!["page-9", "event-3"]);
        assert_eq!(results[0].route, "/pagina/transparencia");
        assert_eq!(results[1].category.as_deref(), Some("Praça Central"));
    }

    #[test]
    fn test_gallery_with_missing_fields() {
        let snapshot = ContentSnapshot {
            gallery: Some(vec![
                GalleryItem {
                    id: "1".into(),
                    ..Default::default()
                },
                GalleryItem {
                    id: "2".into(),
                    category: Some("Carnaval".into()),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        };

        let results = without_builtins().candidates("carnaval", &snapshot);
        assert_eq!(ids(&results), vec!["gallery-2"]);
        assert_eq!(results[0].title, "");
    }

    #[test]
    fn test_navigation_action_uses_navigator() {
        let navigator = Arc::new(RecordingNavigator::default());
        let matcher = Matcher::new(Some(navigator.clone()), true);

        let results = matcher.candidates("notícias", &ContentSnapshot::new());
        let action = results[0].navigation.as_ref().unwrap();
        action.invoke();

        assert_eq!(*navigator.routes.lock().unwrap(), vec!["/noticias".to_string()]);
    }

    #[test]
    fn test_no_navigator_means_no_action() {
        let results = Matcher::new(None, true).candidates("agenda", &ContentSnapshot::new());
        assert!(!results.is_empty());
        assert!(results.iter().all(|item| item.navigation.is_none()));
    }

    #[test]
    fn test_route_segments_are_encoded() {
        let snapshot = ContentSnapshot {
            custom_pages: Some(vec![CustomPage {
                id: "a b".into(),
                title: "Ouvidoria".into(),
                ..Default::default()
            }]),
            ..Default::default()
        };

        let results = without_builtins().candidates("ouvidoria", &snapshot);
        assert_eq!(results[0].id, "custom-page-a b");
        assert_eq!(results[0].route, "/p/a%20b");
    }
}
