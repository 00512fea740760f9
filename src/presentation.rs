//! Presentation adapter for the result picker.
//!
//! Turns the ranked result list into category groups the rendering layer can
//! draw directly: an icon per source type, title and description split into
//! highlighted and plain segments, and the flat rank index each entry reports
//! back through [`PointerEvent`].

use serde::Serialize;

use crate::core::{SearchableItem, Source};
use crate::sources::SourceType;

/// Icon shown next to a result, keyed by source type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    FileText,
    ClipboardList,
    Briefcase,
    Building,
    Calendar,
    Image,
}

impl Icon {
    pub fn for_source(source: SourceType) -> Self {
        match source {
            SourceType::Page => Icon::FileText,
            SourceType::Form => Icon::ClipboardList,
            SourceType::Service => Icon::Briefcase,
            SourceType::Secretariat => Icon::Building,
            SourceType::Event => Icon::Calendar,
            SourceType::Gallery => Icon::Image,
        }
    }

    /// Icon name as used by the portal's icon set
    pub fn name(&self) -> &'static str {
        match self {
            Icon::FileText => "file-text",
            Icon::ClipboardList => "clipboard-list",
            Icon::Briefcase => "briefcase",
            Icon::Building => "building",
            Icon::Calendar => "calendar",
            Icon::Image => "image",
        }
    }
}

/// A run of text, highlighted when it is an occurrence of the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightSegment {
    pub text: String,
    pub highlighted: bool,
}

impl HighlightSegment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: false,
        }
    }

    fn marked(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: true,
        }
    }
}

/// Split `text` around every case-insensitive occurrence of `needle`.
///
/// `needle` must already be lower-cased. Occurrences do not overlap and are
/// found left to right. Concatenating the segments yields `text` unchanged.
pub fn highlight(text: &str, needle: &str) -> Vec<HighlightSegment> {
    if text.is_empty() {
        return Vec::new();
    }
    if needle.is_empty() {
        return vec![HighlightSegment::plain(text)];
    }

    // Lower-case per char and remember where each original char starts, so
    // matches found in the lower-cased text map back to original offsets even
    // when lower-casing changes byte lengths.
    let mut lower = String::with_capacity(text.len());
    let mut starts: Vec<(usize, usize)> = Vec::with_capacity(text.len() + 1);
    for (offset, ch) in text.char_indices() {
        starts.push((lower.len(), offset));
        lower.extend(ch.to_lowercase());
    }
    starts.push((lower.len(), text.len()));

    let to_original = |lower_offset: usize| {
        starts
            .binary_search_by_key(&lower_offset, |&(l, _)| l)
            .ok()
            .map(|i| starts[i].1)
    };

    let mut segments = Vec::new();
    let mut cursor = 0;
    let mut search_from = 0;

    while let Some(pos) = lower[search_from..].find(needle) {
        let start = search_from + pos;
        let end = start + needle.len();

        match (to_original(start), to_original(end)) {
            (Some(s), Some(e)) => {
                if s > cursor {
                    segments.push(HighlightSegment::plain(&text[cursor..s]));
                }
                segments.push(HighlightSegment::marked(&text[s..e]));
                cursor = e;
                search_from = end;
            }
            // Match splits a character's lower-case expansion; skip it
            _ => {
                let step = lower[start..].chars().next().map_or(1, char::len_utf8);
                search_from = start + step;
            }
        }
    }

    if cursor < text.len() {
        segments.push(HighlightSegment::plain(&text[cursor..]));
    }
    segments
}

/// One row in the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultEntry {
    /// Position in the ranked list; pass this back in [`PointerEvent`]
    pub index: usize,
    pub id: String,
    pub icon: Icon,
    pub source: SourceType,
    pub title: Vec<HighlightSegment>,
    pub description: Vec<HighlightSegment>,
    pub route: String,
    /// Event date as supplied by the agenda store
    pub date: Option<String>,
    pub selected: bool,
}

/// Results sharing a category, in rank order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultGroup {
    pub category: String,
    pub entries: Vec<ResultEntry>,
}

/// Pointer interaction reported by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// The pointer entered the row at this rank index
    Hover(usize),
    /// The row at this rank index was clicked
    Click(usize),
}

/// Bucket ranked results by category.
///
/// Groups appear in order of each category's first occurrence in the ranked
/// list; items without a category go to `fallback_category`.
pub fn group_results(
    items: &[SearchableItem],
    needle: &str,
    selected: Option<usize>,
    fallback_category: &str,
) -> Vec<ResultGroup> {
    let mut groups: Vec<ResultGroup> = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let category = item
            .category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(fallback_category);

        let entry = ResultEntry {
            index,
            id: item.id.clone(),
            icon: Icon::for_source(item.source_type()),
            source: item.source_type(),
            title: highlight(&item.title, needle),
            description: highlight(&item.description, needle),
            route: item.route.clone(),
            date: match &item.source {
                Source::Event { date } => date.clone(),
                _ => None,
            },
            selected: selected == Some(index),
        };

        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.entries.push(entry),
            None => groups.push(ResultGroup {
                category: category.to_string(),
                entries: vec![entry],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, title: &str, category: Option<&str>, source: Source) -> SearchableItem {
        SearchableItem {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            category: category.map(str::to_string),
            source,
            route: format!("/{}", id),
            navigation: None,
        }
    }

    fn joined(segments: &[HighlightSegment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    fn marked(segments: &[HighlightSegment]) -> Vec<&str> {
        segments
            .iter()
            .filter(|s| s.highlighted)
            .map(|s| s.text.as_str())
            .collect()
    }

    #[test]
    fn test_highlight_every_occurrence() {
        let segments = highlight("IPTU e iptu", "iptu");
        assert_eq!(marked(&segments), vec!["IPTU", "iptu"]);
        assert_eq!(joined(&segments), "IPTU e iptu");
        assert_eq!(segments.len(), 3);
    }

    #[test]
    fn test_highlight_keeps_original_case_and_accents() {
        let segments = highlight("Saúde da SAÚDE", "saúde");
        assert_eq!(marked(&segments), vec!["Saúde", "SAÚDE"]);
        assert_eq!(joined(&segments), "Saúde da SAÚDE");
    }

    #[test]
    fn test_highlight_non_overlapping() {
        let segments = highlight("aaa", "aa");
        assert_eq!(marked(&segments), vec!["aa"]);
        assert_eq!(joined(&segments), "aaa");
    }

    #[test]
    fn test_highlight_without_match_or_needle() {
        assert_eq!(highlight("Agenda", "xyz"), vec![HighlightSegment::plain("Agenda")]);
        assert_eq!(highlight("Agenda", ""), vec![HighlightSegment::plain("Agenda")]);
        assert!(highlight("", "ag").is_empty());
    }

    #[test]
    fn test_highlight_handles_length_changing_lowercase() {
        // 'İ' lower-cases to two chars; the text around it must survive intact
        let segments = highlight("İstanbul ist", "ist");
        assert_eq!(joined(&segments), "İstanbul ist");
        assert_eq!(marked(&segments).last(), Some(&"ist"));
    }

    #[test]
    fn test_groups_follow_first_occurrence() {
        let items = vec![
            item("a", "Alvará", Some("Tributos"), Source::Service),
            item("b", "Agenda", Some("Navegação"), Source::Page { kind: crate::core::PageKind::Builtin }),
            item("c", "Alíquota", Some("Tributos"), Source::Service),
            item("d", "Álbum", None, Source::Gallery),
        ];

        let groups = group_results(&items, "al", Some(2), "Outros");
        let layout: Vec<(&str, Vec<usize>)> = groups
            .iter()
            .map(|g| (g.category.as_str(), g.entries.iter().map(|e| e.index).collect()))
            .collect();

        assert_eq!(
            layout,
            vec![("Tributos", vec![0, 2]), ("Navegação", vec![1]), ("Outros", vec![3])]
        );
        assert!(groups[0].entries[1].selected);
        assert!(!groups[0].entries[0].selected);
    }

    #[test]
    fn test_entry_icons_follow_source() {
        let items = vec![
            item("e", "Feira", None, Source::Event { date: None }),
            item("s", "Obras", None, Source::Secretariat { services: vec![] }),
        ];
        let groups = group_results(&items, "", None, "Outros");
        let icons: Vec<&str> = groups[0].entries.iter().map(|e| e.icon.name()).collect();
        assert_eq!(icons, vec!["calendar", "building"]);
    }

    #[test]
    fn test_event_entries_carry_their_date() {
        let items = vec![
            item("e", "Feira", None, Source::Event { date: Some("2024-05-10".into()) }),
            item("g", "Feira em fotos", None, Source::Gallery),
        ];
        let groups = group_results(&items, "feira", None, "Outros");
        let dates: Vec<Option<&str>> = groups[0].entries.iter().map(|e| e.date.as_deref()).collect();
        assert_eq!(dates, vec![Some("2024-05-10"), None]);
    }

    #[test]
    fn test_every_source_has_an_icon() {
        let names: std::collections::HashSet<_> = SourceType::ALL
            .iter()
            .map(|s| Icon::for_source(*s).name())
            .collect();
        assert_eq!(names.len(), SourceType::ALL.len());
    }
}
