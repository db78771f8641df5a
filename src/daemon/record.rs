//! Typed record produced by parsing one daemon document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every field a daemon document can carry.
///
/// This table is the single source of truth shared by the parser (which
/// section feeds which field) and the tool registry (which tool name reads
/// which field), so the two sides cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    About,
    Mission,
    Telos,
    CurrentLocation,
    Preferences,
    DailyRoutine,
    FavoriteBooks,
    FavoriteMovies,
    FavoritePodcasts,
    Predictions,
}

impl ProfileField {
    /// Declaration order; also the tool catalogue order.
    pub const ALL: [ProfileField; 10] = [
        ProfileField::About,
        ProfileField::Mission,
        ProfileField::Telos,
        ProfileField::CurrentLocation,
        ProfileField::Preferences,
        ProfileField::DailyRoutine,
        ProfileField::FavoriteBooks,
        ProfileField::FavoriteMovies,
        ProfileField::FavoritePodcasts,
        ProfileField::Predictions,
    ];

    /// Section key in the source document. Doubles as the JSON key in
    /// serialized records.
    pub fn section_key(self) -> &'static str {
        match self {
            ProfileField::About => "about",
            ProfileField::Mission => "mission",
            ProfileField::Telos => "telos",
            ProfileField::CurrentLocation => "current_location",
            ProfileField::Preferences => "preferences",
            ProfileField::DailyRoutine => "daily_routine",
            ProfileField::FavoriteBooks => "favorite_books",
            ProfileField::FavoriteMovies => "favorite_movies",
            ProfileField::FavoritePodcasts => "favorite_podcasts",
            ProfileField::Predictions => "predictions",
        }
    }

    /// Name of the MCP tool that reads this field.
    pub fn tool_name(self) -> &'static str {
        match self {
            ProfileField::About => "get_about",
            ProfileField::Mission => "get_mission",
            ProfileField::Telos => "get_telos",
            ProfileField::CurrentLocation => "get_current_location",
            ProfileField::Preferences => "get_preferences",
            ProfileField::DailyRoutine => "get_daily_routine",
            ProfileField::FavoriteBooks => "get_favorite_books",
            ProfileField::FavoriteMovies => "get_favorite_movies",
            ProfileField::FavoritePodcasts => "get_favorite_podcasts",
            ProfileField::Predictions => "get_predictions",
        }
    }

    /// Resolve a tool name back to its field. The mapping is total over the
    /// declared tool names and has no fallback entry.
    pub fn from_tool_name(name: &str) -> Option<ProfileField> {
        Self::ALL.into_iter().find(|field| field.tool_name() == name)
    }
}

/// Borrowed view of one present field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    List(&'a [String]),
}

impl FieldValue<'_> {
    /// Render for text content: scalars as-is, lists joined by newline with
    /// no trailing separator.
    pub fn render(&self) -> String {
        match self {
            FieldValue::Text(text) => (*text).to_string(),
            FieldValue::List(items) => items.join("\n"),
        }
    }
}

/// Fixed-shape result of parsing one daemon document.
///
/// Absent fields stay `None` and are omitted from serialized output, so a
/// field that never appeared is distinguishable from one present but empty.
/// A record lives for a single request: parsed fresh, rendered, discarded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DaemonRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_routine: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_books: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_movies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_podcasts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predictions: Option<Vec<String>>,
    /// Parse-time timestamp, RFC 3339. Derived, never read from the source.
    pub last_updated: String,
}

impl DaemonRecord {
    /// Record with every field absent and the timestamp set.
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            about: None,
            mission: None,
            telos: None,
            current_location: None,
            preferences: None,
            daily_routine: None,
            favorite_books: None,
            favorite_movies: None,
            favorite_podcasts: None,
            predictions: None,
            last_updated: now.to_rfc3339(),
        }
    }

    /// Look up one field; `None` means the section never appeared.
    pub fn get(&self, field: ProfileField) -> Option<FieldValue<'_>> {
        match field {
            ProfileField::About => self.about.as_deref().map(FieldValue::Text),
            ProfileField::Mission => self.mission.as_deref().map(FieldValue::Text),
            ProfileField::Telos => self.telos.as_deref().map(FieldValue::Text),
            ProfileField::CurrentLocation => {
                self.current_location.as_deref().map(FieldValue::Text)
            }
            ProfileField::Preferences => self.preferences.as_deref().map(FieldValue::List),
            ProfileField::DailyRoutine => self.daily_routine.as_deref().map(FieldValue::List),
            ProfileField::FavoriteBooks => self.favorite_books.as_deref().map(FieldValue::List),
            ProfileField::FavoriteMovies => self.favorite_movies.as_deref().map(FieldValue::List),
            ProfileField::FavoritePodcasts => {
                self.favorite_podcasts.as_deref().map(FieldValue::List)
            }
            ProfileField::Predictions => self.predictions.as_deref().map(FieldValue::List),
        }
    }

    /// Fill one field from its section body. Scalar fields take the body
    /// verbatim; list fields keep only dash-prefixed lines and stay absent
    /// when no line qualifies.
    pub(crate) fn populate(&mut self, field: ProfileField, body: &str) {
        match field {
            ProfileField::About => self.about = Some(body.to_string()),
            ProfileField::Mission => self.mission = Some(body.to_string()),
            ProfileField::Telos => self.telos = Some(body.to_string()),
            ProfileField::CurrentLocation => self.current_location = Some(body.to_string()),
            ProfileField::Preferences => self.preferences = list_items(body),
            ProfileField::DailyRoutine => self.daily_routine = list_items(body),
            ProfileField::FavoriteBooks => self.favorite_books = list_items(body),
            ProfileField::FavoriteMovies => self.favorite_movies = list_items(body),
            ProfileField::FavoritePodcasts => self.favorite_podcasts = list_items(body),
            ProfileField::Predictions => self.predictions = list_items(body),
        }
    }
}

/// Extract list items from an already-trimmed section body: a line counts
/// when its first non-whitespace character is a dash; one leading dash and
/// surrounding whitespace are stripped, the rest is kept verbatim.
fn list_items(body: &str) -> Option<Vec<String>> {
    let items: Vec<String> = body
        .split('\n')
        .map(str::trim)
        .filter(|line| line.starts_with('-'))
        .map(|line| line[1..].trim().to_string())
        .collect();

    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record() -> DaemonRecord {
        DaemonRecord::empty(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_tool_name_round_trip() {
        for field in ProfileField::ALL {
            assert_eq!(ProfileField::from_tool_name(field.tool_name()), Some(field));
        }
        assert_eq!(ProfileField::from_tool_name("get_all"), None);
        assert_eq!(ProfileField::from_tool_name("about"), None);
    }

    #[test]
    fn test_render_scalar() {
        let mut rec = record();
        rec.populate(ProfileField::About, "Hello\nWorld");
        let value = rec.get(ProfileField::About).unwrap();
        assert_eq!(value.render(), "Hello\nWorld");
    }

    #[test]
    fn test_render_list_joined_without_trailing_separator() {
        let mut rec = record();
        rec.populate(ProfileField::Preferences, "- x\n- y");
        let value = rec.get(ProfileField::Preferences).unwrap();
        assert_eq!(value.render(), "x\ny");
    }

    #[test]
    fn test_list_items_dash_detection() {
        let mut rec = record();
        rec.populate(ProfileField::Predictions, "- one\n- two\nnotalistitem\n-three");
        assert_eq!(
            rec.predictions,
            Some(vec!["one".to_string(), "two".to_string(), "three".to_string()])
        );
    }

    #[test]
    fn test_list_without_qualifying_lines_stays_absent() {
        let mut rec = record();
        rec.populate(ProfileField::Preferences, "plain text\nno bullets here");
        assert_eq!(rec.preferences, None);
        assert!(rec.get(ProfileField::Preferences).is_none());
    }

    #[test]
    fn test_list_item_keeps_internal_punctuation() {
        let mut rec = record();
        rec.populate(
            ProfileField::FavoriteBooks,
            "- The Left Hand of Darkness - Ursula K. Le Guin",
        );
        assert_eq!(
            rec.favorite_books,
            Some(vec!["The Left Hand of Darkness - Ursula K. Le Guin".to_string()])
        );
    }

    #[test]
    fn test_absent_fields_omitted_from_json() {
        let mut rec = record();
        rec.populate(ProfileField::Mission, "Ship it");
        let json = serde_json::to_value(&rec).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.get("mission").unwrap(), "Ship it");
        assert!(!obj.contains_key("about"));
        assert!(!obj.contains_key("preferences"));
        assert!(obj.contains_key("last_updated"));
    }

    #[test]
    fn test_empty_scalar_is_present_not_absent() {
        let mut rec = record();
        rec.populate(ProfileField::About, "");
        assert_eq!(rec.about.as_deref(), Some(""));
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json.get("about").unwrap(), "");
    }
}
