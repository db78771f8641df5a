//! Tool descriptors for the profile queries.

use serde_json::{json, Value};

use crate::daemon::ProfileField;

use super::registry::ToolDescriptor;

/// Aggregate tool returning the entire record.
pub const GET_ALL_TOOL: &str = "get_all";

/// Descriptor for one single-field tool.
pub fn field_descriptor(field: ProfileField) -> ToolDescriptor {
    ToolDescriptor {
        name: field.tool_name().to_string(),
        description: field_description(field).to_string(),
        input_schema: empty_object_schema(),
    }
}

pub fn get_all_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: GET_ALL_TOOL.to_string(),
        description: "Get the entire daemon profile as structured JSON".to_string(),
        input_schema: empty_object_schema(),
    }
}

fn field_description(field: ProfileField) -> &'static str {
    match field {
        ProfileField::About => "Get background information about the profile owner",
        ProfileField::Mission => "Get the profile owner's mission statement",
        ProfileField::Telos => "Get the TELOS framework (problems, missions, goals)",
        ProfileField::CurrentLocation => "Get the profile owner's current location",
        ProfileField::Preferences => "Get the profile owner's preferences and work style",
        ProfileField::DailyRoutine => "Get the profile owner's daily routine",
        ProfileField::FavoriteBooks => "Get the profile owner's favorite books",
        ProfileField::FavoriteMovies => "Get the profile owner's favorite movies",
        ProfileField::FavoritePodcasts => "Get the profile owner's favorite podcasts",
        ProfileField::Predictions => "Get the profile owner's predictions about the future",
    }
}

/// No tool accepts parameters.
fn empty_object_schema() -> Value {
    json!({
        "type": "object",
        "properties": {}
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_descriptor() {
        let desc = field_descriptor(ProfileField::Mission);
        assert_eq!(desc.name, "get_mission");
        assert!(!desc.description.is_empty());
        assert_eq!(desc.input_schema["type"], "object");
        assert!(desc.input_schema["properties"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_get_all_descriptor() {
        let desc = get_all_descriptor();
        assert_eq!(desc.name, GET_ALL_TOOL);
        assert_eq!(desc.input_schema["type"], "object");
    }
}
