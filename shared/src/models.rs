use serde::{Deserialize, Deserializer, Serialize};

/// Identifier assigned to an event by the remote API
pub type EventId = i64;

/// A single schedulable happening, as served by the events API.
///
/// Fields are taken verbatim from the response. String fields the API leaves
/// out or sends as `null` decode as empty strings; the identifier is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_full_record() {
        let json = r#"{
            "id": 7,
            "name": "Launch Party",
            "description": "Cake and speeches",
            "date": "2025-11-02T18:00:00.000Z",
            "location": "Rooftop"
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, 7);
        assert_eq!(event.name, "Launch Party");
        assert_eq!(event.description, "Cake and speeches");
        assert_eq!(event.date, "2025-11-02T18:00:00.000Z");
        assert_eq!(event.location, "Rooftop");
    }

    #[test]
    fn test_event_missing_strings_default_to_empty() {
        let event: Event = serde_json::from_str(r#"{"id":2,"name":"B","description":"d"}"#).unwrap();
        assert_eq!(event.name, "B");
        assert_eq!(event.description, "d");
        assert!(event.date.is_empty());
        assert!(event.location.is_empty());
    }

    #[test]
    fn test_event_null_strings_decode_as_empty() {
        let event: Event = serde_json::from_str(
            r#"{"id":4,"name":null,"description":null,"date":null,"location":"Dock"}"#,
        )
        .unwrap();
        assert_eq!(event.id, 4);
        assert!(event.name.is_empty());
        assert!(event.description.is_empty());
        assert!(event.date.is_empty());
        assert_eq!(event.location, "Dock");
    }

    #[test]
    fn test_event_ignores_unknown_fields() {
        let event: Event =
            serde_json::from_str(r#"{"id":3,"name":"C","cohortId":412,"guests":[]}"#).unwrap();
        assert_eq!(event.id, 3);
        assert_eq!(event.name, "C");
    }

    #[test]
    fn test_event_requires_id() {
        let result = serde_json::from_str::<Event>(r#"{"name":"no id"}"#);
        assert!(result.is_err());
    }
}
