use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A server-owned inventory record. The `id` is the only field this
/// program relies on being stable; everything else is display data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
}

/// Fields sent when creating or updating a record.
///
/// Absent fields are omitted from the payload entirely, so an update
/// only touches what the form filled in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MedicineDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}

/// Identity payload from the service.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub username: Option<String>,
}

/// Normalize a list response into a plain record vector.
///
/// The service has shipped both a bare array and a `{"results": [...]}`
/// wrapper for this endpoint, so both are accepted here — and only
/// here. Anything else (null, an object without `results`, a scalar, or
/// an array of the wrong shape) normalizes to the empty list.
pub fn normalize_list_response(value: Value) -> Vec<Medicine> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    serde_json::from_value(Value::Array(items)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_bare_array() {
        let value = json!([{"id": 1, "name": "Aspirin", "price": 4.5, "stock": 20}]);
        let medicines = normalize_list_response(value);
        assert_eq!(medicines.len(), 1);
        assert_eq!(medicines[0].name, "Aspirin");
    }

    #[test]
    fn normalizes_results_wrapper() {
        let value = json!({"results": [{"id": 1, "name": "Aspirin"}, {"id": 2, "name": "Ibuprofen"}]});
        let medicines = normalize_list_response(value);
        assert_eq!(medicines.len(), 2);
        assert_eq!(medicines[1].id, 2);
    }

    #[test]
    fn missing_optional_fields_default() {
        let value = json!([{"id": 3, "name": "Paracetamol"}]);
        let medicines = normalize_list_response(value);
        assert_eq!(medicines[0].description, None);
        assert_eq!(medicines[0].price, 0.0);
        assert_eq!(medicines[0].stock, 0);
    }

    #[test]
    fn null_normalizes_to_empty() {
        assert!(normalize_list_response(Value::Null).is_empty());
    }

    #[test]
    fn object_without_results_normalizes_to_empty() {
        assert!(normalize_list_response(json!({"ok": true})).is_empty());
    }

    #[test]
    fn scalar_normalizes_to_empty() {
        assert!(normalize_list_response(json!(42)).is_empty());
    }

    #[test]
    fn malformed_records_normalize_to_empty() {
        let value = json!([{"id": 1, "name": "Aspirin"}, {"name": "missing id"}]);
        assert!(normalize_list_response(value).is_empty());
    }

    #[test]
    fn draft_omits_absent_fields() {
        let draft = MedicineDraft {
            name: Some("Aspirin".to_string()),
            ..MedicineDraft::default()
        };
        let payload = serde_json::to_value(&draft).unwrap();
        assert_eq!(payload, json!({"name": "Aspirin"}));
    }
}
