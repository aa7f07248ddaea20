//! Context entity descriptors returned by the list endpoints.
//!
//! The service emits PascalCase keys. Lower camelCase spellings are accepted
//! as well, since some deployments serialize descriptors that way.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like a missing key.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A variable declared in a context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Variable {
    #[serde(alias = "name")]
    pub name: String,
    #[serde(default, alias = "group")]
    pub group: Option<String>,
    /// Table format of the value, present when `includeFormat` was requested.
    #[serde(default, alias = "tableFormat")]
    pub table_format: Option<String>,
    #[serde(default, deserialize_with = "null_default", alias = "defaultValue")]
    pub default_value: String,
    #[serde(default, deserialize_with = "null_default", alias = "readable")]
    pub readable: bool,
    #[serde(default, deserialize_with = "null_default", alias = "writable")]
    pub writable: bool,
}

/// A function callable in a context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Function {
    #[serde(alias = "name")]
    pub name: String,
    #[serde(default, alias = "group")]
    pub group: Option<String>,
    #[serde(default, alias = "inputFormat")]
    pub input_format: Option<String>,
    #[serde(default, alias = "outputFormat")]
    pub output_format: Option<String>,
    #[serde(default, alias = "description")]
    pub description: Option<String>,
}

/// An event a context can fire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Event {
    #[serde(alias = "name")]
    pub name: String,
    #[serde(default, alias = "group")]
    pub group: Option<String>,
    #[serde(default, alias = "format")]
    pub format: Option<String>,
    #[serde(default, alias = "level")]
    pub level: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn variable_from_service_json() {
        let v: Variable = serde_json::from_value(json!({
            "Name": "status",
            "Group": null,
            "TableFormat": "<<value><I>>",
            "DefaultValue": "0",
            "Readable": true,
            "Writable": false
        }))
        .unwrap();

        assert_eq!(v.name, "status");
        assert_eq!(v.group, None);
        assert_eq!(v.table_format.as_deref(), Some("<<value><I>>"));
        assert!(v.readable);
        assert!(!v.writable);
    }

    #[test]
    fn variable_with_only_name() {
        let v: Variable = serde_json::from_value(json!({"name": "x", "extra": 1})).unwrap();
        assert_eq!(v.name, "x");
        assert_eq!(v.default_value, "");
    }

    #[test]
    fn variable_null_fields_take_defaults() {
        let v: Variable = serde_json::from_value(json!({
            "Name": "x",
            "DefaultValue": null,
            "Readable": null,
            "Writable": null
        }))
        .unwrap();

        assert_eq!(v.name, "x");
        assert_eq!(v.default_value, "");
        assert!(!v.readable);
        assert!(!v.writable);
    }

    #[test]
    fn variable_without_name_is_rejected() {
        assert!(serde_json::from_value::<Variable>(json!({"Readable": true})).is_err());
    }

    #[test]
    fn function_and_event_descriptors() {
        let f: Function =
            serde_json::from_value(json!({"Name": "restart", "Description": "Restart"})).unwrap();
        assert_eq!(f.description.as_deref(), Some("Restart"));

        let e: Event = serde_json::from_value(json!({"Name": "alarm", "Level": 3})).unwrap();
        assert_eq!(e.level, Some(3));
    }
}
