//! Resource records and dotted field-path resolution
//!
//! A record is whatever the provider returned for one resource (a JSON
//! object) plus fields derived locally, such as the display name. Field
//! paths like `placement.AvailabilityZone` walk nested objects; numeric
//! segments index into arrays. A missing segment resolves to `None`.

use serde_json::{Map, Value};

/// Single-segment lookup over one record representation
pub trait FieldLookup {
    /// Look up one path segment, `None` if absent
    fn lookup(&self, key: &str) -> Option<&Value>;
}

impl FieldLookup for Value {
    fn lookup(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.lookup(key),
            Value::Array(items) => key.parse::<usize>().ok().and_then(|idx| items.get(idx)),
            _ => None,
        }
    }
}

impl FieldLookup for Map<String, Value> {
    fn lookup(&self, key: &str) -> Option<&Value> {
        if let Some(value) = self.get(key) {
            return Some(value);
        }
        // snake_case attribute names also match PascalCase/camelCase keys
        let pascal = to_pascal_case(key);
        if pascal != key {
            if let Some(value) = self.get(&pascal) {
                return Some(value);
            }
        }
        let camel = lower_first(&pascal);
        if camel != key {
            return self.get(&camel);
        }
        None
    }
}

/// One resource returned by a provider
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Value,
    derived: Map<String, Value>,
}

impl Record {
    pub fn new(fields: Value) -> Self {
        Self {
            fields,
            derived: Map::new(),
        }
    }

    /// Raw provider fields
    pub fn fields(&self) -> &Value {
        &self.fields
    }

    /// Attach a locally derived field; derived fields shadow provider fields
    pub fn set_derived(&mut self, key: &str, value: Value) {
        self.derived.insert(key.to_string(), value);
    }

    /// Merge another object's keys into this record without overwriting
    pub fn merge_missing(&mut self, other: &Value) {
        if let (Value::Object(target), Value::Object(source)) = (&mut self.fields, other) {
            for (key, value) in source {
                target.entry(key.clone()).or_insert_with(|| value.clone());
            }
        }
    }
}

impl From<Value> for Record {
    fn from(fields: Value) -> Self {
        Record::new(fields)
    }
}

impl FieldLookup for Record {
    fn lookup(&self, key: &str) -> Option<&Value> {
        self.derived
            .get(key)
            .or_else(|| self.fields.lookup(key))
    }
}

/// Follow every segment of a dotted path; `None` when any segment is missing
pub fn resolve_field<'a, L>(record: &'a L, path: &str) -> Option<&'a Value>
where
    L: FieldLookup + ?Sized,
{
    let mut segments = path.split('.');
    let first = segments.next().filter(|s| !s.is_empty())?;
    let mut current = record.lookup(first)?;
    for segment in segments {
        current = current.lookup(segment)?;
    }
    Some(current)
}

/// Default display form of a resolved value
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Array(items)) => display_array(items),
        Some(other) => other.to_string(),
    }
}

fn display_array(items: &[Value]) -> String {
    if let Some(pairs) = as_tag_pairs(items) {
        return pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(", ");
    }
    if items.iter().all(|v| !v.is_object() && !v.is_array()) {
        return items
            .iter()
            .map(|v| display_value(Some(v)))
            .collect::<Vec<_>>()
            .join(", ");
    }
    Value::Array(items.to_vec()).to_string()
}

/// Interpret an array as a tag set of `{Key, Value}` objects
pub fn as_tag_pairs(items: &[Value]) -> Option<Vec<(String, String)>> {
    if items.is_empty() {
        return None;
    }
    items
        .iter()
        .map(|item| {
            let key = item.lookup("key")?.as_str()?;
            let value = item.lookup("value").map(|v| display_value(Some(v)));
            Some((key.to_string(), value.unwrap_or_default()))
        })
        .collect()
}

fn to_pascal_case(key: &str) -> String {
    key.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_nested_path() {
        let record = Record::new(json!({"Config": {"PrivateZone": true}}));
        assert_eq!(
            resolve_field(&record, "Config.PrivateZone"),
            Some(&json!(true))
        );
    }

    #[test]
    fn test_resolve_missing_intermediate() {
        let record = Record::new(json!({"Config": {}}));
        assert_eq!(resolve_field(&record, "Config.PrivateZone"), None);
        assert_eq!(resolve_field(&record, "Missing.Deeper.Still"), None);
    }

    #[test]
    fn test_resolve_through_scalar_is_absent() {
        let record = Record::new(json!({"state": "running"}));
        assert_eq!(resolve_field(&record, "state.Name"), None);
    }

    #[test]
    fn test_resolve_empty_path() {
        let record = Record::new(json!({"id": "a"}));
        assert_eq!(resolve_field(&record, ""), None);
    }

    #[test]
    fn test_resolve_array_index() {
        let record = Record::new(json!({"Attachments": [{"InstanceId": "i-1"}]}));
        assert_eq!(
            resolve_field(&record, "Attachments.0.InstanceId"),
            Some(&json!("i-1"))
        );
        assert_eq!(resolve_field(&record, "Attachments.3.InstanceId"), None);
    }

    #[test]
    fn test_snake_case_matches_pascal_and_camel_keys() {
        let record = Record::new(json!({"LaunchTime": "2024-01-01", "storedBytes": 10}));
        assert_eq!(
            resolve_field(&record, "launch_time"),
            Some(&json!("2024-01-01"))
        );
        assert_eq!(resolve_field(&record, "stored_bytes"), Some(&json!(10)));
    }

    #[test]
    fn test_exact_key_wins_over_alternate_spelling() {
        let record = Record::new(json!({"state": "a", "State": "b"}));
        assert_eq!(resolve_field(&record, "state"), Some(&json!("a")));
    }

    #[test]
    fn test_derived_fields_shadow_provider_fields() {
        let mut record = Record::new(json!({"name": "raw"}));
        record.set_derived("name", json!("derived"));
        assert_eq!(resolve_field(&record, "name"), Some(&json!("derived")));
    }

    #[test]
    fn test_resolve_on_plain_value() {
        let value = json!({"a": {"b": 1}});
        assert_eq!(resolve_field(&value, "a.b"), Some(&json!(1)));
    }

    #[test]
    fn test_merge_missing_keeps_existing() {
        let mut record = Record::new(json!({"a": 1}));
        record.merge_missing(&json!({"a": 2, "b": 3}));
        assert_eq!(record.fields(), &json!({"a": 1, "b": 3}));
    }

    #[test]
    fn test_display_scalars() {
        assert_eq!(display_value(None), "");
        assert_eq!(display_value(Some(&Value::Null)), "");
        assert_eq!(display_value(Some(&json!("x"))), "x");
        assert_eq!(display_value(Some(&json!(42))), "42");
        assert_eq!(display_value(Some(&json!(false))), "false");
    }

    #[test]
    fn test_display_tag_set() {
        let tags = json!([{"Key": "Name", "Value": "web"}, {"Key": "Env", "Value": "prod"}]);
        assert_eq!(display_value(Some(&tags)), "Name=web, Env=prod");
    }

    #[test]
    fn test_display_scalar_list() {
        assert_eq!(display_value(Some(&json!(["a", 1, true]))), "a, 1, true");
    }

    #[test]
    fn test_display_object_as_json() {
        assert_eq!(display_value(Some(&json!({"Name": "x"}))), r#"{"Name":"x"}"#);
    }
}
