use serde::{Deserialize, Serialize};

/// A search hit as it is kept in storage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

impl SearchRecord {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            snippet: snippet.into(),
        }
    }
}

/// Value stored under a namespace/key pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum StoredValue {
    Text(String),
    TextList(Vec<String>),
    Records(Vec<SearchRecord>),
    /// Arbitrary structured data
    Json(serde_json::Value),
}

impl StoredValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn into_records(self) -> Option<Vec<SearchRecord>> {
        match self {
            Self::Records(records) => Some(records),
            _ => None,
        }
    }

    pub fn into_text_list(self) -> Option<Vec<String>> {
        match self {
            Self::TextList(items) => Some(items),
            _ => None,
        }
    }
}

impl From<String> for StoredValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for StoredValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<String>> for StoredValue {
    fn from(items: Vec<String>) -> Self {
        Self::TextList(items)
    }
}

impl From<Vec<SearchRecord>> for StoredValue {
    fn from(records: Vec<SearchRecord>) -> Self {
        Self::Records(records)
    }
}

impl From<serde_json::Value> for StoredValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_match_variant() {
        let value = StoredValue::from("query");
        assert_eq!(value.as_text(), Some("query"));
        assert!(value.clone().into_records().is_none());

        let value = StoredValue::from(vec!["a".to_string(), "b".to_string()]);
        assert!(value.as_text().is_none());
        assert_eq!(value.into_text_list().map(|items| items.len()), Some(2));
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let value = StoredValue::Records(vec![SearchRecord::new("T", "https://x", "S")]);
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["type"], "records");
        assert_eq!(json["value"][0]["title"], "T");
    }
}
