use serde::{Deserialize, Deserializer, Serialize};

/// Response envelope returned by every backend read endpoint.
/// `data` may be missing when `success` is false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        ApiResponse { success: true, data: Some(data) }
    }

    pub fn unsuccessful() -> Self {
        ApiResponse { success: false, data: None }
    }

    /// The payload, only when the backend reported success.
    pub fn into_payload(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}

/// List payload wrapper (`{ "items": [...] }`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemList<T> {
    pub items: Vec<T>,
}

impl<T> From<Vec<T>> for ItemList<T> {
    fn from(items: Vec<T>) -> Self {
        ItemList { items }
    }
}

/// Backend ids show up as strings or numbers depending on the store.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Int(n) => n.to_string(),
    })
}

/// Optional variant of [`string_or_number`].
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
    }

    Ok(Option::<Id>::deserialize(deserializer)?.map(|id| match id {
        Id::Text(s) => s,
        Id::Int(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_data_on_failure_is_accepted() {
        let resp: ApiResponse<ItemList<u8>> =
            serde_json::from_str(r#"{"success":false}"#).expect("parse");
        assert!(!resp.success);
        assert!(resp.into_payload().is_none());
    }

    #[test]
    fn payload_ignored_when_not_successful() {
        let resp: ApiResponse<ItemList<u8>> =
            serde_json::from_str(r#"{"success":false,"data":{"items":[1,2]}}"#).expect("parse");
        assert!(resp.into_payload().is_none());
    }
}
