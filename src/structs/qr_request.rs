use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw field values decoded from a request body or query string.
#[derive(Debug, Default, Clone)]
pub struct FieldValues(HashMap<String, String>);

#[derive(Debug, thiserror::Error)]
#[error("Request body must be a JSON object")]
pub struct InvalidBody;

impl FieldValues {
    /// Decode a JSON object body. An empty body yields no fields.
    pub fn from_json(body: &[u8]) -> Result<Self, InvalidBody> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let object = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(object)) => object,
            _ => return Err(InvalidBody),
        };

        let values = object
            .into_iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s,
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    // null, arrays and objects count as absent
                    _ => return None,
                };
                Some((key, text))
            })
            .collect();

        Ok(Self(values))
    }

    pub fn from_query(query: HashMap<String, String>) -> Self {
        Self(query)
    }

    /// Present, non-empty value of a field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Value of a field, or the empty string when absent.
    pub fn get_or_empty(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_string()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewParams {
    pub image_data: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeResponse {
    pub qr_code_image_url: String, // Percent-encoded data URL
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}
