//! Serde model of one HAR entry
//!
//! Every field is optional on the wire. Absent, `null` and wrongly typed
//! fields take their defaults so a partially recorded entry still loads.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tokentrail_domain::{
    BodyEncoding, Header, HttpRequest, HttpResponse, ResponseBody, Transaction,
};

/// Deserialize a field, falling back to its default on `null` or a type mismatch
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// `{name, value}` header pair
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HarHeader {
    /// Header name
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    /// Header value
    #[serde(deserialize_with = "lenient")]
    pub value: String,
}

/// `entry.request`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HarRequest {
    /// HTTP method
    #[serde(deserialize_with = "lenient")]
    pub method: String,
    /// Full URL
    #[serde(deserialize_with = "lenient")]
    pub url: String,
    /// Protocol version
    #[serde(deserialize_with = "lenient")]
    pub http_version: Option<String>,
    /// Request headers
    #[serde(deserialize_with = "lenient")]
    pub headers: Vec<HarHeader>,
}

/// `entry.response.content`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HarContent {
    /// Body, possibly base64
    #[serde(deserialize_with = "lenient")]
    pub text: Option<String>,
    /// `base64` or absent
    #[serde(deserialize_with = "lenient")]
    pub encoding: Option<String>,
    /// Declared MIME type
    #[serde(deserialize_with = "lenient")]
    pub mime_type: Option<String>,
}

/// `entry.response`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HarResponse {
    /// Status code
    #[serde(deserialize_with = "lenient")]
    pub status: i64,
    /// Protocol version
    #[serde(deserialize_with = "lenient")]
    pub http_version: Option<String>,
    /// Response headers
    #[serde(deserialize_with = "lenient")]
    pub headers: Vec<HarHeader>,
    /// Body content
    #[serde(deserialize_with = "lenient")]
    pub content: HarContent,
}

/// One `log.entries[]` element
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HarEntry {
    /// Request half
    #[serde(deserialize_with = "lenient")]
    pub request: HarRequest,
    /// Response half
    #[serde(deserialize_with = "lenient")]
    pub response: HarResponse,
}

fn headers(raw: Vec<HarHeader>) -> Vec<Header> {
    raw.into_iter().map(|h| Header::new(h.name, h.value)).collect()
}

impl HarEntry {
    /// Convert into a domain transaction, decoding the body
    pub fn into_transaction(self) -> Transaction {
        let request = HttpRequest {
            method: self.request.method,
            url: self.request.url,
            http_version: self.request.http_version,
            headers: headers(self.request.headers),
        };

        let content = self.response.content;
        let body = ResponseBody::new(
            content.text,
            BodyEncoding::from_tag(content.encoding.as_deref()),
            content.mime_type,
        );

        let response = HttpResponse {
            status: self.response.status,
            http_version: self.response.http_version,
            headers: headers(self.response.headers),
            body,
        };

        Transaction::new(request, response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_entry_uses_defaults() {
        let entry: HarEntry = serde_json::from_str("{}").unwrap();
        let tx = entry.into_transaction();
        assert_eq!(tx.request().method, "");
        assert_eq!(tx.response().status, 0);
        assert!(tx.body_text().is_none());
    }

    #[test]
    fn test_null_and_mistyped_fields_use_defaults() {
        let entry: HarEntry = serde_json::from_str(
            r#"{
                "request": {"method": null, "url": "https://a.example/x", "headers": null},
                "response": {"status": "200", "headers": "none", "content": {"text": "body", "mimeType": 7}}
            }"#,
        )
        .unwrap();
        let tx = entry.into_transaction();
        assert_eq!(tx.request().method, "");
        assert!(tx.request().headers.is_empty());
        assert_eq!(tx.response().status, 0);
        assert!(tx.response().headers.is_empty());
        assert_eq!(tx.response().body.mime_type(), None);
        assert_eq!(tx.body_text(), Some("body"));
    }

    #[test]
    fn test_full_entry() {
        let entry: HarEntry = serde_json::from_str(
            r#"{
                "request": {
                    "method": "POST",
                    "url": "https://a.example/api/login",
                    "httpVersion": "HTTP/1.1",
                    "headers": [{"name": "Cookie", "value": "sid=1"}]
                },
                "response": {
                    "status": 201,
                    "headers": [{"name": "Content-Type", "value": "application/json"}],
                    "content": {"text": "{\"ok\": true}", "mimeType": "application/json"}
                }
            }"#,
        )
        .unwrap();
        let tx = entry.into_transaction();
        assert_eq!(tx.request().method, "POST");
        assert_eq!(tx.request().header("cookie"), Some("sid=1"));
        assert_eq!(tx.response().status, 201);
        assert_eq!(tx.response().body.mime_type(), Some("application/json"));
        assert_eq!(tx.body_text(), Some("{\"ok\": true}"));
        assert_eq!(tx.top_line(), "POST https://a.example/api/login HTTP/1.1");
    }
}
