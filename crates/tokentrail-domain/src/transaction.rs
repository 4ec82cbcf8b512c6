//! Transaction module - one captured HTTP exchange

use crate::body::ResponseBody;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a transaction in its corpus (capture order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(usize);

impl TransactionId {
    /// Create an id from a corpus index
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Corpus index of this transaction
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One header line; names are not guaranteed unique
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Header name as captured
    pub name: String,
    /// Header value as captured
    pub value: String,
}

impl Header {
    /// Create a header
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The request half of a transaction
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HttpRequest {
    /// HTTP method
    pub method: String,

    /// Full request URL
    pub url: String,

    /// Protocol version, when the capture recorded one
    pub http_version: Option<String>,

    /// Request headers in capture order
    pub headers: Vec<Header>,
}

impl HttpRequest {
    /// Create a request with no headers
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            http_version: None,
            headers: Vec::new(),
        }
    }

    /// URL path, or the empty string when the URL does not parse
    pub fn path(&self) -> String {
        url::Url::parse(&self.url)
            .map(|u| u.path().to_string())
            .unwrap_or_default()
    }

    /// URL host, when the URL parses and has one
    pub fn host(&self) -> Option<String> {
        url::Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
    }

    /// First value of a header, matched case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }
}

/// The response half of a transaction
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HttpResponse {
    /// Status code (0 when the capture had none)
    pub status: i64,

    /// Protocol version, when the capture recorded one
    pub http_version: Option<String>,

    /// Response headers in capture order
    pub headers: Vec<Header>,

    /// Body with its decoded text
    pub body: ResponseBody,
}

impl HttpResponse {
    /// Create a response with the given status and body
    pub fn new(status: i64, body: ResponseBody) -> Self {
        Self {
            status,
            http_version: None,
            headers: Vec::new(),
            body,
        }
    }
}

/// One captured HTTP exchange, immutable once it is part of a corpus
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub(crate) id: TransactionId,
    request: HttpRequest,
    response: HttpResponse,
}

impl Transaction {
    /// Create a transaction; its id is assigned when it joins a corpus
    pub fn new(request: HttpRequest, response: HttpResponse) -> Self {
        Self {
            id: TransactionId::new(0),
            request,
            response,
        }
    }

    /// Position in the owning corpus
    pub fn id(&self) -> TransactionId {
        self.id
    }

    /// Request half
    pub fn request(&self) -> &HttpRequest {
        &self.request
    }

    /// Response half
    pub fn response(&self) -> &HttpResponse {
        &self.response
    }

    /// Decoded response body text, if any
    pub fn body_text(&self) -> Option<&str> {
        self.response.body.decoded()
    }

    /// `METHOD URL VERSION`, taking the version from the request, then the
    /// response, then `HTTP/?`
    pub fn top_line(&self) -> String {
        let version = self
            .request
            .http_version
            .as_deref()
            .filter(|v| !v.is_empty())
            .or(self.response.http_version.as_deref().filter(|v| !v.is_empty()))
            .unwrap_or("HTTP/?");
        format!("{} {} {}", self.request.method, self.request.url, version)
    }
}
