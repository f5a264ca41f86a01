use bytes::Bytes;

use crate::http::classify::Outcome;
use crate::http::loader::{DocumentRoot, LoadError};

/// HTTP status codes the server can answer with.
///
/// Reason phrases are the server's own, not the RFC defaults:
/// - `Ok` (200): "Document Follows"
/// - `NotFound` (404): "Not Found"
/// - `MethodNotAllowed` (405): "Method not allowed"
/// - `ImATeapot` (418): "I'm a teapot"
/// - `CoffeeUnavailable` (503): "Coffee is temporarily unavailable"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok,
    NotFound,
    MethodNotAllowed,
    ImATeapot,
    CoffeeUnavailable,
}

impl StatusCode {
    /// Statuses that have a page in the canned-page directory.
    pub const CANNED: [StatusCode; 4] = [
        StatusCode::NotFound,
        StatusCode::MethodNotAllowed,
        StatusCode::ImATeapot,
        StatusCode::CoffeeUnavailable,
    ];

    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use teapot::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::ImATeapot.as_u16(), 418);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::ImATeapot => 418,
            StatusCode::CoffeeUnavailable => 503,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "Document Follows",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method not allowed",
            StatusCode::ImATeapot => "I'm a teapot",
            StatusCode::CoffeeUnavailable => "Coffee is temporarily unavailable",
        }
    }
}

/// A response ready to be serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Protocol version echoed from the request
    pub version: String,
    pub status: StatusCode,
    /// Headers in the order they are sent
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// Nothing is added implicitly: a header appears on the wire only if it was
/// set here.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new("HTTP/1.0", StatusCode::NotFound)
///     .header("Content-Type", "text/html")
///     .body(page)
///     .build();
/// ```
pub struct ResponseBuilder {
    version: String,
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Bytes,
}

impl ResponseBuilder {
    pub fn new(version: impl Into<String>, status: StatusCode) -> Self {
        Self {
            version: version.into(),
            status,
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    /// Appends a header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Response {
        Response {
            version: self.version,
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Renders `outcome` into a response for a request that spoke `version`.
    ///
    /// Documents and canned pages are read through `docs`; a file that cannot
    /// be read at this point fails the whole response.
    pub async fn render(
        outcome: Outcome,
        version: &str,
        docs: &DocumentRoot,
    ) -> Result<Response, LoadError> {
        let response = match outcome {
            Outcome::Document { file, content_type } => {
                let body = docs.load(&file).await?;
                tracing::debug!(
                    file = %file.display(),
                    content_type,
                    bytes = body.len(),
                    "serving document"
                );
                ResponseBuilder::new(version, StatusCode::Ok)
                    .header("Content-Length", body.len().to_string())
                    .body(body)
                    .build()
            }
            Outcome::NotFound(path) => ResponseBuilder::new(version, StatusCode::NotFound)
                .header("Content-Type", "text/html")
                .body(not_found_page(&path))
                .build(),
            Outcome::Canned(status) => Self::canned(version, status, docs).await?,
            Outcome::MethodNotAllowed => {
                Self::canned(version, StatusCode::MethodNotAllowed, docs).await?
            }
        };

        Ok(response)
    }

    async fn canned(
        version: &str,
        status: StatusCode,
        docs: &DocumentRoot,
    ) -> Result<Response, LoadError> {
        let body = docs.load_canned(status).await?;
        Ok(ResponseBuilder::new(version, status)
            .header("Content-Type", "text/html")
            .body(body)
            .build())
    }

    /// `<version> <code> <reason>`
    pub fn status_line(&self) -> String {
        format!(
            "{} {} {}",
            self.version,
            self.status.as_u16(),
            self.status.reason_phrase()
        )
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Status line and headers for the log, body elided.
    pub fn summary(&self) -> String {
        let mut out = self.status_line();
        for (k, v) in &self.headers {
            out.push_str(&format!("\n{k}: {v}"));
        }
        out.push_str(&format!("\n<body not shown: {} bytes>", self.body.len()));
        out
    }
}

/// Error page for a path that does not exist. The path is inserted as-is,
/// without HTML escaping.
pub fn not_found_page(path: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><title>Page not found</title>\
         </head><body><h1>HTTP Error 404 Not Found</h1><h2>The file\
         <span style=\"color: red\"> {path} </span>does not exist on this server.</h2>\
         </body></html>\n"
    )
}
