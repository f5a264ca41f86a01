//! Request classification.
//!
//! Maps a request to the kind of response it gets. Checks run in a fixed
//! order and the filesystem is consulted last, so the special coffee paths
//! win over real files with the same name.

use std::path::PathBuf;

use crate::http::mime;
use crate::http::request::Method;
use crate::http::response::StatusCode;

pub const COFFEE_PATH: &str = "/coffee";
pub const TEA_COFFEE_PATH: &str = "/tea/coffee";

/// What a request should be answered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An existing file under the document root
    Document {
        file: PathBuf,
        content_type: &'static str,
    },
    /// Nothing matched; carries the requested path for the error page
    NotFound(String),
    /// A fixed page served from the canned-page directory
    Canned(StatusCode),
    /// Any method other than GET
    MethodNotAllowed,
}

impl Outcome {
    pub fn status(&self) -> StatusCode {
        match self {
            Outcome::Document { .. } => StatusCode::Ok,
            Outcome::NotFound(_) => StatusCode::NotFound,
            Outcome::Canned(status) => *status,
            Outcome::MethodNotAllowed => StatusCode::MethodNotAllowed,
        }
    }
}

/// Classifies a request.
///
/// `resolve` maps the request path to a file under the document root, or
/// `None` if there is none. It is only called when no earlier rule matched.
pub fn classify<F>(method: &Method, path: &str, resolve: F) -> Outcome
where
    F: FnOnce(&str) -> Option<PathBuf>,
{
    if *method != Method::GET {
        return Outcome::MethodNotAllowed;
    }

    match path {
        COFFEE_PATH => Outcome::Canned(StatusCode::ImATeapot),
        TEA_COFFEE_PATH => Outcome::Canned(StatusCode::CoffeeUnavailable),
        _ => match resolve(path) {
            Some(file) => {
                let content_type = mime::content_type_for(&file);
                Outcome::Document { file, content_type }
            }
            None => Outcome::NotFound(path.to_string()),
        },
    }
}
