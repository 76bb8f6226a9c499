//! Resource resolution
//!
//! Maps a parsed request onto a file below the document root and loads the
//! static error pages used when that fails.

use std::io;
use std::path::{Path, PathBuf};

use crate::config::StaticFilesConfig;
use crate::http::error::HttpError;
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};

/// Query string that makes the server echo the request back.
pub const SHOW_HEADERS_QUERY: &str = "header=show";

/// Served when the root path `/` is requested.
pub const INDEX_PATH: &str = "/index.html";

pub struct Resolver {
    document_root: PathBuf,
    error_pages: PathBuf,
}

impl Resolver {
    pub fn new(config: &StaticFilesConfig) -> Self {
        Self {
            document_root: config.document_root.clone(),
            error_pages: config.error_pages.clone(),
        }
    }

    /// Resolves a request to a response.
    ///
    /// The path is not checked for `..` here; callers must reject such
    /// paths before resolving.
    pub async fn resolve(&self, request: &Request) -> Result<Response, HttpError> {
        let mut response = Response::new(StatusCode::Ok);

        if request.query() == SHOW_HEADERS_QUERY {
            response.set_text_body(request.to_string());
            return Ok(response);
        }

        let path = match request.path() {
            "/" => INDEX_PATH,
            path => path,
        };

        response
            .set_file_body(&self.file_path(path))
            .await
            .map_err(|e| match e.kind() {
                // A path through a regular file or with an overlong component
                // names no existing file either
                io::ErrorKind::NotFound
                | io::ErrorKind::NotADirectory
                | io::ErrorKind::InvalidFilename => HttpError::ResourceNotFound,
                _ => HttpError::ResourceUnavailable(e),
            })?;

        Ok(response)
    }

    /// Loads `<code>.html` from the error page directory as a response
    /// carrying `status`.
    pub async fn error_page(&self, status: StatusCode) -> Result<Response, HttpError> {
        let mut response = Response::new(status);
        let page = self.error_pages.join(format!("{}.html", status.as_u16()));

        response
            .set_file_body(&page)
            .await
            .map_err(HttpError::ErrorPageUnavailable)?;

        Ok(response)
    }

    /// Joins a resource path onto the document root.
    pub fn file_path(&self, resource: &str) -> PathBuf {
        self.document_root
            .join(Path::new(resource.trim_start_matches('/')))
    }
}
