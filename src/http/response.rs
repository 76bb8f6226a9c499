use std::io;
use std::path::Path;

use bytes::Bytes;
use tokio::fs::File;

use crate::http::mime;

/// HTTP status codes supported by the server.
///
/// - `Ok` (200): Request successful
/// - `BadRequest` (400): Malformed request
/// - `Forbidden` (403): Path rejected
/// - `NotFound` (404): Resource not found
/// - `InternalServerError` (500): Server error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use docserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::Forbidden.as_u16(), 403);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use docserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// The byte source of a response.
///
/// Owned by the [`Response`] until the writer drains it. Dropping a `File`
/// body closes the underlying handle.
#[derive(Debug, Default)]
pub enum Body {
    #[default]
    Empty,
    Bytes(Bytes),
    File(File),
}

/// A response on its way to the client.
///
/// Every `set_*_body` call replaces the previous body along with its length
/// and MIME type.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    /// Sent as `Content-Type`
    pub mime_type: String,
    pub body: Body,
    /// Byte length of `body`, `None` when unknown
    pub body_length: Option<u64>,
}

impl Default for Response {
    fn default() -> Self {
        Self {
            status: StatusCode::Ok,
            mime_type: "text/html".to_string(),
            body: Body::Empty,
            body_length: None,
        }
    }
}

impl Response {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// Sets a plain text body.
    pub fn set_text_body(&mut self, text: impl Into<String>) {
        let text = Bytes::from(text.into());
        self.body_length = Some(text.len() as u64);
        self.body = Body::Bytes(text);
        self.mime_type = "text/plain".to_string();
    }

    /// Sets a raw body of the given length.
    pub fn set_bytes_body(&mut self, bytes: impl Into<Bytes>) {
        let bytes = bytes.into();
        self.body_length = Some(bytes.len() as u64);
        self.body = Body::Bytes(bytes);
        self.mime_type = mime::DEFAULT_MIME_TYPE.to_string();
    }

    /// Opens `path` and uses it as the body.
    ///
    /// The MIME type is inferred from the file name. Directories are
    /// reported as [`io::ErrorKind::NotFound`].
    pub async fn set_file_body(&mut self, path: &Path) -> io::Result<()> {
        let file = File::open(path).await?;
        let metadata = file.metadata().await?;

        if metadata.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is a directory", path.display()),
            ));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        self.mime_type = mime::from_file_name(&name).to_string();
        self.body_length = Some(metadata.len());
        self.body = Body::File(file);
        Ok(())
    }
}
