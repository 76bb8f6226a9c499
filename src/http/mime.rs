//! MIME type detection based on file extensions.

/// Returned for files without an extension or with an unknown one.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Looks up the MIME type for a file extension (without the dot).
///
/// Extensions are matched case-sensitively.
pub fn from_extension(ext: &str) -> Option<&'static str> {
    let mime = match ext {
        "html" | "htm" => "text/html",
        "txt" => "text/plain",
        "css" => "text/css",
        "js" => "text/javascript",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        _ => return None,
    };
    Some(mime)
}

/// Infers the MIME type from everything after the last `.` in a file name.
///
/// # Example
///
/// ```
/// # use docserve::http::mime;
/// assert_eq!(mime::from_file_name("index.html"), "text/html");
/// assert_eq!(mime::from_file_name("archive.bin"), "application/octet-stream");
/// ```
pub fn from_file_name(name: &str) -> &'static str {
    name.rsplit_once('.')
        .and_then(|(_, ext)| from_extension(ext))
        .unwrap_or(DEFAULT_MIME_TYPE)
}
