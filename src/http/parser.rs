use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::http::error::HttpError;
use crate::http::request::{Request, RequestBuilder};

/// Longest request or header line accepted, terminator included.
pub const MAX_LINE_LENGTH: u64 = 8192;

/// Reads a request line and its headers from `reader`.
///
/// Stops right after the blank line ending the headers; a request body is
/// never read. Running out of input before that blank line is malformed.
pub async fn parse_request<R>(reader: &mut R) -> Result<Request, HttpError>
where
    R: AsyncBufRead + Unpin,
{
    // Request line
    let request_line = read_line(reader)
        .await?
        .ok_or(HttpError::MalformedRequest("stream ended before request line"))?;

    // Trailing spaces produce no tokens; leading or doubled ones still do
    let parts: Vec<&str> = strip_line_ending(&request_line)
        .trim_end_matches(' ')
        .split(' ')
        .collect();
    let [method, target, version] = parts.as_slice() else {
        return Err(HttpError::MalformedRequest("request line needs three parts"));
    };

    let mut builder = RequestBuilder::new()
        .method(method)
        .target(target)
        .version(version);

    // Headers
    loop {
        let line = read_line(reader)
            .await?
            .ok_or(HttpError::MalformedRequest("stream ended before end of headers"))?;
        let line = line.trim();

        if line.is_empty() {
            break;
        }

        let (key, value) = line
            .split_once(':')
            .ok_or(HttpError::MalformedRequest("header line without ':'"))?;

        builder = builder.header(key, value);
    }

    builder.build().map_err(HttpError::MalformedRequest)
}

/// Reads one line including its terminator. `None` means end of stream.
async fn read_line<R>(reader: &mut R) -> Result<Option<String>, HttpError>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    let n = (&mut *reader)
        .take(MAX_LINE_LENGTH)
        .read_line(&mut line)
        .await
        .map_err(|_| HttpError::MalformedRequest("unreadable request data"))?;

    if n == 0 {
        return Ok(None);
    }

    if n as u64 == MAX_LINE_LENGTH && !line.ends_with('\n') {
        return Err(HttpError::MalformedRequest("line too long"));
    }

    Ok(Some(line))
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}
