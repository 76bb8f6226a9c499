use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::response::{Body, Response};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Size of the chunks a body is copied in.
pub const CHUNK_SIZE: usize = 1024;

/// Serializes the status line and headers, blank line included.
///
/// The length is sent as `Content-Size`, and only when it is known and
/// non-zero.
pub fn serialize_head(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers
    buf.extend_from_slice(format!("Content-Type: {}\r\n", resp.mime_type).as_bytes());

    if let Some(len) = resp.body_length.filter(|len| *len > 0) {
        buf.extend_from_slice(format!("Content-Size: {}\r\n", len).as_bytes());
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

pub struct ResponseWriter {
    head: Vec<u8>,
    written: usize,
    body: Body,
}

impl ResponseWriter {
    pub fn new(response: Response) -> Self {
        Self {
            head: serialize_head(&response),
            written: 0,
            body: response.body,
        }
    }

    /// Writes the head, then streams the body in [`CHUNK_SIZE`] chunks.
    ///
    /// Failing to write the head is an error. Once the head is out, a failed
    /// body copy is only logged; the body is released either way.
    pub async fn write_to_stream<W>(mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.head.len() {
            let n = stream
                .write(&self.head[self.written..])
                .await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        let copied = match self.body {
            Body::Empty => Ok(0),
            Body::Bytes(bytes) => copy_chunks(&mut &bytes[..], stream).await,
            Body::File(mut file) => copy_chunks(&mut file, stream).await,
        };

        match copied {
            Ok(n) => tracing::debug!(bytes = n, "Body written"),
            Err(e) => tracing::error!(error = %e, "Failed to write response body"),
        }

        if let Err(e) = stream.flush().await {
            tracing::error!(error = %e, "Failed to flush response");
        }

        Ok(())
    }
}

async fn copy_chunks<R, W>(src: &mut R, dst: &mut W) -> std::io::Result<u64>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = [0u8; CHUNK_SIZE];
    let mut total = 0;

    loop {
        let n = src.read(&mut buf).await?;
        if n == 0 {
            return Ok(total);
        }

        dst.write_all(&buf[..n]).await?;
        total += n as u64;
    }
}
