// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Minimal HTTP/1.1 client for the agent's Unix socket API.
//!
//! Only `GET` is needed. Response bodies are framed by `Content-Length`,
//! `Transfer-Encoding: chunked`, or connection close, in that order of
//! preference.

use std::path::Path;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::UnixStream;

use crate::error::ClientError;

/// Upper bound on a single response body.
const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// `GET path` over the socket, bounded by `timeout` for the whole exchange.
pub async fn get(socket_path: &Path, path: &str, timeout: Duration) -> Result<String, ClientError> {
    let request = format!(
        "GET {} HTTP/1.1\r\nHost: localhost\r\nAccept: application/json\r\nConnection: close\r\n\r\n",
        path
    );
    tokio::time::timeout(timeout, send_request(socket_path, &request))
        .await
        .map_err(|_| ClientError::Timeout(timeout))?
}

async fn send_request(socket_path: &Path, request: &str) -> Result<String, ClientError> {
    let mut stream = UnixStream::connect(socket_path)
        .await
        .map_err(|source| ClientError::Connect { path: socket_path.to_path_buf(), source })?;
    stream.write_all(request.as_bytes()).await?;

    let mut reader = BufReader::new(&mut stream);
    read_http_response(&mut reader).await
}

/// Read and parse an HTTP/1.1 response, returning the body.
///
/// Status codes of 400 and above become [`ClientError::Http`].
pub(crate) async fn read_http_response<R: AsyncRead + Unpin>(
    reader: &mut BufReader<R>,
) -> Result<String, ClientError> {
    let mut status_line = String::new();
    reader.read_line(&mut status_line).await?;
    let status_code = status_line
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse::<u16>().ok())
        .ok_or_else(|| ClientError::Malformed(format!("bad status line {:?}", status_line)))?;

    // Headers (case-insensitive)
    let mut content_length: Option<usize> = None;
    let mut chunked = false;
    loop {
        let mut line = String::new();
        let n = reader.read_line(&mut line).await?;
        if n == 0 || line == "\r\n" || line == "\n" {
            break;
        }
        let line_lower = line.to_ascii_lowercase();
        if let Some(val) = line_lower.strip_prefix("content-length:") {
            let len = val
                .trim()
                .parse::<usize>()
                .map_err(|_| ClientError::Malformed(format!("bad content-length {:?}", val.trim())))?;
            content_length = Some(len);
        } else if let Some(val) = line_lower.strip_prefix("transfer-encoding:") {
            chunked = val.trim() == "chunked";
        }
    }

    let body = if chunked {
        read_chunked(reader).await?
    } else if let Some(len) = content_length {
        if len > MAX_BODY_BYTES {
            return Err(ClientError::Malformed(format!("body of {} bytes is too large", len)));
        }
        let mut buf = vec![0u8; len];
        reader.read_exact(&mut buf).await?;
        buf
    } else {
        let mut buf = Vec::new();
        (&mut *reader).take(MAX_BODY_BYTES as u64).read_to_end(&mut buf).await?;
        buf
    };
    let body = String::from_utf8_lossy(&body).into_owned();

    tracing::debug!(status = status_code, bytes = body.len(), "agent response");

    if status_code >= 400 {
        return Err(ClientError::Http { status: status_code, body: body.trim().to_string() });
    }
    Ok(body)
}

async fn read_chunked<R: AsyncRead + Unpin>(
    reader: &mut BufReader<R>,
) -> Result<Vec<u8>, ClientError> {
    let mut body = Vec::new();
    loop {
        let mut size_line = String::new();
        reader.read_line(&mut size_line).await?;
        // Chunk extensions follow a `;`
        let size_hex = size_line.split(';').next().unwrap_or_default().trim();
        let size = usize::from_str_radix(size_hex, 16)
            .map_err(|_| ClientError::Malformed(format!("bad chunk size {:?}", size_hex)))?;

        if size == 0 {
            // Skip trailers up to the terminating blank line
            loop {
                let mut line = String::new();
                let n = reader.read_line(&mut line).await?;
                if n == 0 || line == "\r\n" || line == "\n" {
                    break;
                }
            }
            return Ok(body);
        }
        let start = body.len();
        let end = start
            .checked_add(size)
            .filter(|n| *n <= MAX_BODY_BYTES)
            .ok_or_else(|| ClientError::Malformed("chunked body too large".to_string()))?;
        body.resize(end, 0);
        reader.read_exact(&mut body[start..]).await?;

        let mut crlf = String::new();
        reader.read_line(&mut crlf).await?;
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
