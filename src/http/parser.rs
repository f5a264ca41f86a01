use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::http::request::{Method, Request};

/// Prefix put in front of every request line echoed to the log.
pub const ECHO_PREFIX: &str = "> ";

/// Upper bound on the bytes read for one header block.
pub const MAX_HEADER_BYTES: u64 = 64 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The request line did not split into method, path and version.
    #[error("malformed request line: {0:?}")]
    MalformedRequestLine(String),

    /// No blank line within the first `MAX_HEADER_BYTES` bytes.
    #[error("header block exceeds {0} bytes")]
    HeaderTooLarge(u64),

    /// Reading the header block failed.
    #[error("failed to read request: {0}")]
    Io(#[from] io::Error),
}

/// Reads one request header block from `reader`.
///
/// Lines are consumed up to and including the first empty line; request
/// bodies are never read. Each non-empty line is echoed to the log. Returns
/// `Ok(None)` when the peer closed the stream before sending anything.
pub async fn read_request<R>(reader: &mut R) -> Result<Option<Request>, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let mut limited = AsyncReadExt::take(&mut *reader, MAX_HEADER_BYTES);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut seen_bytes = false;

    loop {
        line.clear();
        let n = limited.read_line(&mut line).await?;
        if n == 0 {
            if limited.limit() == 0 {
                return Err(ParseError::HeaderTooLarge(MAX_HEADER_BYTES));
            }
            // EOF: whatever arrived so far is the whole header block
            break;
        }
        seen_bytes = true;

        let text = line.trim_end_matches(['\r', '\n']);
        if text.is_empty() {
            break;
        }

        tracing::info!("{ECHO_PREFIX}{text}");
        lines.push(text.to_string());
    }

    if !seen_bytes {
        return Ok(None);
    }

    parse_header_block(lines).map(Some)
}

/// Builds a [`Request`] from the lines of a header block, request line first.
pub fn parse_header_block(mut lines: Vec<String>) -> Result<Request, ParseError> {
    if lines.is_empty() {
        return Err(ParseError::MalformedRequestLine(String::new()));
    }

    let request_line = lines.remove(0);
    let (method, path, version) = parse_request_line(&request_line)?;

    Ok(Request {
        method,
        path,
        version,
        header_lines: lines,
    })
}

/// Splits a request line into exactly three tokens.
///
/// Every whitespace character is a separator on its own, so doubled or
/// leading separators produce empty tokens and fail the line. Empty tokens
/// at the end are dropped, which lets a single trailing space through.
pub fn parse_request_line(line: &str) -> Result<(Method, String, String), ParseError> {
    let mut parts: Vec<&str> = line.split(char::is_whitespace).collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }

    match parts.as_slice() {
        [method, path, version] => Ok((
            Method::from(*method),
            path.to_string(),
            version.to_string(),
        )),
        _ => Err(ParseError::MalformedRequestLine(line.to_string())),
    }
}
