//! Schema acquisition.
//!
//! The schema document is fetched once, before generation begins. Any
//! failure here aborts the run before the output directory is touched.
//!
//! Supported addresses:
//!
//! - `http://...` / `https://...`
//! - `unix:<socket>[:<request path>]`, an HTTP GET over a Unix domain socket
//!   (request path defaults to [`DEFAULT_SOCKET_REQUEST_PATH`])
//! - `file:<path>` or a bare path

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use restgen_define::Schema;
use tracing::{debug, info};

use crate::errors::GeneratorError;

/// Default schema address used by the CLI.
pub const DEFAULT_SCHEMA_URL: &str = "http://localhost:8080/static/schema.json";

/// Request path used for `unix:` sources that do not name one.
pub const DEFAULT_SOCKET_REQUEST_PATH: &str = "/static/schema.json";

/// Where to read the schema document from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    Http(String),
    Unix { socket: PathBuf, path: String },
    File(PathBuf),
}

impl FromStr for SchemaSource {
    type Err = GeneratorError;

    fn from_str(address: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| GeneratorError::InvalidSource {
            address: address.to_string(),
            reason: reason.to_string(),
        };

        if address.trim().is_empty() {
            return Err(invalid("address is empty"));
        }

        if address.starts_with("http://") || address.starts_with("https://") {
            return Ok(SchemaSource::Http(address.to_string()));
        }

        if let Some(rest) = address.strip_prefix("unix:") {
            let (socket, path) = match rest.split_once(':') {
                Some((socket, path)) if !path.is_empty() => (socket, path.to_string()),
                Some((socket, _)) => (socket, DEFAULT_SOCKET_REQUEST_PATH.to_string()),
                None => (rest, DEFAULT_SOCKET_REQUEST_PATH.to_string()),
            };
            if socket.is_empty() {
                return Err(invalid("missing socket path"));
            }
            let path = if path.starts_with('/') {
                path
            } else {
                format!("/{path}")
            };
            return Ok(SchemaSource::Unix {
                socket: PathBuf::from(socket),
                path,
            });
        }

        let file = address.strip_prefix("file:").unwrap_or(address);
        if file.is_empty() {
            return Err(invalid("missing file path"));
        }
        Ok(SchemaSource::File(PathBuf::from(file)))
    }
}

impl fmt::Display for SchemaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaSource::Http(url) => write!(f, "{url}"),
            SchemaSource::Unix { socket, path } => write!(f, "unix:{}:{path}", socket.display()),
            SchemaSource::File(path) => write!(f, "file:{}", path.display()),
        }
    }
}

/// Parses a schema document.
pub fn parse_schema(body: &[u8]) -> Result<Schema, GeneratorError> {
    Ok(serde_json::from_slice(body)?)
}

/// Fetches and parses the schema document.
///
/// ## Errors
///
/// - [`GeneratorError::Fetch`] on transport failure, a non-success status,
///   or an unreadable file.
/// - [`GeneratorError::Parse`] if the body is not a valid schema document.
pub async fn fetch_schema(source: &SchemaSource) -> Result<Schema, GeneratorError> {
    info!(source = %source, "Fetching schema");

    let body = match source {
        SchemaSource::Http(url) => fetch_http(url).await?,
        SchemaSource::Unix { socket, path } => fetch_unix(source, socket, path).await?,
        SchemaSource::File(path) => {
            tokio::fs::read(path)
                .await
                .map_err(|e| fetch_error(source, e))?
        }
    };
    debug!(bytes = body.len(), "Schema document received");

    let schema = parse_schema(&body)?;
    info!(models = schema.models.len(), "Schema loaded");
    Ok(schema)
}

fn fetch_error(source: &SchemaSource, reason: impl fmt::Display) -> GeneratorError {
    GeneratorError::Fetch {
        address: source.to_string(),
        reason: reason.to_string(),
    }
}

async fn fetch_http(url: &str) -> Result<Vec<u8>, GeneratorError> {
    let error = |reason: String| GeneratorError::Fetch {
        address: url.to_string(),
        reason,
    };

    let response = reqwest::get(url).await.map_err(|e| error(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(error(format!("server responded with {status}")));
    }

    let body = response.bytes().await.map_err(|e| error(e.to_string()))?;
    Ok(body.to_vec())
}

#[cfg(unix)]
async fn fetch_unix(
    source: &SchemaSource,
    socket: &std::path::Path,
    path: &str,
) -> Result<Vec<u8>, GeneratorError> {
    use http_body_util::{BodyExt, Empty};
    use hyper::body::Bytes;
    use hyper::{Request, header};
    use hyper_util::rt::TokioIo;
    use tokio::net::UnixStream;

    let stream = UnixStream::connect(socket)
        .await
        .map_err(|e| fetch_error(source, e))?;

    let (mut sender, connection) = hyper::client::conn::http1::handshake(TokioIo::new(stream))
        .await
        .map_err(|e| fetch_error(source, e))?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            debug!(error = %e, "Unix socket connection ended with error");
        }
    });

    let request = Request::get(path)
        .header(header::HOST, "localhost")
        .header(header::ACCEPT, "application/json")
        .body(Empty::<Bytes>::new())
        .map_err(|e| fetch_error(source, e))?;

    let response = sender
        .send_request(request)
        .await
        .map_err(|e| fetch_error(source, e))?;
    let status = response.status();
    if !status.is_success() {
        return Err(fetch_error(source, format!("server responded with {status}")));
    }

    let body = response
        .into_body()
        .collect()
        .await
        .map_err(|e| fetch_error(source, e))?
        .to_bytes();
    Ok(body.to_vec())
}

#[cfg(not(unix))]
async fn fetch_unix(
    source: &SchemaSource,
    _socket: &std::path::Path,
    _path: &str,
) -> Result<Vec<u8>, GeneratorError> {
    Err(fetch_error(source, "unix sockets are not supported on this platform"))
}
