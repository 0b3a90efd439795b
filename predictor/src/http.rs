//! A minimal HTTP/1.1 layer over async streams.
//!
//! Only what the prediction route needs: a request parser driven by
//! `Content-Length` framing and a JSON response writer.

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Largest request body accepted, in bytes.
const MAX_BODY_SIZE: usize = 64 * 1024;

/// A parsed HTTP request.
#[derive(Debug)]
pub struct Request {
    pub method: String,
    pub target: String,
    pub body: Vec<u8>,
}

fn malformed_request_line<T>(line: &str) -> io::Result<T> {
    Err(io::Error::new(
        io::ErrorKind::InvalidData,
        format!("malformed request line {:?}", line.trim_end()),
    ))
}

fn body_too_large<T>(len: usize) -> io::Result<T> {
    Err(io::Error::new(
        io::ErrorKind::InvalidData,
        format!("request body of {len} bytes exceeds the {MAX_BODY_SIZE} byte limit"),
    ))
}

fn eof_mid_request<T>() -> io::Result<T> {
    Err(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        "connection closed mid-request",
    ))
}

/// Reads and parses the next request from `rx`.
///
/// # Arguments
/// * `rx` - The underlying buffered reader.
///
/// # Returns
/// `Ok(None)` when the peer closed the connection before sending a
/// request line, `Ok(Some(request))` otherwise. Malformed framing is an
/// `InvalidData` error.
pub async fn read_request<R>(rx: &mut R) -> io::Result<Option<Request>>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    if rx.read_line(&mut line).await? == 0 {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let (Some(method), Some(target), Some(version)) = (parts.next(), parts.next(), parts.next())
    else {
        return malformed_request_line(&line);
    };

    if !version.starts_with("HTTP/1.") {
        return malformed_request_line(&line);
    }

    let method = method.to_string();
    let target = target.to_string();

    let mut content_length = 0;
    loop {
        let mut header = String::new();
        if rx.read_line(&mut header).await? == 0 {
            return eof_mid_request();
        }

        let header = header.trim_end();
        if header.is_empty() {
            break;
        }

        if let Some((name, value)) = header.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value
                    .trim()
                    .parse()
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            }
        }
    }

    if content_length > MAX_BODY_SIZE {
        return body_too_large(content_length);
    }

    let mut body = vec![0; content_length];
    rx.read_exact(&mut body).await?;

    Ok(Some(Request {
        method,
        target,
        body,
    }))
}

/// Response status codes the service emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    BadRequest,
    NotFound,
    InternalError,
}

impl Status {
    fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::BadRequest => 400,
            Status::NotFound => 404,
            Status::InternalError => 500,
        }
    }

    fn reason(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::BadRequest => "Bad Request",
            Status::NotFound => "Not Found",
            Status::InternalError => "Internal Server Error",
        }
    }
}

/// An HTTP response carrying a JSON body.
#[derive(Debug)]
pub struct Response {
    status: Status,
    body: Vec<u8>,
}

impl Response {
    /// Creates a response from any serializable body.
    pub fn json<T: serde::Serialize>(status: Status, body: &T) -> Self {
        // SAFETY: Serialize impls used here are derived and not implemented
        //         by hand. Nor have a non string-key map inside.
        let body = serde_json::to_vec(body).unwrap();
        Self { status, body }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Writes the response through `tx`.
    ///
    /// # Arguments
    /// * `tx` - The underlying writer.
    ///
    /// # Returns
    /// A result object that returns `io::Error` on failure.
    pub async fn write_to<W>(&self, tx: &mut W) -> io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let head = format!(
            "HTTP/1.1 {} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\n\r\n",
            self.status.code(),
            self.status.reason(),
            self.body.len(),
        );

        tx.write_all(head.as_bytes()).await?;
        tx.write_all(&self.body).await?;
        tx.flush().await
    }
}
