//! The decoder's status taxonomy.
//!
//! Unlike most Rust HTTP stacks, there's no `Result<T, E>` in the hot
//! decode path: a malformed request is an ordinary outcome, not an
//! exception, so the "error type" here is just the return value every
//! handler and listener hook produces.

use core::fmt;

/// Result of a single decoding step, or of a whole `decode` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Internal sentinel: the handler changed state and wants the driver
    /// to invoke the new state immediately on the remaining input. Never
    /// returned from `Decoder::decode` or from a `Listener` hook.
    Continue,
    /// The current handler needs more bytes than are currently available
    /// in the buffer to make progress.
    NeedMoreInput,
    /// Decoding has reached a resting point: either the request was
    /// fully and successfully decoded (`HttpStatus::Ok`), or a
    /// malformation was detected.
    Http(HttpStatus),
}

impl Status {
    /// Used by `SetDecodeFunctionAfterListenerCall`'s Rust counterpart,
    /// `Decoder::after_listener`: a listener returning `Continue` means
    /// "proceed as planned"; anything else short-circuits decoding.
    pub fn is_continue(self) -> bool {
        matches!(self, Status::Continue)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Http(_))
    }
}

impl From<HttpStatus> for Status {
    fn from(status: HttpStatus) -> Self {
        Status::Http(status)
    }
}

/// HTTP response status codes this decoder can terminate with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpStatus {
    /// 200 — the request was fully and validly decoded.
    Ok,
    /// 400 — malformed syntax: invalid characters, missing separators,
    /// bad line terminators, duplicate parameters, unparseable integer
    /// parameters, truncated body.
    BadRequest,
    /// 404 — path grammatically valid but names an unknown device type,
    /// device method, or resource.
    NotFound,
    /// 405 — method not allowed for the matched path (e.g. PUT on
    /// `/setup` or `/management/...`).
    MethodNotAllowed,
    /// 406 — reserved; emitted only via listener override.
    NotAcceptable,
    /// 411 — PUT without Content-Length.
    LengthRequired,
    /// 413 — Content-Length exceeds the decoder's maximum, or the body
    /// exceeds its declared length.
    PayloadTooLarge,
    /// 415 — Content-Type on PUT is not
    /// `application/x-www-form-urlencoded`.
    UnsupportedMediaType,
    /// 431 — a token exceeded the caller's buffer capacity.
    HeaderFieldsTooLarge,
    /// 500 — missing reset, listener returned `NeedMoreInput`, or an
    /// internal invariant was violated.
    InternalServerError,
    /// 501 — unsupported HTTP method name.
    NotImplemented,
    /// 505 — HTTP version is not exactly `HTTP/1.1`.
    VersionNotSupported,
}

impl HttpStatus {
    pub fn code(self) -> u16 {
        match self {
            HttpStatus::Ok => 200,
            HttpStatus::BadRequest => 400,
            HttpStatus::NotFound => 404,
            HttpStatus::MethodNotAllowed => 405,
            HttpStatus::NotAcceptable => 406,
            HttpStatus::LengthRequired => 411,
            HttpStatus::PayloadTooLarge => 413,
            HttpStatus::UnsupportedMediaType => 415,
            HttpStatus::HeaderFieldsTooLarge => 431,
            HttpStatus::InternalServerError => 500,
            HttpStatus::NotImplemented => 501,
            HttpStatus::VersionNotSupported => 505,
        }
    }

    pub fn reason(self) -> &'static str {
        match self {
            HttpStatus::Ok => "OK",
            HttpStatus::BadRequest => "Bad Request",
            HttpStatus::NotFound => "Not Found",
            HttpStatus::MethodNotAllowed => "Method Not Allowed",
            HttpStatus::NotAcceptable => "Not Acceptable",
            HttpStatus::LengthRequired => "Length Required",
            HttpStatus::PayloadTooLarge => "Payload Too Large",
            HttpStatus::UnsupportedMediaType => "Unsupported Media Type",
            HttpStatus::HeaderFieldsTooLarge => "Request Header Fields Too Large",
            HttpStatus::InternalServerError => "Internal Server Error",
            HttpStatus::NotImplemented => "Not Implemented",
            HttpStatus::VersionNotSupported => "HTTP Version Not Supported",
        }
    }
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}
