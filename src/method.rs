//! HTTP request methods recognized by the decoder.

use crate::token;

/// The HTTP methods the decoder recognizes. Alpaca only needs these
/// three; anything else is `Unknown` and fails with `NotImplemented`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Unknown,
    Get,
    Put,
    Head,
}

impl Default for HttpMethod {
    fn default() -> Self {
        HttpMethod::Unknown
    }
}

const TABLE: &[(&[u8], HttpMethod)] = &[
    (b"GET", HttpMethod::Get),
    (b"PUT", HttpMethod::Put),
    (b"HEAD", HttpMethod::Head),
];

/// Matches `name` (case-sensitively — HTTP method names are always
/// upper-case) against the recognized method table.
pub fn match_method(name: &[u8]) -> HttpMethod {
    token::match_exact(name, TABLE, HttpMethod::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_the_three_supported_methods() {
        assert_eq!(match_method(b"GET"), HttpMethod::Get);
        assert_eq!(match_method(b"PUT"), HttpMethod::Put);
        assert_eq!(match_method(b"HEAD"), HttpMethod::Head);
    }

    #[test]
    fn rejects_unsupported_or_miscased_methods() {
        assert_eq!(match_method(b"POST"), HttpMethod::Unknown);
        assert_eq!(match_method(b"get"), HttpMethod::Unknown);
    }
}
