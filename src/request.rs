//! The decoded request record, populated incrementally by the decoder
//! and inspected by the caller once a terminal status is reached.

use crate::api::{Api, ApiGroup};
use crate::device::{DeviceMethod, DeviceType};
use crate::method::HttpMethod;

/// Sentinel values written by [`Request::reset`], chosen to be
/// recognizably bogus so tests can detect a field the decoder failed to
/// overwrite. They carry no other meaning.
pub const RESET_DEVICE_NUMBER: u32 = 123_456_789;
pub const RESET_CLIENT_ID: u32 = 987_654_321;
pub const RESET_CLIENT_TRANSACTION_ID: u32 = 198_765_432;
pub const RESET_SERVER_TRANSACTION_ID: u32 = 543_212_345;

/// The decoded form of an ASCOM Alpaca HTTP request.
///
/// Populated field-by-field as the decoder recognizes each part of the
/// request; fully valid only once `Decoder::decode` has returned
/// `Status::Http(HttpStatus::Ok)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Request {
    pub http_method: HttpMethod,
    pub api_group: ApiGroup,
    pub api: Api,

    pub device_type: DeviceType,
    pub device_number: u32,
    pub device_method: DeviceMethod,

    pub client_id: u32,
    pub have_client_id: bool,
    pub client_transaction_id: u32,
    pub have_client_transaction_id: bool,

    /// Not set by the client; may be assigned by the caller before or
    /// after decoding. Not touched by `reset` beyond the sentinel.
    pub server_transaction_id: u32,

    // Typed Switch-device parameters.
    pub id: u32,
    pub have_id: bool,
    pub state: bool,
    pub have_state: bool,
    pub value: f32,
    pub have_value: bool,

    /// May be set by the caller before decoding to signal that the
    /// connection should be closed after the response is sent. Never
    /// cleared by the decoder, including by `reset`.
    pub do_close: bool,
}

impl Default for Request {
    fn default() -> Self {
        let mut request = Request {
            http_method: HttpMethod::Unknown,
            api_group: ApiGroup::Unknown,
            api: Api::Unknown,
            device_type: DeviceType::Unknown,
            device_number: RESET_DEVICE_NUMBER,
            device_method: DeviceMethod::Unknown,
            client_id: RESET_CLIENT_ID,
            have_client_id: false,
            client_transaction_id: RESET_CLIENT_TRANSACTION_ID,
            have_client_transaction_id: false,
            server_transaction_id: RESET_SERVER_TRANSACTION_ID,
            id: 0,
            have_id: false,
            state: false,
            have_state: false,
            value: 0.0,
            have_value: false,
            do_close: false,
        };
        request.reset();
        request
    }
}

impl Request {
    pub fn new() -> Self {
        Request::default()
    }

    /// Clears every field the decoder is responsible for populating,
    /// without touching `do_close`, which is owned by the caller.
    pub fn reset(&mut self) {
        self.http_method = HttpMethod::Unknown;
        self.api_group = ApiGroup::Unknown;
        self.api = Api::Unknown;
        self.device_type = DeviceType::Unknown;
        self.device_number = RESET_DEVICE_NUMBER;
        self.device_method = DeviceMethod::Unknown;
        self.client_id = RESET_CLIENT_ID;
        self.have_client_id = false;
        self.client_transaction_id = RESET_CLIENT_TRANSACTION_ID;
        self.have_client_transaction_id = false;
        self.id = 0;
        self.have_id = false;
        self.state = false;
        self.have_state = false;
        self.value = 0.0;
        self.have_value = false;
        // self.do_close is intentionally left untouched.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_restores_sentinels_but_leaves_do_close() {
        let mut request = Request::new();
        request.do_close = true;
        request.device_number = 7;
        request.have_client_id = true;
        request.client_id = 42;

        request.reset();

        assert_eq!(request.device_number, RESET_DEVICE_NUMBER);
        assert_eq!(request.client_id, RESET_CLIENT_ID);
        assert!(!request.have_client_id);
        assert!(request.do_close, "do_close must survive a reset");
    }

    #[test]
    fn two_resets_in_a_row_agree() {
        let mut a = Request::new();
        a.client_id = 1;
        a.have_client_id = true;
        a.reset();

        let b = Request::new();
        assert_eq!(a, b);
    }
}
