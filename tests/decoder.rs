//! End-to-end decode scenarios, fed to the decoder one call per input.

use alpaca_decoder::decoder::Decoder;
use alpaca_decoder::device::{DeviceMethod, DeviceType};
use alpaca_decoder::method::HttpMethod;
use alpaca_decoder::status::HttpStatus;
use alpaca_decoder::{ByteView, Status};
use matches::assert_matches;

fn decode(input: &[u8]) -> (Status, Decoder) {
    let mut decoder = Decoder::without_listener();
    decoder.reset();
    let mut view = ByteView::new(input);
    let status = decoder.decode(&mut view, false, true);
    (status, decoder)
}

#[test]
fn root_get_reports_server_status() {
    let (status, decoder) = decode(b"GET / HTTP/1.1\r\n\r\n");
    assert_matches!(status, Status::Http(HttpStatus::Ok));
    let request = decoder.request();
    assert_eq!(request.http_method, HttpMethod::Get);
    assert!(!request.have_client_id);
    assert!(!request.have_client_transaction_id);
}

#[test]
fn safetymonitor_issafe_get() {
    let (status, decoder) = decode(b"GET /api/v1/safetymonitor/0/issafe HTTP/1.1\r\n\r\n");
    assert_matches!(status, Status::Http(HttpStatus::Ok));
    let request = decoder.request();
    assert_eq!(request.http_method, HttpMethod::Get);
    assert_eq!(request.device_type, DeviceType::SafetyMonitor);
    assert_eq!(request.device_number, 0);
    assert_eq!(request.device_method, DeviceMethod::IsSafe);
}

#[test]
fn observingconditions_refresh_put_with_query_params_and_no_body() {
    let (status, decoder) = decode(
        b"PUT /api/v1/observingconditions/0/refresh?ClientID=123&clienttransactionid=432 HTTP/1.1\r\nContent-Length: 0\r\n\r\n",
    );
    assert_matches!(status, Status::Http(HttpStatus::Ok));
    let request = decoder.request();
    assert_eq!(request.http_method, HttpMethod::Put);
    assert_eq!(request.device_type, DeviceType::ObservingConditions);
    assert_eq!(request.device_number, 0);
    assert_eq!(request.device_method, DeviceMethod::Refresh);
    assert!(request.have_client_id);
    assert_eq!(request.client_id, 123);
    assert!(request.have_client_transaction_id);
    assert_eq!(request.client_transaction_id, 432);
}

#[test]
fn switch_setswitchvalue_put_with_body_params() {
    let (status, decoder) = decode(
        b"PUT /api/v1/switch/0/setswitchvalue HTTP/1.1\r\ncontent-TYPE:application/x-www-form-urlencoded\r\nContent-Length:51\r\n\r\nvalue=0.99999&id=0&clienttransactionid=9&clientid=7",
    );
    assert_matches!(status, Status::Http(HttpStatus::Ok));
    let request = decoder.request();
    assert!(request.have_value);
    assert!((request.value - 0.99999_f32).abs() < 1e-4);
    assert!(request.have_id);
    assert_eq!(request.id, 0);
    assert!(request.have_client_transaction_id);
    assert_eq!(request.client_transaction_id, 9);
    assert!(request.have_client_id);
    assert_eq!(request.client_id, 7);
}

#[test]
fn put_without_content_length_is_length_required() {
    let (status, _decoder) = decode(b"PUT /api/v1/safetymonitor/1/issafe HTTP/1.1\r\n\r\n");
    assert_matches!(status, Status::Http(HttpStatus::LengthRequired));
}

#[test]
fn device_number_overflow_is_bad_request_and_leaves_flags_clear() {
    let (status, decoder) = decode(b"GET /api/v1/safetymonitor/4294967300/issafe HTTP/1.1\r\n\r\n");
    assert_matches!(status, Status::Http(HttpStatus::BadRequest));
    let request = decoder.request();
    assert!(!request.have_client_id);
    assert!(!request.have_client_transaction_id);
    assert!(!request.have_id);
    assert!(!request.have_state);
    assert!(!request.have_value);
}

#[test]
fn body_exceeding_declared_length_is_payload_too_large() {
    let (status, _decoder) =
        decode(b"PUT /api/v1/safetymonitor/1/issafe HTTP/1.1\r\nContent-Length: 1\r\n\r\n12");
    assert_matches!(status, Status::Http(HttpStatus::PayloadTooLarge));
}

#[test]
fn unsupported_method_is_not_implemented() {
    let (status, _decoder) = decode(b"DELETE / HTTP/1.1\r\n\r\n");
    assert_matches!(status, Status::Http(HttpStatus::NotImplemented));
}

#[test]
fn unknown_device_type_is_not_found() {
    let (status, _decoder) = decode(b"GET /api/v1/spectrograph/0/connected HTTP/1.1\r\n\r\n");
    assert_matches!(status, Status::Http(HttpStatus::NotFound));
}

#[test]
fn put_on_root_is_method_not_allowed() {
    let (status, _decoder) = decode(b"PUT / HTTP/1.1\r\n\r\n");
    assert_matches!(status, Status::Http(HttpStatus::MethodNotAllowed));
}

#[test]
fn management_api_versions() {
    let (status, decoder) = decode(b"GET /management/apiversions HTTP/1.1\r\n\r\n");
    assert_matches!(status, Status::Http(HttpStatus::Ok));
    assert_eq!(
        decoder.request().api,
        alpaca_decoder::api::Api::ManagementApiVersions
    );
}

#[test]
fn wrong_http_version_is_rejected() {
    let (status, _decoder) = decode(b"GET / HTTP/1.0\r\n\r\n");
    assert_matches!(status, Status::Http(HttpStatus::VersionNotSupported));
}

#[test]
fn body_ending_in_a_bare_trailing_ampersand_run_is_ok() {
    let (status, decoder) = decode(
        b"PUT /api/v1/safetymonitor/1/issafe HTTP/1.1\r\nContent-Length: 21\r\n\r\nClientId=876&&&&&&&&&",
    );
    assert_matches!(status, Status::Http(HttpStatus::Ok));
    let request = decoder.request();
    assert!(request.have_client_id);
    assert_eq!(request.client_id, 876);
}

#[test]
fn header_value_with_an_embedded_bare_newline_is_bad_request() {
    let (status, _decoder) = decode(b"GET / HTTP/1.1\r\nAccept: application/json\nInjected:x\r\n\r\n");
    assert_matches!(status, Status::Http(HttpStatus::BadRequest));
}

#[test]
fn decoding_after_a_terminal_status_without_reset_is_internal_server_error() {
    let mut decoder = Decoder::without_listener();
    decoder.reset();
    let mut view = ByteView::new(b"GET / HTTP/1.1\r\n\r\n");
    let status = decoder.decode(&mut view, false, true);
    assert_matches!(status, Status::Http(HttpStatus::Ok));

    let mut view = ByteView::new(b"GET / HTTP/1.1\r\n\r\n");
    let status = decoder.decode(&mut view, false, true);
    assert_matches!(status, Status::Http(HttpStatus::InternalServerError));
}
