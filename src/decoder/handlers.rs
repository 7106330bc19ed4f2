//! Per-grammar-position decode logic.
//!
//! Each function here is one arm of `decoder::state::step`'s match. They
//! read and write the owning `Decoder`'s request record and flags
//! directly rather than returning a `(next_state, consumed)` tuple pair,
//! since the tagged `DecoderState` enum already carries whatever payload
//! (current parameter, current header) the next state needs.

use super::state::DecoderState;
use super::Decoder;
use crate::api::{Api, ApiGroup};
use crate::device::{self, DeviceType};
use crate::headers::{self, HeaderName};
use crate::listener::Listener;
use crate::method::{self, HttpMethod};
use crate::numeric;
use crate::param::{self, Parameter};
use crate::status::{HttpStatus, Status};
use crate::view::ByteView;

fn is_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

fn is_value_char(b: u8) -> bool {
    is_name_char(b) || b == b'=' || b == b'%' || b == b'.'
}

fn is_ows(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Printable ASCII plus tab, matching the reference implementation's
/// `IsFieldContent` predicate. Excludes control bytes (including a bare
/// `\n`), so an embedded stray control byte stops the value extraction
/// instead of being swallowed into the header value.
fn is_field_content(b: u8) -> bool {
    b == b'\t' || (0x20..=0x7e).contains(&b)
}

fn contains_subsequence(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    if haystack.len() < needle.len() {
        return false;
    }
    haystack.windows(needle.len()).any(|window| window == needle)
}

/// Applies the listener-override protocol to a construct the decoder has
/// already decided to fail: `Continue` (no listener, or a listener that
/// declined to intervene) falls back to `fallback`; any `Http(_)` from
/// the listener is propagated verbatim; `NeedMoreInput` from a listener
/// is a programming error, downgraded to 500 (and caught by
/// `debug_assert!` in debug builds), mirroring
/// `SetDecodeFunctionAfterListenerCall` in the reference implementation.
fn after_listener(status: Status, fallback: HttpStatus) -> Status {
    match status {
        Status::Continue => fallback.into(),
        Status::NeedMoreInput => {
            debug_assert!(false, "a listener must not return Status::NeedMoreInput");
            log::warn!("listener returned NeedMoreInput; treating as 500");
            HttpStatus::InternalServerError.into()
        }
        Status::Http(http_status) => Status::Http(http_status),
    }
}

fn require_not_put(method: HttpMethod) -> Status {
    if method == HttpMethod::Put {
        HttpStatus::MethodNotAllowed.into()
    } else {
        Status::Continue
    }
}

fn require_get_only(method: HttpMethod) -> Status {
    if method == HttpMethod::Get {
        Status::Continue
    } else {
        HttpStatus::MethodNotAllowed.into()
    }
}

#[cfg(feature = "asset-path-listener")]
fn notify_asset_path_segment<L: Listener>(
    decoder: &mut Decoder<L>,
    segment: ByteView,
    is_last_segment: bool,
) -> Status {
    decoder.listener.on_asset_path_segment(segment, is_last_segment)
}
#[cfg(not(feature = "asset-path-listener"))]
fn notify_asset_path_segment<L: Listener>(
    _decoder: &mut Decoder<L>,
    _segment: ByteView,
    _is_last_segment: bool,
) -> Status {
    Status::Continue
}

#[cfg(feature = "extra-parameter-listener")]
fn notify_extra_parameter<L: Listener>(
    decoder: &mut Decoder<L>,
    param: Parameter,
    value: ByteView,
) -> Status {
    decoder.listener.on_extra_parameter(param, value)
}
#[cfg(not(feature = "extra-parameter-listener"))]
fn notify_extra_parameter<L: Listener>(
    _decoder: &mut Decoder<L>,
    _param: Parameter,
    _value: ByteView,
) -> Status {
    Status::Continue
}

#[cfg(feature = "unknown-parameter-listener")]
fn notify_unknown_parameter_name<L: Listener>(decoder: &mut Decoder<L>, name: ByteView) -> Status {
    decoder.listener.on_unknown_parameter_name(name)
}
#[cfg(not(feature = "unknown-parameter-listener"))]
fn notify_unknown_parameter_name<L: Listener>(_decoder: &mut Decoder<L>, _name: ByteView) -> Status {
    Status::Continue
}

#[cfg(feature = "unknown-parameter-listener")]
fn notify_unknown_parameter_value<L: Listener>(decoder: &mut Decoder<L>, value: ByteView) -> Status {
    decoder.listener.on_unknown_parameter_value(value)
}
#[cfg(not(feature = "unknown-parameter-listener"))]
fn notify_unknown_parameter_value<L: Listener>(_decoder: &mut Decoder<L>, _value: ByteView) -> Status {
    Status::Continue
}

#[cfg(feature = "extra-header-listener")]
fn notify_extra_header<L: Listener>(decoder: &mut Decoder<L>, header: HeaderName, value: ByteView) -> Status {
    decoder.listener.on_extra_header(header, value)
}
#[cfg(not(feature = "extra-header-listener"))]
fn notify_extra_header<L: Listener>(
    _decoder: &mut Decoder<L>,
    _header: HeaderName,
    _value: ByteView,
) -> Status {
    Status::Continue
}

#[cfg(feature = "unknown-header-listener")]
fn notify_unknown_header_name<L: Listener>(decoder: &mut Decoder<L>, name: ByteView) -> Status {
    decoder.listener.on_unknown_header_name(name)
}
#[cfg(not(feature = "unknown-header-listener"))]
fn notify_unknown_header_name<L: Listener>(_decoder: &mut Decoder<L>, _name: ByteView) -> Status {
    Status::Continue
}

#[cfg(feature = "unknown-header-listener")]
fn notify_unknown_header_value<L: Listener>(decoder: &mut Decoder<L>, value: ByteView) -> Status {
    decoder.listener.on_unknown_header_value(value)
}
#[cfg(not(feature = "unknown-header-listener"))]
fn notify_unknown_header_value<L: Listener>(_decoder: &mut Decoder<L>, _value: ByteView) -> Status {
    Status::Continue
}

pub(super) fn http_method<L: Listener>(decoder: &mut Decoder<L>, view: &mut ByteView) -> Status {
    let name = match view.split_matching_prefix(is_name_char) {
        Some(name) => name,
        None => return Status::NeedMoreInput,
    };
    match view.first() {
        Some(b' ') => {
            view.advance(1);
        }
        _ => return HttpStatus::BadRequest.into(),
    }

    let parsed = method::match_method(name.as_bytes());
    if parsed == HttpMethod::Unknown {
        return HttpStatus::NotImplemented.into();
    }
    decoder.request.http_method = parsed;
    decoder.set_state(DecoderState::ApiGroupPrefix);
    Status::Continue
}

#[derive(PartialEq, Eq)]
enum Probe {
    Full,
    Partial,
    No,
}

fn probe(view: &[u8], candidate: &[u8]) -> Probe {
    let n = view.len().min(candidate.len());
    if view[..n] != candidate[..n] {
        Probe::No
    } else if view.len() >= candidate.len() {
        Probe::Full
    } else {
        Probe::Partial
    }
}

const ROOT: &[u8] = b"/ ";
const API_V1: &[u8] = b"/api/v1/";
const SETUP_V1: &[u8] = b"/setup/v1/";
const SETUP: &[u8] = b"/setup ";
const MGMT_API_VERSIONS: &[u8] = b"/management/apiversions ";
const MGMT_DESCRIPTION: &[u8] = b"/management/v1/description ";
const MGMT_CONFIGURED_DEVICES: &[u8] = b"/management/v1/configureddevices ";
const ASSET: &[u8] = b"/asset/";

pub(super) fn api_group_prefix<L: Listener>(decoder: &mut Decoder<L>, view: &mut ByteView) -> Status {
    let method = decoder.request.http_method;
    let bytes = view.as_bytes();
    let mut saw_partial = false;

    if let Probe::Full = probe(bytes, ROOT) {
        view.advance(ROOT.len());
        return match require_not_put(method) {
            Status::Continue => {
                decoder.request.api_group = ApiGroup::ServerStatus;
                decoder.request.api = Api::ServerStatus;
                decoder.set_state(DecoderState::HttpVersion);
                Status::Continue
            }
            other => other,
        };
    } else if let Probe::Partial = probe(bytes, ROOT) {
        saw_partial = true;
    }

    match probe(bytes, API_V1) {
        Probe::Full => {
            view.advance(API_V1.len());
            decoder.request.api_group = ApiGroup::Device;
            decoder.request.api = Api::DeviceApi;
            decoder.set_state(DecoderState::DeviceType);
            return Status::Continue;
        }
        Probe::Partial => saw_partial = true,
        Probe::No => {}
    }

    match probe(bytes, SETUP_V1) {
        Probe::Full => {
            view.advance(SETUP_V1.len());
            decoder.request.api_group = ApiGroup::Setup;
            decoder.request.api = Api::DeviceSetup;
            decoder.set_state(DecoderState::DeviceType);
            return Status::Continue;
        }
        Probe::Partial => saw_partial = true,
        Probe::No => {}
    }

    match probe(bytes, SETUP) {
        Probe::Full => {
            view.advance(SETUP.len());
            return match require_get_only(method) {
                Status::Continue => {
                    decoder.request.api_group = ApiGroup::Setup;
                    decoder.request.api = Api::ServerSetup;
                    decoder.set_state(DecoderState::HttpVersion);
                    Status::Continue
                }
                other => other,
            };
        }
        Probe::Partial => saw_partial = true,
        Probe::No => {}
    }

    match probe(bytes, MGMT_API_VERSIONS) {
        Probe::Full => {
            view.advance(MGMT_API_VERSIONS.len());
            return match require_not_put(method) {
                Status::Continue => {
                    decoder.request.api_group = ApiGroup::Management;
                    decoder.request.api = Api::ManagementApiVersions;
                    decoder.set_state(DecoderState::HttpVersion);
                    Status::Continue
                }
                other => other,
            };
        }
        Probe::Partial => saw_partial = true,
        Probe::No => {}
    }

    match probe(bytes, MGMT_DESCRIPTION) {
        Probe::Full => {
            view.advance(MGMT_DESCRIPTION.len());
            return match require_not_put(method) {
                Status::Continue => {
                    decoder.request.api_group = ApiGroup::Management;
                    decoder.request.api = Api::ManagementDescription;
                    decoder.set_state(DecoderState::HttpVersion);
                    Status::Continue
                }
                other => other,
            };
        }
        Probe::Partial => saw_partial = true,
        Probe::No => {}
    }

    match probe(bytes, MGMT_CONFIGURED_DEVICES) {
        Probe::Full => {
            view.advance(MGMT_CONFIGURED_DEVICES.len());
            return match require_not_put(method) {
                Status::Continue => {
                    decoder.request.api_group = ApiGroup::Management;
                    decoder.request.api = Api::ManagementConfiguredDevices;
                    decoder.set_state(DecoderState::HttpVersion);
                    Status::Continue
                }
                other => other,
            };
        }
        Probe::Partial => saw_partial = true,
        Probe::No => {}
    }

    match probe(bytes, ASSET) {
        Probe::Full => {
            view.advance(ASSET.len());
            decoder.request.api_group = ApiGroup::Asset;
            decoder.request.api = Api::Asset;
            decoder.set_state(DecoderState::AssetPath);
            return Status::Continue;
        }
        Probe::Partial => saw_partial = true,
        Probe::No => {}
    }

    if saw_partial {
        Status::NeedMoreInput
    } else {
        HttpStatus::BadRequest.into()
    }
}

pub(super) fn asset_path<L: Listener>(decoder: &mut Decoder<L>, view: &mut ByteView) -> Status {
    loop {
        let segment = match view.split_matching_prefix(|b| b != b'/' && b != b' ') {
            Some(segment) => segment,
            None => return Status::NeedMoreInput,
        };
        match view.first() {
            Some(b'/') => {
                view.advance(1);
                let status = notify_asset_path_segment(decoder, segment, false);
                if !status.is_continue() {
                    return status;
                }
            }
            Some(b' ') => {
                view.advance(1);
                let status = notify_asset_path_segment(decoder, segment, true);
                if !status.is_continue() {
                    return status;
                }
                decoder.set_state(DecoderState::HttpVersion);
                return Status::Continue;
            }
            _ => unreachable!("split_matching_prefix guarantees a '/' or ' ' terminator"),
        }
    }
}

pub(super) fn device_type<L: Listener>(decoder: &mut Decoder<L>, view: &mut ByteView) -> Status {
    let name = match view.split_matching_prefix(is_name_char) {
        Some(name) => name,
        None => return Status::NeedMoreInput,
    };
    match view.first() {
        Some(b'/') => {
            view.advance(1);
        }
        _ => return HttpStatus::BadRequest.into(),
    }

    let device_type = device::match_device_type(name.as_bytes());
    if device_type == DeviceType::Unknown {
        return HttpStatus::NotFound.into();
    }
    decoder.request.device_type = device_type;
    decoder.set_state(DecoderState::DeviceNumber);
    Status::Continue
}

pub(super) fn device_number<L: Listener>(decoder: &mut Decoder<L>, view: &mut ByteView) -> Status {
    let digits = match view.split_matching_prefix(|b| b.is_ascii_digit()) {
        Some(digits) => digits,
        None => return Status::NeedMoreInput,
    };
    match view.first() {
        Some(b'/') => {
            view.advance(1);
        }
        _ => return HttpStatus::BadRequest.into(),
    }

    match numeric::parse_u32(digits.as_bytes()) {
        Some(n) => {
            decoder.request.device_number = n;
            decoder.set_state(DecoderState::DeviceMethod);
            Status::Continue
        }
        None => HttpStatus::BadRequest.into(),
    }
}

pub(super) fn device_method<L: Listener>(decoder: &mut Decoder<L>, view: &mut ByteView) -> Status {
    let name = match view.split_matching_prefix(is_name_char) {
        Some(name) => name,
        None => return Status::NeedMoreInput,
    };
    let terminator = match view.first() {
        Some(b @ b'?') | Some(b @ b' ') => b,
        _ => return HttpStatus::BadRequest.into(),
    };
    view.advance(1);

    let method = device::match_device_method(name.as_bytes());
    if method == crate::device::DeviceMethod::Unknown {
        return HttpStatus::NotFound.into();
    }
    if decoder.request.api == Api::DeviceSetup && method != crate::device::DeviceMethod::Setup {
        return HttpStatus::NotFound.into();
    }
    decoder.request.device_method = method;
    decoder.set_state(if terminator == b'?' {
        DecoderState::ParamName
    } else {
        DecoderState::HttpVersion
    });
    Status::Continue
}

fn current_parameter<L: Listener>(decoder: &Decoder<L>) -> Parameter {
    match decoder.state {
        Some(DecoderState::ParamValue(p)) => p,
        _ => Parameter::Unknown,
    }
}

pub(super) fn param_name<L: Listener>(decoder: &mut Decoder<L>, view: &mut ByteView) -> Status {
    let name = match view.split_matching_prefix(is_name_char) {
        Some(name) => name,
        None => return Status::NeedMoreInput,
    };
    match view.first() {
        Some(b'=') => {
            view.advance(1);
        }
        _ => return HttpStatus::BadRequest.into(),
    }
    if name.is_empty() {
        return HttpStatus::BadRequest.into();
    }

    let parameter = param::match_parameter(name.as_bytes());
    if parameter == Parameter::Unknown {
        let status = notify_unknown_parameter_name(decoder, name);
        if !status.is_continue() {
            return status;
        }
    }
    decoder.set_state(DecoderState::ParamValue(parameter));
    Status::Continue
}

fn apply_param_value<L: Listener>(decoder: &mut Decoder<L>, parameter: Parameter, value: ByteView) -> Status {
    match parameter {
        Parameter::ClientId => match numeric::parse_u32(value.as_bytes()) {
            Some(n) if !decoder.request.have_client_id => {
                decoder.request.client_id = n;
                decoder.request.have_client_id = true;
                Status::Continue
            }
            _ => after_listener(notify_extra_parameter(decoder, parameter, value), HttpStatus::BadRequest),
        },
        Parameter::ClientTransactionId => match numeric::parse_u32(value.as_bytes()) {
            Some(n) if !decoder.request.have_client_transaction_id => {
                decoder.request.client_transaction_id = n;
                decoder.request.have_client_transaction_id = true;
                Status::Continue
            }
            _ => after_listener(notify_extra_parameter(decoder, parameter, value), HttpStatus::BadRequest),
        },
        Parameter::Id => match numeric::parse_u32(value.as_bytes()) {
            Some(n) if !decoder.request.have_id => {
                decoder.request.id = n;
                decoder.request.have_id = true;
                Status::Continue
            }
            _ => after_listener(notify_extra_parameter(decoder, parameter, value), HttpStatus::BadRequest),
        },
        Parameter::State => match numeric::parse_bool(value.as_bytes()) {
            Some(b) => {
                decoder.request.state = b;
                decoder.request.have_state = true;
                Status::Continue
            }
            None => HttpStatus::BadRequest.into(),
        },
        Parameter::Value => match numeric::parse_f32(value.as_bytes()) {
            Some(f) => {
                decoder.request.value = f;
                decoder.request.have_value = true;
                Status::Continue
            }
            None => HttpStatus::BadRequest.into(),
        },
        Parameter::Connected | Parameter::Raw => notify_extra_parameter(decoder, parameter, value),
        Parameter::Unknown => notify_unknown_parameter_value(decoder, value),
    }
}

pub(super) fn param_value<L: Listener>(decoder: &mut Decoder<L>, view: &mut ByteView) -> Status {
    let parameter = current_parameter(decoder);

    // In body mode the last param's value isn't followed by any
    // terminator byte — it simply ends where the declared body ends.
    // `is_final_input` tells us the whole of `view` is the rest of the
    // body, so a value run that consumes every remaining byte is
    // complete, not merely unterminated-so-far.
    let at_declared_body_end = !decoder.is_decoding_header && decoder.is_final_input;

    let value = match view.split_matching_prefix(is_value_char) {
        Some(value) => value,
        None if at_declared_body_end => view.advance(view.len()),
        None => return Status::NeedMoreInput,
    };
    if !view.is_empty() {
        match view.first() {
            Some(b'&') | Some(b' ') => {}
            _ => return HttpStatus::BadRequest.into(),
        }
    } else if !at_declared_body_end {
        return HttpStatus::BadRequest.into();
    }

    let status = apply_param_value(decoder, parameter, value);
    if !status.is_continue() {
        return status;
    }
    decoder.set_state(DecoderState::ParamSeparator);
    Status::Continue
}

pub(super) fn param_separator<L: Listener>(decoder: &mut Decoder<L>, view: &mut ByteView) -> Status {
    if !decoder.is_decoding_header && decoder.remaining_content_length == 0 {
        return HttpStatus::Ok.into();
    }

    let amps = match view.split_matching_prefix(|b| b == b'&') {
        Some(amps) => amps,
        None if !decoder.is_decoding_header && decoder.remaining_content_length as usize <= view.len() => {
            view.advance(view.len());
            return HttpStatus::Ok.into();
        }
        None => return Status::NeedMoreInput,
    };

    if !decoder.is_decoding_header {
        let remaining_after = decoder.remaining_content_length.saturating_sub(amps.len() as u32);
        if remaining_after == 0 {
            return HttpStatus::Ok.into();
        }
    }

    match view.first() {
        Some(b' ') => {
            if decoder.is_decoding_header {
                view.advance(1);
                decoder.set_state(DecoderState::HttpVersion);
                Status::Continue
            } else {
                HttpStatus::BadRequest.into()
            }
        }
        Some(b) if is_name_char(b) => {
            decoder.set_state(DecoderState::ParamName);
            Status::Continue
        }
        Some(_) => HttpStatus::BadRequest.into(),
        None => Status::NeedMoreInput,
    }
}

const HTTP_VERSION: &[u8] = b"HTTP/1.1\r\n";

pub(super) fn http_version<L: Listener>(decoder: &mut Decoder<L>, view: &mut ByteView) -> Status {
    let bytes = view.as_bytes();
    if bytes.len() < HTTP_VERSION.len() {
        if bytes != &HTTP_VERSION[..bytes.len()] {
            return HttpStatus::VersionNotSupported.into();
        }
        return Status::NeedMoreInput;
    }
    if view.consume_prefix(HTTP_VERSION) {
        decoder.is_decoding_start_line = false;
        decoder.set_state(DecoderState::HeaderLines);
        Status::Continue
    } else {
        HttpStatus::VersionNotSupported.into()
    }
}

fn header_block_end<L: Listener>(decoder: &mut Decoder<L>) -> Status {
    match decoder.request.http_method {
        HttpMethod::Get | HttpMethod::Head => HttpStatus::Ok.into(),
        HttpMethod::Put => {
            if !decoder.found_content_length {
                HttpStatus::LengthRequired.into()
            } else if decoder.remaining_content_length == 0 {
                HttpStatus::Ok.into()
            } else {
                decoder.is_decoding_header = false;
                decoder.set_state(DecoderState::ParamName);
                Status::Continue
            }
        }
        HttpMethod::Unknown => HttpStatus::InternalServerError.into(),
    }
}

pub(super) fn header_lines<L: Listener>(decoder: &mut Decoder<L>, view: &mut ByteView) -> Status {
    match view.first() {
        None => Status::NeedMoreInput,
        Some(b'\r') => {
            if view.len() < 2 {
                return Status::NeedMoreInput;
            }
            if view.as_bytes()[1] != b'\n' {
                return HttpStatus::BadRequest.into();
            }
            view.advance(2);
            header_block_end(decoder)
        }
        Some(_) => {
            decoder.set_state(DecoderState::HeaderName);
            Status::Continue
        }
    }
}

pub(super) fn header_name<L: Listener>(decoder: &mut Decoder<L>, view: &mut ByteView) -> Status {
    let name = match view.split_matching_prefix(is_name_char) {
        Some(name) => name,
        None => return Status::NeedMoreInput,
    };
    match view.first() {
        Some(b':') => {
            view.advance(1);
        }
        _ => return HttpStatus::BadRequest.into(),
    }

    let header = headers::match_header(name.as_bytes());
    if header == HeaderName::Unknown {
        let status = notify_unknown_header_name(decoder, name);
        if !status.is_continue() {
            return status;
        }
    }
    decoder.set_state(DecoderState::HeaderValue(header));
    Status::Continue
}

fn current_header<L: Listener>(decoder: &Decoder<L>) -> HeaderName {
    match decoder.state {
        Some(DecoderState::HeaderValue(header)) => header,
        _ => HeaderName::Unknown,
    }
}

fn apply_header_value<L: Listener>(decoder: &mut Decoder<L>, header: HeaderName, value: ByteView) -> Status {
    match header {
        HeaderName::Accept => {
            if contains_subsequence(value.as_bytes(), b"application/json") {
                Status::Continue
            } else {
                notify_extra_header(decoder, header, value)
            }
        }
        HeaderName::ContentLength => {
            if decoder.found_content_length {
                return after_listener(notify_extra_header(decoder, header, value), HttpStatus::BadRequest);
            }
            match numeric::parse_u32(value.as_bytes()) {
                None => HttpStatus::BadRequest.into(),
                Some(n) if n as usize > ByteView::MAX_LEN && decoder.request.http_method == HttpMethod::Put => {
                    HttpStatus::PayloadTooLarge.into()
                }
                Some(n) => {
                    decoder.remaining_content_length = n;
                    decoder.found_content_length = true;
                    Status::Continue
                }
            }
        }
        HeaderName::ContentType => {
            if decoder.request.http_method != HttpMethod::Put {
                Status::Continue
            } else if value.as_bytes() == b"application/x-www-form-urlencoded" {
                Status::Continue
            } else {
                after_listener(
                    notify_extra_header(decoder, header, value),
                    HttpStatus::UnsupportedMediaType,
                )
            }
        }
        HeaderName::ContentEncoding => notify_extra_header(decoder, header, value),
        HeaderName::Unknown => notify_unknown_header_value(decoder, value),
    }
}

pub(super) fn header_value<L: Listener>(decoder: &mut Decoder<L>, view: &mut ByteView) -> Status {
    let header = current_header(decoder);

    if view.split_matching_prefix(is_ows).is_none() {
        return Status::NeedMoreInput;
    }

    let mut value = match view.split_matching_prefix(is_field_content) {
        Some(value) => value,
        None => return Status::NeedMoreInput,
    };
    value.trim_end_matching(is_ows);

    let status = apply_header_value(decoder, header, value);
    if !status.is_continue() {
        return status;
    }
    decoder.set_state(DecoderState::HeaderLineEnd);
    Status::Continue
}

pub(super) fn header_line_end<L: Listener>(decoder: &mut Decoder<L>, view: &mut ByteView) -> Status {
    let bytes = view.as_bytes();
    if bytes.len() < 2 {
        if bytes == b"\r" || bytes.is_empty() {
            return Status::NeedMoreInput;
        }
        return HttpStatus::BadRequest.into();
    }
    if view.consume_prefix(b"\r\n") {
        decoder.set_state(DecoderState::HeaderLines);
        Status::Continue
    } else {
        HttpStatus::BadRequest.into()
    }
}
