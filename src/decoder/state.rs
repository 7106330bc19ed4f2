//! The decoder's tagged-variant state machine.
//!
//! A plain enum standing in for the reference implementation's
//! function-pointer field: each variant is one grammar position from the
//! wire format, and `step` is the single `match` that dispatches to the
//! corresponding handler. `ParamValue` and `HeaderValue` carry the
//! parameter/header identity they're extracting a value for, replacing
//! the reference implementation's `union { current_parameter;
//! current_header; }` field with data living directly on the state tag.

use super::handlers;
use super::Decoder;
use crate::headers::HeaderName;
use crate::listener::Listener;
use crate::param::Parameter;
use crate::status::Status;
use crate::view::ByteView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DecoderState {
    HttpMethod,
    ApiGroupPrefix,
    DeviceType,
    DeviceNumber,
    DeviceMethod,
    AssetPath,
    ParamName,
    ParamValue(Parameter),
    ParamSeparator,
    HttpVersion,
    HeaderLines,
    HeaderName,
    HeaderValue(HeaderName),
    HeaderLineEnd,
}

pub(super) fn step<L: Listener>(decoder: &mut Decoder<L>, view: &mut ByteView, current: DecoderState) -> Status {
    match current {
        DecoderState::HttpMethod => handlers::http_method(decoder, view),
        DecoderState::ApiGroupPrefix => handlers::api_group_prefix(decoder, view),
        DecoderState::DeviceType => handlers::device_type(decoder, view),
        DecoderState::DeviceNumber => handlers::device_number(decoder, view),
        DecoderState::DeviceMethod => handlers::device_method(decoder, view),
        DecoderState::AssetPath => handlers::asset_path(decoder, view),
        DecoderState::ParamName => handlers::param_name(decoder, view),
        DecoderState::ParamValue(_) => handlers::param_value(decoder, view),
        DecoderState::ParamSeparator => handlers::param_separator(decoder, view),
        DecoderState::HttpVersion => handlers::http_version(decoder, view),
        DecoderState::HeaderLines => handlers::header_lines(decoder, view),
        DecoderState::HeaderName => handlers::header_name(decoder, view),
        DecoderState::HeaderValue(_) => handlers::header_value(decoder, view),
        DecoderState::HeaderLineEnd => handlers::header_line_end(decoder, view),
    }
}
