//! Optional observer for constructs the decoder recognizes but does not
//! itself interpret.
//!
//! Absence of a listener is equivalent to a stub that returns
//! `Status::Continue` for every call, matching the reference
//! implementation's `RequestDecoderListener` base class. Each hook is
//! individually gated by a Cargo feature, mirroring that implementation's
//! per-hook `TAS_ENABLE_*` build flags.

use crate::headers::HeaderName;
use crate::param::Parameter;
use crate::status::Status;
use crate::view::ByteView;

/// Six observation points for constructs the decoder otherwise ignores.
///
/// Every method defaults to returning `Status::Continue`, i.e. "proceed
/// with the decoder's default behavior for this construct". A listener
/// may instead return any `Status::Http(_)` to fail the request with
/// that status.
pub trait Listener {
    /// Called once per path segment of an `/asset/...` request.
    /// `is_last_segment` is true only for the final segment; if the path
    /// ends with a trailing slash, that final segment is empty.
    #[cfg(feature = "asset-path-listener")]
    fn on_asset_path_segment(&mut self, segment: ByteView, is_last_segment: bool) -> Status {
        let _ = (segment, is_last_segment);
        Status::Continue
    }

    /// Called for a recognized parameter that has no built-in handling,
    /// or whose value failed built-in parsing, or that duplicates an
    /// already-seen value.
    #[cfg(feature = "extra-parameter-listener")]
    fn on_extra_parameter(&mut self, param: Parameter, value: ByteView) -> Status {
        let _ = (param, value);
        Status::Continue
    }

    /// Called for the name of an unrecognized parameter.
    #[cfg(feature = "unknown-parameter-listener")]
    fn on_unknown_parameter_name(&mut self, name: ByteView) -> Status {
        let _ = name;
        Status::Continue
    }

    /// Called for the value of an unrecognized parameter, immediately
    /// after `on_unknown_parameter_name` for the same parameter.
    #[cfg(feature = "unknown-parameter-listener")]
    fn on_unknown_parameter_value(&mut self, value: ByteView) -> Status {
        let _ = value;
        Status::Continue
    }

    /// Called for a recognized header beyond built-in processing, or a
    /// duplicate of an already-seen supported header.
    #[cfg(feature = "extra-header-listener")]
    fn on_extra_header(&mut self, header: HeaderName, value: ByteView) -> Status {
        let _ = (header, value);
        Status::Continue
    }

    /// Called for the name of an unrecognized header.
    #[cfg(feature = "unknown-header-listener")]
    fn on_unknown_header_name(&mut self, name: ByteView) -> Status {
        let _ = name;
        Status::Continue
    }

    /// Called for the value of an unrecognized header, immediately after
    /// `on_unknown_header_name` for the same header.
    #[cfg(feature = "unknown-header-listener")]
    fn on_unknown_header_value(&mut self, value: ByteView) -> Status {
        let _ = value;
        Status::Continue
    }
}

/// A listener that implements every hook's default no-op behavior.
/// Equivalent to passing `nullptr` for the listener pointer in the
/// reference implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullListener;

impl Listener for NullListener {}

impl Listener for () {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_listener_always_continues() {
        let mut listener = NullListener;
        #[cfg(feature = "unknown-header-listener")]
        assert_eq!(
            listener.on_unknown_header_name(ByteView::new(b"x-custom")),
            Status::Continue
        );
        #[cfg(not(feature = "unknown-header-listener"))]
        let _ = &mut listener;
    }
}
