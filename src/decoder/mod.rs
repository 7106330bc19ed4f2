//! The decoder driver: owns the state machine, the suspend/resume
//! protocol, and the buffer-full and body-length promotion rules.
//!
//! Grounded on the reference implementation's `RequestDecoderState` /
//! `RequestDecoder` split (`request_decoder.h`): `DecodeBuffer` here is
//! [`Decoder::decode`], and the header/body fork is
//! [`Decoder::decode_body_step`] standing in for `DecodeMessageHeader` /
//! `DecodeMessageBody`.

mod handlers;
mod state;

use crate::listener::{Listener, NullListener};
use crate::request::Request;
use crate::status::{HttpStatus, Status};
use crate::view::ByteView;
use state::DecoderState;

/// A streaming ASCOM Alpaca HTTP request decoder.
///
/// `L` is the installed [`Listener`]; it defaults to [`NullListener`] for
/// callers that don't need any of its hooks.
pub struct Decoder<L = NullListener> {
    request: Request,
    listener: L,
    state: Option<DecoderState>,
    is_decoding_header: bool,
    is_decoding_start_line: bool,
    is_final_input: bool,
    found_content_length: bool,
    remaining_content_length: u32,
}

impl<L: Listener> Decoder<L> {
    /// Creates a decoder bound to `listener`. The decoder cannot decode
    /// anything until [`Decoder::reset`] is called at least once; a
    /// `decode` call before that returns `HttpStatus::InternalServerError`.
    pub fn new(listener: L) -> Self {
        Decoder {
            request: Request::new(),
            listener,
            state: None,
            is_decoding_header: true,
            is_decoding_start_line: true,
            is_final_input: false,
            found_content_length: false,
            remaining_content_length: 0,
        }
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    fn set_state(&mut self, state: DecoderState) {
        self.state = Some(state);
    }

    /// Prepares the decoder for a new request. MUST be called before the
    /// first byte of each request is decoded, including the very first
    /// request of the decoder's lifetime.
    pub fn reset(&mut self) {
        self.request.reset();
        self.state = Some(DecoderState::HttpMethod);
        self.is_decoding_header = true;
        self.is_decoding_start_line = true;
        self.is_final_input = false;
        self.found_content_length = false;
        self.remaining_content_length = 0;
        log::trace!("decoder reset");
    }

    /// Decodes as much of `buffer` as is currently possible, consuming a
    /// prefix of it. `buffer_is_full` tells the decoder the caller cannot
    /// grow the buffer before the next call, which only matters if this
    /// call would otherwise return `NeedMoreInput` having consumed no
    /// bytes — that combination is promoted to
    /// `HttpStatus::HeaderFieldsTooLarge`. `at_end_of_input` tells the
    /// decoder the transport has nothing further to deliver, used only
    /// while decoding a PUT body, to detect truncation.
    pub fn decode(&mut self, buffer: &mut ByteView, buffer_is_full: bool, at_end_of_input: bool) -> Status {
        loop {
            let current = match self.state {
                Some(state) => state,
                None => return Status::Http(HttpStatus::InternalServerError),
            };

            let before = buffer.len();
            let status = if self.is_decoding_header {
                state::step(self, buffer, current)
            } else {
                self.decode_body_step(buffer, current, at_end_of_input)
            };
            let consumed = before - buffer.len();

            match status {
                Status::Continue => continue,
                Status::NeedMoreInput => {
                    if buffer_is_full && consumed == 0 {
                        self.state = None;
                        log::debug!("buffer full with no progress; promoting to 431");
                        return Status::Http(HttpStatus::HeaderFieldsTooLarge);
                    }
                    return Status::NeedMoreInput;
                }
                Status::Http(http_status) => {
                    log::trace!("decode finished: {}", http_status);
                    self.state = None;
                    return Status::Http(http_status);
                }
            }
        }
    }

    fn decode_body_step(&mut self, buffer: &mut ByteView, current: DecoderState, at_end_of_input: bool) -> Status {
        let buffer_len = buffer.len() as u32;
        if buffer_len > self.remaining_content_length {
            log::warn!("buffer holds more bytes than the declared Content-Length");
            return Status::Http(HttpStatus::PayloadTooLarge);
        } else if buffer_len == self.remaining_content_length {
            self.is_final_input = true;
        } else if at_end_of_input {
            log::warn!("input ended before the declared Content-Length was reached");
            return Status::Http(HttpStatus::BadRequest);
        }

        let before = buffer.len();
        let status = state::step(self, buffer, current);
        let consumed = (before - buffer.len()) as u32;
        self.remaining_content_length = self.remaining_content_length.saturating_sub(consumed);
        status
    }
}

impl Decoder<NullListener> {
    /// A decoder with no listener installed: every otherwise-ignored
    /// construct is accepted silently.
    pub fn without_listener() -> Self {
        Decoder::new(NullListener)
    }
}

impl Default for Decoder<NullListener> {
    fn default() -> Self {
        Decoder::without_listener()
    }
}
