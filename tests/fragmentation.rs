//! Property-based tests for the fragmentation-invariance and
//! reset-idempotence properties.

use alpaca_decoder::decoder::Decoder;
use alpaca_decoder::status::HttpStatus;
use alpaca_decoder::{ByteView, Status};
use proptest::prelude::*;

const REQUESTS: &[&[u8]] = &[
    b"GET / HTTP/1.1\r\n\r\n",
    b"GET /api/v1/safetymonitor/0/issafe HTTP/1.1\r\n\r\n",
    b"GET /api/v1/telescope/3/connected HTTP/1.1\r\n\r\n",
    b"PUT /api/v1/observingconditions/0/refresh?ClientID=123&clienttransactionid=432 HTTP/1.1\r\nContent-Length: 0\r\n\r\n",
    b"PUT /api/v1/switch/0/setswitchvalue HTTP/1.1\r\ncontent-TYPE:application/x-www-form-urlencoded\r\nContent-Length:51\r\n\r\nvalue=0.99999&id=0&clienttransactionid=9&clientid=7",
    b"GET /management/apiversions HTTP/1.1\r\n\r\n",
];

fn decode_whole(input: &[u8]) -> (Status, alpaca_decoder::Request) {
    let mut decoder = Decoder::without_listener();
    decoder.reset();
    let mut view = ByteView::new(input);
    let status = decoder.decode(&mut view, false, true);
    (status, *decoder.request())
}

fn decode_fragmented(input: &[u8], cut_points: &[usize]) -> (Status, alpaca_decoder::Request) {
    let mut decoder = Decoder::without_listener();
    decoder.reset();

    let mut cuts: Vec<usize> = cut_points.iter().copied().filter(|&c| c > 0 && c < input.len()).collect();
    cuts.sort_unstable();
    cuts.dedup();

    let mut start = 0;
    let mut boundaries = cuts;
    boundaries.push(input.len());

    let mut last_status = Status::NeedMoreInput;
    for &end in &boundaries {
        let chunk = &input[start..end];
        start = end;
        let mut view = ByteView::new(chunk);
        last_status = decoder.decode(&mut view, false, end == input.len());
        if last_status.is_terminal() {
            break;
        }
    }
    (last_status, *decoder.request())
}

proptest! {
    /// Property 1: feeding a well-formed request as one chunk or split at
    /// arbitrary points yields the same terminal status and request record.
    #[test]
    fn fragmentation_does_not_change_the_result(
        request_index in 0usize..REQUESTS.len(),
        cut_a in 0usize..80,
        cut_b in 0usize..80,
        cut_c in 0usize..80,
    ) {
        let input = REQUESTS[request_index];
        let (whole_status, whole_request) = decode_whole(input);
        let (frag_status, frag_request) = decode_fragmented(input, &[cut_a, cut_b, cut_c]);

        prop_assert_eq!(whole_status, frag_status);
        prop_assert_eq!(whole_request, frag_request);
    }

    /// Property: feeding a request one byte at a time always reaches the
    /// same terminal status as feeding it whole.
    #[test]
    fn byte_at_a_time_matches_whole_buffer(request_index in 0usize..REQUESTS.len()) {
        let input = REQUESTS[request_index];
        let (whole_status, whole_request) = decode_whole(input);

        let mut decoder = Decoder::without_listener();
        decoder.reset();
        let mut status = Status::NeedMoreInput;
        for (i, &byte) in input.iter().enumerate() {
            let chunk = [byte];
            let mut view = ByteView::new(&chunk);
            status = decoder.decode(&mut view, false, i + 1 == input.len());
            if status.is_terminal() {
                break;
            }
        }

        prop_assert_eq!(status, whole_status);
        prop_assert_eq!(*decoder.request(), whole_request);
    }
}

#[test]
fn reset_is_idempotent() {
    let mut decoder = Decoder::without_listener();
    decoder.reset();
    let after_first_reset = *decoder.request();

    let mut view = ByteView::new(b"GET /api/v1/telescope/9/connected HTTP/1.1\r\n\r\n");
    let status = decoder.decode(&mut view, false, true);
    assert!(matches::matches!(status, Status::Http(HttpStatus::Ok)));

    decoder.reset();
    let after_second_reset = *decoder.request();

    assert_eq!(after_first_reset, after_second_reset);
}

#[test]
fn buffer_full_with_no_progress_is_promoted_to_header_fields_too_large() {
    let mut decoder = Decoder::without_listener();
    decoder.reset();
    let mut view = ByteView::new(b"");
    let status = decoder.decode(&mut view, true, false);
    assert!(matches::matches!(
        status,
        Status::Http(HttpStatus::HeaderFieldsTooLarge)
    ));
}
