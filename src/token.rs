//! Compile-time token tables and the two match variants the decoder needs.
//!
//! A table is just a `&[(&[u8], E)]` constant; lookups are a linear scan,
//! which is fine given the table sizes involved here (under 25 entries).

/// Case-sensitive match: `view` must equal one of `table`'s strings
/// byte-for-byte. Used for HTTP method names, device types, and ASCOM
/// method names, all of which the Alpaca spec mandates an exact case for.
pub fn match_exact<E: Copy>(view: &[u8], table: &[(&[u8], E)], unknown: E) -> E {
    for &(candidate, id) in table {
        if candidate == view {
            return id;
        }
    }
    unknown
}

/// Case-folded match: `view` is lowercased on the fly and compared
/// against `table`'s entries, which must already be lowercase. Used for
/// parameter names, header names, and the `true`/`false` literal.
pub fn match_case_fold<E: Copy>(view: &[u8], table: &[(&[u8], E)], unknown: E) -> E {
    for &(candidate, id) in table {
        if eq_ignore_ascii_case(candidate, view) {
            return id;
        }
    }
    unknown
}

fn eq_ignore_ascii_case(lower: &[u8], other: &[u8]) -> bool {
    if lower.len() != other.len() {
        return false;
    }
    lower
        .iter()
        .zip(other.iter())
        .all(|(&l, &o)| l == o.to_ascii_lowercase())
}
