//! Query/body parameter names recognized by the decoder.

use crate::token;

/// Recognized parameter names. `ClientId`, `ClientTransactionId`, `Id`,
/// `State`, and `Value` have built-in typed parsing (see
/// `decoder::handlers::param_value`); `Connected` and `Raw` are
/// recognized (so they don't fall down the "unknown parameter" path) but
/// have no built-in handling and are always routed to the listener's
/// `on_extra_parameter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    Unknown,
    ClientId,
    ClientTransactionId,
    Id,
    State,
    Value,
    Connected,
    Raw,
}

impl Default for Parameter {
    fn default() -> Self {
        Parameter::Unknown
    }
}

const TABLE: &[(&[u8], Parameter)] = &[
    (b"clientid", Parameter::ClientId),
    (b"clienttransactionid", Parameter::ClientTransactionId),
    (b"id", Parameter::Id),
    (b"state", Parameter::State),
    (b"value", Parameter::Value),
    (b"connected", Parameter::Connected),
    (b"raw", Parameter::Raw),
];

/// Matches `name` case-insensitively against the recognized parameter
/// table.
pub fn match_parameter(name: &[u8]) -> Parameter {
    token::match_case_fold(name, TABLE, Parameter::Unknown)
}
