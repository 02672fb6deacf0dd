use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GemClientError {
    #[error("field `{field}` does not match the schema, expected {expected}")]
    SchemaMismatch {
        field: &'static str,
        expected: &'static str,
    },

    #[error("truncated input reading `{field}`: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput {
        field: &'static str,
        needed: usize,
        remaining: usize,
    },

    #[error("{remaining} trailing bytes left after decoding")]
    TrailingBytes { remaining: usize },

    #[error("field `{field}` is not valid UTF-8")]
    InvalidUtf8 { field: &'static str },

    #[error("invalid option tag {tag} for field `{field}`")]
    InvalidOptionTag { field: &'static str, tag: u8 },

    #[error("no bump seed yields an off-curve program address")]
    DerivationExhausted,

    #[error("seed list exceeds ledger limits")]
    MaxSeedLengthExceeded,

    #[error("seeds produce an address on the ed25519 curve")]
    InvalidSeeds,

    #[error("missing required argument `{0}`")]
    MissingArgument(&'static str),

    #[error("unknown instruction discriminant {0}")]
    UnknownDiscriminant(u8),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("base64 decode error: {0}")]
    Base64(String),

    #[error("account reader error: {0}")]
    Reader(String),
}

pub type Result<T> = std::result::Result<T, GemClientError>;
