//! # ladle-id
//!
//! Prefixed, time-sortable, base58-encoded ID generation for ladle
//! entities.
//!
//! ## Design Principles
//!
//! - IDs are minted once at entity creation and are immutable thereafter
//! - Every ID carries 16 bytes of CSPRNG output; uniqueness rests on the
//!   birthday bound, not on coordination between callers
//! - The prefix registry is closed: each entity kind has a fixed prefix,
//!   and typed IDs make cross-kind mixups a compile error
//! - IDs are plain strings, safe in URLs and file names without escaping
//!
//! ## ID Format
//!
//! Prefixed IDs use the format `{prefix}_{base58 payload}`, where the
//! payload is 20 bytes: a 4-byte big-endian millisecond offset from a
//! fixed epoch, followed by 16 random bytes.
//!
//! Examples:
//! - `recipe_4QmToXnrbJsLuhYBRB6qFMoqPRp`
//! - `acc_2fJq8mXznRv5WtB3hKdG9pLcYSe`
//! - `msg_3xVbN7TkWmPqA5yE2HdZgCrJh8M`
//!
//! This format provides:
//! - Type safety (prefix indicates entity kind)
//! - Approximate sortability (newer IDs mostly sort after older ones;
//!   base58 does not pad output width, so ordering is not guaranteed)
//! - Uniqueness (128 bits of randomness)
//! - Human readability (clear prefixes, no ambiguous characters)
//!
//! Bare IDs (no prefix, no timestamp) are available for callers that only
//! need a short random token; see [`new_id_without_prefix`].

pub mod base58;
mod error;
mod generate;
mod kind;
mod macros;
mod parse;
mod types;

pub use error::IdError;
pub use generate::{
    new_id, new_id_without_prefix, Clock, IdGenerator, RawId, SystemClock, EPOCH_MILLIS,
    PAYLOAD_LEN,
};
pub use kind::Kind;
pub use parse::{parse, ParsedId};
pub use types::*;
