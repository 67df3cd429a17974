//! Parsing rendered ID strings back into kind and payload.

use crate::error::IdError;
use crate::generate::RawId;
use crate::kind::Kind;

/// A parsed prefixed ID: the registry kind plus the decoded payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedId {
    /// The kind the ID was minted for, recovered from the prefix.
    pub kind: Kind,
    /// The decoded 20-byte payload.
    pub raw: RawId,
}

impl ParsedId {
    /// Returns the embedded timestamp in milliseconds since the Unix
    /// epoch.
    #[must_use]
    pub fn timestamp_ms(&self) -> i64 {
        self.raw.timestamp_ms()
    }

    /// Returns the embedded timestamp as a UTC datetime.
    #[must_use]
    pub fn timestamp(&self) -> chrono::DateTime<chrono::Utc> {
        self.raw.timestamp()
    }
}

impl std::fmt::Display for ParsedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.kind.prefix(), self.raw.encode())
    }
}

/// Parses a prefixed ID string into its kind and payload.
///
/// The input must be `{prefix}_{base58 payload}` with a registered prefix
/// and a payload that decodes to exactly 20 bytes.
pub fn parse(s: &str) -> Result<ParsedId, IdError> {
    if s.is_empty() {
        return Err(IdError::Empty);
    }

    let Some((prefix, encoded)) = s.split_once('_') else {
        return Err(IdError::MissingSeparator);
    };

    let kind = Kind::from_prefix(prefix)?;
    let raw = RawId::from_encoded(encoded)?;

    Ok(ParsedId { kind, raw })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{new_id, IdGenerator, EPOCH_MILLIS};

    #[test]
    fn test_parse_roundtrip() {
        for kind in Kind::ALL {
            let id = new_id(kind);
            let parsed = parse(&id).unwrap();
            assert_eq!(parsed.kind, kind);
            assert_eq!(parsed.to_string(), id);
        }
    }

    #[test]
    fn test_parse_recovers_mint_time() {
        let before = chrono::Utc::now().timestamp_millis();
        let id = new_id(Kind::Account);
        let after = chrono::Utc::now().timestamp_millis();

        let parsed = parse(&id).unwrap();
        let offset = parsed.raw.timestamp_offset_ms();
        assert!(offset >= (before - EPOCH_MILLIS) as u32);
        assert!(offset <= (after - EPOCH_MILLIS) as u32);
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(parse(""), Err(IdError::Empty)));
    }

    #[test]
    fn test_parse_missing_separator() {
        let result = parse("recipe4QmToXnrbJsLuhYBRB6qFMoq");
        assert!(matches!(result, Err(IdError::MissingSeparator)));
    }

    #[test]
    fn test_parse_unknown_prefix() {
        let encoded = IdGenerator::new().payload().encode();
        let result = parse(&format!("blog_{encoded}"));
        assert!(matches!(result, Err(IdError::UnknownPrefixKind(_))));
    }

    #[test]
    fn test_parse_invalid_character() {
        let result = parse("acc_000000");
        assert!(matches!(result, Err(IdError::InvalidCharacter { .. })));
    }

    #[test]
    fn test_parse_wrong_payload_length() {
        let result = parse("acc_2NEpo7TZRRrLZSi2U");
        assert!(matches!(
            result,
            Err(IdError::InvalidLength {
                expected: 20,
                actual: 12
            })
        ));
    }
}
