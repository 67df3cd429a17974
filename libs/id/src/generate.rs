//! Payload construction and the ID generator.
//!
//! Every ID wraps a 20-byte payload. Prefixed IDs embed a timestamp in the
//! first four bytes so they sort approximately by mint time; bare IDs are
//! fully random.
//!
//! ```text
//! byte  0       4                              20
//!       +-------+-------------------------------+
//!       | t_be  |  random (CSPRNG)              |
//!       +-------+-------------------------------+
//! ```
//!
//! `t_be` is the big-endian millisecond offset from [`EPOCH_MILLIS`],
//! truncated to 32 bits.

use chrono::{DateTime, Utc};
use rand::rngs::ThreadRng;
use rand::RngCore;

use crate::base58;
use crate::error::IdError;
use crate::kind::Kind;

/// The reference epoch, in milliseconds since the Unix epoch.
///
/// The epoch starts recently (2023-11-14T22:13:20Z) so that the 32-bit
/// offset space gives a significantly higher useful lifetime of around
/// 136 years. Offsets wrap beyond that horizon; this is an accepted
/// boundary, not defended against.
pub const EPOCH_MILLIS: i64 = 1_700_000_000_000;

/// Payload size in bytes: 4 timestamp bytes plus 16 random bytes.
pub const PAYLOAD_LEN: usize = 20;

/// Number of leading payload bytes holding the timestamp offset.
const TIMESTAMP_LEN: usize = 4;

/// A raw 20-byte ID payload.
///
/// This is the decoded form of the base58 portion of an ID string. For
/// payloads minted with a timestamp, the first four bytes are the
/// big-endian millisecond offset from [`EPOCH_MILLIS`]. Bare payloads are
/// entirely random, so their timestamp accessors return whatever the
/// leading random bytes happen to spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RawId([u8; PAYLOAD_LEN]);

impl RawId {
    /// Creates a payload from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; PAYLOAD_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the payload bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; PAYLOAD_LEN] {
        &self.0
    }

    /// Consumes the payload, returning its bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; PAYLOAD_LEN] {
        self.0
    }

    /// Returns the embedded millisecond offset from [`EPOCH_MILLIS`].
    #[must_use]
    pub fn timestamp_offset_ms(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// Returns the embedded timestamp in milliseconds since the Unix epoch.
    ///
    /// Mint times past the 32-bit horizon wrap, so the reconstructed value
    /// is only exact modulo that horizon.
    #[must_use]
    pub fn timestamp_ms(&self) -> i64 {
        EPOCH_MILLIS + i64::from(self.timestamp_offset_ms())
    }

    /// Returns the embedded timestamp as a UTC datetime.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        // EPOCH_MILLIS plus a u32 offset is always within chrono's range.
        DateTime::from_timestamp_millis(self.timestamp_ms()).unwrap_or_default()
    }

    /// Encodes the payload as a base58 string.
    #[must_use]
    pub fn encode(&self) -> String {
        base58::encode(&self.0)
    }

    /// Decodes a base58 string into a payload.
    ///
    /// Fails unless the input decodes to exactly [`PAYLOAD_LEN`] bytes.
    pub fn from_encoded(encoded: &str) -> Result<Self, IdError> {
        let bytes = base58::decode(encoded)?;
        let len = bytes.len();
        let buf: [u8; PAYLOAD_LEN] = bytes.try_into().map_err(|_| IdError::InvalidLength {
            expected: PAYLOAD_LEN,
            actual: len,
        })?;
        Ok(Self(buf))
    }
}

/// A source of the current wall-clock time.
///
/// Injected into [`IdGenerator`] so tests can substitute a fixed clock.
pub trait Clock {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Generator for ID payloads and rendered ID strings.
///
/// The entropy source and clock are construction-time collaborators:
/// production callers use [`IdGenerator::new`] (thread-local CSPRNG plus
/// the system clock), tests inject deterministic substitutes through
/// [`IdGenerator::with_parts`].
///
/// Generation is stateless: calls share nothing beyond the entropy source,
/// so any number of generators may run concurrently without coordination.
/// Uniqueness rests on 16 random bytes per ID (birthday bound), not on
/// coordination between callers.
#[derive(Debug, Clone)]
pub struct IdGenerator<R = ThreadRng, C = SystemClock> {
    rng: R,
    clock: C,
}

impl IdGenerator {
    /// Creates a generator backed by the thread-local CSPRNG and the
    /// system clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: rand::rng(),
            clock: SystemClock,
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore, C: Clock> IdGenerator<R, C> {
    /// Creates a generator from an explicit entropy source and clock.
    pub const fn with_parts(rng: R, clock: C) -> Self {
        Self { rng, clock }
    }

    /// Mints a timestamped payload: 16 random bytes behind a 4-byte
    /// big-endian millisecond offset from [`EPOCH_MILLIS`].
    pub fn payload(&mut self) -> RawId {
        let mut buf = [0u8; PAYLOAD_LEN];
        self.rng.fill_bytes(&mut buf);

        // Truncation to u32 wraps past the epoch horizon, as documented.
        let t = self.clock.now_millis().wrapping_sub(EPOCH_MILLIS) as u32;
        buf[..TIMESTAMP_LEN].copy_from_slice(&t.to_be_bytes());

        RawId(buf)
    }

    /// Mints a fully random payload with no embedded timestamp.
    pub fn payload_untimestamped(&mut self) -> RawId {
        let mut buf = [0u8; PAYLOAD_LEN];
        self.rng.fill_bytes(&mut buf);
        RawId(buf)
    }

    /// Mints a prefixed ID string for the given kind.
    ///
    /// The result is `{prefix}_{base58 payload}`. Prefixed IDs sort
    /// approximately by mint time: the timestamp occupies the most
    /// significant payload bytes, but base58 output width varies with
    /// payload magnitude, so string ordering is not guaranteed to match
    /// mint order for every pair.
    pub fn prefixed(&mut self, kind: Kind) -> String {
        format!("{}_{}", kind.prefix(), self.payload().encode())
    }

    /// Mints a bare ID string truncated to at most `max_len` characters.
    ///
    /// The payload carries no timestamp, so bare IDs are not
    /// time-sortable. A `max_len` of zero yields an empty string.
    pub fn unprefixed(&mut self, max_len: usize) -> String {
        let mut encoded = self.payload_untimestamped().encode();
        encoded.truncate(max_len);
        encoded
    }
}

/// Mints a prefixed ID for the given kind with the default generator.
#[must_use]
pub fn new_id(kind: Kind) -> String {
    IdGenerator::new().prefixed(kind)
}

/// Mints a bare ID of at most `max_len` characters with the default
/// generator.
#[must_use]
pub fn new_id_without_prefix(max_len: usize) -> String {
    IdGenerator::new().unprefixed(max_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base58::ALPHABET;

    /// Deterministic entropy source cycling over a fixed pattern.
    struct PatternRng(u8);

    impl RngCore for PatternRng {
        fn next_u32(&mut self) -> u32 {
            let mut buf = [0u8; 4];
            self.fill_bytes(&mut buf);
            u32::from_le_bytes(buf)
        }

        fn next_u64(&mut self) -> u64 {
            let mut buf = [0u8; 8];
            self.fill_bytes(&mut buf);
            u64::from_le_bytes(buf)
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for byte in dst {
                *byte = self.0;
                self.0 = self.0.wrapping_add(1);
            }
        }
    }

    /// Clock pinned to a fixed instant.
    struct FixedClock(i64);

    impl Clock for FixedClock {
        fn now_millis(&self) -> i64 {
            self.0
        }
    }

    fn is_base58(s: &str) -> bool {
        s.bytes().all(|b| ALPHABET.contains(&b))
    }

    #[test]
    fn test_prefixed_format() {
        let mut generator = IdGenerator::new();
        for kind in Kind::ALL {
            let id = generator.prefixed(kind);
            let (prefix, encoded) = id.split_once('_').unwrap();
            assert_eq!(prefix, kind.prefix());
            assert!(!encoded.is_empty());
            assert!(is_base58(encoded), "non-base58 output: {id}");
        }
    }

    #[test]
    fn test_successive_ids_differ() {
        let mut generator = IdGenerator::new();
        let a = generator.prefixed(Kind::Recipe);
        let b = generator.prefixed(Kind::Recipe);
        assert_ne!(a, b);
    }

    #[test]
    fn test_account_ids_unique_at_volume() {
        let mut generator = IdGenerator::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..10_000 {
            let id = generator.prefixed(Kind::Account);
            assert!(id.starts_with("acc_"));
            assert!(seen.insert(id), "duplicate ID generated");
        }
    }

    #[test]
    fn test_unprefixed_lengths() {
        let mut generator = IdGenerator::new();
        assert_eq!(generator.unprefixed(0), "");

        let five = generator.unprefixed(5);
        assert_eq!(five.len(), 5);
        assert!(is_base58(&five));

        // 20 bytes encode to at most 28 base58 characters, so a large
        // bound returns the full encoding untruncated.
        let full = generator.unprefixed(1000);
        assert!(full.len() <= 28);
        assert!(is_base58(&full));
    }

    #[test]
    fn test_payload_layout_is_timestamp_then_random() {
        let mut generator = IdGenerator::with_parts(PatternRng(10), FixedClock(EPOCH_MILLIS + 7));
        let raw = generator.payload();

        assert_eq!(raw.timestamp_offset_ms(), 7);
        // The random fill starts at 10 and the first four bytes are
        // overwritten by the timestamp, so bytes 4.. keep the pattern.
        let expected: Vec<u8> = (14..30).collect();
        assert_eq!(&raw.as_bytes()[4..], expected.as_slice());
    }

    #[test]
    fn test_timestamp_roundtrip_with_fixed_clock() {
        let now = EPOCH_MILLIS + 123_456_789;
        let mut generator = IdGenerator::with_parts(PatternRng(0), FixedClock(now));
        let raw = generator.payload();
        assert_eq!(raw.timestamp_ms(), now);
        assert_eq!(raw.timestamp().timestamp_millis(), now);
    }

    #[test]
    fn test_timestamp_offset_tracks_wall_clock() {
        let before = (Utc::now().timestamp_millis() - EPOCH_MILLIS) as u32;
        let raw = IdGenerator::new().payload();
        let after = (Utc::now().timestamp_millis() - EPOCH_MILLIS) as u32;

        let offset = raw.timestamp_offset_ms();
        assert!(offset >= before && offset <= after);
    }

    #[test]
    fn test_untimestamped_payload_is_pure_rng_output() {
        let mut generator = IdGenerator::with_parts(PatternRng(0), FixedClock(EPOCH_MILLIS));
        let raw = generator.payload_untimestamped();
        let expected: Vec<u8> = (0..20).collect();
        assert_eq!(raw.as_bytes().as_slice(), expected.as_slice());
    }

    #[test]
    fn test_convenience_functions() {
        let id = new_id(Kind::Message);
        assert!(id.starts_with("msg_"));

        let bare = new_id_without_prefix(8);
        assert_eq!(bare.len(), 8);
        assert!(is_base58(&bare));
    }
}
