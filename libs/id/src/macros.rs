//! Macros for defining typed ID types.

/// Macro to define a typed ID bound to a registry kind.
///
/// This generates a newtype wrapper around the raw payload with:
/// - `KIND` and `PREFIX` constants
/// - `new()` to mint a fresh timestamped ID
/// - `parse()` to parse from string, rejecting other kinds' prefixes
/// - `timestamp()` / `timestamp_ms()` accessors
/// - `Display` and `FromStr` implementations
/// - `Serialize` and `Deserialize` implementations
/// - `Ord`, `Hash`, and other standard traits
///
/// # Example
///
/// ```ignore
/// define_id!(RecipeId, Recipe);
/// define_id!(AccountId, Account);
///
/// let recipe_id = RecipeId::new();
/// let parsed: RecipeId = "recipe_4QmToXnrbJsLuhYBRB6qFMoqPRp".parse()?;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $kind:ident) => {
        /// A typed ID for this entity kind.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($crate::RawId);

        impl $name {
            /// The registry kind for this ID type.
            pub const KIND: $crate::Kind = $crate::Kind::$kind;

            /// The prefix for this ID type.
            pub const PREFIX: &'static str = $crate::Kind::$kind.prefix();

            /// Mints a new ID with a fresh timestamped payload.
            #[must_use]
            pub fn new() -> Self {
                Self($crate::IdGenerator::new().payload())
            }

            /// Creates an ID from a raw payload.
            #[must_use]
            pub const fn from_raw(raw: $crate::RawId) -> Self {
                Self(raw)
            }

            /// Returns the underlying payload.
            #[must_use]
            pub const fn raw(&self) -> $crate::RawId {
                self.0
            }

            /// Returns the embedded mint time in milliseconds since the
            /// Unix epoch.
            #[must_use]
            pub fn timestamp_ms(&self) -> i64 {
                self.0.timestamp_ms()
            }

            /// Returns the embedded mint time as a UTC datetime.
            #[must_use]
            pub fn timestamp(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.0.timestamp()
            }

            /// Parses an ID from a string.
            ///
            /// The string must be in the format `{prefix}_{payload}` with
            /// this type's own prefix.
            pub fn parse(s: &str) -> Result<Self, $crate::IdError> {
                if s.is_empty() {
                    return Err($crate::IdError::Empty);
                }

                let Some((prefix, encoded)) = s.split_once('_') else {
                    return Err($crate::IdError::MissingSeparator);
                };

                if prefix != Self::PREFIX {
                    return Err($crate::IdError::InvalidPrefix {
                        expected: Self::PREFIX,
                        actual: prefix.to_string(),
                    });
                }

                let raw = $crate::RawId::from_encoded(encoded)?;

                Ok(Self(raw))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}_{}", Self::PREFIX, self.0.encode())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }

        impl AsRef<$crate::RawId> for $name {
            fn as_ref(&self) -> &$crate::RawId {
                &self.0
            }
        }
    };
}
