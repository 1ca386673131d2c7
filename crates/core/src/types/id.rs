//! Newtype IDs for type-safe entity references.
//!
//! The loyalty API assigns opaque string identifiers to every record. The
//! `define_id!` macro wraps them in distinct types so a customer ID can
//! never be passed where a log entry ID is expected.

/// Macro to define a type-safe ID wrapper around an opaque server string.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>` and `From<&str>` implementations
///
/// # Example
///
/// ```rust
/// # use emporium_core::define_id;
/// define_id!(WidgetId);
///
/// let id = WidgetId::new("w-42");
/// assert_eq!(id.as_str(), "w-42");
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper, returning the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }
    };
}

define_id!(CustomerId);
define_id!(LogId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let id = CustomerId::new("cus_123");
        assert_eq!(id.as_str(), "cus_123");
        assert_eq!(id.to_string(), "cus_123");
        assert_eq!(id.into_inner(), "cus_123");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = LogId::new("log-9");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"log-9\"");
        let back: LogId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }
}
