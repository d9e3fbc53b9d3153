//! Typed entity identifiers.
//!
//! Every table hands out integer primary keys; wrapping them per entity
//! keeps a `ProductId` from ever standing in for a `UserId`. The wrappers
//! serialize transparently, so wire payloads still carry plain numbers.

/// Define an `i32`-backed identifier newtype.
///
/// The generated type is `Copy`, ordered, hashable, and
/// `#[serde(transparent)]`; it converts to and from `i32` and displays as
/// the bare number (handy for building `/{id}` paths).
///
/// ```rust
/// # use backline_core::define_id;
/// define_id!(ProductId);
/// define_id!(OrderId);
///
/// let id = ProductId::new(7);
/// assert_eq!(id.as_i32(), 7);
/// assert_eq!(id.to_string(), "7");
/// // ProductId and OrderId are distinct types; assigning one to the
/// // other is a compile error.
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

define_id!(ProductId);
define_id!(UserId);
define_id!(PromotionId);
define_id!(BannerId);
define_id!(OrderId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions_roundtrip() {
        let id = ProductId::new(42);
        assert_eq!(id.as_i32(), 42);
        assert_eq!(i32::from(id), 42);
        assert_eq!(ProductId::from(42), id);
    }

    #[test]
    fn test_displays_as_bare_number() {
        assert_eq!(format!("/products/{}", ProductId::new(7)), "/products/7");
    }

    #[test]
    fn test_wire_format_is_a_plain_integer() {
        let id: UserId = serde_json::from_str("3").unwrap();
        assert_eq!(id, UserId::new(3));
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
    }
}
