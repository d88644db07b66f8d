//! External Identifiers
//!
//! The cart API hands out ids as JSON numbers in some payloads and strings in
//! others. Equality and hashing use the textual form, so `7` and `"7"` name the
//! same product. Serialization writes the id back in the kind it arrived as.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier assigned by a remote system
#[derive(Debug, Clone, Eq)]
pub struct ExternalId {
    text: String,
    numeric: bool,
}

impl ExternalId {
    pub fn text(value: impl Into<String>) -> Self {
        Self { text: value.into(), numeric: false }
    }

    pub fn number(value: i64) -> Self {
        Self { text: value.to_string(), numeric: true }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_numeric(&self) -> bool {
        self.numeric
    }
}

impl PartialEq for ExternalId {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Hash for ExternalId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for ExternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for ExternalId {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for ExternalId {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl From<i64> for ExternalId {
    fn from(value: i64) -> Self {
        Self::number(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Number(i64),
    Text(String),
}

impl Serialize for ExternalId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.text.parse::<i64>() {
            Ok(n) if self.numeric => serializer.serialize_i64(n),
            _ => serializer.serialize_str(&self.text),
        }
    }
}

impl<'de> Deserialize<'de> for ExternalId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match IdRepr::deserialize(deserializer)? {
            IdRepr::Number(n) => Self::number(n),
            IdRepr::Text(s) => Self::text(s),
        })
    }
}

/// Catalog product identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub ExternalId);

/// Server-side cart entry identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartItemId(pub ExternalId);

impl ProductId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl CartItemId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for CartItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

macro_rules! id_conversions {
    ($name:ident) => {
        impl From<ExternalId> for $name {
            fn from(value: ExternalId) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(ExternalId::text(value))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(ExternalId::text(value))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(ExternalId::number(value))
            }
        }
    };
}

id_conversions!(ProductId);
id_conversions!(CartItemId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_and_string_forms_are_equal() {
        let from_catalog: ProductId = serde_json::from_str("42").unwrap();
        let from_cart: ProductId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(from_catalog, from_cart);
        assert!(from_catalog.0.is_numeric());
        assert!(!from_cart.0.is_numeric());
    }

    #[test]
    fn test_serializes_in_original_kind() {
        assert_eq!(serde_json::to_string(&ProductId::from(7i64)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&ProductId::from("sku-7")).unwrap(), "\"sku-7\"");
    }

    #[test]
    fn test_display_uses_text() {
        assert_eq!(CartItemId::from(99i64).to_string(), "99");
        assert_eq!(CartItemId::from("abc").as_str(), "abc");
    }
}
