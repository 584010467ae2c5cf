//! Document identifiers.
//!
//! Every persisted record is keyed by a random v4 UUID written in its simple form: 32 lowercase
//! hex characters, no hyphens. The same text is the document key in the store and the `_id`
//! field on the wire.

use uuid::Uuid;

/// A path or body value that is not a well-formed document id.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid id: {0:?}")]
pub struct InvalidId(pub String);

pub(crate) fn parse_simple(s: &str) -> Result<Uuid, InvalidId> {
    let well_formed = s.len() == 32 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));
    if !well_formed {
        return Err(InvalidId(s.to_string()));
    }
    Uuid::try_parse(s).map_err(|_| InvalidId(s.to_string()))
}

/// Declares a type-safe document id newtype.
macro_rules! document_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(uuid::Uuid);

        impl $name {
            /// A fresh random id.
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0.simple())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::model::id::InvalidId;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $crate::model::id::parse_simple(s).map(Self)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::model::id::InvalidId;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.to_string()
            }
        }
    };
}

pub(crate) use document_id;

#[cfg(test)]
mod tests {
    use super::*;

    document_id!(TestId);

    #[test]
    fn generated_ids_are_32_lowercase_hex() {
        let id = TestId::generate().to_string();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(id.parse::<TestId>().unwrap().to_string(), id);
    }

    #[test]
    fn rejects_other_spellings() {
        let id = TestId::generate();
        let hyphenated = uuid::Uuid::parse_str(&id.to_string()).unwrap().hyphenated().to_string();
        assert!(hyphenated.parse::<TestId>().is_err());
        assert!(id.to_string().to_uppercase().parse::<TestId>().is_err());
        assert_eq!("nope".parse::<TestId>(), Err(InvalidId("nope".to_string())));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = TestId::generate();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::Value::String(id.to_string()));
        assert!(serde_json::from_value::<TestId>(serde_json::json!("xyz")).is_err());
    }
}
