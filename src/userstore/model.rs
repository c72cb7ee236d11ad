use crate::error::{Result, UserStoreError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// A single user record.
///
/// Decoding is lenient: keys match field names case-insensitively, a `null`
/// or missing field keeps its zero value, and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct User {
    pub id: String,
    pub email: String,
    pub age: i64,
}

impl TryFrom<Map<String, Value>> for User {
    type Error = String;

    fn try_from(object: Map<String, Value>) -> std::result::Result<Self, Self::Error> {
        let mut user = User::default();
        for (key, value) in object {
            if value.is_null() {
                continue;
            }
            let invalid = |e: serde_json::Error| format!("field `{}`: {}", key, e);
            if key.eq_ignore_ascii_case("id") {
                user.id = serde_json::from_value(value).map_err(invalid)?;
            } else if key.eq_ignore_ascii_case("email") {
                user.email = serde_json::from_value(value).map_err(invalid)?;
            } else if key.eq_ignore_ascii_case("age") {
                user.age = serde_json::from_value(value).map_err(invalid)?;
            }
        }
        Ok(user)
    }
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            age,
        }
    }

    /// Decode a user from its JSON form, as passed through `-item`.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(UserStoreError::Decode)
    }
}

// The rejection message does not name the operation that was asked for.
pub const OPERATION_NOT_ALLOWED: &str = "Operation abcd not allowed!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    List,
    FindById,
    Remove,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::List,
        Operation::FindById,
        Operation::Remove,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::List => "list",
            Operation::FindById => "findById",
            Operation::Remove => "remove",
        }
    }

    /// Whether the operation rewrites the backing file.
    pub fn is_mutating(&self) -> bool {
        matches!(self, Operation::Add | Operation::Remove)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = UserStoreError;

    fn from_str(s: &str) -> Result<Self> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UserStoreError::validation(OPERATION_NOT_ALLOWED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_operation_name() {
        for op in Operation::ALL {
            assert_eq!(op.as_str().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn operation_names_are_case_sensitive() {
        assert!("findbyid".parse::<Operation>().is_err());
        assert!("ADD".parse::<Operation>().is_err());
    }

    #[test]
    fn unknown_operation_is_a_validation_error() {
        let err = "update".parse::<Operation>().unwrap_err();
        assert!(matches!(err, UserStoreError::Validation(_)));
        assert_eq!(err.to_string(), "Operation abcd not allowed!");
    }

    #[test]
    fn user_serializes_fields_in_order() {
        let user = User::new("1", "a@b.com", 30);
        assert_eq!(
            serde_json::to_string(&user).unwrap(),
            r#"{"id":"1","email":"a@b.com","age":30}"#
        );
    }

    #[test]
    fn missing_fields_default_to_zero_values() {
        let user = User::from_json(r#"{"id":"7","extra":true}"#).unwrap();
        assert_eq!(user, User::new("7", "", 0));
    }

    #[test]
    fn null_fields_keep_zero_values() {
        let user = User::from_json(r#"{"id":"1","email":null,"age":null}"#).unwrap();
        assert_eq!(user, User::new("1", "", 0));
    }

    #[test]
    fn keys_match_case_insensitively() {
        let user = User::from_json(r#"{"Id":"1","EMAIL":"a@b.com","Age":30}"#).unwrap();
        assert_eq!(user, User::new("1", "a@b.com", 30));
    }

    #[test]
    fn non_object_item_is_a_decode_error() {
        let err = User::from_json(r#"["1","a@b.com",30]"#).unwrap_err();
        assert!(matches!(err, UserStoreError::Decode(_)));
    }

    #[test]
    fn malformed_item_is_a_decode_error() {
        let err = User::from_json("{not json").unwrap_err();
        assert!(matches!(err, UserStoreError::Decode(_)));

        let err = User::from_json(r#"{"id":"1","age":"thirty"}"#).unwrap_err();
        assert!(matches!(err, UserStoreError::Decode(_)));
    }
}
