use crate::error::{Result, UserStoreError};
use crate::model::User;

/// Position of the first user with `id`, scanning in stored order.
pub fn find_position(users: &[User], id: &str) -> Option<usize> {
    users.iter().position(|u| u.id == id)
}

/// Reject an empty flag value with the message the CLI prints for it.
pub fn require_flag<'a>(flag: &str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(UserStoreError::validation(format!(
            "-{} flag has to be specified",
            flag
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_wins() {
        let users = vec![
            User::new("1", "first@x.com", 1),
            User::new("2", "b@x.com", 2),
            User::new("1", "second@x.com", 3),
        ];
        assert_eq!(find_position(&users, "1"), Some(0));
        assert_eq!(find_position(&users, "2"), Some(1));
        assert_eq!(find_position(&users, "3"), None);
    }

    #[test]
    fn empty_flag_is_rejected() {
        let err = require_flag("id", "").unwrap_err();
        assert_eq!(err.to_string(), "-id flag has to be specified");
        assert_eq!(require_flag("id", "42").unwrap(), "42");
    }
}
