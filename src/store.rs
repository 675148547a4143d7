//! User lookup seam
//!
//! The handler resolves profiles through [`UserStore`] so response shaping
//! stays independent of where the records live. The only implementation
//! today is [`StaticUserStore`], a stand-in that serves fixed name fields
//! and echoes the requested id until the real profile table is wired in.

use std::error::Error as StdError;
use std::fmt;

use crate::user::UserProfile;

/// Errors a profile lookup can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookupError {
    /// No user exists under the requested id.
    NotFound {
        /// The id that matched nothing.
        user_id: String,
    },
}

impl fmt::Display for UserLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserLookupError::NotFound { user_id } => {
                write!(f, "no user found for id {}", user_id)
            }
        }
    }
}

impl StdError for UserLookupError {}

/// Resolves a user id to a profile.
pub trait UserStore {
    /// Look up the profile stored under `user_id`.
    fn lookup_user(&self, user_id: &str) -> Result<UserProfile, UserLookupError>;
}

/// Stub store serving one fixed profile for every id.
#[derive(Debug, Clone)]
pub struct StaticUserStore {
    first_name: &'static str,
    last_name: &'static str,
}

impl StaticUserStore {
    /// Create the stub store with its fixed name fields.
    pub fn new() -> Self {
        StaticUserStore {
            first_name: "Sergey",
            last_name: "Kargopolov",
        }
    }
}

impl Default for StaticUserStore {
    fn default() -> Self {
        StaticUserStore::new()
    }
}

impl UserStore for StaticUserStore {
    fn lookup_user(&self, user_id: &str) -> Result<UserProfile, UserLookupError> {
        Ok(UserProfile {
            first_name: self.first_name.to_owned(),
            last_name: self.last_name.to_owned(),
            id: user_id.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{StaticUserStore, UserLookupError, UserStore};

    #[test]
    fn echoes_requested_id() {
        let store = StaticUserStore::new();
        let profile = store.lookup_user("123").expect("stub lookup cannot fail");
        assert_eq!(profile.first_name, "Sergey");
        assert_eq!(profile.last_name, "Kargopolov");
        assert_eq!(profile.id, "123");
    }

    #[test]
    fn name_fields_do_not_vary_with_the_id() {
        let store = StaticUserStore::new();
        let a = store.lookup_user("a").unwrap();
        let b = store.lookup_user("b").unwrap();
        assert_eq!(a.first_name, b.first_name);
        assert_eq!(a.last_name, b.last_name);
    }

    #[test]
    fn not_found_formats_the_offending_id() {
        let err = UserLookupError::NotFound {
            user_id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "no user found for id 42");
    }
}
