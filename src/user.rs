//! User profile record

use serde::{Deserialize, Serialize};

/// A user profile as served by the users API.
///
/// The wire form uses camelCase member names in declaration order:
/// `{"firstName":"…","lastName":"…","id":"…"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Identifier the profile was requested under.
    pub id: String,
}
