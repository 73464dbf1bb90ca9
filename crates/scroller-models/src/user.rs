use serde::{Deserialize, Serialize};

/// Email address that is always treated as an admin account.
///
/// This is a client-side policy, not a backend-verified claim: the backend
/// asserts roles on its own, and this constant only mirrors the seeded admin
/// account so the UI can gate moderation views. Known security smell, kept
/// deliberately.
pub const ADMIN_EMAIL: &str = "admin@example.com";

/// Account role as reported by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// A registered account. Every field except the role may be absent on
/// partially populated responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub email: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl User {
    /// A user is an admin iff the backend granted the admin role or the
    /// account uses the well-known admin address.
    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin) || self.email.as_deref() == Some(ADMIN_EMAIL)
    }
}

/// Denormalized author snapshot embedded in posts and comments at creation
/// time. Not a live reference: later profile edits do not rewrite it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "avatarUrl", default)]
    pub avatar_url: Option<String>,
}

impl Author {
    /// Build the snapshot the backend expects: display name falling back to
    /// the email address, avatar carried over as-is.
    pub fn snapshot_of(user: &User) -> Self {
        let name = user
            .display_name
            .clone()
            .or_else(|| user.email.clone())
            .unwrap_or_default();
        Self {
            name,
            email: user.email.clone(),
            avatar_url: user.photo_url.clone(),
        }
    }
}

/// Login/register response. Both fields are optional so a partial response
/// can be detected and rejected instead of committing half a session.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}
