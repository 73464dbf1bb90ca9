//! Typed REST client for the Code Scroller backend.
//!
//! Every operation is a single HTTP round trip: no retry, no caching, no
//! timeout overrides. Failures are normalized into [`ApiError`] with a
//! best-effort message extracted from the response body where the backend
//! provides one.

mod auth;
mod client;
mod error;
mod posts;

pub use auth::{ChangePasswordRequest, LoginCredentials, RegisterData, UpdateProfileRequest};
pub use client::ApiClient;
pub use error::{ApiError, Result};
pub use posts::PostDraft;
