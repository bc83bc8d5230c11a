//! Credential hashing and the stateless session cookie.

pub mod password;
pub mod session;

pub use password::{hash_password, verify_password};
pub use session::{SESSION_COOKIE, SessionClaims, read_session, removal_cookie, session_cookie};
