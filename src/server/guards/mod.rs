pub mod auth;

pub use auth::{RequirePageSession, RequireSession};
