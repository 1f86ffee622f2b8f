//! HTTP request handlers for the mock server.

pub mod bundles;
pub mod envelope;
pub mod links;
pub mod oauth;
pub mod user;

pub use bundles::*;
pub use links::*;
pub use oauth::*;
pub use user::*;
