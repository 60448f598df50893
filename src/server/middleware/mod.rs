//! Request guards run by handlers before any work is done

mod auth;

pub use auth::authenticate;
