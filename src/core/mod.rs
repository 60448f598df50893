//! Core functionality for the haiku service
//!
//! `compose` holds the request model and prompt rendering; `providers`
//! talks to the upstream vision model.

pub mod compose;
pub mod providers;
