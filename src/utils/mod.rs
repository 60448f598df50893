//! Utility modules for the haiku service

pub mod error;
pub mod logging;
