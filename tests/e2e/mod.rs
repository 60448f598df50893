//! End-to-end tests for img2haiku-rs
//!
//! These tests call the real upstream model.
//! Run with: cargo test -- --ignored
//!
//! Required environment variables:
//! - OPENAI_API_KEY: upstream key
//! - HAIKU_E2E_IMAGE: path to a JPEG to describe

pub mod compose_live;
