//! Common test utilities for img2haiku-rs

pub mod assertions;
pub mod upstream;

pub use fixtures::{bearer, expired_bearer, key_pair, other_key_pair, test_app_state};
pub use upstream::MockUpstream;

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}
