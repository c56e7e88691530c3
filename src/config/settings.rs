//! Application settings loaded from environment variables.

use std::env;

use super::constants::{DEFAULT_BCRYPT_COST, MAX_BCRYPT_COST, MIN_BCRYPT_COST};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Cost factor used when hashing new credentials
    pub bcrypt_cost: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if BCRYPT_COST is set outside the range the algorithm accepts.
    /// An out-of-range cost is a deployment defect and every subsequent
    /// write would fail, so refusing to start is the only sane behavior.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let bcrypt_cost = env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_BCRYPT_COST);

        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            panic!(
                "BCRYPT_COST must be between {} and {}, got {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST, bcrypt_cost
            );
        }

        Self { bcrypt_cost }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}
