//! # Scoring Configuration
//!
//! Groups the body side the scorer reads with the rule thresholds.
//!
//! ## Usage
//! ```rust
//! use squat_core::config::ScoringConfig;
//! use squat_core::BodySide;
//!
//! let config = ScoringConfig::default();
//! assert_eq!(config.side, BodySide::Left);
//!
//! let right = ScoringConfig::for_side(BodySide::Right);
//! assert_eq!(right.side, BodySide::Right);
//! ```
//!
//! ## Environment Variables
//!
//! - `SQUAT_BODY_SIDE`: `left` (default) or `right`

mod thresholds_config;

pub use thresholds_config::{
    DepthThresholds, ScoringThresholds, TorsoThresholds, MAX_SCORE, MIN_SCORE,
};

use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

use crate::landmarks::BodySide;

/// Environment variable selecting the scored body side
pub const SIDE_ENV_VAR: &str = "SQUAT_BODY_SIDE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScoringConfig {
    /// Body side whose shoulder/hip/knee/ankle are scored
    #[serde(default)]
    pub side: BodySide,
    #[serde(default)]
    pub thresholds: ScoringThresholds,
}

impl ScoringConfig {
    pub fn for_side(side: BodySide) -> Self {
        Self { side, ..Self::default() }
    }

    /// Load the side from `SQUAT_BODY_SIDE` or fall back to the default
    pub fn from_env_or_default() -> Self {
        match env::var(SIDE_ENV_VAR) {
            Ok(raw) => Self::from_side_str(&raw),
            Err(_) => Self::default(),
        }
    }

    fn from_side_str(raw: &str) -> Self {
        match raw.parse::<BodySide>() {
            Ok(side) => Self::for_side(side),
            Err(e) => {
                warn!("{}={:?} ignored: {}", SIDE_ENV_VAR, raw, e);
                Self::default()
            }
        }
    }
}

// ========== Tests ==========
