//! # squat_core - Squat Form Scoring
//!
//! Scores a squat from one subject's 2D body keypoints (COCO-17 order, as
//! produced by an external pose detector).
//!
//! ## Features
//! - Joint angles via the normalized dot product
//! - Deduction-based 0–100 score from knee depth and torso lean
//! - Typed result separating "scored" from "not enough joints"
//! - Schema-versioned JSON API
//!
//! ```rust
//! use squat_core::{score_squat, Point2D};
//!
//! let joints = vec![Point2D::new(0.0, 0.0); 4];
//! let (score, details) = score_squat(&joints);
//! assert_eq!(score, 0.0);
//! assert_eq!(details["error"], 1.0);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod geometry;
pub mod landmarks;
pub mod scoring;

pub use api::{score_squat_json, SquatRequest, SquatResponse};
pub use config::{ScoringConfig, ScoringThresholds};
pub use error::{Result, ScoreError};
pub use geometry::{compute_angle, Point2D};
pub use landmarks::{BodySide, Landmark, SideLandmarks, LANDMARK_CONVENTION};
pub use scoring::{score_squat, DetailsRecord, SquatAssessment, SquatScore, SquatScorer};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
