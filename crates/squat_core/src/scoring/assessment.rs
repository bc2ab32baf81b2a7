//! Scoring results
//!
//! `SquatAssessment` keeps "scored zero" and "could not score" apart. The
//! flat details map (`{"knee_angle", "hip_angle"}` or `{"error": 1.0}`) is
//! rendered from it for callers that consume the map form.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const KNEE_ANGLE_KEY: &str = "knee_angle";
pub const HIP_ANGLE_KEY: &str = "hip_angle";
pub const ERROR_KEY: &str = "error";

/// Measurement label → value
pub type DetailsRecord = BTreeMap<String, f64>;

/// Which branch of the depth rule fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthCheck {
    /// Knee angle inside the admissible band, graded by distance from ideal
    Graded,
    /// Too shallow or too deep; flat penalty
    OutOfRange,
}

/// Which branch of the torso rule fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TorsoCheck {
    Upright,
    Leaning,
    SevereLean,
}

/// Points removed by each rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Deductions {
    pub depth: f64,
    pub depth_check: DepthCheck,
    pub torso: f64,
    pub torso_check: TorsoCheck,
}

impl Deductions {
    pub fn total(&self) -> f64 {
        self.depth + self.torso
    }
}

/// A successfully scored squat
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SquatScore {
    /// Final score in [0, 100]
    pub score: f64,
    /// Angle at the knee between hip and ankle (degrees)
    pub knee_angle: f64,
    /// Angle at the hip between shoulder and knee (degrees)
    pub hip_angle: f64,
    pub deductions: Deductions,
}

impl SquatScore {
    pub fn details(&self) -> DetailsRecord {
        let mut details = DetailsRecord::new();
        details.insert(KNEE_ANGLE_KEY.to_string(), self.knee_angle);
        details.insert(HIP_ANGLE_KEY.to_string(), self.hip_angle);
        details
    }
}

/// Outcome of scoring one joint set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SquatAssessment {
    Scored(SquatScore),
    /// The joint set is too short to contain all four required landmarks
    InsufficientJoints { required: usize, found: usize },
}

impl SquatAssessment {
    /// Score, with the insufficient case reported as 0.0
    pub fn score(&self) -> f64 {
        match self {
            SquatAssessment::Scored(s) => s.score,
            SquatAssessment::InsufficientJoints { .. } => 0.0,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SquatAssessment::InsufficientJoints { .. })
    }

    pub fn as_scored(&self) -> Option<&SquatScore> {
        match self {
            SquatAssessment::Scored(s) => Some(s),
            SquatAssessment::InsufficientJoints { .. } => None,
        }
    }

    /// Angle map on success, `{"error": 1.0}` otherwise
    pub fn details(&self) -> DetailsRecord {
        match self {
            SquatAssessment::Scored(s) => s.details(),
            SquatAssessment::InsufficientJoints { .. } => {
                let mut details = DetailsRecord::new();
                details.insert(ERROR_KEY.to_string(), 1.0);
                details
            }
        }
    }

    pub fn into_tuple(self) -> (f64, DetailsRecord) {
        (self.score(), self.details())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored() -> SquatAssessment {
        SquatAssessment::Scored(SquatScore {
            score: 85.0,
            knee_angle: 100.0,
            hip_angle: 120.0,
            deductions: Deductions {
                depth: 5.0,
                depth_check: DepthCheck::Graded,
                torso: 10.0,
                torso_check: TorsoCheck::Leaning,
            },
        })
    }

    #[test]
    fn test_scored_details_have_both_angles() {
        let details = scored().details();
        assert_eq!(details.len(), 2);
        assert_eq!(details[KNEE_ANGLE_KEY], 100.0);
        assert_eq!(details[HIP_ANGLE_KEY], 120.0);
        assert!(!details.contains_key(ERROR_KEY));
    }

    #[test]
    fn test_insufficient_details_is_error_only() {
        let a = SquatAssessment::InsufficientJoints { required: 16, found: 3 };
        assert!(a.is_error());
        assert!(a.as_scored().is_none());
        let (score, details) = a.into_tuple();
        assert_eq!(score, 0.0);
        assert_eq!(details.len(), 1);
        assert_eq!(details[ERROR_KEY], 1.0);
    }

    #[test]
    fn test_deductions_total() {
        let s = scored();
        assert!((s.as_scored().unwrap().deductions.total() - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_assessment_serializes_with_status_tag() {
        let a = SquatAssessment::InsufficientJoints { required: 16, found: 0 };
        let json = serde_json::to_value(a).unwrap();
        assert_eq!(json["status"], "insufficient_joints");
        assert_eq!(json["required"], 16);

        let json = serde_json::to_value(scored()).unwrap();
        assert_eq!(json["status"], "scored");
        assert_eq!(json["deductions"]["torso_check"], "leaning");
    }
}
