//! Squat scorer
//!
//! ## Rule order
//! score = 100 − depth_deduction − torso_deduction, clamped to [0, 100]
//!
//! - depth: knee angle (hip–knee–ankle)
//! - torso: hip angle (shoulder–hip–knee)

use tracing::{debug, warn};

use super::assessment::{
    DepthCheck, Deductions, DetailsRecord, SquatAssessment, SquatScore, TorsoCheck,
};
use crate::config::{DepthThresholds, ScoringConfig, TorsoThresholds, MAX_SCORE, MIN_SCORE};
use crate::error::{Result, ScoreError};
use crate::geometry::{compute_angle, Point2D};

/// Scores squat form from one subject's keypoints
#[derive(Debug, Clone, Default)]
pub struct SquatScorer {
    config: ScoringConfig,
}

impl SquatScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn assess(&self, joints: &[Point2D]) -> SquatAssessment {
        let side = self.config.side.landmarks();
        let required = side.required_len();

        if joints.len() < required {
            warn!(
                "Not enough keypoints to score {} side: need {}, found {}",
                self.config.side,
                required,
                joints.len()
            );
            return SquatAssessment::InsufficientJoints { required, found: joints.len() };
        }

        let shoulder = joints[side.shoulder.index()];
        let hip = joints[side.hip.index()];
        let knee = joints[side.knee.index()];
        let ankle = joints[side.ankle.index()];

        let knee_angle = compute_angle(hip, knee, ankle);
        let hip_angle = compute_angle(shoulder, hip, knee);
        debug!("knee_angle={:.2} hip_angle={:.2}", knee_angle, hip_angle);

        let thresholds = &self.config.thresholds;
        let (depth, depth_check) = depth_deduction(knee_angle, &thresholds.depth);
        let (torso, torso_check) = torso_deduction(hip_angle, &thresholds.torso);

        let mut score = MAX_SCORE;
        score -= depth;
        score -= torso;
        let score = score.clamp(MIN_SCORE, MAX_SCORE);

        SquatAssessment::Scored(SquatScore {
            score,
            knee_angle,
            hip_angle,
            deductions: Deductions { depth, depth_check, torso, torso_check },
        })
    }

    /// Like [`assess`](Self::assess), with missing joints as an error
    pub fn try_assess(&self, joints: &[Point2D]) -> Result<SquatScore> {
        match self.assess(joints) {
            SquatAssessment::Scored(s) => Ok(s),
            SquatAssessment::InsufficientJoints { required, found } => {
                Err(ScoreError::InsufficientJoints { required, found })
            }
        }
    }
}

/// Score a joint set with the default (left side) configuration.
///
/// Returns `(0.0, {"error": 1.0})` when the set is too short.
pub fn score_squat(joints: &[Point2D]) -> (f64, DetailsRecord) {
    SquatScorer::default().assess(joints).into_tuple()
}

fn depth_deduction(knee_angle: f64, t: &DepthThresholds) -> (f64, DepthCheck) {
    if knee_angle < t.min_knee_angle || knee_angle > t.max_knee_angle {
        (t.out_of_range_penalty, DepthCheck::OutOfRange)
    } else {
        let penalty = (knee_angle - t.ideal_knee_angle).abs() * t.graded_penalty_per_degree;
        (penalty, DepthCheck::Graded)
    }
}

fn torso_deduction(hip_angle: f64, t: &TorsoThresholds) -> (f64, TorsoCheck) {
    if hip_angle < t.severe_lean_angle {
        (t.severe_lean_penalty, TorsoCheck::SevereLean)
    } else if hip_angle < t.upright_angle {
        let penalty = (t.upright_angle - hip_angle) * t.graded_penalty_per_degree;
        (penalty, TorsoCheck::Leaning)
    } else {
        (0.0, TorsoCheck::Upright)
    }
}
