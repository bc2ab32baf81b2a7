//! Squat scoring thresholds
//!
//! Every constant the scoring rules use lives here instead of as a magic
//! number in the scorer. Only the standard values ship; there are no
//! presets and nothing calibrates them.
//!
//! | Rule  | Flat deduction when                | Graded deduction otherwise      |
//! |-------|------------------------------------|---------------------------------|
//! | Depth | knee < 60° or knee > 130° (−40)    | 0.5 × \|knee − 90\|              |
//! | Torso | hip < 100° (−30)                   | 0.5 × (140 − hip) while hip < 140 |

use serde::{Deserialize, Serialize};

/// Full score before any deduction
pub const MAX_SCORE: f64 = 100.0;
/// Lowest score a squat can receive
pub const MIN_SCORE: f64 = 0.0;

/// Centralized scoring thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringThresholds {
    /// Knee bend (squat depth) rule
    #[serde(default)]
    pub depth: DepthThresholds,
    /// Hip bend (torso lean) rule
    #[serde(default)]
    pub torso: TorsoThresholds,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self { depth: DepthThresholds::default(), torso: TorsoThresholds::default() }
    }
}

/// Knee angle thresholds (degrees)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthThresholds {
    /// Below this the knee is bent too far
    pub min_knee_angle: f64,
    /// Above this the squat is too shallow
    pub max_knee_angle: f64,
    /// Ideal knee bend
    pub ideal_knee_angle: f64,
    /// Points lost per degree away from the ideal
    pub graded_penalty_per_degree: f64,
    /// Points lost when outside [min, max]
    pub out_of_range_penalty: f64,
}

impl Default for DepthThresholds {
    fn default() -> Self {
        Self {
            min_knee_angle: 60.0,
            max_knee_angle: 130.0,
            ideal_knee_angle: 90.0,
            graded_penalty_per_degree: 0.5,
            out_of_range_penalty: 40.0,
        }
    }
}

/// Hip angle thresholds (degrees)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorsoThresholds {
    /// Below this the torso leans far forward
    pub severe_lean_angle: f64,
    /// At or above this the torso is upright enough
    pub upright_angle: f64,
    /// Points lost per degree below `upright_angle`
    pub graded_penalty_per_degree: f64,
    /// Points lost below `severe_lean_angle`
    pub severe_lean_penalty: f64,
}

impl Default for TorsoThresholds {
    fn default() -> Self {
        Self {
            severe_lean_angle: 100.0,
            upright_angle: 140.0,
            graded_penalty_per_degree: 0.5,
            severe_lean_penalty: 30.0,
        }
    }
}
