pub mod assessment;
pub mod squat;

pub use assessment::{
    Deductions, DepthCheck, DetailsRecord, SquatAssessment, SquatScore, TorsoCheck, ERROR_KEY,
    HIP_ANGLE_KEY, KNEE_ANGLE_KEY,
};
pub use squat::{score_squat, SquatScorer};
