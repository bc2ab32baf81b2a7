pub mod json_api;

pub use json_api::{
    assess_request, score_squat_json, KeypointRows, SquatRequest, SquatResponse,
};
