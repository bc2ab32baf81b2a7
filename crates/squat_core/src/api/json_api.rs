//! JSON API for squat scoring
//!
//! Request (one subject, keypoints in COCO-17 order):
//! ```json
//! { "schema_version": 1, "keypoints": [[x, y], [x, y, conf], ...], "side": "left" }
//! ```
//! Rows may carry extra columns (depth, confidence); only x and y are read.
//! A joint set that is too short is not a request error: the response
//! carries `score: 0.0` and `details: {"error": 1.0}`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::ScoringConfig;
use crate::error::{Result, ScoreError};
use crate::geometry::Point2D;
use crate::landmarks::BodySide;
use crate::scoring::{Deductions, DetailsRecord, SquatScorer};
use crate::SCHEMA_VERSION;

/// Raw detector rows, `[x, y, ...]` per landmark
pub type KeypointRows = Vec<Vec<f64>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquatRequest {
    pub schema_version: u8,
    pub keypoints: KeypointRows,
    /// Overrides the configured body side
    #[serde(default)]
    pub side: Option<BodySide>,
}

impl SquatRequest {
    pub fn new(keypoints: KeypointRows) -> Self {
        Self { schema_version: SCHEMA_VERSION, keypoints, side: None }
    }

    /// Convert detector rows to points, rejecting rows without x and y
    pub fn joints(&self) -> Result<Vec<Point2D>> {
        self.keypoints
            .iter()
            .enumerate()
            .map(|(index, row)| {
                Point2D::from_row(row)
                    .ok_or(ScoreError::MalformedKeypoint { index, len: row.len() })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquatResponse {
    pub schema_version: u8,
    pub side: BodySide,
    pub score: f64,
    pub details: DetailsRecord,
    /// Per-rule breakdown; absent when the joint set was too short
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deductions: Option<Deductions>,
}

impl SquatResponse {
    pub fn is_error(&self) -> bool {
        self.deductions.is_none()
    }
}

/// Score a parsed request against `config`
pub fn assess_request(request: &SquatRequest, config: &ScoringConfig) -> Result<SquatResponse> {
    if request.schema_version != SCHEMA_VERSION {
        warn!("Rejecting request with schema version {}", request.schema_version);
        return Err(ScoreError::UnsupportedSchema {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let joints = request.joints()?;

    let mut config = config.clone();
    if let Some(side) = request.side {
        config.side = side;
    }
    let side = config.side;

    debug!("Scoring {} keypoints on {} side", joints.len(), side);
    let assessment = SquatScorer::new(config).assess(&joints);

    Ok(SquatResponse {
        schema_version: SCHEMA_VERSION,
        side,
        score: assessment.score(),
        details: assessment.details(),
        deductions: assessment.as_scored().map(|s| s.deductions),
    })
}

/// Score a JSON request with the default configuration
pub fn score_squat_json(request_json: &str) -> Result<String> {
    info!("Processing squat scoring request");
    let request: SquatRequest = serde_json::from_str(request_json)?;
    let response = assess_request(&request, &ScoringConfig::default())?;
    Ok(serde_json::to_string(&response)?)
}
