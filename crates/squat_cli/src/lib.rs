//! Squat CLI support library
//!
//! Keypoint file loading and argument parsing for the `squat_score` binary.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use squat_core::api::{KeypointRows, SquatResponse};
use squat_core::{Point2D, SquatRequest};

/// Accepted keypoint file shapes
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum KeypointFile {
    /// Full JSON API request
    Request(SquatRequest),
    /// Bare `[[x, y], ...]` rows for one subject
    Rows(KeypointRows),
}

/// Parse keypoint file contents into a scoring request
pub fn parse_keypoints(content: &str) -> Result<SquatRequest> {
    let file: KeypointFile =
        serde_json::from_str(content).context("Expected a request object or [[x, y], ...] rows")?;

    Ok(match file {
        KeypointFile::Request(request) => request,
        KeypointFile::Rows(rows) => SquatRequest::new(rows),
    })
}

/// Load a keypoint JSON file produced by the pose detector
pub fn load_keypoints(path: &Path) -> Result<SquatRequest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read keypoint file: {}", path.display()))?;
    parse_keypoints(&content)
        .with_context(|| format!("Failed to parse keypoint file: {}", path.display()))
}

/// Parse `"x,y"` into a point
pub fn parse_point(s: &str) -> Result<Point2D> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        bail!("Expected x,y but got {:?}", s);
    }
    let x: f64 = parts[0].parse().with_context(|| format!("Invalid x in {:?}", s))?;
    let y: f64 = parts[1].parse().with_context(|| format!("Invalid y in {:?}", s))?;
    Ok(Point2D::new(x, y))
}

/// Human-readable report of a scoring response
pub fn format_response(response: &SquatResponse) -> String {
    let mut lines = Vec::new();
    if response.is_error() {
        lines.push(format!("❌ Not enough keypoints to score the {} side.", response.side));
    }
    lines.push(format!("Score: {:.1}", response.score));
    lines.push(format!("Details: {:?}", response.details));
    if let Some(d) = &response.deductions {
        lines.push(format!("   Depth deduction: {:.1} ({:?})", d.depth, d.depth_check));
        lines.push(format!("   Torso deduction: {:.1} ({:?})", d.torso, d.torso_check));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use squat_core::api::assess_request;
    use squat_core::{BodySide, ScoringConfig};
    use std::io::Write;

    #[test]
    fn test_parse_bare_rows() {
        let request = parse_keypoints("[[1.0, 2.0], [3.0, 4.0, 0.5]]").unwrap();
        assert_eq!(request.schema_version, squat_core::SCHEMA_VERSION);
        assert_eq!(request.keypoints.len(), 2);
        assert!(request.side.is_none());
    }

    #[test]
    fn test_parse_request_object() {
        let request = parse_keypoints(
            r#"{"schema_version": 1, "keypoints": [[1.0, 2.0]], "side": "right"}"#,
        )
        .unwrap();
        assert_eq!(request.side, Some(BodySide::Right));
        assert_eq!(request.keypoints, vec![vec![1.0, 2.0]]);
    }

    #[test]
    fn test_parse_garbage_fails() {
        assert!(parse_keypoints(r#"{"people": 3}"#).is_err());
        assert!(parse_keypoints("not json").is_err());
    }

    #[test]
    fn test_load_keypoints_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[[0.0, 0.0], [1.0, 1.0]]").unwrap();

        let request = load_keypoints(file.path()).unwrap();
        assert_eq!(request.joints().unwrap().len(), 2);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = load_keypoints(Path::new("/nonexistent/keypoints.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/keypoints.json"));
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("1.5, -2").unwrap(), Point2D::new(1.5, -2.0));
        assert!(parse_point("1.5").is_err());
        assert!(parse_point("a,b").is_err());
    }

    fn respond(rows: &str) -> SquatResponse {
        let request = parse_keypoints(rows).unwrap();
        assess_request(&request, &ScoringConfig::default()).unwrap()
    }

    #[test]
    fn test_format_scored_response() {
        // Every joint on one spot: both flat penalties apply
        let rows = format!("[{}]", vec!["[0.5, 0.5]"; 17].join(","));
        let text = format_response(&respond(&rows));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Score: 30.0");
        assert_eq!(lines[1], r#"Details: {"hip_angle": 0.0, "knee_angle": 0.0}"#);
        assert_eq!(lines[2], "   Depth deduction: 40.0 (OutOfRange)");
        assert_eq!(lines[3], "   Torso deduction: 30.0 (SevereLean)");
        assert!(!text.contains("❌"));
    }

    #[test]
    fn test_format_insufficient_response() {
        let text = format_response(&respond("[[0.1, 0.2]]"));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "❌ Not enough keypoints to score the left side.");
        assert_eq!(lines[1], "Score: 0.0");
        assert_eq!(lines[2], r#"Details: {"error": 1.0}"#);
    }
}
