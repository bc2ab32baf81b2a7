//! Body landmark convention
//!
//! Joint sets are indexed positionally by the 17-point COCO keypoint layout
//! (the layout emitted by YOLOv8-pose and MoveNet). The indices are an
//! external contract with the pose detector, versioned by
//! [`LANDMARK_CONVENTION`]; nothing else in the crate hardcodes them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScoreError;

/// Identifier of the keypoint layout this module encodes
pub const LANDMARK_CONVENTION: &str = "coco17";

/// COCO 17-keypoint indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Landmark {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

impl Landmark {
    pub const COUNT: usize = 17;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Nose),
            1 => Some(Self::LeftEye),
            2 => Some(Self::RightEye),
            3 => Some(Self::LeftEar),
            4 => Some(Self::RightEar),
            5 => Some(Self::LeftShoulder),
            6 => Some(Self::RightShoulder),
            7 => Some(Self::LeftElbow),
            8 => Some(Self::RightElbow),
            9 => Some(Self::LeftWrist),
            10 => Some(Self::RightWrist),
            11 => Some(Self::LeftHip),
            12 => Some(Self::RightHip),
            13 => Some(Self::LeftKnee),
            14 => Some(Self::RightKnee),
            15 => Some(Self::LeftAnkle),
            16 => Some(Self::RightAnkle),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEye => "left_eye",
            Self::RightEye => "right_eye",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
        }
    }
}

/// Which side of the body the scorer reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodySide {
    #[default]
    Left,
    Right,
}

impl BodySide {
    pub fn landmarks(self) -> SideLandmarks {
        match self {
            BodySide::Left => SideLandmarks {
                shoulder: Landmark::LeftShoulder,
                hip: Landmark::LeftHip,
                knee: Landmark::LeftKnee,
                ankle: Landmark::LeftAnkle,
            },
            BodySide::Right => SideLandmarks {
                shoulder: Landmark::RightShoulder,
                hip: Landmark::RightHip,
                knee: Landmark::RightKnee,
                ankle: Landmark::RightAnkle,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BodySide::Left => "left",
            BodySide::Right => "right",
        }
    }
}

impl fmt::Display for BodySide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodySide {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" => Ok(BodySide::Left),
            "right" | "r" => Ok(BodySide::Right),
            _ => Err(ScoreError::InvalidSide(s.to_string())),
        }
    }
}

/// The four joints a squat is judged on, all from one side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideLandmarks {
    pub shoulder: Landmark,
    pub hip: Landmark,
    pub knee: Landmark,
    pub ankle: Landmark,
}

impl SideLandmarks {
    pub fn all(&self) -> [Landmark; 4] {
        [self.shoulder, self.hip, self.knee, self.ankle]
    }

    /// Minimum joint-set length that contains all four landmarks
    pub fn required_len(&self) -> usize {
        self.all().iter().map(|l| l.index()).max().unwrap_or(0) + 1
    }
}
