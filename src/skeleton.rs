//! Skeletal tracking data model.
//!
//! Frames mirror what a depth sensor reports: several skeletons per frame,
//! each with a tracking state and a set of joints tagged by [`JointType`].

use serde::{Deserialize, Serialize};

/// A position in sensor space, in meters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
    /// Horizontal axis
    pub x: f64,
    /// Vertical axis
    pub y: f64,
    /// Depth axis (distance from the sensor)
    pub z: f64,
}

impl Point3D {
    /// Create a new point
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Skeletal joints reported by the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointType {
    HipCenter,
    Spine,
    ShoulderCenter,
    Head,
    ShoulderLeft,
    ElbowLeft,
    WristLeft,
    HandLeft,
    ShoulderRight,
    ElbowRight,
    WristRight,
    HandRight,
    HipLeft,
    KneeLeft,
    AnkleLeft,
    FootLeft,
    HipRight,
    KneeRight,
    AnkleRight,
    FootRight,
}

impl JointType {
    /// Whether the joint is still reported in seated mode
    #[must_use]
    pub const fn is_upper_body(self) -> bool {
        matches!(
            self,
            Self::ShoulderCenter
                | Self::Head
                | Self::ShoulderLeft
                | Self::ElbowLeft
                | Self::WristLeft
                | Self::HandLeft
                | Self::ShoulderRight
                | Self::ElbowRight
                | Self::WristRight
                | Self::HandRight
        )
    }
}

/// Per-joint tracking quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointTrackingState {
    #[default]
    NotTracked,
    /// Position estimated from neighbouring joints
    Inferred,
    Tracked,
}

/// Per-skeleton tracking quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkeletonTrackingState {
    #[default]
    NotTracked,
    /// Only the body center is known, no joints
    PositionOnly,
    Tracked,
}

/// Sensor skeleton tracking mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingMode {
    /// Full body
    #[default]
    Default,
    /// Upper body only
    Seated,
}

/// A single tracked joint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    pub joint_type: JointType,
    pub position: Point3D,
    #[serde(default)]
    pub tracking_state: JointTrackingState,
}

/// One skeleton within a frame
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Skeleton {
    pub tracking_state: SkeletonTrackingState,
    /// Body center
    #[serde(default)]
    pub position: Point3D,
    #[serde(default)]
    pub joints: Vec<Joint>,
}

/// Head and chest positions fed to the tracker for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeckPair {
    pub head: Point3D,
    /// Shoulder-center joint
    pub chest: Point3D,
}

impl Skeleton {
    /// Look up a joint by type
    #[must_use]
    pub fn joint(&self, joint_type: JointType) -> Option<&Joint> {
        self.joints.iter().find(|j| j.joint_type == joint_type)
    }

    /// Extract the head and shoulder-center positions.
    ///
    /// Returns `None` unless the skeleton is fully tracked and both joints
    /// carry a position.
    #[must_use]
    pub fn neck_pair(&self) -> Option<NeckPair> {
        if self.tracking_state != SkeletonTrackingState::Tracked {
            return None;
        }

        let head = self.joint(JointType::Head)?;
        let chest = self.joint(JointType::ShoulderCenter)?;
        if head.tracking_state == JointTrackingState::NotTracked
            || chest.tracking_state == JointTrackingState::NotTracked
        {
            return None;
        }

        Some(NeckPair {
            head: head.position,
            chest: chest.position,
        })
    }

    /// Drop the joints a sensor would not report in the given mode
    pub fn restrict_to(&mut self, mode: TrackingMode) {
        if mode == TrackingMode::Seated {
            self.joints.retain(|j| j.joint_type.is_upper_body());
        }
    }
}

/// All skeletons reported by the sensor at one instant
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SkeletonFrame {
    /// Milliseconds since the start of the stream
    #[serde(default)]
    pub timestamp_ms: u64,
    #[serde(default)]
    pub skeletons: Vec<Skeleton>,
}

impl SkeletonFrame {
    /// Neck pair of the first tracked skeleton, if any
    #[must_use]
    pub fn first_tracked(&self) -> Option<NeckPair> {
        self.skeletons.iter().find_map(Skeleton::neck_pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joint(joint_type: JointType, tracking_state: JointTrackingState) -> Joint {
        Joint {
            joint_type,
            position: Point3D::new(0.0, 0.5, 2.0),
            tracking_state,
        }
    }

    fn tracked_skeleton() -> Skeleton {
        Skeleton {
            tracking_state: SkeletonTrackingState::Tracked,
            position: Point3D::new(0.0, 0.0, 2.0),
            joints: vec![
                joint(JointType::Head, JointTrackingState::Tracked),
                joint(JointType::ShoulderCenter, JointTrackingState::Tracked),
                joint(JointType::KneeLeft, JointTrackingState::Tracked),
            ],
        }
    }

    #[test]
    fn test_neck_pair_requires_tracked_skeleton() {
        let mut skeleton = tracked_skeleton();
        assert!(skeleton.neck_pair().is_some());

        skeleton.tracking_state = SkeletonTrackingState::PositionOnly;
        assert!(skeleton.neck_pair().is_none());
    }

    #[test]
    fn test_neck_pair_accepts_inferred_joints() {
        let mut skeleton = tracked_skeleton();
        skeleton.joints[0].tracking_state = JointTrackingState::Inferred;
        assert!(skeleton.neck_pair().is_some());

        skeleton.joints[1].tracking_state = JointTrackingState::NotTracked;
        assert!(skeleton.neck_pair().is_none());
    }

    #[test]
    fn test_joint_lookup_by_type() {
        let skeleton = tracked_skeleton();
        assert_eq!(skeleton.joint(JointType::Head).map(|j| j.joint_type), Some(JointType::Head));
        assert!(skeleton.joint(JointType::FootRight).is_none());
    }

    #[test]
    fn test_seated_mode_drops_lower_body() {
        let mut skeleton = tracked_skeleton();
        skeleton.restrict_to(TrackingMode::Default);
        assert_eq!(skeleton.joints.len(), 3);

        skeleton.restrict_to(TrackingMode::Seated);
        assert_eq!(skeleton.joints.len(), 2);
        assert!(skeleton.joint(JointType::KneeLeft).is_none());
    }

    #[test]
    fn test_first_tracked_skips_untracked() {
        let frame = SkeletonFrame {
            timestamp_ms: 0,
            skeletons: vec![
                Skeleton {
                    tracking_state: SkeletonTrackingState::PositionOnly,
                    ..Skeleton::default()
                },
                tracked_skeleton(),
            ],
        };
        assert!(frame.first_tracked().is_some());
        assert!(SkeletonFrame::default().first_tracked().is_none());
    }
}
