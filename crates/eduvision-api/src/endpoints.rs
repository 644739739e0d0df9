//! Endpoint paths and request/response bodies.
//!
//! Paths are relative to the backend origin (`http://localhost:5000` in
//! development); the host prepends the origin and performs the fetch.
//! Bodies mirror the backend's ad hoc JSON field names exactly.

use serde::{Deserialize, Serialize};

/// Which subject-scoped API family a simulator call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Maths,
    Physics,
}

impl Subject {
    pub fn base_path(&self) -> &'static str {
        match self {
            Subject::Maths => "/api/maths",
            Subject::Physics => "/api/physics",
        }
    }
}

/// `GET {base}/simulators`
pub fn simulators_path(subject: Subject) -> String {
    format!("{}/simulators", subject.base_path())
}

/// `POST {base}/simulator/{id}/start`
pub fn simulator_start_path(subject: Subject, id: &str) -> String {
    format!("{}/simulator/{}/start", subject.base_path(), id)
}

/// `POST {base}/simulator/{id}/update`
pub fn simulator_update_path(subject: Subject, id: &str) -> String {
    format!("{}/simulator/{}/update", subject.base_path(), id)
}

/// `POST {base}/simulator/{id}/stop`
pub fn simulator_stop_path(subject: Subject, id: &str) -> String {
    format!("{}/simulator/{}/stop", subject.base_path(), id)
}

/// `POST {base}/gesture/process`
pub fn gesture_process_path(subject: Subject) -> String {
    format!("{}/gesture/process", subject.base_path())
}

/// `POST /api/tta/process` — topic → summary/audio/questions/manim code.
pub const TTA_PROCESS_PATH: &str = "/api/tta/process";

/// `POST /api/tta/render-video`
pub const TTA_RENDER_VIDEO_PATH: &str = "/api/tta/render-video";

/// One simulator as listed by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimulatorInfo {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// `GET {base}/simulators` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorList {
    pub simulators: Vec<SimulatorInfo>,
}

/// Static fallback shown when the backend is unreachable. The page keeps
/// working with a reduced simulator list instead of an empty grid.
pub fn fallback_simulators(subject: Subject) -> Vec<SimulatorInfo> {
    match subject {
        Subject::Maths => vec![SimulatorInfo {
            id: "trig".into(),
            name: "Trigonometric Visualizer".into(),
            description: "Interactive trigonometric graph with angle marker".into(),
        }],
        Subject::Physics => vec![SimulatorInfo {
            id: "projectile".into(),
            name: "Projectile Motion".into(),
            description: "Launch-angle and velocity simulation".into(),
        }],
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartRequest {
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopRequest {
    pub session_id: String,
}

/// Simulator parameter update. `params` is simulator-specific JSON
/// (e.g. `{"launch": {"velocity": 60, "angle": 45}}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub session_id: String,
    pub params: serde_json::Value,
}

/// `/simulator/{id}/update` response: a rendered frame as a base64 image,
/// absent when the backend has nothing new to show.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameResponse {
    pub frame: Option<String>,
}

/// `POST {base}/gesture/process` request: one camera frame, base64-encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureRequest {
    pub frame: String,
}

/// Gesture recognition result. Null distances mean no hands detected and
/// must be treated as a no-op by callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureResponse {
    pub hands_detected: bool,
    pub left_dist: Option<f64>,
    pub right_dist: Option<f64>,
    #[serde(default)]
    pub pinch: Option<bool>,
    #[serde(default)]
    pub annotated_frame: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub topic: String,
    pub subject: String,
}

/// `POST /api/tta/process` response. Every field is optional: the backend
/// degrades piecewise and the client must too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
    #[serde(default)]
    pub questions: Option<String>,
    #[serde(default)]
    pub manim_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderRequest {
    pub manim_code: String,
    pub topic: String,
}

/// `POST /api/tta/render-video` response: where the video will appear once
/// rendered (polled with a [`crate::PollBudget`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResponse {
    pub video_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_well_formed() {
        assert_eq!(simulators_path(Subject::Maths), "/api/maths/simulators");
        assert_eq!(
            simulator_update_path(Subject::Physics, "projectile"),
            "/api/physics/simulator/projectile/update"
        );
        assert_eq!(
            gesture_process_path(Subject::Physics),
            "/api/physics/gesture/process"
        );
    }

    #[test]
    fn gesture_response_tolerates_nulls() {
        let json = r#"{"hands_detected": false, "left_dist": null, "right_dist": null}"#;
        let resp: GestureResponse = serde_json::from_str(json).unwrap();
        assert!(!resp.hands_detected);
        assert!(resp.left_dist.is_none());
        assert!(resp.pinch.is_none());
    }

    #[test]
    fn process_response_with_missing_fields() {
        let resp: ProcessResponse = serde_json::from_str(r#"{"summary": "Sine waves"}"#).unwrap();
        assert_eq!(resp.summary.as_deref(), Some("Sine waves"));
        assert!(resp.questions.is_none());
    }

    #[test]
    fn update_request_round_trips() {
        let req = UpdateRequest {
            session_id: "session_1".into(),
            params: serde_json::json!({"launch": {"velocity": 60.0, "angle": 45.0}}),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"session_id\":\"session_1\""));
        assert!(json.contains("\"velocity\":60.0"));
    }

    #[test]
    fn fallback_list_is_never_empty() {
        assert!(!fallback_simulators(Subject::Maths).is_empty());
        assert!(!fallback_simulators(Subject::Physics).is_empty());
    }
}
