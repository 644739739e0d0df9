//! Protocol layer for the external EduVision backend.
//!
//! This crate models the wire contract only: endpoint paths, typed
//! request/response bodies, session bookkeeping, bounded polling and the
//! MCQ text format. It performs no I/O — the host issues the actual
//! `fetch` calls and feeds responses back for validation at this boundary.

pub mod endpoints;
pub mod gesture;
pub mod mcq;
pub mod poll;
pub mod session;

pub use endpoints::{
    FrameResponse, GestureRequest, GestureResponse, ProcessRequest, ProcessResponse,
    RenderRequest, RenderResponse, SimulatorInfo, SimulatorList, StartRequest, StopRequest,
    Subject, UpdateRequest,
};
pub use gesture::{GestureMapper, ProjectileParams, WaveParams};
pub use mcq::{parse_quiz, McqOption, McqQuestion, ParsedQuiz};
pub use poll::{PollBudget, PollStatus};
pub use session::SessionTracker;
