pub mod animation;
pub mod assessment;
pub mod canvas;
pub mod pointer;

pub use animation::{jump_expiry_system, Jump, JumpHighlights, JumpKind};
pub use assessment::{assessment_reveal_system, AssessmentBoard, PendingAssessment};
pub use canvas::{canvas_entry_system, layout_system, CanvasPhase, LayoutRequest};
pub use pointer::{
    drag_commit_system, pointer_intake_system, ActiveDrag, DragSession, Interaction,
    InteractionLog, PendingMove, PointerEvent, PointerQueue,
};
