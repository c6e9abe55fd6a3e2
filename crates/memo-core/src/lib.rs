//! Skill orchestration: ordered dispatch table, memo state machine, dialog
//! continuation gate, and speech composition.

mod dialog;
mod handlers;
mod memos;
mod skill;
pub mod speech;

pub use dialog::{continuation, DialogGate};
pub use handlers::{
    CancelStopHandler, CreateMemoHandler, DeleteMemoHandler, HelpHandler, LaunchHandler,
    ListenMemoHandler, SessionEndedHandler,
};
pub use memo_types::{Handler, HandlerInput, SkillError};
pub use memos::{create, delete_all, list, MemoListing};
pub use skill::{apology, Skill};
