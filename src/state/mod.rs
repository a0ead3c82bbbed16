//! State Management
//!
//! Global notification state plus per-page session state.

pub mod chat;
pub mod global;
pub mod roster;

pub use chat::{ChatPhase, ChatSession, Message, Sender};
pub use global::{provide_global_state, GlobalState};
pub use roster::{filter_students, Student, StudentForm};
