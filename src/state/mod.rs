//! State Management
//!
//! Global application state, the persisted session, and request tokens.

pub mod global;
pub mod requests;
pub mod session;

pub use global::{provide_global_state, GlobalState};
pub use requests::RequestSequence;
pub use session::Session;
