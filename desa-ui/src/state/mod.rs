//! State Management
//!
//! Global application state and the local-storage preference backend.

pub mod global;
pub mod storage;

pub use global::{provide_global_state, use_global_state, GlobalState};
pub use storage::LocalStorage;
