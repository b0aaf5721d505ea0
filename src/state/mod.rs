//! State Management
//!
//! Global application state and the friend-relationship classifier.

pub mod friends;
pub mod global;

pub use friends::{resolve_friend_state, FriendState};
pub use global::{provide_global_state, GlobalState, UserProfile};
