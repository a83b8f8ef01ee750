//! State management for the review TUI.
//!
//! Per-review view-state flags live in [`ViewStateStore`]; the reply draft in
//! [`ComposerState`]; asynchronous failures in [`ErrorRegistry`].

mod composer;
mod errors;
mod view_state;

pub use composer::{ComposerError, ComposerState};
pub use errors::{ErrorKey, ErrorRegistry, ReplyErrorHandle};
pub use view_state::{ReviewMode, ReviewViewState, ViewStateAction, ViewStateStore};
