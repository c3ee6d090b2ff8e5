//! Presentation boundary: what a battle shows and how clicks come back.
//!
//! ## Key Types
//!
//! - `Presenter`: push-only sink for status and hand visuals
//! - `StatusView`: health/shield/intent/turn panel contents
//! - `VisualId`, `HandBindings`: click routing from visuals to cards
//! - `NullPresenter`, `RecordingPresenter`: headless implementations

pub mod bindings;
pub mod presenter;
pub mod view;

pub use bindings::{HandBindings, VisualId};
pub use presenter::{NullPresenter, Presenter, PresenterCall, RecordingPresenter};
pub use view::StatusView;
