//! Game logic - session state machine, spawning, drag tracking and timers
//!
//! Nothing in here knows about egui or the window; the view layer talks to
//! [`GameController`] only.

pub mod catalog;
pub mod category;
pub mod controller;
pub mod drag;
pub mod events;
pub mod feedback;
pub mod input;
pub mod item;
pub mod rules;
pub mod schedule;
pub mod session;

pub use category::{BinCategory, Tip};
pub use controller::{GameController, GameSnapshot};
pub use drag::{BinLayout, DragState, ScreenRect};
pub use events::GameNotification;
pub use feedback::{Feedback, Outcome};
pub use input::{PointerEvent, PointerSource, QueuedPointer};
pub use item::{ItemId, ItemSpawner, PlayArea, WasteItem};
pub use rules::GameRules;
pub use schedule::{Scheduler, TaskHandle};
pub use session::{transition, Effect, Event, GamePhase, Session, Transition};
