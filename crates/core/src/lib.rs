pub mod display;
pub mod error;
pub mod event;
pub mod geometry;
pub mod proximity;
pub mod state;

pub use display::{compose, DisplayLine};
pub use error::{NotchError, Result};
pub use event::Message;
pub use geometry::{NotchGeometry, Point, Rect};
pub use proximity::{HoverState, ProximityMonitor, Transition};
pub use state::{AppState, ColorTarget, DisplayField, DisplayOptions, SystemSnapshot};
