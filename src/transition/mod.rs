pub mod controller;
pub mod easing;

pub use controller::{PositionTween, TransitionController};
pub use easing::ease_in_out_expo;
