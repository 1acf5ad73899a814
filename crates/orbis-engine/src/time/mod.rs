//! Time subsystem.
//!
//! Provides stable, testable timing utilities without coupling to a runtime.
//! Intended usage:
//! - one `FrameClock` per render loop; call `tick()` once per presented frame
//! - one `Tween` per running animation, advanced with the frame delta
//! - an `Easing` curve to shape a tween's linear fraction

mod easing;
mod frame_clock;
mod tween;

pub use easing::Easing;
pub use frame_clock::{FrameClock, FrameTime};
pub use tween::{Phase, Tween};
