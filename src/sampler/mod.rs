//! Sampler subsystem for per-frame gamepad state capture
//!
//! Turns the gilrs event/state backend into one immutable snapshot per
//! player slot per frame:
//!
//! ```text
//! Gamepads ──► pump() ──► sample() ──► [ControllerSnapshot; slots]
//!              (slot table)  (pure read)
//! ```
//!
//! `pump` drains the event queue once per frame and keeps the slot table
//! current; `sample` is a read-only pass over the cached device state, so
//! calling it twice within one frame yields identical snapshots. The exit
//! signal is a free function over the sampled snapshots and is never latched.

pub mod gamepad_sampler;
pub mod snapshot;

pub use gamepad_sampler::{GamepadSampler, Sampling, SamplerError};
pub use snapshot::{
    exit_requested, ButtonSet, ControllerSnapshot, DpadState, JoystickType, PadButton, PadSource,
    TriggerType,
};
