//! The control loop: one owner for UI state, particle buffers, forces, and
//! the hand tracker.
//!
//! Two cadences drive it. [`Session::render_tick`] runs every frame and does
//! all smoothing; [`Session::detection_tick`] may be called as often as
//! frames arrive but only reaches the detector once per throttle interval.

mod core;
mod hud;
mod render;
mod shutdown;
mod tracking;


pub use self::core::Session;
