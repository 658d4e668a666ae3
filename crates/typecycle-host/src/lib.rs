//! Host platform layer: embassy-time scheduling, a shared cancellable
//! handle around the core cycler, and terminal rendering.

pub mod clock;
pub mod handle;
pub mod render;
