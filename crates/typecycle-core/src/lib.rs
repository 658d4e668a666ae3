//! Platform-independent core of the type/delete text cycler.
//!
//! The core owns no timers: callers feed it a monotonic `now_ms` and it
//! reports which deadline it wants to be woken at next.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod content;
pub mod cycler;
pub mod render;
pub mod text_policy;
