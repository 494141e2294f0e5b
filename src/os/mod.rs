//! Operating system abstraction layer
//!
//! This module provides a unified, platform-independent interface to the
//! operating system's cryptographically secure random source.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same surface:
//!
//! ```text
//! sys_random(buf: &mut [u8]) -> io::Result<()>
//! ```
//!
//! The function either fills the whole buffer or reports an error. It never
//! panics on an OS failure; the caller decides what to do with it.

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;
