//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `tcp/` - TCP connect prober

pub mod tcp;
