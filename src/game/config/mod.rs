//! Config Module
//!
//! Platform-facing configuration: translation of winit input codes.

pub mod input_config;

pub use input_config::{from_physical_key, from_winit_button, from_winit_key};
