//! Physics module
//!
//! Geometry queries for the sandbox. Player motion lives in
//! [`crate::player`]; this module only answers "what does this ray hit".
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! # Submodules
//!
//! - [`collision`] - Ray-AABB intersection and nearest-box picking

pub mod collision;

pub use collision::{pick_nearest, ray_aabb_intersect, Aabb, HitInfo};
