//! Prim - mesh preparation on top of the `prim_math` primitives
//!
//! Builds triangle soups, welds their duplicated corners into an indexed
//! mesh and packs the result for vertex/index buffers.

pub mod config;
pub mod soup;
pub mod weld;

pub use prim_math::{Lexicographic, MathError, Ordered, Quaternion, Triangle, Vector3, Vector4};
