//! Geometric Primitives Library
//!
//! Small value types used by mesh-processing and simulation code.
//!
//! ## Core Types
//!
//! - [`Vector4`] - double precision 4D vector with x, y, z, w components
//! - [`Vector3`] - single precision 3D vector tagged with a provenance index
//! - [`Triangle`] - three [`Vector3`] corners
//! - [`Quaternion`] - single precision x, y, z, w rotation components
//!
//! ## Ordering
//!
//! - [`Lexicographic`] - x-then-y-then-z(-then-w) comparison shared by both vector types
//! - [`Ordered`] - wrapper that makes a vector usable as a `BTreeMap` key

mod vector4;
mod vector3;
mod quaternion;
pub mod triangle;
pub mod ordering;
pub mod error;

pub use vector4::Vector4;
pub use vector3::Vector3;
pub use quaternion::Quaternion;
pub use triangle::Triangle;
pub use ordering::{Lexicographic, Ordered};
pub use error::MathError;
