mod cdt;
mod error;
mod extract;
pub mod loader;
mod points;
pub mod render;
mod shape;
mod solver;
mod table;
mod triangles;
pub mod utils;
pub use cdt::{triangulate, Builder, Triangulation, Triangulator};
pub use error::{InputError, InvariantViolation, TriangulateError};
pub use extract::extract;
pub use points::{PointId, Points};
pub use shape::{distance, Point};
pub use solver::Observer;
pub use table::{Cell, CostTable, Layout};
pub use triangles::Triangle;

/// Scalar used by the whole engine. Enable the `f32` feature for single precision.
#[cfg(not(feature = "f32"))]
pub type Float = f64;
#[cfg(feature = "f32")]
pub type Float = f32;
