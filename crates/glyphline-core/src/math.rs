/// Fast mathematical operations using SIMD-accelerated `glam` types.
///
/// This module re-exports all types and functions from the [`glam`] crate. Pen
/// positions and bounding box corners are [`Vec3`] so that layouts can be placed
/// anywhere in a 3D scene, even though line breaking only ever moves along x and y.
///
/// # Examples
///
/// ```
/// use glyphline_core::math::Vec3;
///
/// let anchor = Vec3::new(10.0, 20.0, 0.0);
/// let pen = anchor + Vec3::new(4.5, -16.0, 0.0);
/// assert_eq!(pen.y, 4.0);
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::*;
