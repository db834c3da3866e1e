/// Fast mathematical operations using SIMD-accelerated `glam` types.
///
/// This module re-exports all types and functions from the [`glam`] crate.
/// The pipeline does its per-point arithmetic in `f64` ([`DVec3`]) and only
/// narrows to `f32` at the renderer boundary.
///
/// # Examples
///
/// ```
/// use skyline_core::math::fast::DVec3;
///
/// let centroid = (DVec3::new(0.0, 0.0, 0.0) + DVec3::new(2.0, 4.0, 6.0)) / 2.0;
/// assert_eq!(centroid, DVec3::new(1.0, 2.0, 3.0));
/// ```
///
/// [`glam`]: https://docs.rs/glam
/// [`DVec3`]: glam::DVec3
pub mod fast {
    pub use glam::*;
}

pub use fast::{DVec2, DVec3, Vec2, Vec3};

/// Packed vector types for renderer-bound buffer export.
///
/// These `#[repr(C)]` types can be safely cast to byte slices with
/// [`bytemuck`], so a consuming renderer can upload flattened trace geometry
/// directly into vertex buffers without an intermediate copy.
///
/// Use [`fast`] types for CPU-side math; convert to packed types only when
/// producing output.
///
/// # Examples
///
/// ```
/// use skyline_core::math::packed::Vec3;
/// use bytemuck::cast_slice;
///
/// let vertices = vec![
///     Vec3 { x: -1.0, y: -1.0, z: 0.0 },
///     Vec3 { x: 1.0, y: -1.0, z: 0.0 },
///     Vec3 { x: 0.0, y: 1.0, z: 0.0 },
/// ];
/// let bytes: &[u8] = cast_slice(&vertices);
/// assert_eq!(bytes.len(), 36);
/// ```
///
/// [`bytemuck`]: https://docs.rs/bytemuck
pub mod packed {
    use bytemuck::{Pod, Zeroable};

    /// A 2D vector with guaranteed `#[repr(C)]` layout.
    #[repr(C)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
    pub struct Vec2 {
        pub x: f32,
        pub y: f32,
    }

    /// A 3D vector with guaranteed `#[repr(C)]` layout.
    #[repr(C)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
    pub struct Vec3 {
        pub x: f32,
        pub y: f32,
        pub z: f32,
    }

    impl From<glam::DVec3> for Vec3 {
        fn from(v: glam::DVec3) -> Self {
            Self {
                x: v.x as f32,
                y: v.y as f32,
                z: v.z as f32,
            }
        }
    }

    impl From<glam::Vec3> for Vec3 {
        fn from(v: glam::Vec3) -> Self {
            Self {
                x: v.x,
                y: v.y,
                z: v.z,
            }
        }
    }

    static_assertions::const_assert_eq!(core::mem::size_of::<Vec2>(), 8);
    static_assertions::const_assert_eq!(core::mem::size_of::<Vec3>(), 12);
}
