//! Scene-side primitives: the transform the controller steers and the
//! perspective camera the orbit rig positions.

pub mod camera;
pub mod transform;

pub use camera::Camera;
pub use transform::Transform;
