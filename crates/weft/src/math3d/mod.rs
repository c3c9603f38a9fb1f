//! Double-precision 3D math: vectors, transforms, cameras, rays and
//! triangle meshes.

mod camera;
mod mat4;
mod mesh;
mod ray;
mod vec3;

pub use camera::Camera;
pub use mat4::Mat4;
pub use mesh::{Face, Mesh, Texture};
pub use ray::{Ray, RayHit};
pub use vec3::Vec3;
