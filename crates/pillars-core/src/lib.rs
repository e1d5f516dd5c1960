pub mod camera;
pub mod constants;
pub mod env_map;
pub mod error;
pub mod input;
pub mod mesh;
pub mod scene;
pub mod shading;
pub mod wave;

#[cfg(feature = "gpu")]
pub mod render;

pub static PILLARS_WGSL: &str = include_str!("../shaders/pillars.wgsl");

pub use camera::{Camera, OrbitControl};
pub use env_map::{EnvMap, EnvironmentSampler};
pub use error::{PillarsError, Result};
pub use input::PointerState;
pub use mesh::{CubeMeshBuilder, VertexRecord};
pub use scene::{FrameInput, Scene, SceneConfig};
pub use shading::{shade, FragmentInput, ShadingParams, ShadingUniforms};
pub use wave::{Pillar, WaveInput, WaveScheduler};

#[cfg(feature = "gpu")]
pub use render::{Renderer, SurfaceRecovery};
