pub mod admission;
pub mod camera;
pub mod capability;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod error;
pub mod fullscreen;
pub mod orientation;
pub mod projection;
pub mod schedule;
pub mod sphere;
pub mod state;

pub use admission::{AdmissionSet, ViewerId};
pub use capability::{Capabilities, RendererKind};
pub use config::{PageConfig, ViewerConfig};
pub use error::ViewerError;
pub use orientation::PointerKind;
pub use projection::Panorama;
pub use schedule::LoopGate;
pub use sphere::{build_inward_sphere, SphereVertex};
pub use state::{FrameParams, TextureUpload, ViewerState};

// Shaders bundled as string constants
pub static SPHERE_WGSL: &str = include_str!("../../shaders/sphere.wgsl");
