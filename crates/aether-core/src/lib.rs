pub mod camera;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod field;
pub mod handle;
pub mod motion;
pub mod reveal;
pub mod scene;
pub mod scroll;
pub mod sections;
pub mod shapes;
pub mod sprites;
pub mod timeline;

pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use controller::*;
pub use error::*;
pub use field::*;
pub use handle::*;
pub use motion::*;
pub use reveal::*;
pub use scene::*;
pub use scroll::*;
pub use sections::*;
pub use shapes::*;
pub use sprites::*;
pub use timeline::*;
