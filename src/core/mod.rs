pub mod artwork;
pub mod camera;
pub mod config;
pub mod constants;
pub mod gallery;
pub mod navigation;
pub mod particles;
pub mod room;
pub mod scene;

pub use camera::*;
pub use config::*;
pub use gallery::*;
pub use navigation::*;
pub use scene::*;

// Shaders bundled as string constants
pub static ROOM_WGSL: &str = include_str!("../../shaders/room.wgsl");
pub static DUST_WGSL: &str = include_str!("../../shaders/dust.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
