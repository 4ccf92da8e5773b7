pub mod keyboard;
pub mod pointer;

pub use keyboard::KeyboardInput;
pub use pointer::{CameraInput, InputWiring};
