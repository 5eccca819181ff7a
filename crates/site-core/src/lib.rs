pub mod constants;
pub mod contact;
pub mod content;
pub mod motion;
pub mod portfolio;
pub mod scroll;
pub mod tilt;

pub use contact::*;
pub use motion::*;
pub use portfolio::*;
pub use scroll::*;
pub use tilt::*;
