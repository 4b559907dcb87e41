pub mod attrs;
pub mod constants;
pub mod contact;
pub mod counter;
pub mod cursor;
pub mod scramble;
pub mod scroll;
pub mod spring;
pub mod tilt;
pub mod typewriter;

pub use attrs::*;
pub use contact::*;
pub use counter::*;
pub use cursor::*;
pub use scramble::*;
pub use scroll::*;
pub use spring::*;
pub use tilt::*;
pub use typewriter::*;
