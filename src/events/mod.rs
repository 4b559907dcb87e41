pub mod pointer;
pub mod scroll;
pub mod tilt;

pub use scroll::{HeaderTracker, ScrollProgressBar};
pub use tilt::{MagneticButton, TiltCard};
