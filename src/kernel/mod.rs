pub mod orientation;

pub use orientation::{Orientation, orient2d, orientation};
