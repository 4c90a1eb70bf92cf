mod array;
mod point;

pub use array::{MicArray, MicDistances};
pub use point::Point2D;
