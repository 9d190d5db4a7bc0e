mod color;
mod hand;
mod shape;

pub use color::*;
pub use hand::*;
pub use shape::*;
