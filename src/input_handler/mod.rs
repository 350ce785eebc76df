mod input;

pub use input::*;
