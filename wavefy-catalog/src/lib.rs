mod catalog;
mod sample;
mod util;

pub use catalog::*;
