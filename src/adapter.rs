mod filter;
mod map;

pub use filter::*;
pub use map::*;
