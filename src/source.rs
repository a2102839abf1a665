#[cfg(feature = "channel")]
mod channel;
mod empty;
mod slice;
mod std_iter;

#[cfg(feature = "channel")]
pub use channel::*;
pub use empty::*;
pub use slice::*;
pub use std_iter::*;
