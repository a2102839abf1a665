//! Pull-based iteration over heterogeneous sources.
//!
//! [PullIter] is a single interface for producing elements one at a time,
//! whether they come from an in-memory sequence ([SliceIter]), a channel fed
//! by another thread ([ChanIter]) or a standard library iterator
//! ([StdIter]). Sources can be wrapped in the lazy [map] and [filter]
//! adapters and drained with the reducers in [terminal], all of which are
//! built on [fold].
//!
//! ```
//! use pull_iter::{PullIter, from_slice, sum};
//!
//! let evens = from_slice(vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]).filter(|i| i % 2 == 0);
//! assert_eq!(sum(evens), 20);
//! ```

mod adapter;
#[cfg(feature = "channel")]
mod channel_options;
mod error;
mod iter;
mod source;
pub mod terminal;
mod util;

pub use adapter::*;
#[cfg(feature = "channel")]
pub use channel_options::*;
pub use error::*;
pub use iter::*;
pub use source::*;
pub use terminal::*;
pub use util::*;
