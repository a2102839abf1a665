use std::io;

use thiserror::Error as ThisError;

/// The enumeration of errors that the fallible corners of this crate can
/// report.
///
/// Pulling elements is never fallible: running out is reported by
/// [PullIter::next](crate::PullIter::next) returning `None`. These errors only
/// come from the non-blocking channel probe and from starting and joining
/// producer threads.
#[derive(ThisError, Debug)]
pub enum Error {
    /// The channel behind a [ChanIter](crate::ChanIter) has been closed and
    /// every buffered element has already been received.
    #[error("channel is closed and drained")]
    Closed,

    /// The producer thread started by [ChanIter::spawn](crate::ChanIter::spawn)
    /// panicked, so the channel closed before the producer was done. The
    /// payload is the panic message.
    #[error("producer thread panicked: {0}")]
    ProducerPanicked(String),

    /// The operating system refused to start a producer thread.
    #[error("failed to spawn producer thread: {0}")]
    Spawn(#[from] io::Error),
}

impl Error {
    /// Whether this error means the iterator has permanently run out, as
    /// opposed to something having gone wrong.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Error::Closed)
    }
}
