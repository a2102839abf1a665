use std::{any::Any, fmt, thread};

use log::*;
use smol::channel;

use crate::{ChannelOptions, PullIter, error::Error};

/// An iterator backed by the receiving half of a channel.
///
/// Elements are produced in the order they were sent. The channel itself is
/// owned by whoever created it: this only ever receives from it, and it's up
/// to the sending side to close the channel (by dropping every
/// [Sender](channel::Sender)) once it's done.
///
/// ## Liveness
///
/// [next](PullIter::next) and [collect](PullIter::collect) block the calling
/// thread until an element arrives or the channel closes. If the producer
/// never sends again and never closes the channel, they block forever. There
/// is no timeout; a consumer that wants to stop early simply drops this
/// iterator.
pub struct ChanIter<T> {
    receiver: channel::Receiver<T>,

    /// The producer thread started by [ChanIter::spawn], if any.
    producer: Option<thread::JoinHandle<()>>,
}

impl<T> ChanIter<T> {
    /// Creates a [ChanIter] that receives from `receiver`.
    pub fn new(receiver: channel::Receiver<T>) -> Self {
        ChanIter {
            receiver,
            producer: None,
        }
    }

    /// Waits for the producer thread started by [ChanIter::spawn] to exit and
    /// reports whether it finished normally.
    ///
    /// A producer that panics closes the channel just like one that returns,
    /// so the elements received so far look like a complete stream. This is
    /// how the consumer tells the two apart: it returns
    /// [Error::ProducerPanicked] if the producer panicked. For an iterator
    /// that wasn't spawned this always succeeds.
    ///
    /// This blocks until the producer exits. Call it after the channel has
    /// closed, or after dropping interest in the remaining elements.
    pub fn finish(mut self) -> Result<(), Error> {
        let Some(producer) = self.producer.take() else {
            return Ok(());
        };
        let name = producer.thread().name().unwrap_or("<unnamed>").to_string();

        // Closing the receiver unblocks a producer waiting on a full channel.
        self.receiver.close();
        match producer.join() {
            Ok(()) => Ok(()),
            Err(payload) => {
                let message = panic_message(&*payload);
                error!("Producer thread {name:?} panicked: {message}");
                Err(Error::ProducerPanicked(message))
            }
        }
    }

    /// Returns the next element if one is already buffered, without
    /// blocking.
    ///
    /// Returns `Ok(None)` if the channel is still open but nothing is
    /// buffered yet, and [Error::Closed] once the channel has been closed and
    /// drained.
    pub fn try_next(&mut self) -> Result<Option<T>, Error> {
        match self.receiver.try_recv() {
            Ok(item) => Ok(Some(item)),
            Err(channel::TryRecvError::Empty) => Ok(None),
            Err(channel::TryRecvError::Closed) => Err(Error::Closed),
        }
    }

    /// Like [next](PullIter::next), but returns a Future that resolves once
    /// an element is available instead of blocking the current thread.
    pub async fn next_async(&mut self) -> Option<T> {
        match self.receiver.recv().await {
            Ok(item) => Some(item),
            Err(_) => {
                trace!("Channel closed and drained");
                None
            }
        }
    }

    /// Whether the sending side has closed the channel. Buffered elements
    /// may still be available even if this returns true.
    pub fn is_closed(&self) -> bool {
        self.receiver.is_closed()
    }

    /// Returns the underlying receiver.
    pub fn into_inner(self) -> channel::Receiver<T> {
        self.receiver
    }
}

impl<T: Send + 'static> ChanIter<T> {
    /// Runs `producer` on a new thread and returns an iterator over whatever
    /// it sends.
    ///
    /// The channel is bounded or unbounded according to `options`. The
    /// channel closes when `producer` returns and its [Sender](channel::Sender)
    /// is dropped, which is what lets [collect](PullIter::collect) finish.
    pub fn spawn<F>(options: ChannelOptions, producer: F) -> Result<Self, Error>
    where
        F: FnOnce(channel::Sender<T>) + Send + 'static,
    {
        let (sender, receiver) = match options.capacity {
            Some(capacity) => channel::bounded(capacity),
            None => channel::unbounded(),
        };

        let name = options.thread_name;
        debug!("Starting producer thread {name:?}...");
        let handle = thread::Builder::new().name(name.clone()).spawn(move || {
            producer(sender);
            debug!("Producer thread {name:?} finished");
        })?;

        Ok(ChanIter {
            receiver,
            producer: Some(handle),
        })
    }
}

/// Extracts the message from a panic payload, which is a `&str` or a
/// [String] for every `panic!` with a message.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".into()
    }
}

impl<T> PullIter for ChanIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.receiver.recv_blocking() {
            Ok(item) => Some(item),
            Err(_) => {
                trace!("Channel closed and drained");
                None
            }
        }
    }

    /// Returns the number of elements currently buffered in the channel.
    ///
    /// A producer that's still running may send more after this is called,
    /// so this is only a lower bound.
    fn estimated_remaining(&self) -> usize {
        self.receiver.len()
    }
}

impl<T> From<channel::Receiver<T>> for ChanIter<T> {
    fn from(value: channel::Receiver<T>) -> Self {
        ChanIter::new(value)
    }
}

impl<T> fmt::Debug for ChanIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_struct("ChanIter")
            .field("buffered", &self.receiver.len())
            .field("closed", &self.receiver.is_closed())
            .field("spawned", &self.producer.is_some())
            .finish()
    }
}

/// Creates a new iterator which receives from `receiver`.
pub fn from_channel<T>(receiver: channel::Receiver<T>) -> ChanIter<T> {
    ChanIter::new(receiver)
}
