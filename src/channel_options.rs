/// The name given to producer threads started by
/// [ChanIter::spawn](crate::ChanIter::spawn) unless
/// [ChannelOptions::thread_name] overrides it.
pub const DEFAULT_THREAD_NAME: &str = "pull_iter::ChanIterProducer";

/// A builder that defines options for
/// [ChanIter::spawn](crate::ChanIter::spawn).
#[derive(Debug, Clone)]
pub struct ChannelOptions {
    pub(crate) capacity: Option<usize>,
    pub(crate) thread_name: String,
}

impl ChannelOptions {
    /// Creates a [ChannelOptions] with default options.
    pub fn new() -> Self {
        Self {
            capacity: None,
            thread_name: DEFAULT_THREAD_NAME.into(),
        }
    }

    /// Bounds the channel to hold at most `capacity` elements at once. The
    /// producer blocks while the channel is full.
    ///
    /// By default the channel is unbounded. A capacity of zero is treated as
    /// one, since the channel can't hand off elements without any buffer.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity.max(1));
        self
    }

    /// Lets the producer buffer any number of elements without blocking. This
    /// is the default.
    pub fn unbounded(mut self) -> Self {
        self.capacity = None;
        self
    }

    /// Sets the name of the producer thread. Defaults to
    /// [DEFAULT_THREAD_NAME].
    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }
}

impl Default for ChannelOptions {
    fn default() -> Self {
        Self::new()
    }
}
