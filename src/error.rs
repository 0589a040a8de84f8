use std::io;

pub type Result<T> = std::result::Result<T, QueueError>;

/// Failures reported by queue operations. A failed call never mutates the queue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    #[error("queue capacity must be at least 1")]
    InvalidCapacity,

    #[error("payload of {len} bytes exceeds the {max} byte limit")]
    PayloadTooLarge { len: usize, max: usize },

    #[error("could not grow queue storage to {requested} slots")]
    OutOfMemory { requested: usize },

    #[error("queue is empty")]
    EmptyQueue,

    #[error("output buffer holds {available} bytes but the payload needs {needed}")]
    BufferTooSmall { needed: usize, available: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("could not parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
