use thiserror::Error;

/// Errors produced when obtaining peer storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("All peer slots are in use")]
    PoolExhausted,

    #[error("Insufficient memory to create new peer")]
    OutOfMemory,
}
