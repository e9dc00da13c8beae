#![forbid(unsafe_code)]
#![warn(clippy::all)]

//! Per-session peer state for a DTLS protocol engine.
//!
//! This crate manages the lifecycle of the peer object: the container for
//! one remote session's negotiated security parameters and handshake
//! transcript. Peers are allocated from a [`Storage`] backend (heap or a
//! fixed slot pool), initialized with safe pre-handshake defaults, and torn
//! down with guaranteed release of their cipher state.
//!
//! The handshake state machine, record layer and socket I/O live above this
//! crate and only interact with it through [`Peers`] and the accessors on
//! [`Peer`].

#[macro_use]
extern crate log;

mod error;
pub use error::Error;

mod session;
pub use session::SessionId;

mod types;
pub use types::{CipherSuite, CompressionMethod};

mod hash;
pub use hash::{Hash, HashAlgorithm};

mod crypto;
pub use crypto::{AesGcm, Cipher};

mod storage;
pub use storage::{DefaultStorage, HeapStorage, SlotPool, Storage};
#[cfg(feature = "static-pool")]
pub use storage::MAX_PEERS;

mod peer;
pub use peer::{Peer, Peers, SecurityParameters};
