//! Per-session peer state and its lifecycle.

use std::fmt;

use crate::crypto::Cipher;
use crate::hash::{Hash, HashAlgorithm};
use crate::session::SessionId;
use crate::storage::{DefaultStorage, Storage};
use crate::types::{CipherSuite, CompressionMethod};

#[cfg(not(feature = "static-pool"))]
use crate::storage::HeapStorage;
#[cfg(feature = "static-pool")]
use crate::storage::{SlotPool, MAX_PEERS};

/// Security parameters negotiated for one peer.
///
/// The cipher and compression selectors start out at the null sentinels,
/// the protocol's mandated pre-handshake baseline. The handshake layer
/// installs the real values once negotiation completes.
pub struct SecurityParameters {
    cipher: CipherSuite,
    compression: CompressionMethod,
    read_cipher: Option<Box<dyn Cipher>>,
    write_cipher: Option<Box<dyn Cipher>>,
}

impl Default for SecurityParameters {
    fn default() -> Self {
        SecurityParameters {
            cipher: CipherSuite::TLS_NULL_WITH_NULL_NULL,
            compression: CompressionMethod::Null,
            read_cipher: None,
            write_cipher: None,
        }
    }
}

impl SecurityParameters {
    /// The negotiated cipher suite.
    pub fn cipher(&self) -> CipherSuite {
        self.cipher
    }

    /// Set the negotiated cipher suite.
    pub fn set_cipher(&mut self, cipher: CipherSuite) {
        self.cipher = cipher;
    }

    /// The negotiated compression method.
    pub fn compression(&self) -> CompressionMethod {
        self.compression
    }

    /// Set the negotiated compression method.
    pub fn set_compression(&mut self, compression: CompressionMethod) {
        self.compression = compression;
    }

    /// Install cipher state for both directions.
    ///
    /// Both directions are installed together. The peer never holds a
    /// partially constructed cipher pair.
    pub fn set_ciphers(&mut self, read: Box<dyn Cipher>, write: Box<dyn Cipher>) {
        self.read_cipher = Some(read);
        self.write_cipher = Some(write);
    }

    /// Whether cipher state has been installed.
    pub fn has_ciphers(&self) -> bool {
        self.read_cipher.is_some() && self.write_cipher.is_some()
    }

    /// Cipher state for incoming records, if installed.
    pub fn read_cipher(&self) -> Option<&dyn Cipher> {
        self.read_cipher.as_deref()
    }

    /// Cipher state for outgoing records, if installed.
    pub fn write_cipher(&self) -> Option<&dyn Cipher> {
        self.write_cipher.as_deref()
    }
}

impl fmt::Debug for SecurityParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityParameters")
            .field("cipher", &self.cipher)
            .field("compression", &self.compression)
            .field("has_ciphers", &self.has_ciphers())
            .finish()
    }
}

/// State for one remote session.
///
/// Holds the session identity, the security parameters and the running
/// handshake transcript. Created via [`Peers::create_peer`] and owned
/// exclusively by the caller until passed to [`Peers::destroy_peer`].
pub struct Peer {
    session: SessionId,
    security: SecurityParameters,
    transcript: Hash,
}

impl Peer {
    /// A slot value that is not associated with any session.
    pub(crate) fn blank() -> Self {
        Peer {
            session: SessionId::unspecified(),
            security: SecurityParameters::default(),
            transcript: Hash::new(HashAlgorithm::DEFAULT),
        }
    }

    /// Initialize the slot for a new session.
    ///
    /// Every field is re-stamped so a recycled slot cannot carry state
    /// from a previously freed peer.
    pub(crate) fn reset(&mut self, session: SessionId) {
        self.security = SecurityParameters::default();
        self.transcript = Hash::new(HashAlgorithm::DEFAULT);
        self.session = session;
    }

    /// Drop the cipher state for both directions.
    ///
    /// Absent handles are a no-op, so this is safe in the pre-handshake
    /// state.
    pub(crate) fn release_ciphers(&mut self) {
        self.security.read_cipher = None;
        self.security.write_cipher = None;
    }

    /// The identity of the remote session.
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// The security parameters.
    pub fn security(&self) -> &SecurityParameters {
        &self.security
    }

    /// Mutable security parameters, for the handshake layer.
    pub fn security_mut(&mut self) -> &mut SecurityParameters {
        &mut self.security
    }

    /// The running handshake transcript.
    pub fn transcript(&self) -> &Hash {
        &self.transcript
    }

    /// Mutable transcript, for feeding handshake messages.
    pub fn transcript_mut(&mut self) -> &mut Hash {
        &mut self.transcript
    }
}

impl fmt::Debug for Peer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Peer")
            .field("session", &self.session)
            .field("security", &self.security)
            .finish()
    }
}

/// Factory and destructor for peers.
///
/// Owns the storage backend the peers are allocated from. The backend is
/// injected at composition time and cannot change afterwards.
pub struct Peers<S: Storage = DefaultStorage> {
    storage: S,
}

impl Peers {
    /// One-time setup of the peer subsystem with the build-selected backend.
    ///
    /// With the `static-pool` feature this allocates the pool of
    /// `MAX_PEERS` slots for the process lifetime.
    /// Without it, heap storage needs no setup. Call once per process.
    pub fn init() -> Peers<DefaultStorage> {
        #[cfg(feature = "static-pool")]
        {
            Peers::new(SlotPool::new(MAX_PEERS))
        }
        #[cfg(not(feature = "static-pool"))]
        {
            Peers::new(HeapStorage)
        }
    }
}

impl<S: Storage> Peers<S> {
    /// Create the peer subsystem over a specific storage backend.
    pub fn new(storage: S) -> Self {
        Peers { storage }
    }

    /// Create a peer for a newly observed session.
    ///
    /// Returns `None` when the backend cannot provide storage. This is
    /// recoverable, the caller typically drops the triggering datagram.
    pub fn create_peer(&mut self, session: SessionId) -> Option<Box<Peer>> {
        let mut peer = match self.storage.allocate() {
            Ok(p) => p,
            Err(e) => {
                error!("Failed to create peer for {}: {}", session, e);
                return None;
            }
        };

        peer.reset(session);

        debug!("Created peer for {}", session);

        Some(peer)
    }

    /// Destroy a peer, releasing its cipher state and its storage.
    ///
    /// Consumes the peer. The cipher handles are dropped here, exactly
    /// once, before the slot goes back to the backend.
    pub fn destroy_peer(&mut self, mut peer: Box<Peer>) {
        peer.release_ciphers();
        self.storage.free(peer);
    }
}

impl<S: Storage + fmt::Debug> fmt::Debug for Peers<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Peers")
            .field("storage", &self.storage)
            .finish()
    }
}
