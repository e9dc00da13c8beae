//! Protocol enums for security parameters.

// TODO: support more. Do we avoid RSA?
// TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,   // c02f

/// Cipher suite selector.
///
/// Every peer starts out with `TLS_NULL_WITH_NULL_NULL` until the handshake
/// negotiates a real suite.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherSuite {
    /// Pre-handshake baseline: no encryption, no authentication.
    TLS_NULL_WITH_NULL_NULL, // 0000
    TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256, // c02b
    TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384, // c02c
}

/// Compression method selector (only null is ever negotiated).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    Null,
}
