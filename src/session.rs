//! Session identity for a remote endpoint.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Identifies the remote end of one DTLS session.
///
/// Address and port plus an interface index to disambiguate link-local
/// traffic arriving on different interfaces. This crate copies the value
/// into the peer and never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId {
    addr: SocketAddr,
    ifindex: u32,
}

impl SessionId {
    /// Create a session identity for the given remote address.
    pub fn new(addr: SocketAddr) -> Self {
        SessionId { addr, ifindex: 0 }
    }

    /// Create a session identity bound to a specific interface.
    pub fn with_ifindex(addr: SocketAddr, ifindex: u32) -> Self {
        SessionId { addr, ifindex }
    }

    /// The remote socket address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// The interface index, 0 when not set.
    pub fn ifindex(&self) -> u32 {
        self.ifindex
    }

    /// Placeholder identity for peer slots that are not in use.
    pub(crate) fn unspecified() -> Self {
        SessionId {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
            ifindex: 0,
        }
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ifindex == 0 {
            write!(f, "{}", self.addr)
        } else {
            write!(f, "{}%{}", self.addr, self.ifindex)
        }
    }
}
