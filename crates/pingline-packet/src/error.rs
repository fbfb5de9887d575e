use thiserror::Error;

/// A packet error result.
pub type Result<T> = std::result::Result<T, Error>;

/// A packet error.
///
/// Packet construction is the only fallible operation in this crate: the
/// accessors are bounds-checked by construction, so the one failure mode is
/// a buffer too small for the fixed header of the requested packet (8 bytes
/// for echo packets, 20 for an `IPv4` header).
#[derive(Error, Debug, Eq, PartialEq)]
pub enum Error {
    /// Attempting to create a packet with an insufficient buffer size.
    #[error("insufficient buffer for {0} packet, minimum={1}, provided={2}")]
    InsufficientPacketBuffer(String, usize, usize),
}
