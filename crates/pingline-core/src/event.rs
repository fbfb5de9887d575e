use crate::error::Error;
use crate::types::Sequence;
use std::net::IpAddr;

/// Events published by a ping session.
///
/// All outcomes, fatal and otherwise, are reported through this interface;
/// the session never returns them directly.
#[derive(Debug)]
pub enum Event {
    /// The session resolved the hostname and is ready to send pings.
    Started {
        /// The resolved target address.
        addr: IpAddr,
    },
    /// The session failed and will make no further progress.
    ///
    /// Published exactly once; the transport is closed before this fires.
    Failed {
        /// The fatal error.
        error: Error,
    },
    /// An echo request was sent in full.
    Sent {
        /// The packet as sent, including the ICMP header.
        packet: Vec<u8>,
        /// The sequence number of the request.
        sequence: Sequence,
    },
    /// An echo request could not be sent.
    ///
    /// This is non-fatal and the session remains active.
    SendFailed {
        /// The packet that could not be sent.
        packet: Vec<u8>,
        /// The sequence number of the request.
        sequence: Sequence,
        /// The send error.
        error: Error,
    },
    /// A matching echo reply arrived.
    Received {
        /// The reply with any IP header stripped.
        packet: Vec<u8>,
        /// The sequence number of the reply.
        sequence: Sequence,
        /// The numeric source address of the reply.
        from: String,
    },
    /// A packet arrived which is not a reply to this session.
    Unexpected {
        /// The raw datagram as received.
        packet: Vec<u8>,
        /// The numeric source address of the packet.
        from: String,
    },
}
