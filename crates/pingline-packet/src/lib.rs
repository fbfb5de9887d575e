//! Packet wire format parsing and building.
//!
//! The following packets are supported:
//! - `ICMPv4` echo request and echo reply
//! - `ICMPv6` echo request and echo reply
//! - `IPv4`
//!
//! # Endianness
//!
//! The identifier and sequence fields are held in network byte order
//! (big-endian) and the accessor methods take and return data in host byte
//! order, converting as necessary for the given architecture.
//!
//! The checksum field is the exception: it is read and written in native byte
//! order so that it pairs with [`checksum::icmp_checksum`], which sums the
//! packet as raw 16-bit words in memory.  The bytes that end up on the wire
//! are identical on all architectures.
//!
//! # Example
//!
//! The following example builds an `ICMPv4` echo request packet:
//!
//! ```rust
//! # fn main() -> anyhow::Result<()> {
//! use pingline_packet::checksum::icmp_checksum;
//! use pingline_packet::icmpv4::echo_request::EchoRequestPacket;
//! use pingline_packet::icmpv4::{IcmpCode, IcmpType};
//!
//! let mut buf = [0; EchoRequestPacket::minimum_packet_size()];
//! let mut icmp = EchoRequestPacket::new(&mut buf)?;
//! icmp.set_icmp_type(IcmpType::EchoRequest);
//! icmp.set_icmp_code(IcmpCode(0));
//! icmp.set_identifier(1234);
//! icmp.set_sequence(10);
//! icmp.set_checksum(icmp_checksum(icmp.packet()));
//! assert_eq!(0, icmp_checksum(icmp.packet()));
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

mod buffer;

/// Packet errors.
pub mod error;

/// Functions for calculating network checksums.
pub mod checksum;

/// `ICMPv4` packets.
pub mod icmpv4;

/// `ICMPv6` packets.
pub mod icmpv6;

/// `IPv4` packets.
pub mod ipv4;

/// The IP packet next layer protocol.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum IpProtocol {
    Icmp,
    IcmpV6,
    Other(u8),
}

impl IpProtocol {
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::Icmp => 1,
            Self::IcmpV6 => 58,
            Self::Other(id) => id,
        }
    }
}

impl From<u8> for IpProtocol {
    fn from(id: u8) -> Self {
        match id {
            1 => Self::Icmp,
            58 => Self::IcmpV6,
            p => Self::Other(p),
        }
    }
}

/// Format a payload as a hexadecimal string.
#[must_use]
pub fn fmt_payload(bytes: &[u8]) -> String {
    use itertools::Itertools as _;
    format!("{:02x}", bytes.iter().format(" "))
}
