//! Building echo requests and validating echo replies.
//!
//! For IPv4 the checksum is computed here and the inbound datagram includes
//! the IP header, which is stripped before the reply is handed back.  For
//! IPv6 the kernel computes and verifies the checksum over the pseudo-header
//! and delivers the bare ICMP packet.

use crate::sequence::SequenceTracker;
use crate::types::{PingId, Sequence};
use pingline_packet::checksum::icmp_checksum;
use pingline_packet::ipv4::Ipv4Packet;
use pingline_packet::{icmpv4, icmpv6, IpProtocol};
use std::net::IpAddr;
use thiserror::Error;

/// Why an inbound packet is not a reply to this session.
///
/// These are per-packet outcomes and never fatal.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum ValidationError {
    #[error("truncated or malformed packet")]
    Truncated,
    #[error("checksum mismatch")]
    ChecksumMismatch,
    #[error("unexpected ICMP type or code")]
    TypeCodeMismatch,
    #[error("identifier mismatch")]
    IdentifierMismatch,
    #[error("sequence number out of window")]
    SequenceOutOfWindow,
}

/// A validation result.
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

const ECHO_HEADER_SIZE: usize = 8;

/// Build an echo request packet for the given target.
pub fn make_echo_request(
    target: IpAddr,
    identifier: PingId,
    sequence: Sequence,
    payload: &[u8],
) -> Result<Vec<u8>, pingline_packet::error::Error> {
    let mut buf = vec![0_u8; ECHO_HEADER_SIZE + payload.len()];
    match target {
        IpAddr::V4(_) => {
            let mut packet = icmpv4::echo_request::EchoRequestPacket::new(&mut buf)?;
            packet.set_icmp_type(icmpv4::IcmpType::EchoRequest);
            packet.set_icmp_code(icmpv4::IcmpCode(0));
            packet.set_identifier(identifier.0);
            packet.set_sequence(sequence.0);
            packet.set_payload(payload);
            let checksum = icmp_checksum(packet.packet());
            packet.set_checksum(checksum);
        }
        IpAddr::V6(_) => {
            // checksum is left zero, the kernel fills it in
            let mut packet = icmpv6::echo_request::EchoRequestPacket::new(&mut buf)?;
            packet.set_icmp_type(icmpv6::IcmpType::EchoRequest);
            packet.set_icmp_code(icmpv6::IcmpCode(0));
            packet.set_identifier(identifier.0);
            packet.set_sequence(sequence.0);
            packet.set_payload(payload);
        }
    }
    Ok(buf)
}

/// The deterministic default payload for the given sequence number.
#[must_use]
pub fn default_payload(sequence: Sequence) -> Vec<u8> {
    format!("{:>4} bottles of beer on wall", 99 - (sequence.0 % 100)).into_bytes()
}

/// Validate an inbound datagram as an echo reply to this session.
///
/// On success returns the ICMP reply packet, with the IPv4 header stripped
/// where present, and the reply sequence number.
pub fn validate_reply(
    target: IpAddr,
    datagram: &[u8],
    identifier: PingId,
    tracker: &SequenceTracker,
) -> ValidationResult<(Vec<u8>, Sequence)> {
    match target {
        IpAddr::V4(_) => validate_reply_ipv4(datagram, identifier, tracker),
        IpAddr::V6(_) => validate_reply_ipv6(datagram, identifier, tracker),
    }
}

fn validate_reply_ipv4(
    datagram: &[u8],
    identifier: PingId,
    tracker: &SequenceTracker,
) -> ValidationResult<(Vec<u8>, Sequence)> {
    let icmp_bytes = strip_ipv4_header(datagram)?;
    if !verify_ipv4_checksum(icmp_bytes) {
        return Err(ValidationError::ChecksumMismatch);
    }
    let reply = icmpv4::echo_reply::EchoReplyPacket::new_view(icmp_bytes)
        .map_err(|_| ValidationError::Truncated)?;
    if reply.get_icmp_type() != icmpv4::IcmpType::EchoReply
        || reply.get_icmp_code() != icmpv4::IcmpCode(0)
    {
        return Err(ValidationError::TypeCodeMismatch);
    }
    let sequence = check_identity(reply.get_identifier(), reply.get_sequence(), identifier, tracker)?;
    Ok((icmp_bytes.to_vec(), sequence))
}

fn validate_reply_ipv6(
    datagram: &[u8],
    identifier: PingId,
    tracker: &SequenceTracker,
) -> ValidationResult<(Vec<u8>, Sequence)> {
    let reply = icmpv6::echo_reply::EchoReplyPacket::new_view(datagram)
        .map_err(|_| ValidationError::Truncated)?;
    if reply.get_icmp_type() != icmpv6::IcmpType::EchoReply
        || reply.get_icmp_code() != icmpv6::IcmpCode(0)
    {
        return Err(ValidationError::TypeCodeMismatch);
    }
    let sequence = check_identity(reply.get_identifier(), reply.get_sequence(), identifier, tracker)?;
    Ok((datagram.to_vec(), sequence))
}

fn check_identity(
    reply_identifier: u16,
    reply_sequence: u16,
    identifier: PingId,
    tracker: &SequenceTracker,
) -> ValidationResult<Sequence> {
    if reply_identifier != identifier.0 {
        return Err(ValidationError::IdentifierMismatch);
    }
    let sequence = Sequence(reply_sequence);
    if !tracker.validate(sequence) {
        return Err(ValidationError::SequenceOutOfWindow);
    }
    Ok(sequence)
}

/// Locate the ICMP packet within an IPv4 datagram.
fn strip_ipv4_header(datagram: &[u8]) -> ValidationResult<&[u8]> {
    let ipv4 = Ipv4Packet::new_view(datagram).map_err(|_| ValidationError::Truncated)?;
    if ipv4.get_version() != 4 || ipv4.get_protocol() != IpProtocol::Icmp {
        return Err(ValidationError::Truncated);
    }
    let header_bytes = usize::from(ipv4.get_header_length()) * 4;
    if header_bytes < Ipv4Packet::minimum_packet_size()
        || datagram.len() < header_bytes + ECHO_HEADER_SIZE
    {
        return Err(ValidationError::Truncated);
    }
    Ok(&datagram[header_bytes..])
}

/// Verify the checksum over the ICMP packet with the checksum field zeroed.
fn verify_ipv4_checksum(icmp_bytes: &[u8]) -> bool {
    let mut buf = icmp_bytes.to_vec();
    let Ok(mut packet) = icmpv4::echo_reply::EchoReplyPacket::new(&mut buf) else {
        return false;
    };
    let received = packet.get_checksum();
    packet.set_checksum(0);
    icmp_checksum(packet.packet()) == received
}
