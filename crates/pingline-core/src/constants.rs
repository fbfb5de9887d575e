/// The maximum size of an inbound datagram.
///
/// Large enough for any reassembled IP datagram so a reply is never split
/// across reads.
pub const MAX_DATAGRAM_SIZE: usize = 65535;

/// The width of the sequence acceptance window after wraparound.
///
/// After the sequence number wraps past 65535 a reply is accepted only if it
/// is within this distance of the wrap, which keeps very stale replies from
/// the previous epoch out.  At one ping per second this allows for replies
/// up to two minutes old.
pub const MAX_SEQUENCE_TRAVEL: u16 = 120;
