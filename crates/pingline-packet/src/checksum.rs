//! The Internet checksum for `ICMP` echo packets.
//!
//! The checksum is the one's complement of the one's complement sum of the
//! packet taken as a sequence of 16-bit words.  The words are summed in
//! native byte order, which makes this a checksum over the raw bytes in
//! memory: the bytes written to the wire are identical on big and little
//! endian architectures, only the numeric value of the intermediate sum
//! differs.
//!
//! A packet which carries its own valid checksum sums to zero.

/// Calculate the checksum for an `ICMP` echo packet.
///
/// An odd trailing byte is padded with a zero byte.
#[must_use]
pub fn icmp_checksum(data: &[u8]) -> u16 {
    let mut sum = 0_u32;
    let mut chunks = data.chunks_exact(2);
    for word in chunks.by_ref() {
        sum += u32::from(u16::from_ne_bytes([word[0], word[1]]));
    }
    if let [last] = chunks.remainder() {
        sum += u32::from(u16::from_ne_bytes([*last, 0]));
    }
    finalize_checksum(sum)
}

const fn finalize_checksum(mut sum: u32) -> u16 {
    while sum >> 16 != 0 {
        sum = (sum >> 16) + (sum & 0xFFFF);
    }
    !sum as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(0xFFFF, icmp_checksum(&[]));
    }

    #[test]
    fn test_single_zero_byte() {
        assert_eq!(0xFFFF, icmp_checksum(&[0x00]));
    }

    #[test]
    fn test_all_zeros() {
        assert_eq!(0xFFFF, icmp_checksum(&[0x00; 8]));
    }

    // byte-symmetric words sum to the same value on either endianness
    #[test]
    fn test_symmetric_words() {
        assert_eq!(0x5454, icmp_checksum(&[0xab, 0xab]));
        assert_eq!(0xA8A8, icmp_checksum(&[0xab, 0xab, 0xab, 0xab]));
    }

    #[test]
    fn test_carry_fold() {
        assert_eq!(0x0000, icmp_checksum(&[0xff, 0xff]));
        assert_eq!(0x0000, icmp_checksum(&[0xff, 0xff, 0xff, 0xff]));
    }

    #[test]
    fn test_self_verify() {
        let mut buf = [0x08, 0x00, 0x00, 0x00, 0x12, 0x34, 0x00, 0x01];
        let checksum = icmp_checksum(&buf);
        buf[2..4].copy_from_slice(&checksum.to_ne_bytes());
        assert_eq!(0, icmp_checksum(&buf));
    }

    #[test]
    fn test_self_verify_odd_length() {
        let mut buf = [0x08, 0x00, 0x00, 0x00, 0x12, 0x34, 0x00, 0x01, 0x61];
        let checksum = icmp_checksum(&buf);
        buf[2..4].copy_from_slice(&checksum.to_ne_bytes());
        assert_eq!(0, icmp_checksum(&buf));
    }
}
