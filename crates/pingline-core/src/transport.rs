//! Non-blocking ICMP datagram transport.

use crate::error::IoResult;
use std::net::IpAddr;

/// A datagram received from the network.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Datagram {
    /// The raw bytes as delivered by the socket.
    pub bytes: Vec<u8>,
    /// The numeric source address, or `unknown` when unavailable.
    pub from: String,
}

/// The network transport used by a ping session.
#[cfg_attr(test, mockall::automock)]
pub trait Transport {
    /// Open a socket suitable for reaching the target address.
    fn open(&mut self, target: IpAddr) -> IoResult<()>;

    /// Send a datagram to the target, returning the number of bytes sent.
    fn send(&mut self, bytes: &[u8]) -> IoResult<usize>;

    /// Receive the next pending datagram, if any.
    ///
    /// Returns `Ok(None)` when no datagram is waiting.
    fn recv(&mut self) -> IoResult<Option<Datagram>>;

    /// Close the socket, if open.
    fn close(&mut self);
}

#[cfg(unix)]
pub use icmp::IcmpTransport;

#[cfg(unix)]
mod icmp {
    use super::{Datagram, Transport};
    use crate::constants::MAX_DATAGRAM_SIZE;
    use crate::error::{IoError, IoOperation, IoResult};
    use pingline_packet::fmt_payload;
    use socket2::{Domain, Protocol, SockAddr, Socket, Type};
    use std::io;
    use std::net::{IpAddr, Shutdown, SocketAddr};
    use tracing::instrument;

    /// A non-blocking ICMP transport over datagram sockets.
    ///
    /// Datagram ICMP sockets do not require elevated privileges on platforms
    /// which enable them and the kernel fills in the echo identifier checks
    /// for IPv6.  Inbound IPv4 datagrams include the IP header.
    #[derive(Debug, Default)]
    pub struct IcmpTransport {
        socket: Option<Socket>,
        target: Option<SocketAddr>,
        buf: Vec<u8>,
    }

    impl IcmpTransport {
        #[must_use]
        pub fn new() -> Self {
            Self {
                socket: None,
                target: None,
                buf: vec![0_u8; MAX_DATAGRAM_SIZE],
            }
        }
    }

    impl Transport for IcmpTransport {
        #[instrument(skip(self), level = "trace")]
        fn open(&mut self, target: IpAddr) -> IoResult<()> {
            let (domain, protocol) = match target {
                IpAddr::V4(_) => (Domain::IPV4, Protocol::ICMPV4),
                IpAddr::V6(_) => (Domain::IPV6, Protocol::ICMPV6),
            };
            let socket = Socket::new(domain, Type::DGRAM, Some(protocol))
                .map_err(|err| IoError::Other(err, IoOperation::NewSocket))?;
            socket
                .set_nonblocking(true)
                .map_err(|err| IoError::Other(err, IoOperation::SetNonBlocking))?;
            self.socket = Some(socket);
            self.target = Some(SocketAddr::new(target, 0));
            Ok(())
        }

        #[instrument(skip_all, level = "trace")]
        fn send(&mut self, bytes: &[u8]) -> IoResult<usize> {
            let (socket, target) =
                open_parts(self.socket.as_ref(), self.target, IoOperation::SendTo)?;
            tracing::trace!(?target, payload = fmt_payload(bytes));
            socket
                .send_to(bytes, &SockAddr::from(target))
                .map_err(|err| IoError::SendTo(err, target))
        }

        #[instrument(skip_all, level = "trace")]
        fn recv(&mut self) -> IoResult<Option<Datagram>> {
            let (socket, _) =
                open_parts(self.socket.as_ref(), self.target, IoOperation::RecvFrom)?;
            match socket.recv_from_into_buf(&mut self.buf) {
                Ok((0, _)) => Err(IoError::Other(
                    io::Error::from(io::ErrorKind::UnexpectedEof),
                    IoOperation::RecvFrom,
                )),
                Ok((bytes_read, addr)) => {
                    let from = addr.map_or_else(|| String::from("unknown"), |a| a.ip().to_string());
                    let bytes = self.buf[..bytes_read].to_vec();
                    tracing::trace!(%from, payload = fmt_payload(&bytes));
                    Ok(Some(Datagram { bytes, from }))
                }
                Err(err) if err.kind() == io::ErrorKind::WouldBlock => Ok(None),
                Err(err) => Err(IoError::Other(err, IoOperation::RecvFrom)),
            }
        }

        #[instrument(skip(self), level = "trace")]
        fn close(&mut self) {
            if let Some(socket) = self.socket.take() {
                // a close error is of no use to anyone
                socket.shutdown(Shutdown::Both).ok();
            }
            self.target = None;
        }
    }

    fn open_parts(
        socket: Option<&Socket>,
        target: Option<SocketAddr>,
        operation: IoOperation,
    ) -> IoResult<(&Socket, SocketAddr)> {
        match (socket, target) {
            (Some(socket), Some(target)) => Ok((socket, target)),
            _ => Err(IoError::Other(
                io::Error::from(io::ErrorKind::NotConnected),
                operation,
            )),
        }
    }

    /// An extension trait to allow `recv_from` method which writes to a `&mut [u8]`.
    ///
    /// This is required for `socket2::Socket` which [does not currently provide] this method.
    ///
    /// [does not currently provide]: https://github.com/rust-lang/socket2/issues/223
    trait RecvFrom {
        fn recv_from_into_buf(&self, buf: &mut [u8]) -> io::Result<(usize, Option<SocketAddr>)>;
    }

    impl RecvFrom for Socket {
        // Safety: the `recv` implementation promises not to write uninitialised
        // bytes to the `buf`fer, so this casting is safe.
        #![allow(unsafe_code)]
        fn recv_from_into_buf(&self, buf: &mut [u8]) -> io::Result<(usize, Option<SocketAddr>)> {
            let buf = unsafe {
                &mut *(std::ptr::from_mut::<[u8]>(buf) as *mut [std::mem::MaybeUninit<u8>])
            };
            self.recv_from(buf)
                .map(|(size, addr)| (size, addr.as_socket()))
        }
    }
}
