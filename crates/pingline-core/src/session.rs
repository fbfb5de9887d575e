//! The ping session state machine.

use crate::codec;
use crate::config::SessionConfig;
use crate::error::{Error, IoError};
use crate::event::Event;
use crate::sequence::SequenceTracker;
use crate::transport::Transport;
use crate::types::{PingId, Sequence};
use pingline_dns::{Error as DnsError, IpAddrFamily, Resolver};
use std::io;
use std::net::IpAddr;
use tracing::instrument;

/// The lifecycle state of a [`PingSession`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum State {
    /// Created but not yet started.
    Idle,
    /// Resolving the hostname.
    Resolving,
    /// Resolved and able to send and receive pings.
    Active,
    /// Stopped by request.
    Stopped,
    /// Stopped by a fatal error.
    Failed,
}

/// A single-target ICMP echo session.
///
/// The session is driven by the caller, it performs no IO of its own accord.
/// Call [`start`](Self::start) to resolve the target and open the transport,
/// [`send_ping`](Self::send_ping) to send an echo request and
/// [`on_readable`](Self::on_readable) whenever the transport may have data
/// pending.  All outcomes are delivered through the event callback.
///
/// Fatal errors close the transport and move the session to
/// [`State::Failed`], from which no further progress is made.
#[derive(Debug)]
pub struct PingSession<R, T, F> {
    hostname: String,
    addr_family: IpAddrFamily,
    identifier: PingId,
    resolver: R,
    transport: T,
    on_event: F,
    state: State,
    tracker: SequenceTracker,
    resolved_addr: Option<IpAddr>,
}

impl<R, T, F> PingSession<R, T, F>
where
    R: Resolver,
    T: Transport,
    F: FnMut(Event),
{
    /// Create a session from the given configuration.
    ///
    /// When the configuration does not pin an identifier a random one is
    /// chosen, so that replies to other sessions on the host are told apart.
    pub fn new(config: SessionConfig, resolver: R, transport: T, on_event: F) -> Self {
        let identifier = config
            .identifier
            .unwrap_or_else(|| PingId(rand::random::<u16>()));
        Self {
            hostname: config.hostname,
            addr_family: config.addr_family,
            identifier,
            resolver,
            transport,
            on_event,
            state: State::Idle,
            tracker: SequenceTracker::new(),
            resolved_addr: None,
        }
    }

    /// The hostname this session pings.
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// The echo identifier carried by every request.
    #[must_use]
    pub const fn identifier(&self) -> PingId {
        self.identifier
    }

    /// The address family filter applied during resolution.
    #[must_use]
    pub const fn addr_family(&self) -> IpAddrFamily {
        self.addr_family
    }

    /// The sequence number the next echo request will carry.
    #[must_use]
    pub const fn next_sequence(&self) -> Sequence {
        self.tracker.next_sequence()
    }

    /// The resolved target address, whilst the session is active.
    #[must_use]
    pub const fn resolved_addr(&self) -> Option<IpAddr> {
        self.resolved_addr
    }

    /// The current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Resolve the hostname and open the transport.
    ///
    /// Does nothing unless the session is idle.  On success the session
    /// becomes active and [`Event::Started`] fires, otherwise the session
    /// fails.
    #[instrument(skip_all, level = "trace")]
    pub fn start(&mut self) {
        if self.state != State::Idle {
            return;
        }
        self.state = State::Resolving;
        let addr = match self.resolve() {
            Ok(addr) => addr,
            Err(err) => {
                self.fail(err);
                return;
            }
        };
        if let Err(err) = self.transport.open(addr) {
            self.fail(Error::Io(err));
            return;
        }
        self.resolved_addr = Some(addr);
        self.state = State::Active;
        (self.on_event)(Event::Started { addr });
    }

    /// Send a single echo request.
    ///
    /// Does nothing unless the session is active.  The default payload is
    /// used when none is given.  The sequence number advances whether or not
    /// the send succeeds and a failed send is reported as
    /// [`Event::SendFailed`] without stopping the session.
    #[instrument(skip_all, level = "trace")]
    pub fn send_ping(&mut self, payload: Option<&[u8]>) {
        if self.state != State::Active {
            tracing::trace!(state = ?self.state, "ignoring send_ping");
            return;
        }
        let Some(addr) = self.resolved_addr else {
            return;
        };
        let sequence = self.tracker.next_sequence();
        let payload = payload.map_or_else(|| codec::default_payload(sequence), <[u8]>::to_vec);
        let packet = match codec::make_echo_request(addr, self.identifier, sequence, &payload) {
            Ok(packet) => packet,
            Err(err) => {
                self.fail(Error::Packet(err));
                return;
            }
        };
        let outcome = self.transport.send(&packet);
        self.tracker.advance();
        match outcome {
            Ok(sent) if sent == packet.len() => {
                (self.on_event)(Event::Sent { packet, sequence });
            }
            Ok(_) => {
                let error = Error::Io(IoError::SendTo(
                    io::Error::from(io::ErrorKind::WriteZero),
                    std::net::SocketAddr::new(addr, 0),
                ));
                (self.on_event)(Event::SendFailed {
                    packet,
                    sequence,
                    error,
                });
            }
            Err(err) => {
                (self.on_event)(Event::SendFailed {
                    packet,
                    sequence,
                    error: Error::Io(err),
                });
            }
        }
    }

    /// Drain and process all pending inbound datagrams.
    ///
    /// Does nothing unless the session is active.  Matching replies are
    /// reported as [`Event::Received`], everything else as
    /// [`Event::Unexpected`].  A transport read error fails the session.
    #[instrument(skip_all, level = "trace")]
    pub fn on_readable(&mut self) {
        while self.state == State::Active {
            match self.transport.recv() {
                Ok(Some(datagram)) => self.handle_datagram(datagram.bytes, datagram.from),
                Ok(None) => break,
                Err(err) => {
                    self.fail(Error::Io(err));
                    break;
                }
            }
        }
    }

    /// Stop the session.
    ///
    /// Closes the transport and forgets the resolved address.  Does nothing
    /// when the session has not started or has already stopped or failed.
    #[instrument(skip_all, level = "trace")]
    pub fn stop(&mut self) {
        match self.state {
            State::Idle | State::Stopped | State::Failed => {}
            State::Resolving | State::Active => {
                self.transport.close();
                self.resolved_addr = None;
                self.state = State::Stopped;
            }
        }
    }

    fn resolve(&mut self) -> Result<IpAddr, Error> {
        let resolved = self.resolver.lookup(&self.hostname)?;
        resolved
            .select(self.addr_family)
            .ok_or_else(|| Error::Resolution(DnsError::HostNotFound(self.hostname.clone())))
    }

    fn handle_datagram(&mut self, bytes: Vec<u8>, from: String) {
        let Some(addr) = self.resolved_addr else {
            return;
        };
        match codec::validate_reply(addr, &bytes, self.identifier, &self.tracker) {
            Ok((packet, sequence)) => {
                (self.on_event)(Event::Received {
                    packet,
                    sequence,
                    from,
                });
            }
            Err(reason) => {
                tracing::trace!(%reason, %from, "unexpected packet");
                (self.on_event)(Event::Unexpected {
                    packet: bytes,
                    from,
                });
            }
        }
    }

    /// Fail the session with a fatal error.
    ///
    /// The transport is closed before [`Event::Failed`] fires.
    fn fail(&mut self, error: Error) {
        self.transport.close();
        self.resolved_addr = None;
        self.state = State::Failed;
        (self.on_event)(Event::Failed { error });
    }
}
