//! Pingline - an ICMP echo ("ping") session library.
//!
//! This crate provides a single-target ping session which resolves a
//! hostname, sends ICMP echo requests over an unprivileged datagram socket
//! and matches inbound echo replies by identifier and sequence number.
//!
//! The session performs no IO scheduling of its own: the caller decides when
//! to send a ping and when to poll for inbound data, and every outcome is
//! delivered through an event callback.
//!
//! # Example
//!
//! The following example resolves a host, sends a single ping and polls for
//! the reply:
//!
//! ```no_run
//! use pingline_core::{Event, IcmpTransport, PingSession, SessionConfig};
//! use pingline_dns::SystemResolver;
//!
//! let config = SessionConfig::new("example.com");
//! let mut session = PingSession::new(
//!     config,
//!     SystemResolver::new(),
//!     IcmpTransport::new(),
//!     |event| println!("{event:?}"),
//! );
//! session.start();
//! session.send_ping(None);
//! loop {
//!     session.on_readable();
//!     std::thread::sleep(std::time::Duration::from_millis(10));
//! }
//! ```
//!
//! # See Also
//!
//! - [`SessionConfig`] - Configure a [`PingSession`].
//! - [`PingSession::start`] - Resolve the target and open the transport.
//! - [`PingSession::send_ping`] - Send a single echo request.
//! - [`PingSession::on_readable`] - Drain and process pending replies.
#![warn(clippy::all, clippy::pedantic, clippy::nursery, rust_2018_idioms)]
#![allow(
    clippy::module_name_repetitions,
    clippy::use_self,
    clippy::option_if_let_else,
    clippy::missing_const_for_fn,
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc
)]
#![deny(unsafe_code)]

pub mod codec;
mod config;
mod constants;
mod error;
mod event;
mod sequence;
mod session;
mod transport;
mod types;

pub use config::{defaults, SessionConfig};
pub use constants::{MAX_DATAGRAM_SIZE, MAX_SEQUENCE_TRAVEL};
pub use error::{Error, ErrorKind, IoError, IoOperation, IoResult, Result};
pub use event::Event;
pub use sequence::SequenceTracker;
pub use session::{PingSession, State};
pub use transport::{Datagram, Transport};
pub use types::{PingId, Sequence};

#[cfg(unix)]
pub use transport::IcmpTransport;
