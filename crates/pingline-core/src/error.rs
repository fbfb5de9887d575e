use std::fmt::{Display, Formatter};
use std::io;
use std::net::SocketAddr;
use thiserror::Error;

/// A ping session error result.
pub type Result<T> = std::result::Result<T, Error>;

/// A ping session error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("resolution failed: {0}")]
    Resolution(#[from] pingline_dns::Error),
    #[error("invalid packet: {0}")]
    Packet(#[from] pingline_packet::error::Error),
    #[error("IO error: {0}")]
    Io(#[from] IoError),
}

/// Custom IO error result.
pub type IoResult<T> = std::result::Result<T, IoError>;

/// Custom IO error.
#[derive(Error, Debug)]
pub enum IoError {
    #[error("Sendto error for {1}: {0}")]
    SendTo(io::Error, SocketAddr),
    #[error("Failed to {1}: {0}")]
    Other(io::Error, IoOperation),
}

impl IoError {
    /// Get the custom error kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SendTo(e, _) | Self::Other(e, _) => ErrorKind::from(e),
        }
    }
}

/// Custom error kind.
///
/// This includes additional error kinds that are not part of the standard [`io::ErrorKind`].
#[derive(Debug, Eq, PartialEq)]
pub enum ErrorKind {
    HostUnreachable,
    NetUnreachable,
    Std(io::ErrorKind),
}

/// Io operation.
#[derive(Debug)]
pub enum IoOperation {
    NewSocket,
    SetNonBlocking,
    SendTo,
    RecvFrom,
    Shutdown,
}

impl Display for IoOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NewSocket => write!(f, "create new socket"),
            Self::SetNonBlocking => write!(f, "set non-blocking"),
            Self::SendTo => write!(f, "send to"),
            Self::RecvFrom => write!(f, "recv from"),
            Self::Shutdown => write!(f, "shutdown"),
        }
    }
}

#[cfg(unix)]
impl From<&io::Error> for ErrorKind {
    fn from(value: &io::Error) -> Self {
        if value.raw_os_error() == io::Error::from(nix::Error::EHOSTUNREACH).raw_os_error() {
            Self::HostUnreachable
        } else if value.raw_os_error() == io::Error::from(nix::Error::ENETUNREACH).raw_os_error() {
            Self::NetUnreachable
        } else {
            Self::Std(value.kind())
        }
    }
}

#[cfg(not(unix))]
impl From<&io::Error> for ErrorKind {
    fn from(value: &io::Error) -> Self {
        Self::Std(value.kind())
    }
}
