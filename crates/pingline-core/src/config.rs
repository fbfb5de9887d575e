use crate::types::PingId;
use pingline_dns::IpAddrFamily;

/// Default values for configuration.
pub mod defaults {
    use pingline_dns::IpAddrFamily;

    /// The default value for `addr-family`.
    pub const DEFAULT_ADDR_FAMILY: IpAddrFamily = IpAddrFamily::Any;
}

/// Configuration for a ping session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The hostname or address literal to ping.
    pub hostname: String,
    /// Which address family to accept from resolution.
    pub addr_family: IpAddrFamily,
    /// The echo identifier, chosen at random when not set.
    pub identifier: Option<PingId>,
}

impl SessionConfig {
    /// Create a configuration for the given hostname with defaults.
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            addr_family: defaults::DEFAULT_ADDR_FAMILY,
            identifier: None,
        }
    }

    /// Set which address family to accept.
    #[must_use]
    pub const fn addr_family(mut self, addr_family: IpAddrFamily) -> Self {
        self.addr_family = addr_family;
        self
    }

    /// Pin the echo identifier.
    #[must_use]
    pub const fn identifier(mut self, identifier: PingId) -> Self {
        self.identifier = Some(identifier);
        self
    }
}
