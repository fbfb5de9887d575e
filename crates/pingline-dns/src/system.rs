use crate::resolver::{Error, ResolvedIpAddrs, Resolver, Result};

/// A resolver backed by the OS resolver.
///
/// The lookup is blocking and honours the host's `/etc/hosts`,
/// `/etc/resolv.conf` and any other name services the OS is configured with.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Resolver for SystemResolver {
    fn lookup(&self, hostname: impl AsRef<str>) -> Result<ResolvedIpAddrs> {
        let hostname = hostname.as_ref();
        let addrs = dns_lookup::lookup_host(hostname)
            .map_err(|err| Error::LookupFailed(Box::new(err)))?;
        if addrs.is_empty() {
            Err(Error::HostNotFound(String::from(hostname)))
        } else {
            Ok(ResolvedIpAddrs(addrs))
        }
    }
}
