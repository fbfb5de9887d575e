use std::fmt::{Display, Formatter};
use std::net::IpAddr;
use thiserror::Error;

/// A DNS resolver.
pub trait Resolver {
    /// Perform a blocking DNS hostname lookup and return the resolved IPv4 or IPv6 addresses.
    fn lookup(&self, hostname: impl AsRef<str>) -> Result<ResolvedIpAddrs>;
}

/// A DNS resolver error result.
pub type Result<T> = std::result::Result<T, Error>;

/// A DNS resolver error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no suitable address found for {0}")]
    HostNotFound(String),
    #[error("DNS lookup failed")]
    LookupFailed(Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// Which address family to accept from a lookup.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum IpAddrFamily {
    /// Accept the first address of either family.
    Any,
    /// Accept IPv4 only.
    Ipv4Only,
    /// Accept IPv6 only.
    Ipv6Only,
}

impl Display for IpAddrFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => write!(f, "Any"),
            Self::Ipv4Only => write!(f, "Ipv4Only"),
            Self::Ipv6Only => write!(f, "Ipv6Only"),
        }
    }
}

/// The output of a successful DNS lookup.
///
/// The addresses are held in the order returned by the underlying resolver.
#[derive(Debug, Clone)]
pub struct ResolvedIpAddrs(pub(super) Vec<IpAddr>);

impl ResolvedIpAddrs {
    /// The first resolved address permitted by the given family filter.
    #[must_use]
    pub fn select(&self, family: IpAddrFamily) -> Option<IpAddr> {
        self.0
            .iter()
            .find(|addr| match family {
                IpAddrFamily::Any => true,
                IpAddrFamily::Ipv4Only => addr.is_ipv4(),
                IpAddrFamily::Ipv6Only => addr.is_ipv6(),
            })
            .copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'_ IpAddr> {
        self.0.iter()
    }
}

impl From<Vec<IpAddr>> for ResolvedIpAddrs {
    fn from(value: Vec<IpAddr>) -> Self {
        Self(value)
    }
}

impl IntoIterator for ResolvedIpAddrs {
    type Item = IpAddr;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use test_case::test_case;

    fn addrs() -> ResolvedIpAddrs {
        ResolvedIpAddrs::from(vec![
            IpAddr::from_str("2606:4700::6810:84e5").unwrap(),
            IpAddr::from_str("104.16.132.229").unwrap(),
            IpAddr::from_str("104.16.133.229").unwrap(),
        ])
    }

    #[test_case(IpAddrFamily::Any, Some("2606:4700::6810:84e5"); "any picks first")]
    #[test_case(IpAddrFamily::Ipv4Only, Some("104.16.132.229"); "first ipv4")]
    #[test_case(IpAddrFamily::Ipv6Only, Some("2606:4700::6810:84e5"); "first ipv6")]
    fn test_select(family: IpAddrFamily, expected: Option<&str>) {
        let expected = expected.map(|addr| IpAddr::from_str(addr).unwrap());
        assert_eq!(expected, addrs().select(family));
    }

    #[test]
    fn test_select_no_match() {
        let resolved =
            ResolvedIpAddrs::from(vec![IpAddr::from_str("2606:4700::6810:84e5").unwrap()]);
        assert_eq!(None, resolved.select(IpAddrFamily::Ipv4Only));
    }

    #[test]
    fn test_select_empty() {
        let resolved = ResolvedIpAddrs::from(vec![]);
        assert_eq!(None, resolved.select(IpAddrFamily::Any));
    }
}
