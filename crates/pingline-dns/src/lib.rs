//! This crate provides a blocking forward DNS resolver with address family
//! filtering.
//!
//! A hostname may resolve to a mix of IPv4 and IPv6 addresses; the
//! [`IpAddrFamily`] filter selects which of those a caller is prepared to
//! use.
//!
//! # Example
//!
//! The following example resolves a hostname using the OS resolver and picks
//! the first IPv4 address:
//!
//! ```no_run
//! # fn main() -> anyhow::Result<()> {
//! use pingline_dns::{IpAddrFamily, Resolver, SystemResolver};
//!
//! let resolver = SystemResolver::new();
//! let resolved = resolver.lookup("example.com")?;
//! if let Some(addr) = resolved.select(IpAddrFamily::Ipv4Only) {
//!     println!("resolved to {addr}");
//! }
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

mod resolver;
mod system;

pub use resolver::{Error, IpAddrFamily, ResolvedIpAddrs, Resolver, Result};
pub use system::SystemResolver;
