#![warn(clippy::all, clippy::pedantic, clippy::nursery, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions, clippy::missing_const_for_fn)]
#![forbid(unsafe_code)]

use clap::Parser;
use pingline_core::{Event, IcmpTransport, PingSession, SessionConfig, State};
use pingline_dns::{IpAddrFamily, SystemResolver};
use std::process;
use std::time::{Duration, Instant};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

const PING_INTERVAL: Duration = Duration::from_secs(1);
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Ping a host until interrupted
#[derive(Parser, Debug)]
#[command(name = "pingline", author, version, about, long_about = None, arg_required_else_help(true))]
struct Args {
    /// Ping using IPv4 only.
    #[arg(short = '4', long = "ipv4", conflicts_with = "ipv6")]
    ipv4: bool,

    /// Ping using IPv6 only.
    #[arg(short = '6', long = "ipv6")]
    ipv6: bool,

    /// The hostname or address to ping.
    host: String,
}

impl Args {
    fn addr_family(&self) -> IpAddrFamily {
        if self.ipv4 {
            IpAddrFamily::Ipv4Only
        } else if self.ipv6 {
            IpAddrFamily::Ipv6Only
        } else {
            IpAddrFamily::Any
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_span_events(FmtSpan::NONE)
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let config = SessionConfig::new(args.host.clone()).addr_family(args.addr_family());
    let mut session = PingSession::new(
        config,
        SystemResolver::new(),
        IcmpTransport::new(),
        print_event,
    );
    session.start();
    session.send_ping(None);
    let mut last_ping = Instant::now();
    while session.state() == State::Active {
        std::thread::sleep(POLL_INTERVAL);
        session.on_readable();
        if last_ping.elapsed() >= PING_INTERVAL {
            session.send_ping(None);
            last_ping = Instant::now();
        }
    }
    if session.state() == State::Failed {
        process::exit(1);
    }
    Ok(())
}

fn print_event(event: Event) {
    match event {
        Event::Started { addr } => println!("pinging {addr}"),
        Event::Failed { error } => println!("failed: {error}"),
        Event::Sent { packet, sequence } => {
            println!("#{sequence} sent, size {}", packet.len());
        }
        Event::SendFailed {
            sequence, error, ..
        } => println!("#{sequence} send failed: {error}"),
        Event::Received {
            packet,
            sequence,
            from,
        } => println!("#{sequence} received from {from}, size {}", packet.len()),
        Event::Unexpected { packet, from } => {
            println!("unexpected packet from {from}, size {}", packet.len());
        }
    }
}
