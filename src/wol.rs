//! Sends magic packets as single UDP datagrams.
//!
//! A WoL packet is usually broadcast to every host on the segment and is
//! typically sent to port 0 (reserved), 7 (Echo) or 9 (Discard). `wake`
//! uses port 6 instead.
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

use crate::mac::HardwareAddress;
use crate::packet::MagicPacket;
use crate::password::SecureOnPassword;
use crate::Error;

pub const WELL_KNOWN_PORTS: [u16; 3] = [0, 7, 9];
pub const DEFAULT_PORT: u16 = 6;
pub const DEFAULT_ADDR: &str = "255.255.255.255:6";

/// Resolves `addr` (`host:port`), preferring IPv4 results.
fn resolve(addr: &str) -> Result<SocketAddr, Error> {
    let resolution_error = |source: io::Error| Error::AddressResolution {
        addr: addr.to_owned(),
        source,
    };
    let candidates: Vec<SocketAddr> = addr.to_socket_addrs().map_err(resolution_error)?.collect();

    candidates
        .iter()
        .find(|candidate| candidate.is_ipv4())
        .or_else(|| candidates.first())
        .copied()
        .ok_or_else(|| {
            resolution_error(io::Error::new(
                io::ErrorKind::NotFound,
                "no addresses found",
            ))
        })
}

/// Opens an ephemeral local socket of the same family as `dest` and
/// connects it there.
fn open(dest: SocketAddr) -> io::Result<UdpSocket> {
    let socket = match dest {
        SocketAddr::V4(_) => {
            let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
            socket.set_broadcast(true)?;
            socket
        }
        SocketAddr::V6(_) => UdpSocket::bind((Ipv6Addr::UNSPECIFIED, 0))?,
    };
    socket.connect(dest)?;
    Ok(socket)
}

impl MagicPacket {
    /// Sends the packet as one datagram to `addr`. The socket only lives for
    /// the duration of the call.
    pub fn send_to(&self, addr: &str) -> Result<(), Error> {
        let dest = resolve(addr)?;
        let socket = open(dest).map_err(|source| Error::Socket {
            addr: addr.to_owned(),
            source,
        })?;

        // a datagram is either sent whole or not at all
        socket.send(self.as_bytes()).map_err(|source| Error::Write {
            addr: addr.to_owned(),
            source,
        })?;

        Ok(())
    }
}

/// Sends a magic packet for `mac`, with an optional SecureOn password, to the
/// UDP address `addr`.
pub fn send_udp(
    addr: &str,
    mac: HardwareAddress,
    password: Option<SecureOnPassword>,
) -> Result<(), Error> {
    MagicPacket::new(mac, password).send_to(addr)
}

/// Wakes the device with the given MAC address by broadcasting to
/// 255.255.255.255:6.
pub fn wake(mac: &str) -> Result<(), Error> {
    wake_to(DEFAULT_ADDR, mac)
}

/// Parses `mac` and sends a magic packet without password to `addr`.
pub fn wake_to(addr: &str, mac: &str) -> Result<(), Error> {
    let mac: HardwareAddress = mac.parse()?;
    send_udp(addr, mac, None)
}
