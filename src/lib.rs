//! Wake-on-LAN: builds magic packets for a MAC address, with an optional
//! SecureOn password, and sends them as UDP datagrams.
//!
//! The simplest way to use this crate is
//!
//! ```no_run
//! wol::wake("01:23:45:67:89:ab")?;
//! # Ok::<(), wol::Error>(())
//! ```
pub mod error;
pub mod mac;
pub mod packet;
pub mod password;
pub mod wol;

pub use error::Error;
pub use mac::HardwareAddress;
pub use packet::MagicPacket;
pub use password::SecureOnPassword;
pub use self::wol::{send_udp, wake, wake_to, DEFAULT_ADDR, DEFAULT_PORT, WELL_KNOWN_PORTS};
