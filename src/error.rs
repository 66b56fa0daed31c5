use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The hardware address string is not a valid EUI-48 address
    #[error("{0}: invalid MAC address")]
    InvalidAddressFormat(String),

    /// A raw hardware address was not exactly 6 bytes long
    #[error("invalid hardware address length {0}, expected 6 bytes")]
    InvalidAddressLength(usize),

    /// The SecureOn password is not 12 hexadecimal digits
    #[error("{input}: invalid password: not a 6-byte hexadecimal")]
    InvalidPasswordFormat {
        input: String,
        #[source]
        source: hex::FromHexError,
    },

    #[error("unable to resolve '{addr}'")]
    AddressResolution {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("unable to open a UDP socket towards {addr}")]
    Socket {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("unable to send magic packet to {addr}")]
    Write {
        addr: String,
        #[source]
        source: io::Error,
    },
}
