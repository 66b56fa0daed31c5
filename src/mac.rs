//! Parses IEEE EUI-48 MAC addresses in the usual colon, hyphen and dotted
//! notations.
use std::fmt;
use std::str::FromStr;

use crate::Error;

pub const MAC_LEN: usize = 6;

/// Hardware address of the interface to wake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HardwareAddress([u8; MAC_LEN]);

impl HardwareAddress {
    pub const fn new(bytes: [u8; MAC_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; MAC_LEN] {
        &self.0
    }
}

impl From<[u8; MAC_LEN]> for HardwareAddress {
    fn from(bytes: [u8; MAC_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for HardwareAddress {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; MAC_LEN] = bytes
            .try_into()
            .map_err(|_| Error::InvalidAddressLength(bytes.len()))?;
        Ok(Self(bytes))
    }
}

impl FromStr for HardwareAddress {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_eui48(input)
            .map(Self)
            .ok_or_else(|| Error::InvalidAddressFormat(input.to_owned()))
    }
}

impl fmt::Display for HardwareAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

/// Returns the separator and the number of hex digits per group, based on
/// the length of the input and the position of the first separator.
fn notation(input: &str) -> Option<(char, usize)> {
    let bytes = input.as_bytes();
    match bytes.len() {
        // 01:23:45:67:89:ab or 01-23-45-67-89-ab
        17 if matches!(bytes[2], b':' | b'-') => Some((bytes[2] as char, 2)),
        // 0123.4567.89ab
        14 if bytes[4] == b'.' => Some(('.', 4)),
        _ => None,
    }
}

fn parse_eui48(input: &str) -> Option<[u8; MAC_LEN]> {
    let (separator, width) = notation(input)?;

    // the same separator must split the input into equally sized groups
    let groups: Vec<&str> = input.split(separator).collect();
    if groups.len() != 2 * MAC_LEN / width || groups.iter().any(|g| g.len() != width) {
        return None;
    }

    let mut mac = [0u8; MAC_LEN];
    hex::decode_to_slice(groups.concat(), &mut mac).ok()?;
    Some(mac)
}
