//! SecureOn passwords, appended to the magic packet by NICs that require one.
use std::fmt;
use std::str::FromStr;

use crate::Error;

pub const PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SecureOnPassword([u8; PASSWORD_LEN]);

impl SecureOnPassword {
    pub const fn new(bytes: [u8; PASSWORD_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PASSWORD_LEN] {
        &self.0
    }
}

impl From<[u8; PASSWORD_LEN]> for SecureOnPassword {
    fn from(bytes: [u8; PASSWORD_LEN]) -> Self {
        Self(bytes)
    }
}

/// Parses exactly 12 hexadecimal digits, in any case, without separators.
impl FromStr for SecureOnPassword {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut password = [0u8; PASSWORD_LEN];
        hex::decode_to_slice(input, &mut password).map_err(|source| {
            Error::InvalidPasswordFormat {
                input: input.to_owned(),
                source,
            }
        })?;
        Ok(Self(password))
    }
}

impl fmt::Display for SecureOnPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(self.0))
    }
}
