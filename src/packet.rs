//! Constructs a WakeOnLAN packet (so called "Magic Packet Technology"):
//! six `0xFF` bytes, the target MAC repeated 16 times and, optionally, a
//! SecureOn password.
use crate::mac::{HardwareAddress, MAC_LEN};
use crate::password::{SecureOnPassword, PASSWORD_LEN};
use crate::Error;

const SYNCHRONIZATION_STREAM: [u8; 6] = [0xFF; 6];
const MAC_REPETITIONS: usize = 16;

pub const MAGIC_PACKET_LEN: usize = SYNCHRONIZATION_STREAM.len() + MAC_REPETITIONS * MAC_LEN;
pub const SECURE_ON_PACKET_LEN: usize = MAGIC_PACKET_LEN + PASSWORD_LEN;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MagicPacket {
    bytes: [u8; SECURE_ON_PACKET_LEN],
    len: usize,
}

impl MagicPacket {
    pub fn new(mac: HardwareAddress, password: Option<SecureOnPassword>) -> Self {
        let mut bytes = [0u8; SECURE_ON_PACKET_LEN];
        let (sync, targets) = bytes[..MAGIC_PACKET_LEN].split_at_mut(SYNCHRONIZATION_STREAM.len());
        sync.copy_from_slice(&SYNCHRONIZATION_STREAM);
        for target in targets.chunks_exact_mut(MAC_LEN) {
            target.copy_from_slice(mac.as_bytes());
        }

        let len = match password {
            Some(password) => {
                bytes[MAGIC_PACKET_LEN..].copy_from_slice(password.as_bytes());
                SECURE_ON_PACKET_LEN
            }
            None => MAGIC_PACKET_LEN,
        };

        Self { bytes, len }
    }

    /// Builds a packet from a raw hardware address, which must be exactly
    /// 6 bytes long.
    pub fn from_slice(mac: &[u8], password: Option<SecureOnPassword>) -> Result<Self, Error> {
        Ok(Self::new(HardwareAddress::try_from(mac)?, password))
    }

    /// The datagram payload, 102 bytes or 108 with a password.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn target(&self) -> HardwareAddress {
        let start = SYNCHRONIZATION_STREAM.len();
        let mut mac = [0u8; MAC_LEN];
        mac.copy_from_slice(&self.bytes[start..start + MAC_LEN]);
        HardwareAddress::new(mac)
    }

    pub fn password(&self) -> Option<SecureOnPassword> {
        (self.len == SECURE_ON_PACKET_LEN).then(|| {
            let mut password = [0u8; PASSWORD_LEN];
            password.copy_from_slice(&self.bytes[MAGIC_PACKET_LEN..]);
            SecureOnPassword::new(password)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAC: HardwareAddress = HardwareAddress::new([0xAA, 0x01, 0xBB, 0x02, 0xCC, 0x03]);
    const PASSWORD: SecureOnPassword = SecureOnPassword::new([0x11, 0x22, 0x33, 0x44, 0xAA, 0xBB]);

    #[test]
    fn test_magic() {
        let pkt = MagicPacket::new(MAC, None);
        let bytes = pkt.as_bytes();
        assert_eq!(bytes.len(), 102);

        // starts with padding
        assert_eq!(&bytes[..6], &[255, 255, 255, 255, 255, 255]);

        // followed by 16 copies of the mac
        for i in 0..16 {
            assert_eq!(&bytes[6 + 6 * i..12 + 6 * i], MAC.as_bytes(), "block {i}");
        }

        assert_eq!(pkt.target(), MAC);
        assert_eq!(pkt.password(), None);
    }

    #[test]
    fn test_magic_secure_on() {
        let pkt = MagicPacket::new(MAC, Some(PASSWORD));
        let bytes = pkt.as_bytes();
        assert_eq!(bytes.len(), 108);
        assert_eq!(&bytes[..102], MagicPacket::new(MAC, None).as_bytes());
        assert_eq!(&bytes[102..], PASSWORD.as_bytes());
        assert_eq!(pkt.password(), Some(PASSWORD));
    }

    #[test]
    fn test_magic_ff_mac() {
        // a broadcast MAC makes the whole packet 0xFF
        let pkt = MagicPacket::new(HardwareAddress::new([0xFF; 6]), None);
        assert!(pkt.as_bytes().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_magic_deterministic() {
        assert_eq!(
            MagicPacket::new(MAC, Some(PASSWORD)),
            MagicPacket::new(MAC, Some(PASSWORD))
        );
    }

    #[test]
    fn test_magic_from_slice() {
        let pkt = MagicPacket::from_slice(MAC.as_bytes(), None).unwrap();
        assert_eq!(pkt, MagicPacket::new(MAC, None));

        assert!(matches!(
            MagicPacket::from_slice(&[0x01, 0x02, 0x03], None),
            Err(Error::InvalidAddressLength(3))
        ));
        assert!(matches!(
            MagicPacket::from_slice(&[0u8; 8], Some(PASSWORD)),
            Err(Error::InvalidAddressLength(8))
        ));
    }
}
