use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A packed two-byte language or region code (`"en"`, `"US"`).
///
/// Stored as exactly two bytes without a terminator; `[0, 0]` means unset. The bytes
/// are opaque: nothing is validated or case-folded, and comparison is byte-wise.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleCode([u8; 2]);

impl LocaleCode {
    pub const UNSET: Self = Self([0, 0]);

    #[must_use]
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    /// Takes the first two bytes of `code`; shorter input is zero-filled.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        let mut bytes = [0u8; 2];
        for (slot, byte) in bytes.iter_mut().zip(code.bytes()) {
            *slot = byte;
        }
        Self(bytes)
    }

    #[must_use]
    pub const fn bytes(self) -> [u8; 2] {
        self.0
    }

    #[must_use]
    pub const fn is_unset(self) -> bool {
        self.0[0] == 0 && self.0[1] == 0
    }

    /// Both bytes packed big-endian into one value; `0` when unset.
    #[must_use]
    pub const fn packed(self) -> u16 {
        u16::from_be_bytes(self.0)
    }
}

impl From<&str> for LocaleCode {
    fn from(code: &str) -> Self {
        Self::from_code(code)
    }
}

impl From<[u8; 2]> for LocaleCode {
    fn from(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.0.iter().position(|b| *b == 0).unwrap_or(2);
        f.write_str(&String::from_utf8_lossy(&self.0[..len]))
    }
}

impl Serialize for LocaleCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LocaleCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(Self::from_code(&code))
    }
}
