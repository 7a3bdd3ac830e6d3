//! The structured 128 bit identifier used by console hosts.
//!
//! A [Guid] keeps its three integer fields in host-native byte order and its
//! 8 byte tail as a plain byte sequence, mirroring the Windows `GUID` memory
//! layout. The canonical RFC 4122 form stores every field big-endian. Use
//! [Guid::to_be_bytes]/[Guid::from_be_bytes] to cross that boundary and
//! [Guid::to_native_bytes]/[Guid::from_native_bytes] for the raw memory image.
//!
//! Name based identifiers live in [v5], random ones in [v4].

pub mod v4;
pub mod v5;

use std::fmt;
use std::fmt::Display;
use std::fmt::LowerHex;
use std::fmt::UpperHex;
use std::str::FromStr;

use arbitrary::Arbitrary;
use hex::FromHex;
use hex::FromHexError;
use zerocopy::FromBytes;
use zerocopy::Immutable;
use zerocopy::IntoBytes;
use zerocopy::KnownLayout;

pub use v4::create_guid;
pub use v5::create_v5_uuid;

/// The length of a 128bit identifier in bytes.
pub const GUID_LEN: usize = 16;

/// Represents a 16 byte identifier image.
pub type RawGuid = [u8; GUID_LEN];

/// A 128 bit identifier with a 32 bit field, two 16 bit fields and an
/// 8 byte tail.
///
/// The integer fields are stored in host-native order. The type is
/// `#[repr(C)]` without padding, so its memory image is exactly
/// [GUID_LEN] bytes.
///
/// # Example
///
/// ```
/// use conutils::guid::Guid;
///
/// let guid: Guid = "{6BA7B810-9DAD-11D1-80B4-00C04FD430C8}".parse().unwrap();
/// assert_eq!(guid.data1, 0x6ba7b810);
/// assert_eq!(guid.to_string(), "{6BA7B810-9DAD-11D1-80B4-00C04FD430C8}");
/// assert_eq!(format!("{guid:x}"), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
/// ```
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    FromBytes,
    IntoBytes,
    KnownLayout,
    Immutable,
    Arbitrary,
)]
#[repr(C)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl Guid {
    /// The all zero identifier.
    pub const NIL: Guid = Guid::new(0, 0, 0, [0; 8]);

    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }

    /// Builds a `Guid` from its canonical 128 bit integer value,
    /// where `data1` occupies the most significant 32 bits.
    pub const fn from_u128(value: u128) -> Self {
        Self {
            data1: (value >> 96) as u32,
            data2: (value >> 80) as u16,
            data3: (value >> 64) as u16,
            data4: (value as u64).to_be_bytes(),
        }
    }

    /// Inverse of [Guid::from_u128].
    pub const fn as_u128(&self) -> u128 {
        (self.data1 as u128) << 96
            | (self.data2 as u128) << 80
            | (self.data3 as u128) << 64
            | u64::from_be_bytes(self.data4) as u128
    }

    /// Reads the canonical big-endian (RFC 4122) byte layout.
    pub const fn from_be_bytes(raw: RawGuid) -> Self {
        Self {
            data1: u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]),
            data2: u16::from_be_bytes([raw[4], raw[5]]),
            data3: u16::from_be_bytes([raw[6], raw[7]]),
            data4: [
                raw[8], raw[9], raw[10], raw[11], raw[12], raw[13], raw[14], raw[15],
            ],
        }
    }

    /// Writes the canonical big-endian (RFC 4122) byte layout.
    pub const fn to_be_bytes(&self) -> RawGuid {
        let d1 = self.data1.to_be_bytes();
        let d2 = self.data2.to_be_bytes();
        let d3 = self.data3.to_be_bytes();
        let d4 = self.data4;
        [
            d1[0], d1[1], d1[2], d1[3], d2[0], d2[1], d3[0], d3[1], d4[0], d4[1], d4[2], d4[3],
            d4[4], d4[5], d4[6], d4[7],
        ]
    }

    /// Reinterprets a host-native memory image as a `Guid`.
    pub fn from_native_bytes(raw: RawGuid) -> Self {
        zerocopy::transmute!(raw)
    }

    /// Returns the host-native memory image of this `Guid`.
    pub fn to_native_bytes(&self) -> RawGuid {
        zerocopy::transmute!(*self)
    }

    /// The version number stored in bits 12 to 15 of `data3`.
    pub const fn version(&self) -> u8 {
        (self.data3 >> 12) as u8
    }

    /// Whether the top two bits of the tail carry the RFC 4122 variant `10`.
    pub const fn is_rfc4122_variant(&self) -> bool {
        self.data4[0] & 0xC0 == 0x80
    }

    pub const fn is_nil(&self) -> bool {
        self.as_u128() == 0
    }

    /// Parses the braced registry form (`{XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}`)
    /// or the bare hyphenated form, in either hex case.
    pub fn parse(text: &str) -> Result<Self, GuidParseError> {
        parse_guid(text).inspect_err(|err| {
            tracing::debug!(input = text, error = %err, "rejected guid string");
        })
    }

    fn write_hyphenated(&self, f: &mut fmt::Formatter<'_>, upper: bool) -> fmt::Result {
        for (i, byte) in self.to_be_bytes().iter().enumerate() {
            if matches!(i, 4 | 6 | 8 | 10) {
                f.write_str("-")?;
            }
            if upper {
                write!(f, "{byte:02X}")?;
            } else {
                write!(f, "{byte:02x}")?;
            }
        }
        Ok(())
    }
}

// Offsets of the hyphens in the bare hyphenated form.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];
const HYPHENATED_LEN: usize = 36;
const BRACED_LEN: usize = HYPHENATED_LEN + 2;

fn parse_guid(text: &str) -> Result<Guid, GuidParseError> {
    let bytes = text.as_bytes();
    let (inner, offset) = match (bytes.first(), bytes.last()) {
        (Some(b'{'), Some(b'}')) if bytes.len() >= 2 => (&bytes[1..bytes.len() - 1], 1),
        (Some(b'{'), _) | (_, Some(b'}')) => return Err(GuidParseError::UnbalancedBraces),
        _ => (bytes, 0),
    };
    if inner.len() != HYPHENATED_LEN {
        return Err(GuidParseError::BadLength(text.len()));
    }

    let mut digits = [0u8; 2 * GUID_LEN];
    let mut next = 0;
    for (index, &byte) in inner.iter().enumerate() {
        if HYPHENS.contains(&index) {
            if byte != b'-' {
                return Err(GuidParseError::BadSeparator {
                    index: index + offset,
                });
            }
        } else {
            digits[next] = byte;
            next += 1;
        }
    }

    let raw = RawGuid::from_hex(digits)?;
    Ok(Guid::from_be_bytes(raw))
}

/// Error that can occur when parsing a [Guid] from text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuidParseError {
    /// The input has neither the braced nor the bare hyphenated length.
    BadLength(usize),
    /// Only one of the opening and closing brace is present.
    UnbalancedBraces,
    /// A hyphen was expected at this byte offset of the input.
    BadSeparator { index: usize },
    BadHex(FromHexError),
}

impl From<FromHexError> for GuidParseError {
    fn from(value: FromHexError) -> Self {
        GuidParseError::BadHex(value)
    }
}

impl Display for GuidParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuidParseError::BadLength(len) => write!(
                f,
                "guid string has length {len}, expected {HYPHENATED_LEN} or {BRACED_LEN}"
            ),
            GuidParseError::UnbalancedBraces => write!(f, "guid string has unbalanced braces"),
            GuidParseError::BadSeparator { index } => {
                write!(f, "expected '-' at offset {index} of guid string")
            }
            GuidParseError::BadHex(err) => write!(f, "invalid hex in guid string: {err}"),
        }
    }
}

impl std::error::Error for GuidParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GuidParseError::BadHex(err) => Some(err),
            _ => None,
        }
    }
}

impl FromStr for Guid {
    type Err = GuidParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Guid::parse(s)
    }
}

/// The braced uppercase registry form.
impl Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{self:X}}}")
    }
}

impl LowerHex for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_hyphenated(f, false)
    }
}

impl UpperHex for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_hyphenated(f, true)
    }
}

impl From<Guid> for uuid::Uuid {
    fn from(guid: Guid) -> Self {
        uuid::Uuid::from_fields(guid.data1, guid.data2, guid.data3, &guid.data4)
    }
}

impl From<uuid::Uuid> for Guid {
    fn from(uuid: uuid::Uuid) -> Self {
        let (data1, data2, data3, data4) = uuid.as_fields();
        Guid::new(data1, data2, data3, *data4)
    }
}

/// The host-native memory image.
impl AsRef<[u8]> for Guid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[doc(hidden)]
pub use hex_literal::hex as _hex_literal_hex;

/// Creates a [Guid] from a hex string literal in canonical byte order.
/// Whitespace between the digits is ignored.
///
/// # Example
/// ```
/// use conutils::guid;
/// const DNS: conutils::guid::Guid = guid!("6ba7b810 9dad 11d1 80b4 00c04fd430c8");
/// assert_eq!(DNS, conutils::guid::v5::NAMESPACE_DNS);
/// ```
#[macro_export]
macro_rules! guid {
    ( $data:expr ) => {
        $crate::guid::Guid::from_be_bytes($crate::guid::_hex_literal_hex!($data))
    };
}

#[cfg(feature = "proptest")]
pub struct GuidValueTree(Guid);

/// Generates uniformly random [Guid]s without any version or variant tagging.
#[cfg(feature = "proptest")]
#[derive(Debug)]
pub struct RandomGuid();

#[cfg(feature = "proptest")]
impl proptest::strategy::Strategy for RandomGuid {
    type Tree = GuidValueTree;
    type Value = Guid;

    fn new_tree(
        &self,
        runner: &mut proptest::prelude::prop::test_runner::TestRunner,
    ) -> proptest::prelude::prop::strategy::NewTree<Self> {
        use proptest::prelude::Rng;

        let rng = runner.rng();
        let mut raw = [0; GUID_LEN];
        rng.fill_bytes(&mut raw[..]);

        Ok(GuidValueTree(Guid::from_native_bytes(raw)))
    }
}

#[cfg(feature = "proptest")]
impl proptest::strategy::ValueTree for GuidValueTree {
    type Value = Guid;

    fn simplify(&mut self) -> bool {
        false
    }
    fn complicate(&mut self) -> bool {
        false
    }
    fn current(&self) -> Guid {
        self.0
    }
}
