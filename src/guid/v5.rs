//! Name based (version 5) identifiers.
//!
//! A version 5 identifier is derived from a namespace identifier and an
//! arbitrary byte name. The same pair always yields the same identifier,
//! and the result agrees bit for bit with every other RFC 4122 implementation:
//!
//! 1. the namespace is serialized in network order,
//! 2. SHA-1 is computed over that serialization followed by the name,
//! 3. the leading 16 digest bytes are read back as a network order [Guid],
//! 4. the version and variant bits are overwritten.
//!
//! # Example
//!
//! ```
//! use conutils::guid::v5::{create_v5_uuid, NAMESPACE_DNS};
//!
//! let guid = create_v5_uuid(&NAMESPACE_DNS, b"www.example.com");
//! assert_eq!(format!("{guid:x}"), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
//! ```

use crate::endian::from_network_order;
use crate::endian::to_network_order;
use crate::hash;
use crate::hash::RawDigest;

use super::Guid;
use super::RawGuid;
use super::GUID_LEN;

/// Name string is a fully-qualified domain name.
pub const NAMESPACE_DNS: Guid = Guid::from_u128(0x6ba7b810_9dad_11d1_80b4_00c04fd430c8);
/// Name string is a URL.
pub const NAMESPACE_URL: Guid = Guid::from_u128(0x6ba7b811_9dad_11d1_80b4_00c04fd430c8);
/// Name string is an ISO OID.
pub const NAMESPACE_OID: Guid = Guid::from_u128(0x6ba7b812_9dad_11d1_80b4_00c04fd430c8);
/// Name string is an X.500 DN (in DER or a text output format).
pub const NAMESPACE_X500: Guid = Guid::from_u128(0x6ba7b814_9dad_11d1_80b4_00c04fd430c8);

const VERSION: u16 = 5;

/// Derives the version 5 identifier for `name` within `namespace`.
pub fn create_v5_uuid(namespace: &Guid, name: &[u8]) -> Guid {
    let mut buffer = Vec::with_capacity(GUID_LEN + name.len());
    buffer.extend_from_slice(&normalize_namespace(namespace));
    buffer.extend_from_slice(name);

    let guid = synthesize(&hash::digest(&buffer));
    tracing::trace!(
        namespace = %namespace,
        name_len = name.len(),
        guid = %guid,
        "derived v5 guid"
    );
    guid
}

/// Serializes `namespace` in network order, the byte layout the digest is
/// defined over.
pub fn normalize_namespace(namespace: &Guid) -> RawGuid {
    to_network_order(*namespace).to_native_bytes()
}

/// Turns a digest into a version 5 identifier in host-native layout.
///
/// The tagging has to happen after the conversion out of network order,
/// since the version and variant live at fixed field positions.
pub fn synthesize(digest: &RawDigest) -> Guid {
    let mut raw = [0; GUID_LEN];
    raw.copy_from_slice(&digest[..GUID_LEN]);

    let mut guid = from_network_order(Guid::from_native_bytes(raw));
    guid.data3 = (guid.data3 & 0x0FFF) | (VERSION << 12);
    guid.data4[0] = (guid.data4[0] & 0x3F) | 0x80;
    guid
}
