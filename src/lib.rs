//! Deterministic identifiers, byte order helpers and color tables for
//! console hosts.
//!
//! The centerpiece is [create_v5_uuid], which derives an RFC 4122 version 5
//! identifier from a namespace [Guid] and an arbitrary byte name:
//!
//! ```
//! use conutils::prelude::*;
//!
//! let profile = create_v5_uuid(&NAMESPACE_DNS, b"www.example.com");
//! assert_eq!(profile.version(), 5);
//! assert_eq!(profile, create_v5_uuid(&NAMESPACE_DNS, b"www.example.com"));
//! ```

pub mod color;
pub mod endian;
pub mod guid;
pub mod hash;
pub mod numeric;
pub mod prelude;

pub use guid::create_guid;
pub use guid::create_v5_uuid;
pub use guid::Guid;

#[cfg(kani)]
#[path = "../proofs/mod.rs"]
mod proofs;
