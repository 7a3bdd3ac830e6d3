//! Re-exports of the most commonly used items.
//! It is intended to be glob imported as `use conutils::prelude::*;`.

pub use crate::color::table::initialize_256_color_table;
pub use crate::color::table::initialize_campbell_color_table;
pub use crate::color::table::set_color_table_alpha;
pub use crate::color::Color;
pub use crate::endian::EndianSwap;
pub use crate::guid;
pub use crate::guid::v5::NAMESPACE_DNS;
pub use crate::guid::v5::NAMESPACE_OID;
pub use crate::guid::v5::NAMESPACE_URL;
pub use crate::guid::v5::NAMESPACE_X500;
pub use crate::guid::create_guid;
pub use crate::guid::create_v5_uuid;
pub use crate::guid::Guid;
pub use crate::numeric::clamp_to_short_max;
