use rand::thread_rng;
use rand::RngCore;

use super::Guid;
use super::GUID_LEN;

/// Creates a random (version 4) identifier.
pub fn create_guid() -> Guid {
    create_guid_with(&mut thread_rng())
}

/// Creates a random (version 4) identifier from the given source of
/// randomness.
pub fn create_guid_with<R: RngCore + ?Sized>(rng: &mut R) -> Guid {
    let mut raw = [0; GUID_LEN];
    rng.fill_bytes(&mut raw[..]);

    let mut guid = Guid::from_native_bytes(raw);
    guid.data3 = (guid.data3 & 0x0FFF) | 0x4000;
    guid.data4[0] = (guid.data4[0] & 0x3F) | 0x80;

    tracing::trace!(guid = %guid, "created random guid");
    guid
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn unique() {
        assert!(create_guid() != create_guid());
    }

    #[test]
    fn tagged_as_version_4() {
        for _ in 0..64 {
            let guid = create_guid();
            assert_eq!(guid.version(), 4);
            assert!(guid.is_rfc4122_variant());
        }
    }

    #[test]
    fn seeded_is_reproducible() {
        let a = create_guid_with(&mut StdRng::seed_from_u64(7));
        let b = create_guid_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(uuid::Uuid::from(a).get_version_num(), 4);
    }
}
