use conutils::endian::EndianSwap;
use conutils::guid::v5::{create_v5_uuid, NAMESPACE_DNS, NAMESPACE_OID, NAMESPACE_URL, NAMESPACE_X500};
use conutils::guid::Guid;
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use conutils::guid::RandomGuid;

fn guid_strategy() -> impl Strategy<Value = Guid> {
    any::<[u8; 16]>().prop_map(Guid::from_native_bytes)
}

#[test]
fn www_example_com() {
    let guid = create_v5_uuid(&NAMESPACE_DNS, b"www.example.com");
    assert_eq!(guid.to_string(), "{2ED6657D-E927-568B-95E1-2665A8AEA6A2}");
    assert_eq!(
        uuid::Uuid::from(guid),
        uuid::Uuid::parse_str("2ed6657d-e927-568b-95e1-2665a8aea6a2").unwrap()
    );
}

#[test]
fn well_known_namespaces_differ() {
    let name = b"terminal";
    let ids = [
        create_v5_uuid(&NAMESPACE_DNS, name),
        create_v5_uuid(&NAMESPACE_URL, name),
        create_v5_uuid(&NAMESPACE_OID, name),
        create_v5_uuid(&NAMESPACE_X500, name),
    ];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

proptest! {
    #[test]
    fn deterministic(ns in guid_strategy(), name in prop::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(create_v5_uuid(&ns, &name), create_v5_uuid(&ns, &name));
    }

    #[test]
    fn version_and_variant(ns in guid_strategy(), name in prop::collection::vec(any::<u8>(), 0..256)) {
        let guid = create_v5_uuid(&ns, &name);
        prop_assert_eq!(guid.data3 >> 12, 0b0101);
        prop_assert_eq!(guid.data4[0] >> 6, 0b10);
        prop_assert_eq!(guid.version(), 5);
        prop_assert!(guid.is_rfc4122_variant());
    }

    #[test]
    fn agrees_with_uuid_crate(ns in guid_strategy(), name in prop::collection::vec(any::<u8>(), 0..256)) {
        let ours = create_v5_uuid(&ns, &name);
        let theirs = uuid::Uuid::new_v5(&uuid::Uuid::from(ns), &name);
        prop_assert_eq!(uuid::Uuid::from(ours), theirs);
    }

    #[test]
    fn name_sensitive(ns in guid_strategy(), name in prop::collection::vec(any::<u8>(), 0..64), extra in any::<u8>()) {
        let mut longer = name.clone();
        longer.push(extra);
        prop_assert_ne!(create_v5_uuid(&ns, &name), create_v5_uuid(&ns, &longer));
    }

    #[test]
    fn namespace_sensitive(a in guid_strategy(), b in guid_strategy(), name in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assume!(a != b);
        prop_assert_ne!(create_v5_uuid(&a, &name), create_v5_uuid(&b, &name));
    }

    #[test]
    fn endian_swap_involution(v16 in any::<u16>(), v32 in any::<u32>(), guid in guid_strategy()) {
        prop_assert_eq!(v16.endian_swap().endian_swap(), v16);
        prop_assert_eq!(v32.endian_swap().endian_swap(), v32);
        prop_assert_eq!(guid.endian_swap().endian_swap(), guid);
        prop_assert_eq!(guid.endian_swap().data4, guid.data4);
    }

    #[test]
    fn text_round_trip(guid in guid_strategy()) {
        prop_assert_eq!(guid.to_string().parse::<Guid>(), Ok(guid));
        prop_assert_eq!(format!("{guid:x}").parse::<Guid>(), Ok(guid));
    }
}

#[cfg(feature = "proptest")]
proptest! {
    #[test]
    fn random_guid_strategy(ns in RandomGuid()) {
        let guid = create_v5_uuid(&ns, b"profile");
        prop_assert_eq!(guid.version(), 5);
        prop_assert_eq!(Guid::from(uuid::Uuid::from(ns)), ns);
    }
}
