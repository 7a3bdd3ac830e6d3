use conutils::color::table::initialize_256_color_table;
use conutils::color::Color;
use conutils::guid::v5::{create_v5_uuid, NAMESPACE_URL};
use conutils::guid::Guid;
use rayon::prelude::*;

fn names() -> Vec<Vec<u8>> {
    (0..2_000u32)
        .map(|i| format!("https://example.com/profile/{i}").into_bytes())
        .collect()
}

#[test]
fn parallel_matches_sequential() {
    let names = names();
    let sequential: Vec<Guid> = names
        .iter()
        .map(|name| create_v5_uuid(&NAMESPACE_URL, name))
        .collect();
    let parallel: Vec<Guid> = names
        .par_iter()
        .map(|name| create_v5_uuid(&NAMESPACE_URL, name))
        .collect();
    assert_eq!(sequential, parallel);
}

#[test]
fn parallel_distinct_namespaces() {
    let namespaces: Vec<Guid> = (0..256u128).map(|i| Guid::from_u128(i << 64 | 1)).collect();
    let results: Vec<(Guid, Guid)> = namespaces
        .par_iter()
        .map(|ns| (*ns, create_v5_uuid(ns, b"shared name")))
        .collect();
    for (ns, guid) in results {
        assert_eq!(guid, create_v5_uuid(&ns, b"shared name"));
    }
}

#[test]
fn parallel_table_initialization() {
    let tables: Vec<Vec<Color>> = (0..64)
        .into_par_iter()
        .map(|_| {
            let mut table = vec![Color::default(); 256];
            initialize_256_color_table(&mut table).expect("table is large enough");
            table
        })
        .collect();
    assert!(tables.windows(2).all(|pair| pair[0] == pair[1]));
}
