#![cfg(kani)]

use crate::guid::v5::synthesize;

#[kani::proof]
fn synthesize_tags_every_digest() {
    let digest: [u8; 20] = kani::any();
    let guid = synthesize(&digest);
    assert_eq!(guid.version(), 5);
    assert!(guid.is_rfc4122_variant());
    // Everything outside the tagged bits is copied from the digest.
    let canonical = guid.to_be_bytes();
    assert_eq!(canonical[..6], digest[..6]);
    assert_eq!(canonical[6] & 0x0F, digest[6] & 0x0F);
    assert_eq!(canonical[7], digest[7]);
    assert_eq!(canonical[8] & 0x3F, digest[8] & 0x3F);
    assert_eq!(canonical[9..], digest[9..16]);
}
