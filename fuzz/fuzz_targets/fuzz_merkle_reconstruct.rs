#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use reissue_transactions::{reconstruct_id, ComponentGroup, PrivacySalt};

#[derive(Debug, Arbitrary)]
struct Input {
    salt: [u8; 32],
    groups: Vec<(u8, Vec<Vec<u8>>)>,
}

// Reconstruction over arbitrary group layouts either yields an id or a typed
// error, and is deterministic.
fuzz_target!(|input: Input| {
    let Ok(salt) = PrivacySalt::new(input.salt) else {
        return;
    };
    let groups: Vec<ComponentGroup> = input
        .groups
        .into_iter()
        .map(|(index, components)| ComponentGroup::new(u32::from(index), components))
        .collect();

    let first = reconstruct_id(&groups, &salt);
    let second = reconstruct_id(&groups, &salt);
    match (first, second) {
        (Ok(a), Ok(b)) => assert_eq!(a, b),
        (Err(_), Err(_)) => {}
        _ => panic!("reconstruction is not deterministic"),
    }
});
