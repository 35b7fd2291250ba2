#![no_main]

use libfuzzer_sys::fuzz_target;

use reissue_transactions::{SignedTransaction, WireTransaction};

fuzz_target!(|data: &[u8]| {
    // Decoding and id recomputation must never panic on malformed input.
    if let Ok(stx) = bincode::deserialize::<SignedTransaction>(data) {
        let _ = stx.verify_declared_id();
        let _ = stx.verify_signatures();
        let _ = stx.tx.output_count();
    }

    if let Ok(wire) = bincode::deserialize::<WireTransaction>(data) {
        let _ = wire.id();
        let _ = wire.inputs();
        let _ = wire.notary();
    }

    let _ = bincode::deserialize::<reissue_types::StateRef>(data);
    let _ = bincode::deserialize::<reissue_types::Signature>(data);
});
