#![no_main]

use libfuzzer_sys::fuzz_target;

use reissue_attachments::EvidenceResolver;
use reissue_transactions::{Attachment, AttachmentKind};

// Arbitrary bytes posing as an evidence attachment must resolve to a value or
// an error, never a panic or an unbounded allocation.
fuzz_target!(|data: &[u8]| {
    let attachment = Attachment::new(AttachmentKind::Data, data.to_vec());
    let resolver = EvidenceResolver::new("SignedTransaction_", 1 << 20);
    if let Ok(Some(stx)) = resolver.resolve(&attachment) {
        let _ = stx.verify_declared_id();
        let _ = stx.tx.inputs();
        let _ = stx.tx.notary();
    }
});
