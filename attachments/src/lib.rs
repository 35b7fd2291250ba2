//! Evidence attachments.
//!
//! An evidence attachment is a zip archive with a single entry named
//! `SignedTransaction_<hex id>` whose payload is the bincode encoding of a
//! [`SignedTransaction`](reissue_transactions::SignedTransaction). The writer
//! side is used by whoever assembles the transaction; the [`EvidenceResolver`]
//! is what verification uses to get the embedded transaction back out.

pub mod archive;
pub mod error;

pub use archive::{
    evidence_attachment, evidence_entry_name, write_evidence_archive, EvidenceResolver,
    DEFAULT_MAX_ENTRY_BYTES, EVIDENCE_ENTRY_PREFIX,
};
pub use error::AttachmentError;
