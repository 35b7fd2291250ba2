//! Reading and writing evidence archives.

use std::io::{Cursor, Read, Write};

use reissue_transactions::{Attachment, AttachmentKind, SignedTransaction};
use reissue_types::SecureHash;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::AttachmentError;

/// Name prefix marking the archive entry that carries a signed transaction.
pub const EVIDENCE_ENTRY_PREFIX: &str = "SignedTransaction_";

/// Default cap on the decompressed size of an evidence entry (16 MiB).
pub const DEFAULT_MAX_ENTRY_BYTES: u64 = 16 * 1024 * 1024;

/// Archive entry name for the transaction with the given id.
pub fn evidence_entry_name(id: &SecureHash) -> String {
    format!("{EVIDENCE_ENTRY_PREFIX}{id}")
}

/// Serialize `stx` into a single-entry evidence archive.
pub fn write_evidence_archive(stx: &SignedTransaction) -> Result<Vec<u8>, AttachmentError> {
    let payload = bincode::serialize(stx)?;
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    writer.start_file(evidence_entry_name(&stx.id), options)?;
    writer.write_all(&payload)?;
    Ok(writer.finish()?.into_inner())
}

/// Wrap `stx` in a data attachment ready to be added to a transaction.
pub fn evidence_attachment(stx: &SignedTransaction) -> Result<Attachment, AttachmentError> {
    Ok(Attachment::new(AttachmentKind::Data, write_evidence_archive(stx)?))
}

/// Extracts embedded signed transactions from attachments.
#[derive(Clone, Debug)]
pub struct EvidenceResolver {
    entry_prefix: String,
    max_entry_bytes: u64,
}

impl Default for EvidenceResolver {
    fn default() -> Self {
        Self::new(EVIDENCE_ENTRY_PREFIX, DEFAULT_MAX_ENTRY_BYTES)
    }
}

impl EvidenceResolver {
    pub fn new(entry_prefix: impl Into<String>, max_entry_bytes: u64) -> Self {
        Self {
            entry_prefix: entry_prefix.into(),
            max_entry_bytes,
        }
    }

    /// Find the first entry carrying the marker prefix and decode it.
    ///
    /// `Ok(None)` means the archive is well-formed but carries no evidence.
    /// A corrupt archive, an oversized entry or an undecodable payload is an
    /// error, never a silent skip. So is an entry whose name suffix is not
    /// the id of the transaction it holds.
    pub fn resolve(
        &self,
        attachment: &Attachment,
    ) -> Result<Option<SignedTransaction>, AttachmentError> {
        let archive_error = |source| AttachmentError::Archive {
            attachment: attachment.id.to_string(),
            source,
        };
        let mut archive =
            ZipArchive::new(Cursor::new(attachment.bytes.as_slice())).map_err(archive_error)?;

        for index in 0..archive.len() {
            let entry = archive.by_index(index).map_err(archive_error)?;
            if !entry.name().starts_with(&self.entry_prefix) {
                continue;
            }

            let name = entry.name().to_string();
            if entry.size() > self.max_entry_bytes {
                return Err(AttachmentError::EntryTooLarge {
                    name,
                    size: entry.size(),
                    max: self.max_entry_bytes,
                });
            }

            // The declared size is untrusted; cap what is actually inflated.
            let mut payload = Vec::new();
            entry
                .take(self.max_entry_bytes + 1)
                .read_to_end(&mut payload)?;
            let read = payload.len() as u64;
            if read > self.max_entry_bytes {
                return Err(AttachmentError::EntryTooLarge {
                    name,
                    size: read,
                    max: self.max_entry_bytes,
                });
            }

            let stx: SignedTransaction =
                bincode::deserialize(&payload).map_err(|e| AttachmentError::Decode {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            let id = stx.id.to_string();
            if name[self.entry_prefix.len()..] != id {
                return Err(AttachmentError::EntryNameMismatch { name, id });
            }
            tracing::debug!(attachment = %attachment.id, entry = %name, "found evidence entry");
            return Ok(Some(stx));
        }

        tracing::debug!(attachment = %attachment.id, "attachment carries no evidence entry");
        Ok(None)
    }
}
