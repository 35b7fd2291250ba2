use thiserror::Error;

#[derive(Debug, Error)]
pub enum AttachmentError {
    #[error("attachment {attachment} is not a readable archive: {source}")]
    Archive {
        attachment: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("entry {name} is {size} bytes, limit is {max}")]
    EntryTooLarge { name: String, size: u64, max: u64 },

    #[error("entry {name} does not hold a signed transaction: {reason}")]
    Decode { name: String, reason: String },

    #[error("entry {name} does not name the transaction it holds ({id})")]
    EntryNameMismatch { name: String, id: String },

    #[error("failed to encode evidence: {0}")]
    Encode(#[from] bincode::Error),

    #[error("failed to write archive: {0}")]
    Write(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
