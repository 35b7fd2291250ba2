//! The replaced-asset abstraction.

use reissue_types::Party;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// An asset type that can be re-issued.
///
/// The concrete type is bound at the call site; the contracts never inspect
/// it at runtime beyond [`ReissuableAsset::asset_kind`].
pub trait ReissuableAsset: Clone + PartialEq + Debug + Serialize {
    /// Parties that must agree to any change of this asset.
    fn participants(&self) -> Vec<Party>;

    /// Name of the concrete asset kind. All originals under one lock must
    /// agree on it.
    ///
    /// Defaults to the Rust type name. Enums that model several asset kinds
    /// in one type override it.
    fn asset_kind(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// An asset-issuance command, opaque to the re-issuance contracts.
///
/// A request records the command the issuer must use to mint replacements;
/// the lock contract only compares it for equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetCommand {
    pub tag: String,
    pub payload: Vec<u8>,
}

impl AssetCommand {
    pub fn new(tag: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            tag: tag.into(),
            payload,
        }
    }

    pub fn tagged(tag: impl Into<String>) -> Self {
        Self::new(tag, Vec::new())
    }
}
