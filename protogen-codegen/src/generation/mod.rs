//! Asset keys, the registry and the regeneration decision.
//!
//! - [`AssetKey`] / [`GeneratedBatch`] - identifiers of written artifacts
//! - [`Registry`] - persisted ledger of batches
//! - [`generate_or_skip`] - the run-over-run regeneration decision

mod asset;
mod decision;
mod registry;

pub use asset::{AssetKey, GENERATED_SUFFIX, GeneratedBatch};
pub use decision::{
    CleanOutcome, GenerateOutcome, PreviewFile, RegenerationReason, RegistryState, clean,
    generate_or_skip, preview,
};
pub use registry::Registry;
