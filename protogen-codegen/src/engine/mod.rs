//! Traversal and reduction engine.
//!
//! The engine is a shift-reduce machine over the schema tree: entering a
//! node shifts a [`GenerationFrame`] onto the [`ReductionStack`], leaving it
//! folds that frame into its parent through the [`REDUCTIONS`] table.
//! Completed units end up in the root accumulator under fresh asset keys.

mod frame;
mod reduce;
mod stack;
mod traversal;
mod walk;

pub use frame::{EnumFrame, FrameTag, GenerationFrame, MessageFrame, RootFrame, VariantFrame};
pub use reduce::{REDUCTIONS, Reduction, reduce_required, reducible};
pub use stack::{Fold, ReductionStack};
pub use traversal::{NodeBalance, Traversal, generate_units};
pub use walk::{SchemaVisitor, walk};
