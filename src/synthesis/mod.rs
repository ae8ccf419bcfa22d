//! Recipe synthesis: from a flat BeerXML recipe to an ordered, linear
//! pipeline of process steps.
//!
//! Additions are first routed into buckets (mash, sparge, boil, stand,
//! primary, secondary, packaging). Each later phase appends its steps and
//! takes the buckets it places; the output volume of one step is the input
//! of the next.

pub mod context;
pub mod names;
pub mod orchestrator;
pub mod phase_trait;
pub mod phases;

#[cfg(test)]
pub(crate) mod test_support;

pub use context::{Bucket, IngredientBuckets, SynthesisContext};
pub use orchestrator::{RecipeSynthesizer, IMPORTED_BATCH_DESCRIPTION};
pub use phase_trait::SynthesisPhase;
