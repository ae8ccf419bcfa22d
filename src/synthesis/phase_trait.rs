use super::context::SynthesisContext;
use crate::error::ImportResult;

/// One stage of turning a BeerXML recipe into process steps.
pub trait SynthesisPhase {
    fn name(&self) -> &'static str;

    fn execute(&self, context: &mut SynthesisContext<'_>) -> ImportResult<()>;
}
