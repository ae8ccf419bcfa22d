//! Packaging, always the last step.

use crate::error::ImportResult;
use crate::model::{StepKind, Volume};
use crate::synthesis::context::{Bucket, SynthesisContext};
use crate::synthesis::names;
use crate::synthesis::phase_trait::SynthesisPhase;

pub struct PackagePhase;

impl SynthesisPhase for PackagePhase {
    fn name(&self) -> &'static str {
        "PackagePhase"
    }

    fn execute(&self, context: &mut SynthesisContext<'_>) -> ImportResult<()> {
        // BeerXML has no packaging loss. The difference between the
        // equipment and recipe batch sizes is the closest figure; it is
        // kept even when negative.
        let packaging_loss = Volume::litres(
            context.equipment.batch_size.value() - context.source.batch_size.value(),
        )
        .estimated();

        let ingredients = context.buckets.take(Bucket::Packaging);
        let style = Some(context.style.name.clone());
        context.append_step(
            "Package",
            "",
            ingredients,
            StepKind::Package {
                output_volume: names::PACKAGED_BEER.to_string(),
                packaging_loss,
                style,
            },
        );
        Ok(())
    }
}
