//! Top-up dilution and the fermentation stages.

use crate::beerxml::additions::AMBIENT_WATER_TEMPERATURE;
use crate::error::ImportResult;
use crate::model::{FermentationStage, StepKind, Temperature, TimeSpan};
use crate::synthesis::context::{Bucket, SynthesisContext};
use crate::synthesis::names;
use crate::synthesis::phase_trait::SynthesisPhase;

pub struct FermentPhase;

impl SynthesisPhase for FermentPhase {
    fn name(&self) -> &'static str {
        "FermentPhase"
    }

    fn execute(&self, context: &mut SynthesisContext<'_>) -> ImportResult<()> {
        let source = context.source;

        let top_up = context.equipment.top_up_water;
        if top_up.value() > 0.0 {
            let water = context.water_addition(
                top_up,
                Temperature::celsius(AMBIENT_WATER_TEMPERATURE),
                TimeSpan::default(),
            );
            context.append_step(
                "Top Up",
                format!("Top up with {}", top_up),
                vec![water],
                StepKind::Dilute {
                    output_volume: names::DILUTED_WORT.to_string(),
                },
            );
        }

        let stages = source.fermentation_stages;
        if stages >= 1 {
            let ingredients = context.buckets.take(Bucket::Primary);
            context.append_step(
                "Primary Fermentation",
                "",
                ingredients,
                StepKind::Ferment {
                    output_volume: names::PRIMARY_FERMENTED.to_string(),
                    stage: FermentationStage::Primary,
                    temperature: source.primary_temp,
                    duration: source.primary_age,
                },
            );
        }
        if stages >= 2 {
            let ingredients = context.buckets.take(Bucket::Secondary);
            context.append_step(
                "Secondary Fermentation",
                "",
                ingredients,
                StepKind::Ferment {
                    output_volume: names::SECONDARY_FERMENTED.to_string(),
                    stage: FermentationStage::Secondary,
                    temperature: source.secondary_temp,
                    duration: source.secondary_age,
                },
            );
        }
        if stages >= 3 {
            // BeerXML cannot attribute ingredients to the tertiary stage.
            context.append_step(
                "Tertiary Fermentation",
                "",
                Vec::new(),
                StepKind::Ferment {
                    output_volume: names::TERTIARY_FERMENTED.to_string(),
                    stage: FermentationStage::Tertiary,
                    temperature: source.tertiary_temp,
                    duration: source.tertiary_age.unwrap_or_default(),
                },
            );
        }

        Ok(())
    }
}
