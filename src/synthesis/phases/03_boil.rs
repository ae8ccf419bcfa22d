//! Boil, hop stand and cooling.

use crate::beerxml::additions::AMBIENT_WATER_TEMPERATURE;
use crate::beerxml::recipe::DEFAULT_FERMENTATION_TEMPERATURE;
use crate::error::ImportResult;
use crate::model::{StepKind, Temperature, TimeSpan};
use crate::synthesis::context::{Bucket, SynthesisContext};
use crate::synthesis::names;
use crate::synthesis::phase_trait::SynthesisPhase;

pub struct BoilPhase;

impl SynthesisPhase for BoilPhase {
    fn name(&self) -> &'static str {
        "BoilPhase"
    }

    fn execute(&self, context: &mut SynthesisContext<'_>) -> ImportResult<()> {
        let source = context.source;
        let has_boil_ingredients = !context.buckets.is_empty(Bucket::Boil);
        if !has_boil_ingredients && source.boil_time.value() <= 0.0 {
            return Ok(());
        }

        let mut ingredients = Vec::new();
        if context.is_first_step() {
            ingredients.push(context.water_addition(
                source.boil_size,
                Temperature::celsius(AMBIENT_WATER_TEMPERATURE),
                TimeSpan::default(),
            ));
        }
        ingredients.extend(context.buckets.take(Bucket::Boil));

        context.append_step(
            "Boil",
            format!("Boil for {}", source.boil_time),
            ingredients,
            StepKind::Boil {
                output_volume: names::BOIL_OUTPUT.to_string(),
                duration: source.boil_time,
            },
        );

        if !context.buckets.is_empty(Bucket::Stand) {
            let stand = context.buckets.take(Bucket::Stand);
            let longest = stand
                .iter()
                .map(|addition| addition.time().value())
                .fold(0.0_f64, f64::max);
            context.append_step(
                "Hop Stand",
                "Steep aroma hops after the boil",
                stand,
                StepKind::Stand {
                    output_volume: names::HOP_STAND_OUTPUT.to_string(),
                    duration: TimeSpan::minutes(longest),
                },
            );
        }

        if has_boil_ingredients {
            let target_temperature = source
                .primary_temp
                .unwrap_or_else(|| Temperature::celsius(DEFAULT_FERMENTATION_TEMPERATURE));
            context.append_step(
                "Cool",
                format!("Chill to {}", target_temperature),
                Vec::new(),
                StepKind::Cool {
                    output_volume: names::COOLED_WORT.to_string(),
                    target_temperature,
                },
            );
        }

        Ok(())
    }
}
