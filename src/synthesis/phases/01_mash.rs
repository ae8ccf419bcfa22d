//! Mash path for all-grain and partial-mash recipes.

use crate::beerxml::{BeerXmlMashStep, MashStepType};
use crate::error::{ImportError, ImportResult};
use crate::model::{StepKind, TimeSpan};
use crate::synthesis::context::{Bucket, SynthesisContext};
use crate::synthesis::names;
use crate::synthesis::phase_trait::SynthesisPhase;
use tracing::warn;

pub struct MashPhase;

impl MashPhase {
    fn step_name(step: &BeerXmlMashStep, fallback: &str) -> String {
        if step.name.is_empty() {
            fallback.to_string()
        } else {
            step.name.clone()
        }
    }
}

impl SynthesisPhase for MashPhase {
    fn name(&self) -> &'static str {
        "MashPhase"
    }

    fn execute(&self, context: &mut SynthesisContext<'_>) -> ImportResult<()> {
        let source = context.source;
        let no_steps = || ImportError::invalid_recipe(&source.name, "mash recipe has no mash steps");
        let profile = source.mash.as_ref().ok_or_else(no_steps)?;
        let (first, rest) = profile.steps.split_first().ok_or_else(no_steps)?;

        // The first step is always the mash-in, whatever its declared type.
        // Infusion water goes in at the step temperature; no strike
        // temperature is derived.
        let mut ingredients = context.buckets.take(Bucket::Mash);
        if let Some(volume) = first.infuse_amount {
            ingredients.push(context.water_addition(volume, first.step_temp, TimeSpan::default()));
        }
        let output_volume = context.next_mash_volume();
        context.append_step(
            Self::step_name(first, "Mash"),
            format!("Mash in at {}", first.step_temp),
            ingredients,
            StepKind::Mash {
                output_volume,
                temperature: first.step_temp,
                duration: first.step_time,
                grain_temperature: profile.grain_temp,
            },
        );

        for step in rest {
            match step.step_type {
                MashStepType::Infusion => {
                    let ingredients = step
                        .infuse_amount
                        .map(|volume| {
                            vec![context.water_addition(volume, step.step_temp, TimeSpan::default())]
                        })
                        .unwrap_or_default();
                    let output_volume = context.next_mash_volume();
                    context.append_step(
                        Self::step_name(step, "Infusion"),
                        format!("Infuse to {}", step.step_temp),
                        ingredients,
                        StepKind::MashInfusion {
                            output_volume,
                            temperature: step.step_temp,
                            duration: step.step_time,
                        },
                    );
                }
                MashStepType::Temperature => {
                    let output_volume = context.next_mash_volume();
                    context.append_step(
                        Self::step_name(step, "Heat"),
                        format!("Heat to {}", step.step_temp),
                        Vec::new(),
                        StepKind::Heat {
                            output_volume,
                            target_temperature: step.step_temp,
                            ramp_time: step.ramp_time,
                            stand_time: step.step_time,
                        },
                    );
                }
                MashStepType::Decoction => {
                    warn!(
                        "Recipe '{}': decoction step '{}' has no process step equivalent, skipping",
                        source.name, step.name
                    );
                }
            }
        }

        context.append_step(
            "Lauter",
            "Separate the wort from the grain bed",
            Vec::new(),
            StepKind::Lauter {
                output_lautered_volume: names::FIRST_RUNNINGS.to_string(),
                output_mash_volume: names::MASH_VESSEL.to_string(),
            },
        );

        match profile.sparge_temperature() {
            Some(sparge_temperature) => {
                context.continue_from(names::MASH_VESSEL);
                let ingredients = context.buckets.take(Bucket::Sparge);
                context.append_step(
                    "Batch Sparge",
                    format!("Sparge at {}", sparge_temperature),
                    ingredients,
                    StepKind::BatchSparge {
                        output_volume: names::SPARGED_WORT.to_string(),
                        wort_volume: names::FIRST_RUNNINGS.to_string(),
                        sparge_temperature,
                    },
                );
            }
            None => context.continue_from(names::FIRST_RUNNINGS),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beerxml::RecipeType;
    use crate::model::{HopUse, IngredientAddition, StepType, Temperature};
    use crate::synthesis::phases::RoutingPhase;
    use crate::synthesis::test_support::{grain, hop, mash, mash_step, recipe};

    #[test]
    fn test_single_infusion() {
        let mut source = recipe(RecipeType::AllGrain);
        source.fermentables = vec![grain("Pale Malt", 4.5)];
        let mut context = SynthesisContext::new(&source).unwrap();
        RoutingPhase.execute(&mut context).unwrap();
        MashPhase.execute(&mut context).unwrap();

        let types: Vec<StepType> = context.steps.iter().map(|s| s.step_type()).collect();
        assert_eq!(types, vec![StepType::Mash, StepType::Lauter]);

        let mash_in = &context.steps[0];
        assert!(mash_in.input_volume.is_none());
        assert_eq!(mash_in.ingredients.len(), 2);
        match &mash_in.ingredients[1] {
            IngredientAddition::Water(water) => {
                assert_eq!(water.volume.value(), 15.0);
                assert_eq!(water.temperature.value(), 67.0);
            }
            other => panic!("Expected water, got {:?}", other),
        }
        assert_eq!(context.steps[1].input_volume.as_deref(), Some("mash volume 0"));
        assert_eq!(context.current_volume(), Some(names::FIRST_RUNNINGS));
    }

    #[test]
    fn test_step_types_and_decoction_skipped() {
        let mut source = recipe(RecipeType::AllGrain);
        source.mash = Some(mash(vec![
            mash_step(MashStepType::Temperature, Some(12.0), 52.0),
            mash_step(MashStepType::Infusion, Some(4.0), 66.0),
            mash_step(MashStepType::Decoction, None, 72.0),
            mash_step(MashStepType::Temperature, None, 76.0),
        ]));
        let mut context = SynthesisContext::new(&source).unwrap();
        MashPhase.execute(&mut context).unwrap();

        let types: Vec<StepType> = context.steps.iter().map(|s| s.step_type()).collect();
        assert_eq!(
            types,
            vec![
                StepType::Mash,
                StepType::MashInfusion,
                StepType::Heat,
                StepType::Lauter
            ]
        );
        assert_eq!(context.steps[1].ingredients.len(), 1);
        assert!(context.steps[2].ingredients.is_empty());
    }

    #[test]
    fn test_sparge_continues_from_mash_vessel() {
        let mut source = recipe(RecipeType::AllGrain);
        if let Some(profile) = source.mash.as_mut() {
            profile.sparge_temp = Some(Temperature::celsius(76.0));
        }
        source.hops = vec![hop("Saaz", HopUse::FirstWort, 20.0, 60.0)];
        let mut context = SynthesisContext::new(&source).unwrap();
        RoutingPhase.execute(&mut context).unwrap();
        MashPhase.execute(&mut context).unwrap();

        let sparge = context.steps.last().unwrap();
        assert_eq!(sparge.step_type(), StepType::BatchSparge);
        assert_eq!(sparge.input_volume.as_deref(), Some(names::MASH_VESSEL));
        assert_eq!(sparge.ingredients.len(), 1);
        assert_eq!(context.current_volume(), Some(names::SPARGED_WORT));
        assert!(context.buckets.is_empty(Bucket::Sparge));
    }

    #[test]
    fn test_missing_mash_is_invalid() {
        let mut source = recipe(RecipeType::PartialMash);
        source.mash = None;
        let mut context = SynthesisContext::new(&source).unwrap();
        assert!(matches!(
            MashPhase.execute(&mut context),
            Err(ImportError::InvalidRecipe { .. })
        ));
    }
}
