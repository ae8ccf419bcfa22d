//! Steeping specialty grains for extract recipes.

use crate::error::ImportResult;
use crate::model::{StepKind, Temperature, TimeSpan};
use crate::synthesis::context::{Bucket, SynthesisContext};
use crate::synthesis::names;
use crate::synthesis::phase_trait::SynthesisPhase;

pub const STEEP_MINUTES: f64 = 20.0;
pub const STEEP_WATER_TEMPERATURE: f64 = 70.0;

pub struct SteepPhase;

impl SynthesisPhase for SteepPhase {
    fn name(&self) -> &'static str {
        "SteepPhase"
    }

    fn execute(&self, context: &mut SynthesisContext<'_>) -> ImportResult<()> {
        if context.buckets.is_empty(Bucket::Mash) {
            return Ok(());
        }

        let mut ingredients = Vec::new();
        if context.is_first_step() {
            ingredients.push(context.water_addition(
                context.source.boil_size,
                Temperature::celsius(STEEP_WATER_TEMPERATURE),
                TimeSpan::default(),
            ));
        }
        ingredients.extend(context.buckets.take(Bucket::Mash));

        context.append_step(
            "Steep",
            "Steep specialty grains",
            ingredients,
            StepKind::Stand {
                output_volume: names::STEEPED_WORT.to_string(),
                duration: TimeSpan::minutes(STEEP_MINUTES),
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beerxml::RecipeType;
    use crate::model::{IngredientAddition, StepType};
    use crate::synthesis::phases::RoutingPhase;
    use crate::synthesis::test_support::{grain, recipe};

    #[test]
    fn test_steep_with_water() {
        let mut source = recipe(RecipeType::Extract);
        source.fermentables = vec![grain("Crystal 40", 0.3)];
        let mut context = SynthesisContext::new(&source).unwrap();
        RoutingPhase.execute(&mut context).unwrap();
        SteepPhase.execute(&mut context).unwrap();

        assert_eq!(context.steps.len(), 1);
        let steep = &context.steps[0];
        assert_eq!(steep.step_type(), StepType::Stand);
        match &steep.ingredients[0] {
            IngredientAddition::Water(water) => {
                assert_eq!(water.volume.value(), 25.0);
                assert_eq!(water.temperature.value(), STEEP_WATER_TEMPERATURE);
            }
            other => panic!("Expected water, got {:?}", other),
        }
        assert_eq!(steep.ingredients.len(), 2);
    }

    #[test]
    fn test_no_steep_without_grains() {
        let source = recipe(RecipeType::Extract);
        let mut context = SynthesisContext::new(&source).unwrap();
        RoutingPhase.execute(&mut context).unwrap();
        SteepPhase.execute(&mut context).unwrap();
        assert!(context.steps.is_empty());
    }
}
