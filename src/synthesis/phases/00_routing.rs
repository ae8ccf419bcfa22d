//! Sorts the recipe's additions into the buckets later phases consume.

use crate::beerxml::additions::AMBIENT_WATER_TEMPERATURE;
use crate::error::ImportResult;
use crate::model::{
    FermentableType, HopUse, IngredientAddition, MiscUse, Temperature, TimeSpan, Water,
};
use crate::synthesis::context::{Bucket, SynthesisContext};
use crate::synthesis::phase_trait::SynthesisPhase;
use tracing::debug;

pub struct RoutingPhase;

impl SynthesisPhase for RoutingPhase {
    fn name(&self) -> &'static str {
        "RoutingPhase"
    }

    fn execute(&self, context: &mut SynthesisContext<'_>) -> ImportResult<()> {
        let source = context.source;
        let boil_time = source.boil_time;

        for addition in &source.fermentables {
            let f = &addition.fermentable;
            let bucket = if f.recommend_mash && f.fermentable_type == FermentableType::Grain {
                Bucket::Mash
            } else if f.add_after_boil {
                Bucket::Primary
            } else {
                Bucket::Boil
            };
            let mut addition = addition.clone();
            if bucket == Bucket::Boil {
                addition.time = boil_time;
            }
            context
                .buckets
                .push(bucket, IngredientAddition::Fermentable(addition));
        }

        for addition in &source.hops {
            let bucket = match addition.hop_use {
                HopUse::Boil => Bucket::Boil,
                HopUse::Mash => Bucket::Mash,
                HopUse::FirstWort => Bucket::Sparge,
                HopUse::Aroma => Bucket::Stand,
                HopUse::DryHop if source.fermentation_stages >= 2 => Bucket::Secondary,
                HopUse::DryHop => Bucket::Primary,
            };
            context
                .buckets
                .push(bucket, IngredientAddition::Hop(addition.clone()));
        }

        for addition in &source.miscs {
            let bucket = match addition.misc_use {
                MiscUse::Boil => Bucket::Boil,
                MiscUse::Mash => Bucket::Mash,
                MiscUse::Primary => Bucket::Primary,
                MiscUse::Secondary => Bucket::Secondary,
                MiscUse::Bottling => Bucket::Packaging,
            };
            let mut addition = addition.clone();
            addition.time = if bucket == Bucket::Boil {
                boil_time
            } else {
                TimeSpan::default()
            };
            context.buckets.push(bucket, IngredientAddition::Misc(addition));
        }

        for addition in &source.yeasts {
            let bucket = if addition.add_to_secondary {
                Bucket::Secondary
            } else {
                Bucket::Primary
            };
            context
                .buckets
                .push(bucket, IngredientAddition::Yeast(addition.clone()));
        }

        context.water = source
            .waters
            .iter()
            .max_by(|a, b| a.volume.value().total_cmp(&b.volume.value()))
            .map(|addition| addition.water.clone())
            .unwrap_or_else(Water::default_water);

        let top_up = context.equipment.top_up_kettle;
        if top_up.value() > 0.0 {
            let water = context.water_addition(
                top_up,
                Temperature::celsius(AMBIENT_WATER_TEMPERATURE),
                boil_time,
            );
            context.buckets.push(Bucket::Boil, water);
        }

        debug!(
            "Routed additions for '{}' using water '{}'",
            source.name, context.water.name
        );
        Ok(())
    }
}
