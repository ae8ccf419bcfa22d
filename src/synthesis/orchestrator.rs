use super::context::SynthesisContext;
use super::phase_trait::SynthesisPhase;
use super::phases::{BoilPhase, FermentPhase, MashPhase, PackagePhase, RoutingPhase, SteepPhase};
use crate::beerxml::{BeerXmlRecipe, RecipeType};
use crate::error::ImportError;
use crate::model::{Batch, Recipe};
use anyhow::{Context, Result};
use std::time::Instant;
use tracing::{debug, info, warn};

pub const IMPORTED_BATCH_DESCRIPTION: &str = "Imported from BeerXML";

/// Turns a flat BeerXML recipe into a linear pipeline of process steps and a
/// batch with no measurements.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeSynthesizer;

impl RecipeSynthesizer {
    pub fn new() -> Self {
        Self
    }

    fn phases(recipe_type: RecipeType) -> Vec<Box<dyn SynthesisPhase>> {
        let start: Box<dyn SynthesisPhase> = match recipe_type {
            RecipeType::AllGrain | RecipeType::PartialMash => Box::new(MashPhase),
            RecipeType::Extract => Box::new(SteepPhase),
        };
        vec![
            Box::new(RoutingPhase),
            start,
            Box::new(BoilPhase),
            Box::new(FermentPhase),
            Box::new(PackagePhase),
        ]
    }

    pub fn synthesize(&self, source: &BeerXmlRecipe) -> Result<(Recipe, Batch)> {
        let start = Instant::now();
        info!("Synthesizing recipe: {}", source.name);

        let recipe_type = source
            .recipe_type
            .ok_or_else(|| ImportError::invalid_recipe(&source.name, "recipe has no type"))?;
        let mut context = SynthesisContext::new(source)?;

        for phase in Self::phases(recipe_type) {
            let phase_name = phase.name();
            let phase_start = Instant::now();
            phase
                .execute(&mut context)
                .with_context(|| format!("Phase {} failed for recipe '{}'", phase_name, source.name))?;
            debug!("Phase {} complete in {:?}", phase_name, phase_start.elapsed());
        }

        for (bucket, additions) in context.buckets.unplaced() {
            for addition in additions {
                warn!(
                    "Recipe '{}': no {} step for '{}', addition dropped",
                    source.name,
                    bucket,
                    addition.name()
                );
            }
        }

        let recipe = Recipe {
            name: source.name.clone(),
            equipment_profile: context.equipment.name.clone(),
            style: Some(context.style.name.clone()),
            steps: context.steps,
        };
        recipe.verify_pipeline()?;

        let description = if source.notes.is_empty() {
            IMPORTED_BATCH_DESCRIPTION.to_string()
        } else {
            source.notes.clone()
        };
        let batch = Batch::new(&recipe, source.date, description);

        info!(
            "Synthesized recipe '{}' with {} steps in {:?}",
            recipe.name,
            recipe.steps.len(),
            start.elapsed()
        );
        Ok((recipe, batch))
    }
}
