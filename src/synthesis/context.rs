use super::names;
use crate::beerxml::BeerXmlRecipe;
use crate::error::{ImportError, ImportResult};
use crate::model::{
    EquipmentProfile, IngredientAddition, ProcessStep, StepKind, Style, Temperature, TimeSpan,
    Volume, Water, WaterAddition,
};
use std::collections::BTreeMap;
use std::fmt;

/// Where routed ingredient additions wait until a phase places them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bucket {
    Mash,
    Sparge,
    Boil,
    Stand,
    Primary,
    Secondary,
    Packaging,
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Bucket::Mash => "mash",
            Bucket::Sparge => "sparge",
            Bucket::Boil => "boil",
            Bucket::Stand => "stand",
            Bucket::Primary => "primary",
            Bucket::Secondary => "secondary",
            Bucket::Packaging => "packaging",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Default)]
pub struct IngredientBuckets {
    buckets: BTreeMap<Bucket, Vec<IngredientAddition>>,
}

impl IngredientBuckets {
    pub fn push(&mut self, bucket: Bucket, addition: IngredientAddition) {
        self.buckets.entry(bucket).or_default().push(addition);
    }

    pub fn get(&self, bucket: Bucket) -> &[IngredientAddition] {
        self.buckets.get(&bucket).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self, bucket: Bucket) -> bool {
        self.get(bucket).is_empty()
    }

    /// Removes the bucket's additions; each addition belongs to one step.
    pub fn take(&mut self, bucket: Bucket) -> Vec<IngredientAddition> {
        self.buckets.remove(&bucket).unwrap_or_default()
    }

    /// Buckets still holding additions no phase has placed.
    pub fn unplaced(&self) -> impl Iterator<Item = (Bucket, &[IngredientAddition])> + '_ {
        self.buckets
            .iter()
            .filter(|(_, additions)| !additions.is_empty())
            .map(|(bucket, additions)| (*bucket, additions.as_slice()))
    }
}

/// Mutable state shared by the synthesis phases of one recipe.
pub struct SynthesisContext<'a> {
    pub source: &'a BeerXmlRecipe,
    pub equipment: &'a EquipmentProfile,
    pub style: &'a Style,
    pub buckets: IngredientBuckets,
    /// Water used for every synthesized water addition.
    pub water: Water,
    pub steps: Vec<ProcessStep>,
    current_volume: Option<String>,
    mash_volumes: usize,
}

impl<'a> SynthesisContext<'a> {
    pub fn new(source: &'a BeerXmlRecipe) -> ImportResult<Self> {
        let equipment = source
            .equipment
            .as_ref()
            .ok_or_else(|| ImportError::MissingReference {
                recipe: source.name.clone(),
                reference: "equipment profile",
            })?;
        let style = source
            .style
            .as_ref()
            .ok_or_else(|| ImportError::MissingReference {
                recipe: source.name.clone(),
                reference: "style",
            })?;

        Ok(Self {
            source,
            equipment,
            style,
            buckets: IngredientBuckets::default(),
            water: Water::default_water(),
            steps: Vec::new(),
            current_volume: None,
            mash_volumes: 0,
        })
    }

    /// Volume the next step consumes; `None` before the first step.
    pub fn current_volume(&self) -> Option<&str> {
        self.current_volume.as_deref()
    }

    pub fn is_first_step(&self) -> bool {
        self.steps.is_empty()
    }

    /// Appends a step consuming the current volume. The step's first output
    /// becomes the current volume.
    pub fn append_step(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        ingredients: Vec<IngredientAddition>,
        kind: StepKind,
    ) {
        let output = kind.output_volumes().first().map(|v| v.to_string());
        self.steps.push(ProcessStep {
            name: name.into(),
            description: description.into(),
            input_volume: self.current_volume.take(),
            ingredients,
            kind,
        });
        self.current_volume = output;
    }

    /// Makes `volume`, an output of an earlier step, the current volume.
    pub fn continue_from(&mut self, volume: &str) {
        self.current_volume = Some(volume.to_string());
    }

    pub fn next_mash_volume(&mut self) -> String {
        let name = names::mash_volume(self.mash_volumes);
        self.mash_volumes += 1;
        name
    }

    pub fn water_addition(
        &self,
        volume: Volume,
        temperature: Temperature,
        time: TimeSpan,
    ) -> IngredientAddition {
        IngredientAddition::Water(WaterAddition {
            water: self.water.clone(),
            volume,
            temperature,
            time,
        })
    }
}
