//! Recipes as ordered process steps, their ingredient additions and batches.

use super::ingredient::{Fermentable, Hop, HopUse, Misc, MiscUse, Water, Yeast};
use super::quantity::{Amount, Temperature, TimeSpan, Volume, Weight};
use crate::error::{ImportError, ImportResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FermentableAddition {
    pub fermentable: Fermentable,
    pub weight: Weight,
    pub time: TimeSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HopAddition {
    pub hop: Hop,
    pub weight: Weight,
    pub time: TimeSpan,
    pub hop_use: HopUse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiscAddition {
    pub misc: Misc,
    pub amount: Amount,
    pub time: TimeSpan,
    pub misc_use: MiscUse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YeastAddition {
    pub yeast: Yeast,
    pub amount: Amount,
    pub time: TimeSpan,
    pub add_to_secondary: bool,
    pub times_cultured: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterAddition {
    pub water: Water,
    pub volume: Volume,
    pub temperature: Temperature,
    pub time: TimeSpan,
}

/// An ingredient added to a process step, `time` minutes after the step starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IngredientAddition {
    Fermentable(FermentableAddition),
    Hop(HopAddition),
    Misc(MiscAddition),
    Yeast(YeastAddition),
    Water(WaterAddition),
}

impl IngredientAddition {
    pub fn name(&self) -> &str {
        match self {
            IngredientAddition::Fermentable(a) => &a.fermentable.name,
            IngredientAddition::Hop(a) => &a.hop.name,
            IngredientAddition::Misc(a) => &a.misc.name,
            IngredientAddition::Yeast(a) => &a.yeast.name,
            IngredientAddition::Water(a) => &a.water.name,
        }
    }

    pub fn time(&self) -> TimeSpan {
        match self {
            IngredientAddition::Fermentable(a) => a.time,
            IngredientAddition::Hop(a) => a.time,
            IngredientAddition::Misc(a) => a.time,
            IngredientAddition::Yeast(a) => a.time,
            IngredientAddition::Water(a) => a.time,
        }
    }

    pub fn is_water(&self) -> bool {
        matches!(self, IngredientAddition::Water(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepType {
    Mash,
    MashInfusion,
    Heat,
    Lauter,
    BatchSparge,
    Boil,
    Stand,
    Cool,
    Dilute,
    Ferment,
    Package,
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StepType::Mash => "Mash",
            StepType::MashInfusion => "MashInfusion",
            StepType::Heat => "Heat",
            StepType::Lauter => "Lauter",
            StepType::BatchSparge => "BatchSparge",
            StepType::Boil => "Boil",
            StepType::Stand => "Stand",
            StepType::Cool => "Cool",
            StepType::Dilute => "Dilute",
            StepType::Ferment => "Ferment",
            StepType::Package => "Package",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FermentationStage {
    Primary,
    Secondary,
    Tertiary,
}

/// Step-specific data, including the names of the volumes a step produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StepKind {
    Mash {
        output_volume: String,
        temperature: Temperature,
        duration: TimeSpan,
        grain_temperature: Option<Temperature>,
    },
    MashInfusion {
        output_volume: String,
        temperature: Temperature,
        duration: TimeSpan,
    },
    Heat {
        output_volume: String,
        target_temperature: Temperature,
        ramp_time: TimeSpan,
        stand_time: TimeSpan,
    },
    Lauter {
        output_lautered_volume: String,
        output_mash_volume: String,
    },
    BatchSparge {
        output_volume: String,
        wort_volume: String,
        sparge_temperature: Temperature,
    },
    Boil {
        output_volume: String,
        duration: TimeSpan,
    },
    Stand {
        output_volume: String,
        duration: TimeSpan,
    },
    Cool {
        output_volume: String,
        target_temperature: Temperature,
    },
    Dilute {
        output_volume: String,
    },
    Ferment {
        output_volume: String,
        stage: FermentationStage,
        temperature: Option<Temperature>,
        duration: TimeSpan,
    },
    Package {
        output_volume: String,
        packaging_loss: Volume,
        style: Option<String>,
    },
}

impl StepKind {
    pub fn step_type(&self) -> StepType {
        match self {
            StepKind::Mash { .. } => StepType::Mash,
            StepKind::MashInfusion { .. } => StepType::MashInfusion,
            StepKind::Heat { .. } => StepType::Heat,
            StepKind::Lauter { .. } => StepType::Lauter,
            StepKind::BatchSparge { .. } => StepType::BatchSparge,
            StepKind::Boil { .. } => StepType::Boil,
            StepKind::Stand { .. } => StepType::Stand,
            StepKind::Cool { .. } => StepType::Cool,
            StepKind::Dilute { .. } => StepType::Dilute,
            StepKind::Ferment { .. } => StepType::Ferment,
            StepKind::Package { .. } => StepType::Package,
        }
    }

    pub fn output_volumes(&self) -> Vec<&str> {
        match self {
            StepKind::Lauter {
                output_lautered_volume,
                output_mash_volume,
            } => vec![output_mash_volume.as_str(), output_lautered_volume.as_str()],
            StepKind::Mash { output_volume, .. }
            | StepKind::MashInfusion { output_volume, .. }
            | StepKind::Heat { output_volume, .. }
            | StepKind::BatchSparge { output_volume, .. }
            | StepKind::Boil { output_volume, .. }
            | StepKind::Stand { output_volume, .. }
            | StepKind::Cool { output_volume, .. }
            | StepKind::Dilute { output_volume }
            | StepKind::Ferment { output_volume, .. }
            | StepKind::Package { output_volume, .. } => vec![output_volume.as_str()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub name: String,
    pub description: String,
    /// Volume consumed by this step; `None` when the step starts from nothing.
    pub input_volume: Option<String>,
    pub ingredients: Vec<IngredientAddition>,
    pub kind: StepKind,
}

impl ProcessStep {
    pub fn step_type(&self) -> StepType {
        self.kind.step_type()
    }
}

/// A recipe: the process steps in execution order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub equipment_profile: String,
    pub style: Option<String>,
    pub steps: Vec<ProcessStep>,
}

impl Recipe {
    pub fn step_types(&self) -> Vec<StepType> {
        self.steps.iter().map(ProcessStep::step_type).collect()
    }

    /// Checks that the steps form a linear chain: the first step has no
    /// input, every later input is an earlier step's output and no output
    /// name is produced twice.
    pub fn verify_pipeline(&self) -> ImportResult<()> {
        let mut produced: HashSet<&str> = HashSet::new();

        for (index, step) in self.steps.iter().enumerate() {
            match (&step.input_volume, index) {
                (None, 0) => {}
                (Some(input), 0) => {
                    return Err(ImportError::invalid_recipe(
                        &self.name,
                        format!("first step '{}' consumes '{}'", step.name, input),
                    ))
                }
                (None, _) => {
                    return Err(ImportError::invalid_recipe(
                        &self.name,
                        format!("step '{}' has no input volume", step.name),
                    ))
                }
                (Some(input), _) if !produced.contains(input.as_str()) => {
                    return Err(ImportError::invalid_recipe(
                        &self.name,
                        format!("step '{}' consumes unknown volume '{}'", step.name, input),
                    ))
                }
                _ => {}
            }

            for output in step.kind.output_volumes() {
                if !produced.insert(output) {
                    return Err(ImportError::invalid_recipe(
                        &self.name,
                        format!("volume '{}' is produced twice", output),
                    ));
                }
            }
        }

        Ok(())
    }
}

/// A measured value recorded against one of a batch's volumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub volume: String,
    pub property: String,
    pub value: f64,
}

/// One brew of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub name: String,
    pub recipe: String,
    pub date: Option<NaiveDate>,
    pub description: String,
    pub measurements: Vec<Measurement>,
}

impl Batch {
    pub fn new(recipe: &Recipe, date: Option<NaiveDate>, description: String) -> Self {
        Self {
            name: recipe.name.clone(),
            recipe: recipe.name.clone(),
            date,
            description,
            measurements: Vec::new(),
        }
    }
}
