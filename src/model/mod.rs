//! Brewday domain model consumed and produced by the BeerXML import.

pub mod equipment;
pub mod ingredient;
pub mod quantity;
pub mod recipe;
pub mod style;

pub use equipment::{EquipmentProfile, BEERXML_ELEMENT_POWER_SENTINEL, VESSEL_HEADROOM};
pub use ingredient::{
    Fermentable, FermentableType, Flocculation, Hop, HopForm, HopType, HopUse, Misc, MiscType,
    MiscUse, Water, Yeast, YeastForm, YeastType,
};
pub use quantity::{
    Amount, Arbitrary, Bitterness, Carbonation, Colour, ColourUnit, Density, DiastaticPower,
    Percentage, Ph, Power, Ppm, SpecificHeat, Temperature, TimeSpan, TimeUnit, Volume, VolumeUnit,
    Weight, WeightUnit,
};
pub use recipe::{
    Batch, FermentableAddition, FermentationStage, HopAddition, IngredientAddition, Measurement,
    MiscAddition, ProcessStep, Recipe, StepKind, StepType, WaterAddition, YeastAddition,
};
pub use style::{Style, StyleType};
