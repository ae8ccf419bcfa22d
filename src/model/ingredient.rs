//! Reference ingredients: fermentables, hops, yeasts, miscs and waters.

use super::quantity::{Colour, DiastaticPower, Percentage, Ph, Ppm, Temperature, TimeSpan};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FermentableType {
    Grain,
    Sugar,
    LiquidExtract,
    DryExtract,
    #[default]
    Adjunct,
    Juice,
    Honey,
}

impl FermentableType {
    /// Types whose colour BeerXML expresses in SRM rather than Lovibond.
    pub fn colour_in_srm(&self) -> bool {
        matches!(self, FermentableType::LiquidExtract | FermentableType::Juice)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fermentable {
    pub name: String,
    pub fermentable_type: FermentableType,
    pub origin: String,
    pub supplier: String,
    pub description: String,
    pub yield_fraction: Percentage,
    pub colour: Colour,
    pub coarse_fine_diff: Percentage,
    pub moisture: Percentage,
    pub diastatic_power: DiastaticPower,
    pub protein: Percentage,
    pub max_in_batch: Percentage,
    pub recommend_mash: bool,
    pub add_after_boil: bool,
    pub ibu_gal_per_lb: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HopType {
    #[default]
    Bittering,
    Aroma,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HopForm {
    #[default]
    Pellet,
    Plug,
    Leaf,
}

/// Where a hop addition is used in the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HopUse {
    Mash,
    #[default]
    Boil,
    FirstWort,
    Aroma,
    DryHop,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hop {
    pub name: String,
    pub hop_type: HopType,
    pub form: HopForm,
    pub origin: String,
    pub description: String,
    pub alpha_acid: Percentage,
    pub beta_acid: Percentage,
    pub hop_stability_index: Percentage,
    pub substitutes: String,
    pub humulene: Percentage,
    pub caryophyllene: Percentage,
    pub cohumulone: Percentage,
    pub myrcene: Percentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum YeastType {
    #[default]
    Ale,
    Lager,
    Wheat,
    Wine,
    Champagne,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum YeastForm {
    #[default]
    Liquid,
    Dry,
    Slant,
    Culture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Flocculation {
    Low,
    #[default]
    Medium,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Yeast {
    pub name: String,
    pub yeast_type: YeastType,
    pub form: YeastForm,
    pub laboratory: String,
    pub product_id: String,
    pub min_temperature: Option<Temperature>,
    pub max_temperature: Option<Temperature>,
    pub flocculation: Flocculation,
    pub attenuation: Percentage,
    pub description: String,
    pub recommended_styles: String,
    pub max_reuse: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MiscType {
    Spice,
    Fining,
    WaterAgent,
    Herb,
    Flavour,
    #[default]
    Other,
}

/// Process stage a misc ingredient is intended for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MiscUse {
    Mash,
    #[default]
    Boil,
    Primary,
    Secondary,
    Bottling,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Misc {
    pub name: String,
    pub misc_type: MiscType,
    pub usage: String,
    pub description: String,
    /// Use declared by the reference record; additions carry their own.
    pub default_use: Option<MiscUse>,
    pub default_time: Option<TimeSpan>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Water {
    pub name: String,
    pub calcium: Ppm,
    pub bicarbonate: Ppm,
    pub sulfate: Ppm,
    pub chloride: Ppm,
    pub sodium: Ppm,
    pub magnesium: Ppm,
    pub ph: Option<Ph>,
    pub description: String,
}

impl Water {
    /// Water profile used when a recipe declares none.
    pub fn default_water() -> Self {
        Water {
            name: "Default Water".to_string(),
            ph: Some(Ph::new(7.0)),
            description: "Neutral water assumed by the BeerXML import".to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_in_srm_only_for_extract_and_juice() {
        assert!(FermentableType::LiquidExtract.colour_in_srm());
        assert!(FermentableType::Juice.colour_in_srm());
        assert!(!FermentableType::Grain.colour_in_srm());
        assert!(!FermentableType::DryExtract.colour_in_srm());
    }

    #[test]
    fn test_default_water_is_neutral() {
        let water = Water::default_water();
        assert_eq!(water.ph.map(|p| p.value()), Some(7.0));
        assert_eq!(water.calcium.value(), 0.0);
    }
}
