//! Recipe fixtures for synthesis tests.

use crate::beerxml::{BeerXmlMashProfile, BeerXmlMashStep, BeerXmlRecipe, MashStepType, RecipeType};
use crate::model::{
    Amount, EquipmentProfile, Fermentable, FermentableAddition, FermentableType, Hop, HopAddition,
    HopUse, Misc, MiscAddition, MiscUse, Style, Temperature, TimeSpan, Volume, Weight, Yeast,
    YeastAddition,
};

pub fn equipment(batch_litres: f64) -> EquipmentProfile {
    let mut equipment = EquipmentProfile {
        name: "Test Kit".to_string(),
        batch_size: Volume::litres(batch_litres),
        boil_size: Volume::litres(batch_litres + 5.0),
        ..Default::default()
    };
    equipment.infer_missing();
    equipment
}

pub fn style() -> Style {
    let mut style = Style {
        style_guide_name: "Ordinary Bitter".to_string(),
        category_number: "11".to_string(),
        style_letter: "A".to_string(),
        style_guide: "BJCP".to_string(),
        ..Default::default()
    };
    style.assign_identity();
    style
}

pub fn mash_step(step_type: MashStepType, infuse_litres: Option<f64>, temp: f64) -> BeerXmlMashStep {
    BeerXmlMashStep {
        name: format!("{:?} at {}", step_type, temp),
        step_type,
        infuse_amount: infuse_litres.map(Volume::litres),
        step_temp: Temperature::celsius(temp),
        step_time: TimeSpan::minutes(60.0),
        ..Default::default()
    }
}

pub fn mash(steps: Vec<BeerXmlMashStep>) -> BeerXmlMashProfile {
    BeerXmlMashProfile {
        name: "Test Mash".to_string(),
        steps,
        ..Default::default()
    }
}

/// A 20 l recipe with 60 minute boil, one stage at 18 C for 14 days, brewed
/// on 23 l equipment.
pub fn recipe(recipe_type: RecipeType) -> BeerXmlRecipe {
    BeerXmlRecipe {
        name: "Test Recipe".to_string(),
        recipe_type: Some(recipe_type),
        batch_size: Volume::litres(20.0),
        boil_size: Volume::litres(25.0),
        boil_time: TimeSpan::minutes(60.0),
        fermentation_stages: 1,
        primary_temp: Some(Temperature::celsius(18.0)),
        primary_age: TimeSpan::days(14.0),
        style: Some(style()),
        equipment: Some(equipment(23.0)),
        mash: Some(mash(vec![mash_step(MashStepType::Infusion, Some(15.0), 67.0)])),
        ..Default::default()
    }
}

pub fn grain(name: &str, kilograms: f64) -> FermentableAddition {
    FermentableAddition {
        fermentable: Fermentable {
            name: name.to_string(),
            fermentable_type: FermentableType::Grain,
            recommend_mash: true,
            ..Default::default()
        },
        weight: Weight::kilograms(kilograms),
        time: TimeSpan::default(),
    }
}

pub fn sugar(name: &str, kilograms: f64, add_after_boil: bool) -> FermentableAddition {
    FermentableAddition {
        fermentable: Fermentable {
            name: name.to_string(),
            fermentable_type: FermentableType::Sugar,
            add_after_boil,
            ..Default::default()
        },
        weight: Weight::kilograms(kilograms),
        time: TimeSpan::default(),
    }
}

pub fn hop(name: &str, hop_use: HopUse, grams: f64, minutes: f64) -> HopAddition {
    HopAddition {
        hop: Hop {
            name: name.to_string(),
            ..Default::default()
        },
        weight: Weight::grams(grams),
        time: TimeSpan::minutes(minutes),
        hop_use,
    }
}

pub fn misc(name: &str, misc_use: MiscUse) -> MiscAddition {
    MiscAddition {
        misc: Misc {
            name: name.to_string(),
            default_use: Some(misc_use),
            ..Default::default()
        },
        amount: Amount::Weight(Weight::grams(5.0)),
        time: TimeSpan::minutes(15.0),
        misc_use,
    }
}

pub fn yeast(name: &str, add_to_secondary: bool) -> YeastAddition {
    YeastAddition {
        yeast: Yeast {
            name: name.to_string(),
            ..Default::default()
        },
        amount: Amount::Weight(Weight::grams(11.0)),
        time: TimeSpan::default(),
        add_to_secondary,
        times_cultured: 0,
    }
}
