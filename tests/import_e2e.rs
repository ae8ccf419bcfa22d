//! End-to-end import tests over the BeerXML fixtures
//!
//! Each test reads real documents from disk through [`BeerXmlParser`] and
//! checks the synthesized process steps, the batch and the reference data.

mod support;

use brewday::model::{
    Amount, ColourUnit, FermentableType, FermentationStage, HopUse, IngredientAddition, StepKind,
    StepType,
};
use brewday::{BeerXmlParser, EntityKind, ImportOptions, ImportedData};
use chrono::NaiveDate;
use support::fixture_path;

fn import(files: &[&str], options: ImportOptions) -> ImportedData {
    let paths: Vec<_> = files.iter().map(|name| fixture_path(name)).collect();
    BeerXmlParser::new(options)
        .parse(&paths)
        .expect("Import failed")
}

fn ingredient_names(ingredients: &[IngredientAddition]) -> Vec<&str> {
    ingredients.iter().map(IngredientAddition::name).collect()
}

#[test]
fn test_all_grain_pipeline() {
    let data = import(&["all_grain.xml"], ImportOptions::default());
    let recipe = &data.recipes["Burton Pale Ale"];

    assert_eq!(
        recipe.step_types(),
        vec![
            StepType::Mash,
            StepType::Heat,
            StepType::Lauter,
            StepType::BatchSparge,
            StepType::Boil,
            StepType::Stand,
            StepType::Cool,
            StepType::Ferment,
            StepType::Ferment,
            StepType::Package,
        ]
    );
    recipe.verify_pipeline().unwrap();
    assert_eq!(recipe.equipment_profile, "Cooler Mash Tun");
    assert_eq!(
        recipe.style.as_deref(),
        Some("18B/American Pale Ale/BJCP 2015")
    );

    let mash = &recipe.steps[0];
    assert!(mash.input_volume.is_none());
    assert_eq!(
        ingredient_names(&mash.ingredients),
        vec!["Pale Malt (2 Row)", "Burton on Trent"]
    );
    match &mash.ingredients[1] {
        IngredientAddition::Water(water) => {
            assert_eq!(water.volume.value(), 14.0);
            assert_eq!(water.temperature.value(), 66.0);
        }
        other => panic!("Expected mash water, got {:?}", other),
    }
    match &mash.kind {
        StepKind::Mash {
            grain_temperature, ..
        } => assert_eq!(grain_temperature.map(|t| t.value()), Some(20.0)),
        other => panic!("Expected Mash, got {:?}", other),
    }

    let boil = &recipe.steps[4];
    assert_eq!(
        ingredient_names(&boil.ingredients),
        vec!["Orange Blossom Honey", "Magnum", "Irish Moss"]
    );
    for addition in &boil.ingredients {
        if let IngredientAddition::Fermentable(f) = addition {
            assert_eq!(f.fermentable.fermentable_type, FermentableType::Honey);
            assert_eq!(f.time.value(), 60.0);
        }
    }

    let stand = &recipe.steps[5];
    assert_eq!(ingredient_names(&stand.ingredients), vec!["Cascade"]);

    let primary = &recipe.steps[7];
    assert_eq!(ingredient_names(&primary.ingredients), vec!["Safale US-05"]);
    match &primary.ingredients[0] {
        IngredientAddition::Yeast(yeast) => {
            assert!(matches!(yeast.amount, Amount::Weight(w) if w.value() == 0.0115));
        }
        other => panic!("Expected yeast, got {:?}", other),
    }

    let secondary = &recipe.steps[8];
    match &secondary.kind {
        StepKind::Ferment {
            stage, temperature, ..
        } => {
            assert_eq!(*stage, FermentationStage::Secondary);
            assert_eq!(temperature.map(|t| t.value()), Some(12.0));
        }
        other => panic!("Expected Ferment, got {:?}", other),
    }
    match &secondary.ingredients[0] {
        IngredientAddition::Hop(hop) => {
            assert_eq!(hop.hop.name, "Citra");
            assert_eq!(hop.hop_use, HopUse::DryHop);
        }
        other => panic!("Expected dry hop, got {:?}", other),
    }

    match &recipe.steps[9].kind {
        StepKind::Package {
            packaging_loss,
            style,
            ..
        } => {
            assert_eq!(packaging_loss.value(), 3.0);
            assert!(packaging_loss.is_estimated());
            assert_eq!(style.as_deref(), Some("18B/American Pale Ale/BJCP 2015"));
        }
        other => panic!("Expected Package, got {:?}", other),
    }
}

#[test]
fn test_batch_created_for_recipe() {
    let data = import(&["all_grain.xml"], ImportOptions::default());
    let batch = &data.batches["Burton Pale Ale"];

    assert_eq!(batch.recipe, "Burton Pale Ale");
    assert_eq!(batch.date, NaiveDate::from_ymd_opt(2024, 3, 3));
    assert_eq!(batch.description, "First brew on the new kit");
    assert!(batch.measurements.is_empty());
}

#[test]
fn test_embedded_references_become_reference_data() {
    let data = import(&["all_grain.xml"], ImportOptions::default());

    assert!(data.styles.contains_key("18B/American Pale Ale/BJCP 2015"));
    let equipment = &data.equipment["Cooler Mash Tun"];
    assert!(equipment.is_from_beerxml());
    assert_eq!(data.hops.len(), 3);
    assert_eq!(data.count(EntityKind::Fermentable), 2);
    assert!(data.waters.contains_key("Burton on Trent"));
    assert!(data.overwritten.is_empty());
}

#[test]
fn test_extract_pipeline() {
    let data = import(&["extract.xml"], ImportOptions::default());
    let recipe = &data.recipes["Kitchen Stout"];

    assert_eq!(
        recipe.step_types(),
        vec![
            StepType::Stand,
            StepType::Boil,
            StepType::Cool,
            StepType::Dilute,
            StepType::Ferment,
            StepType::Package,
        ]
    );
    recipe.verify_pipeline().unwrap();

    let steep = &recipe.steps[0];
    assert_eq!(
        ingredient_names(&steep.ingredients),
        vec!["Default Water", "Roasted Barley"]
    );

    let boil = &recipe.steps[1];
    assert_eq!(
        ingredient_names(&boil.ingredients),
        vec!["Dark Liquid Extract", "East Kent Goldings"]
    );

    let batch = &data.batches["Kitchen Stout"];
    assert_eq!(batch.description, "Imported from BeerXML");
    assert!(batch.date.is_none());
}

#[test]
fn test_extract_yeast_amount_is_volume() {
    let data = import(&["extract.xml"], ImportOptions::default());
    let primary = &data.recipes["Kitchen Stout"].steps[4];

    match &primary.ingredients[0] {
        IngredientAddition::Yeast(yeast) => {
            assert!(matches!(yeast.amount, Amount::Volume(v) if v.value() == 0.125));
        }
        other => panic!("Expected yeast, got {:?}", other),
    }
}

#[test]
fn test_colour_units_without_exporter_fixes() {
    let data = import(&["extract.xml"], ImportOptions::default());

    let barley = &data.fermentables["Roasted Barley"];
    assert_eq!(barley.colour.unit(), ColourUnit::Lovibond);
    assert!((barley.colour.value() - (1.3546 * 300.0 - 0.76)).abs() < 1e-9);

    let extract = &data.fermentables["Dark Liquid Extract"];
    assert_eq!(extract.fermentable_type, FermentableType::LiquidExtract);
    assert_eq!(extract.colour.value(), 17.5);
}

#[test]
fn test_colour_units_with_exporter_fixes() {
    let data = import(&["extract.xml"], ImportOptions::fixing_exporter_bugs());

    let barley = &data.fermentables["Roasted Barley"];
    assert_eq!(barley.colour.value(), 300.0);
}

#[test]
fn test_multi_file_last_writer_wins() {
    let data = import(
        &["all_grain.xml", "ingredients.xml"],
        ImportOptions::default(),
    );

    let cascade = &data.hops["Cascade"];
    assert!((cascade.alpha_acid.value() - 0.06).abs() < 1e-12);
    assert!(data.hops.contains_key("Fuggle"));
    assert_eq!(
        data.overwritten,
        vec![(EntityKind::Hop, "Cascade".to_string())]
    );
    assert_eq!(data.recipes.len(), 1);
}

#[test]
fn test_same_file_twice_overwrites_recipe() {
    let data = import(&["extract.xml", "extract.xml"], ImportOptions::default());

    assert_eq!(data.recipes.len(), 1);
    assert_eq!(data.batches.len(), 1);
    assert!(data
        .overwritten
        .contains(&(EntityKind::Recipe, "Kitchen Stout".to_string())));
}
