//! BeerXML `<recipe>` records.
//!
//! A recipe mixes scalar fields with embedded entities. Embedded elements are
//! handed to the same mappings the standalone handlers use, running in
//! armed mode so they never look for a container of their own.

use super::additions::{
    FermentableAdditionMapping, HopAdditionMapping, MiscAdditionMapping, WaterAdditionMapping,
    YeastAdditionMapping,
};
use super::equipment::EquipmentMapping;
use super::event::XmlEvent;
use super::fields::{celsius, date, days, flag, litres, minutes, number, percentage, whole_number};
use super::handler::{BeerXmlHandler, FieldBuffer, ListHandler, Nested, RecordMapping};
use super::literals::{LiteralTable, RecipeTypes};
use super::mash::{BeerXmlMashProfile, MashHandler};
use super::styles::StyleMapping;
use crate::config::ImportOptions;
use crate::error::ImportResult;
use crate::model::{
    Arbitrary, Carbonation, Density, EquipmentProfile, FermentableAddition, HopAddition,
    MiscAddition, Percentage, Style, Temperature, TimeSpan, Volume, WaterAddition, YeastAddition,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fermentation temperature assumed when an exporter omits one.
pub const DEFAULT_FERMENTATION_TEMPERATURE: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecipeType {
    Extract,
    PartialMash,
    AllGrain,
}

/// A recipe as BeerXML describes it: metadata plus unordered additions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeerXmlRecipe {
    pub name: String,
    pub recipe_type: Option<RecipeType>,
    pub brewer: String,
    pub assistant_brewer: String,
    pub batch_size: Volume,
    pub boil_size: Volume,
    pub boil_time: TimeSpan,
    pub efficiency: Percentage,
    pub notes: String,
    pub taste_notes: String,
    pub og: Option<Density>,
    pub fg: Option<Density>,
    pub fermentation_stages: u32,
    pub primary_age: TimeSpan,
    pub primary_temp: Option<Temperature>,
    pub secondary_age: TimeSpan,
    pub secondary_temp: Option<Temperature>,
    pub tertiary_age: Option<TimeSpan>,
    pub tertiary_temp: Option<Temperature>,
    pub age: TimeSpan,
    pub age_temp: Option<Temperature>,
    pub date: Option<NaiveDate>,
    pub carbonation: Carbonation,
    pub forced_carbonation: bool,
    pub priming_sugar_name: String,
    pub carbonation_temp: Option<Temperature>,
    pub priming_sugar_equiv: Arbitrary,
    pub keg_priming_factor: Arbitrary,
    pub style: Option<Style>,
    pub equipment: Option<EquipmentProfile>,
    pub mash: Option<BeerXmlMashProfile>,
    pub fermentables: Vec<FermentableAddition>,
    pub hops: Vec<HopAddition>,
    pub miscs: Vec<MiscAddition>,
    pub yeasts: Vec<YeastAddition>,
    pub waters: Vec<WaterAddition>,
}

/// Scalar field rules for `<recipe>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeMapping {
    options: ImportOptions,
}

impl RecipeMapping {
    pub fn new(options: ImportOptions) -> Self {
        Self { options }
    }
}

impl RecordMapping for RecipeMapping {
    type Record = BeerXmlRecipe;
    type Output = BeerXmlRecipe;
    const CONTAINER: &'static str = "recipes";
    const ELEMENT: &'static str = "recipe";

    fn apply(&self, r: &mut BeerXmlRecipe, field: &str, text: &str) -> ImportResult<()> {
        match field {
            "name" => r.name = text.to_string(),
            "type" => r.recipe_type = Some(RecipeTypes::from_beerxml(text)?),
            "brewer" => r.brewer = text.to_string(),
            "asst_brewer" => r.assistant_brewer = text.to_string(),
            "batch_size" => r.batch_size = litres(field, text)?,
            "boil_size" => r.boil_size = litres(field, text)?,
            "boil_time" => r.boil_time = minutes(field, text)?,
            "efficiency" => r.efficiency = percentage(field, text)?,
            "notes" => r.notes = text.to_string(),
            "taste_notes" => r.taste_notes = text.to_string(),
            "og" => r.og = Some(Density::new(number(field, text)?)),
            "fg" => r.fg = Some(Density::new(number(field, text)?)),
            "fermentation_stages" => r.fermentation_stages = whole_number(field, text)?,
            "primary_age" => r.primary_age = days(field, text)?,
            "primary_temp" => r.primary_temp = Some(celsius(field, text)?),
            "secondary_age" => r.secondary_age = days(field, text)?,
            "secondary_temp" => r.secondary_temp = Some(celsius(field, text)?),
            "tertiary_age" => r.tertiary_age = Some(days(field, text)?),
            "tertiary_temp" => r.tertiary_temp = Some(celsius(field, text)?),
            "age" => r.age = days(field, text)?,
            "age_temp" => r.age_temp = Some(celsius(field, text)?),
            "date" => r.date = Some(date(text)?),
            "carbonation" => r.carbonation = Carbonation::new(number(field, text)?),
            "forced_carbonation" => {
                r.forced_carbonation = flag(text) != self.options.fix_known_exporter_bugs
            }
            "priming_sugar_name" => r.priming_sugar_name = text.to_string(),
            "carbonation_temp" => r.carbonation_temp = Some(celsius(field, text)?),
            "priming_sugar_equiv" => r.priming_sugar_equiv = Arbitrary::new(number(field, text)?),
            "keg_priming_factor" => r.keg_priming_factor = Arbitrary::new(number(field, text)?),
            _ => {}
        }
        Ok(())
    }

    fn finish(&self, mut recipe: BeerXmlRecipe) -> ImportResult<BeerXmlRecipe> {
        if self.options.fix_known_exporter_bugs
            && recipe.tertiary_age.is_some()
            && recipe.tertiary_temp.is_none()
        {
            recipe.tertiary_temp = Some(
                recipe
                    .secondary_temp
                    .unwrap_or_else(|| Temperature::celsius(DEFAULT_FERMENTATION_TEMPERATURE)),
            );
        }
        Ok(recipe)
    }
}

/// Handler for an element embedded in the current recipe.
enum Embedded {
    Style(Nested<ListHandler<StyleMapping>>),
    Equipment(Nested<ListHandler<EquipmentMapping>>),
    Mash(Nested<MashHandler>),
    Fermentables(Nested<ListHandler<FermentableAdditionMapping>>),
    Hops(Nested<ListHandler<HopAdditionMapping>>),
    Miscs(Nested<ListHandler<MiscAdditionMapping>>),
    Yeasts(Nested<ListHandler<YeastAdditionMapping>>),
    Waters(Nested<ListHandler<WaterAdditionMapping>>),
}

/// Opens a single-record handler on the record element itself, so the
/// handler sees the record open and close.
fn single_record<M: RecordMapping>(mapping: M, start: &XmlEvent) -> ImportResult<Nested<ListHandler<M>>> {
    let mut handler = ListHandler::armed(mapping);
    handler.handle_event(start)?;
    Ok(Nested::new(handler))
}

fn close_single_record<M: RecordMapping>(
    nested: Nested<ListHandler<M>>,
    end: &XmlEvent,
) -> ImportResult<Option<M::Output>> {
    let mut handler = nested.into_inner();
    handler.handle_event(end)?;
    Ok(handler.into_results().pop())
}

impl Embedded {
    fn open(name: &str, event: &XmlEvent, options: ImportOptions) -> ImportResult<Option<Self>> {
        let embedded = match name {
            "style" => Embedded::Style(single_record(StyleMapping, event)?),
            "equipment" => Embedded::Equipment(single_record(EquipmentMapping, event)?),
            "mash" => Embedded::Mash(Nested::new(MashHandler::new())),
            "fermentables" => Embedded::Fermentables(Nested::new(ListHandler::armed(
                FermentableAdditionMapping::new(options),
            ))),
            "hops" => Embedded::Hops(Nested::new(ListHandler::armed(HopAdditionMapping))),
            "miscs" => Embedded::Miscs(Nested::new(ListHandler::armed(MiscAdditionMapping))),
            "yeasts" => Embedded::Yeasts(Nested::new(ListHandler::armed(YeastAdditionMapping))),
            "waters" => Embedded::Waters(Nested::new(ListHandler::armed(WaterAdditionMapping))),
            _ => return Ok(None),
        };
        Ok(Some(embedded))
    }

    /// Returns `true` once `event` has closed the embedded element.
    fn forward(&mut self, event: &XmlEvent) -> ImportResult<bool> {
        match self {
            Embedded::Style(nested) => nested.forward(event),
            Embedded::Equipment(nested) => nested.forward(event),
            Embedded::Mash(nested) => nested.forward(event),
            Embedded::Fermentables(nested) => nested.forward(event),
            Embedded::Hops(nested) => nested.forward(event),
            Embedded::Miscs(nested) => nested.forward(event),
            Embedded::Yeasts(nested) => nested.forward(event),
            Embedded::Waters(nested) => nested.forward(event),
        }
    }

    fn attach(self, recipe: &mut BeerXmlRecipe, end: &XmlEvent) -> ImportResult<()> {
        match self {
            Embedded::Style(nested) => recipe.style = close_single_record(nested, end)?,
            Embedded::Equipment(nested) => recipe.equipment = close_single_record(nested, end)?,
            Embedded::Mash(nested) => recipe.mash = Some(nested.into_inner().into_profile()),
            Embedded::Fermentables(nested) => {
                recipe.fermentables.extend(nested.into_inner().into_results())
            }
            Embedded::Hops(nested) => recipe.hops.extend(nested.into_inner().into_results()),
            Embedded::Miscs(nested) => recipe.miscs.extend(nested.into_inner().into_results()),
            Embedded::Yeasts(nested) => recipe.yeasts.extend(nested.into_inner().into_results()),
            Embedded::Waters(nested) => recipe.waters.extend(nested.into_inner().into_results()),
        }
        Ok(())
    }
}

/// Composite handler for `<recipes>`.
pub struct RecipesHandler {
    mapping: RecipeMapping,
    options: ImportOptions,
    armed: bool,
    recipe: Option<BeerXmlRecipe>,
    field: FieldBuffer,
    embedded: Option<Embedded>,
    /// Elements open below the current field or an unknown element.
    skipped: usize,
    results: Vec<BeerXmlRecipe>,
}

impl RecipesHandler {
    pub fn new(options: ImportOptions) -> Self {
        Self {
            mapping: RecipeMapping::new(options),
            options,
            armed: false,
            recipe: None,
            field: FieldBuffer::default(),
            embedded: None,
            skipped: 0,
            results: Vec::new(),
        }
    }

    pub fn results(&self) -> &[BeerXmlRecipe] {
        &self.results
    }

    pub fn into_results(self) -> Vec<BeerXmlRecipe> {
        self.results
    }

    fn start(&mut self, name: &str, event: &XmlEvent) -> ImportResult<()> {
        if self.skipped > 0 || self.field.is_open() {
            self.skipped += 1;
        } else if !self.armed {
            self.armed = name == RecipeMapping::CONTAINER;
        } else if self.recipe.is_none() {
            if name == RecipeMapping::ELEMENT {
                self.recipe = Some(BeerXmlRecipe::default());
            } else {
                self.skipped += 1;
            }
        } else if let Some(embedded) = Embedded::open(name, event, self.options)? {
            self.embedded = Some(embedded);
        } else {
            self.field.open(name);
        }
        Ok(())
    }

    fn end(&mut self) -> ImportResult<()> {
        if self.skipped > 0 {
            self.skipped -= 1;
        } else if !self.armed {
            return Ok(());
        } else if self.field.is_open() {
            if let (Some((field, text)), Some(recipe)) = (self.field.close(), self.recipe.as_mut()) {
                self.mapping.apply(recipe, &field, &text)?;
            }
        } else if let Some(recipe) = self.recipe.take() {
            let recipe = self.mapping.finish(recipe)?;
            debug!(
                "Parsed recipe '{}': {} fermentables, {} hops, {} yeasts",
                recipe.name,
                recipe.fermentables.len(),
                recipe.hops.len(),
                recipe.yeasts.len()
            );
            self.results.push(recipe);
        } else {
            self.armed = false;
        }
        Ok(())
    }
}

impl BeerXmlHandler for RecipesHandler {
    fn handle_event(&mut self, event: &XmlEvent) -> ImportResult<()> {
        if let Some(embedded) = self.embedded.as_mut() {
            if embedded.forward(event)? {
                if let (Some(embedded), Some(recipe)) = (self.embedded.take(), self.recipe.as_mut())
                {
                    embedded.attach(recipe, event)?;
                }
            }
            return Ok(());
        }

        match event {
            XmlEvent::Start(name) => self.start(name, event)?,
            XmlEvent::Text(text) if self.skipped == 0 => self.field.push(text),
            XmlEvent::Text(_) => {}
            XmlEvent::End(_) => self.end()?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beerxml::handler::run_handler;
    use crate::model::{Amount, HopUse, Weight};

    const RECIPE: &str = r#"<?xml version="1.0" encoding="ISO-8859-1"?>
<RECIPES>
  <RECIPE>
    <NAME>Bitter</NAME>
    <TYPE>All Grain</TYPE>
    <BATCH_SIZE>20</BATCH_SIZE>
    <BOIL_SIZE>25</BOIL_SIZE>
    <BOIL_TIME>60</BOIL_TIME>
    <EFFICIENCY>72</EFFICIENCY>
    <STYLE>
      <NAME>Ordinary Bitter</NAME>
      <CATEGORY_NUMBER>11</CATEGORY_NUMBER>
      <STYLE_LETTER>A</STYLE_LETTER>
      <STYLE_GUIDE>BJCP</STYLE_GUIDE>
      <TYPE>Ale</TYPE>
    </STYLE>
    <EQUIPMENT>
      <NAME>Pot</NAME>
      <BATCH_SIZE>23</BATCH_SIZE>
      <BOIL_SIZE>25</BOIL_SIZE>
    </EQUIPMENT>
    <HOPS>
      <HOP><NAME>Fuggle</NAME><ALPHA>4.5</ALPHA><AMOUNT>0.030</AMOUNT><USE>Boil</USE><TIME>60</TIME></HOP>
    </HOPS>
    <YEASTS>
      <YEAST><NAME>Nottingham</NAME><TYPE>Ale</TYPE><FORM>Dry</FORM>
        <AMOUNT>0.011</AMOUNT><AMOUNT_IS_WEIGHT>TRUE</AMOUNT_IS_WEIGHT></YEAST>
    </YEASTS>
    <MASH>
      <NAME>Single</NAME>
      <MASH_STEPS>
        <MASH_STEP><NAME>Sacc</NAME><TYPE>Infusion</TYPE><STEP_TEMP>67</STEP_TEMP></MASH_STEP>
      </MASH_STEPS>
    </MASH>
    <FERMENTATION_STAGES>2</FERMENTATION_STAGES>
    <PRIMARY_TEMP>18</PRIMARY_TEMP>
    <SECONDARY_TEMP>16</SECONDARY_TEMP>
    <TERTIARY_AGE>7</TERTIARY_AGE>
    <FORCED_CARBONATION>FALSE</FORCED_CARBONATION>
    <DATE>14 Mar 2012</DATE>
  </RECIPE>
</RECIPES>"#;

    fn parse(xml: &str, options: ImportOptions) -> Vec<BeerXmlRecipe> {
        let mut handler = RecipesHandler::new(options);
        run_handler(xml, &mut handler).unwrap();
        handler.into_results()
    }

    #[test]
    fn test_parses_embedded_entities() {
        let recipes = parse(RECIPE, ImportOptions::default());
        assert_eq!(recipes.len(), 1);
        let recipe = &recipes[0];

        assert_eq!(recipe.name, "Bitter");
        assert_eq!(recipe.recipe_type, Some(RecipeType::AllGrain));
        assert!((recipe.efficiency.value() - 0.72).abs() < 1e-12);
        assert_eq!(
            recipe.style.as_ref().map(|s| s.name.as_str()),
            Some("11A/Ordinary Bitter/BJCP")
        );
        assert_eq!(recipe.equipment.as_ref().map(|e| e.batch_size.value()), Some(23.0));
        assert_eq!(recipe.hops.len(), 1);
        assert_eq!(recipe.hops[0].hop_use, HopUse::Boil);
        assert_eq!(
            recipe.yeasts[0].amount,
            Amount::Weight(Weight::kilograms(0.011))
        );
        assert_eq!(recipe.mash.as_ref().map(|m| m.steps.len()), Some(1));
        assert_eq!(recipe.fermentation_stages, 2);
        assert_eq!(recipe.date, NaiveDate::from_ymd_opt(2012, 3, 14));
    }

    #[test]
    fn test_embedded_names_do_not_leak_into_recipe() {
        let recipe = &parse(RECIPE, ImportOptions::default())[0];
        assert_eq!(recipe.name, "Bitter");
        assert_eq!(recipe.batch_size.value(), 20.0);
    }

    #[test]
    fn test_exporter_fixes_off() {
        let recipe = &parse(RECIPE, ImportOptions::default())[0];
        assert!(recipe.tertiary_temp.is_none());
        assert!(!recipe.forced_carbonation);
    }

    #[test]
    fn test_exporter_fixes_on() {
        let recipe = &parse(RECIPE, ImportOptions::fixing_exporter_bugs())[0];
        assert_eq!(recipe.tertiary_temp.map(|t| t.value()), Some(16.0));
        assert!(recipe.forced_carbonation);
    }

    #[test]
    fn test_tertiary_default_without_secondary_temp() {
        let xml = "<RECIPES><RECIPE><NAME>X</NAME><TERTIARY_AGE>3</TERTIARY_AGE></RECIPE></RECIPES>";
        let recipe = &parse(xml, ImportOptions::fixing_exporter_bugs())[0];
        assert_eq!(
            recipe.tertiary_temp.map(|t| t.value()),
            Some(DEFAULT_FERMENTATION_TEMPERATURE)
        );
    }

    #[test]
    fn test_bad_date_is_fatal() {
        let xml = "<RECIPES><RECIPE><NAME>X</NAME><DATE>2012-03-14</DATE></RECIPE></RECIPES>";
        let mut handler = RecipesHandler::new(ImportOptions::default());
        let err = run_handler(xml, &mut handler).unwrap_err();
        assert!(err.to_string().contains("2012-03-14"));
    }
}
