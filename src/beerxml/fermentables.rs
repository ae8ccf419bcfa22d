use super::fields::{flag, number, percentage};
use super::handler::{ListHandler, RecordMapping};
use super::literals::{FermentableTypes, LiteralTable};
use crate::config::ImportOptions;
use crate::error::ImportResult;
use crate::model::{Colour, DiastaticPower, Fermentable, FermentableType};

/// A fermentable whose colour unit depends on its final type.
#[derive(Debug, Default)]
pub struct FermentableRecord {
    fermentable: Fermentable,
    type_seen: bool,
    colour: Option<f64>,
}

/// Field rules for `<fermentable>` records.
#[derive(Debug, Clone, Copy, Default)]
pub struct FermentableMapping {
    options: ImportOptions,
}

pub type FermentablesHandler = ListHandler<FermentableMapping>;

impl FermentableMapping {
    pub fn new(options: ImportOptions) -> Self {
        Self { options }
    }

    /// BeerXML gives colour in Lovibond, except for extract and juice which
    /// are in SRM. Some exporters write SRM for everything.
    fn colour(&self, fermentable_type: FermentableType, raw: f64) -> Colour {
        if self.options.fix_known_exporter_bugs || fermentable_type.colour_in_srm() {
            Colour::srm(raw)
        } else {
            Colour::lovibond(raw)
        }
    }
}

fn default_type(name: &str) -> FermentableType {
    if name.to_lowercase().contains("honey") {
        FermentableType::Honey
    } else {
        FermentableType::Adjunct
    }
}

impl RecordMapping for FermentableMapping {
    type Record = FermentableRecord;
    type Output = Fermentable;
    const CONTAINER: &'static str = "fermentables";
    const ELEMENT: &'static str = "fermentable";

    fn apply(&self, record: &mut FermentableRecord, field: &str, text: &str) -> ImportResult<()> {
        let f = &mut record.fermentable;
        match field {
            "name" => f.name = text.to_string(),
            "type" => {
                f.fermentable_type = FermentableTypes::from_beerxml(text)?;
                record.type_seen = true;
            }
            "color" => record.colour = Some(number(field, text)?),
            "origin" => f.origin = text.to_string(),
            "supplier" => f.supplier = text.to_string(),
            "notes" => f.description = text.to_string(),
            "yield" => f.yield_fraction = percentage(field, text)?,
            "coarse_fine_diff" => f.coarse_fine_diff = percentage(field, text)?,
            "moisture" => f.moisture = percentage(field, text)?,
            "protein" => f.protein = percentage(field, text)?,
            "max_in_batch" => f.max_in_batch = percentage(field, text)?,
            "diastatic_power" => f.diastatic_power = DiastaticPower::new(number(field, text)?),
            "recommend_mash" => f.recommend_mash = flag(text),
            "add_after_boil" => f.add_after_boil = flag(text),
            "ibu_gal_per_lb" => f.ibu_gal_per_lb = number(field, text)?,
            _ => {}
        }
        Ok(())
    }

    fn finish(&self, record: FermentableRecord) -> ImportResult<Fermentable> {
        let mut fermentable = record.fermentable;
        if !record.type_seen {
            fermentable.fermentable_type = default_type(&fermentable.name);
        }
        if let Some(raw) = record.colour {
            fermentable.colour = self.colour(fermentable.fermentable_type, raw);
        }
        Ok(fermentable)
    }
}
