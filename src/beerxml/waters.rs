use super::fields::number;
use super::handler::{ListHandler, RecordMapping};
use crate::error::ImportResult;
use crate::model::{Ph, Ppm, Water};

#[derive(Debug, Clone, Copy, Default)]
pub struct WaterMapping;

pub type WatersHandler = ListHandler<WaterMapping>;

impl RecordMapping for WaterMapping {
    type Record = Water;
    type Output = Water;
    const CONTAINER: &'static str = "waters";
    const ELEMENT: &'static str = "water";

    fn apply(&self, water: &mut Water, field: &str, text: &str) -> ImportResult<()> {
        let ppm = |text: &str| number(field, text).map(Ppm::new);
        match field {
            "name" => water.name = text.to_string(),
            "calcium" => water.calcium = ppm(text)?,
            "bicarbonate" => water.bicarbonate = ppm(text)?,
            "sulfate" => water.sulfate = ppm(text)?,
            "chloride" => water.chloride = ppm(text)?,
            "sodium" => water.sodium = ppm(text)?,
            "magnesium" => water.magnesium = ppm(text)?,
            "ph" => water.ph = Some(Ph::new(number(field, text)?)),
            "notes" => water.description = text.to_string(),
            _ => {}
        }
        Ok(())
    }

    fn finish(&self, water: Water) -> ImportResult<Water> {
        Ok(water)
    }
}
