use super::fields::{flag, kilograms, litres, minutes, number, percentage};
use super::handler::{ListHandler, RecordMapping};
use crate::error::ImportResult;
use crate::model::{EquipmentProfile, SpecificHeat};

/// Field rules for `<equipment>` records. Fields BeerXML lacks are inferred
/// once the record is complete.
#[derive(Debug, Clone, Copy, Default)]
pub struct EquipmentMapping;

pub type EquipmentHandler = ListHandler<EquipmentMapping>;

impl RecordMapping for EquipmentMapping {
    type Record = EquipmentProfile;
    type Output = EquipmentProfile;
    const CONTAINER: &'static str = "equipments";
    const ELEMENT: &'static str = "equipment";

    fn apply(&self, e: &mut EquipmentProfile, field: &str, text: &str) -> ImportResult<()> {
        match field {
            "name" => e.name = text.to_string(),
            "notes" => e.description = text.to_string(),
            "boil_size" => e.boil_size = litres(field, text)?,
            "batch_size" => e.batch_size = litres(field, text)?,
            "tun_volume" => e.mash_tun_volume = litres(field, text)?,
            "tun_weight" => e.mash_tun_weight = kilograms(field, text)?,
            "tun_specific_heat" => e.mash_tun_specific_heat = SpecificHeat::new(number(field, text)?),
            "top_up_water" => e.top_up_water = litres(field, text)?,
            "trub_chiller_loss" => e.trub_chiller_loss = litres(field, text)?,
            "evap_rate" => e.evaporation_rate = percentage(field, text)?,
            "boil_time" => e.boil_time = minutes(field, text)?,
            "calc_boil_volume" => e.calc_boil_volume = flag(text),
            "lauter_deadspace" => e.lauter_deadspace = litres(field, text)?,
            "top_up_kettle" => e.top_up_kettle = litres(field, text)?,
            "hop_utilization" => e.hop_utilisation = percentage(field, text)?,
            _ => {}
        }
        Ok(())
    }

    fn finish(&self, mut equipment: EquipmentProfile) -> ImportResult<EquipmentProfile> {
        equipment.infer_missing();
        Ok(equipment)
    }
}
