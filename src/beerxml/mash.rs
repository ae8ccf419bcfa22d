//! Mash profiles embedded in recipes.

use super::fields::{celsius, flag, kilograms, litres, minutes, number};
use super::handler::{BeerXmlHandler, FieldBuffer, ListHandler, Nested, RecordMapping};
use super::event::XmlEvent;
use super::literals::{LiteralTable, MashStepTypes};
use crate::error::ImportResult;
use crate::model::{Ph, SpecificHeat, Temperature, TimeSpan, Volume, Weight};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MashStepType {
    #[default]
    Infusion,
    Temperature,
    Decoction,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeerXmlMashStep {
    pub name: String,
    pub step_type: MashStepType,
    pub infuse_amount: Option<Volume>,
    pub step_temp: Temperature,
    pub step_time: TimeSpan,
    pub ramp_time: TimeSpan,
    pub end_temp: Option<Temperature>,
}

/// Mash profile; `steps` are in document order, which is execution order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeerXmlMashProfile {
    pub name: String,
    pub grain_temp: Option<Temperature>,
    pub tun_temp: Option<Temperature>,
    pub sparge_temp: Option<Temperature>,
    pub ph: Option<Ph>,
    pub tun_weight: Weight,
    pub tun_specific_heat: SpecificHeat,
    pub equip_adjust: bool,
    pub notes: String,
    pub steps: Vec<BeerXmlMashStep>,
}

impl BeerXmlMashProfile {
    /// Sparge water temperature, when the profile sparges at all.
    pub fn sparge_temperature(&self) -> Option<Temperature> {
        self.sparge_temp.filter(|t| t.value() > 0.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MashStepMapping;

impl RecordMapping for MashStepMapping {
    type Record = BeerXmlMashStep;
    type Output = BeerXmlMashStep;
    const CONTAINER: &'static str = "mash_steps";
    const ELEMENT: &'static str = "mash_step";

    fn apply(&self, step: &mut BeerXmlMashStep, field: &str, text: &str) -> ImportResult<()> {
        match field {
            "name" => step.name = text.to_string(),
            "type" => step.step_type = MashStepTypes::from_beerxml(text)?,
            "infuse_amount" => step.infuse_amount = Some(litres(field, text)?),
            "step_temp" => step.step_temp = celsius(field, text)?,
            "step_time" => step.step_time = minutes(field, text)?,
            "ramp_time" => step.ramp_time = minutes(field, text)?,
            "end_temp" => step.end_temp = Some(celsius(field, text)?),
            _ => {}
        }
        Ok(())
    }

    fn finish(&self, step: BeerXmlMashStep) -> ImportResult<BeerXmlMashStep> {
        Ok(step)
    }
}

/// Handles the children of a recipe's `<mash>` element.
#[derive(Default)]
pub struct MashHandler {
    profile: BeerXmlMashProfile,
    field: FieldBuffer,
    steps: Option<Nested<ListHandler<MashStepMapping>>>,
    /// Elements open below the current field or unknown element.
    skipped: usize,
}

impl MashHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_profile(self) -> BeerXmlMashProfile {
        self.profile
    }

    fn apply(&mut self, field: &str, text: &str) -> ImportResult<()> {
        let p = &mut self.profile;
        match field {
            "name" => p.name = text.to_string(),
            "grain_temp" => p.grain_temp = Some(celsius(field, text)?),
            "tun_temp" => p.tun_temp = Some(celsius(field, text)?),
            "sparge_temp" => p.sparge_temp = Some(celsius(field, text)?),
            "ph" => p.ph = Some(Ph::new(number(field, text)?)),
            "tun_weight" => p.tun_weight = kilograms(field, text)?,
            "tun_specific_heat" => p.tun_specific_heat = SpecificHeat::new(number(field, text)?),
            "equip_adjust" => p.equip_adjust = flag(text),
            "notes" => p.notes = text.to_string(),
            _ => {}
        }
        Ok(())
    }
}

impl BeerXmlHandler for MashHandler {
    fn handle_event(&mut self, event: &XmlEvent) -> ImportResult<()> {
        if let Some(steps) = self.steps.as_mut() {
            if steps.forward(event)? {
                if let Some(steps) = self.steps.take() {
                    self.profile.steps = steps.into_inner().into_results();
                }
            }
            return Ok(());
        }

        match event {
            XmlEvent::Start(_) if self.skipped > 0 || self.field.is_open() => self.skipped += 1,
            XmlEvent::Start(name) if name == MashStepMapping::CONTAINER => {
                self.steps = Some(Nested::new(ListHandler::armed(MashStepMapping)));
            }
            XmlEvent::Start(name) => self.field.open(name),
            XmlEvent::Text(text) if self.skipped == 0 => self.field.push(text),
            XmlEvent::Text(_) => {}
            XmlEvent::End(_) if self.skipped > 0 => self.skipped -= 1,
            XmlEvent::End(_) => {
                if let Some((field, text)) = self.field.close() {
                    self.apply(&field, &text)?;
                }
            }
        }
        Ok(())
    }
}
