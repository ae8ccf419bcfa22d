//! Recipe ingredient additions.
//!
//! An addition record is an entity record plus the amount, time and use of
//! the addition. Entity fields are delegated to the entity's own mapping so
//! both parse identically.

use super::fermentables::{FermentableMapping, FermentableRecord};
use super::fields::{flag, kilograms, litres, minutes, number, whole_number};
use super::hops::HopMapping;
use super::handler::RecordMapping;
use super::literals::{HopUses, LiteralTable};
use super::miscs::MiscMapping;
use super::waters::WaterMapping;
use super::yeasts::YeastMapping;
use crate::config::ImportOptions;
use crate::error::ImportResult;
use crate::model::{
    Amount, FermentableAddition, Hop, HopAddition, HopUse, Misc, MiscAddition, MiscUse,
    Temperature, TimeSpan, Volume, Water, WaterAddition, Weight, Yeast, YeastAddition,
};

/// Temperature assumed for water BeerXML lists without one.
pub const AMBIENT_WATER_TEMPERATURE: f64 = 20.0;

/// Amount of a yeast or misc addition.
///
/// `amount` may be read before or after `amount_is_weight`. Once both are
/// known the value is held as a weight or a volume; a late
/// `amount_is_weight` reinterprets the value already read.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PendingAmount {
    amount: Option<Amount>,
    is_weight: bool,
}

impl PendingAmount {
    pub fn set_amount(&mut self, value: f64) {
        self.amount = Some(if self.is_weight {
            Amount::Weight(Weight::kilograms(value))
        } else {
            Amount::Volume(Volume::litres(value))
        });
    }

    pub fn set_is_weight(&mut self, is_weight: bool) {
        self.is_weight = is_weight;
        self.amount = self.amount.map(|amount| {
            if is_weight {
                amount.reinterpret_as_weight()
            } else {
                amount.reinterpret_as_volume()
            }
        });
    }

    pub fn resolve(self) -> Amount {
        match (self.amount, self.is_weight) {
            (Some(amount), _) => amount,
            (None, true) => Amount::Weight(Weight::default()),
            (None, false) => Amount::Volume(Volume::default()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FermentableAdditionMapping {
    fermentable: FermentableMapping,
}

impl FermentableAdditionMapping {
    pub fn new(options: ImportOptions) -> Self {
        Self {
            fermentable: FermentableMapping::new(options),
        }
    }
}

#[derive(Debug, Default)]
pub struct FermentableAdditionRecord {
    fermentable: FermentableRecord,
    weight: Weight,
}

impl RecordMapping for FermentableAdditionMapping {
    type Record = FermentableAdditionRecord;
    type Output = FermentableAddition;
    const CONTAINER: &'static str = FermentableMapping::CONTAINER;
    const ELEMENT: &'static str = FermentableMapping::ELEMENT;

    fn apply(&self, record: &mut Self::Record, field: &str, text: &str) -> ImportResult<()> {
        match field {
            "amount" => record.weight = kilograms(field, text)?,
            _ => self.fermentable.apply(&mut record.fermentable, field, text)?,
        }
        Ok(())
    }

    fn finish(&self, record: Self::Record) -> ImportResult<FermentableAddition> {
        Ok(FermentableAddition {
            fermentable: self.fermentable.finish(record.fermentable)?,
            weight: record.weight,
            time: TimeSpan::default(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HopAdditionMapping;

#[derive(Debug, Default)]
pub struct HopAdditionRecord {
    hop: Hop,
    weight: Weight,
    time: TimeSpan,
    hop_use: HopUse,
}

impl RecordMapping for HopAdditionMapping {
    type Record = HopAdditionRecord;
    type Output = HopAddition;
    const CONTAINER: &'static str = HopMapping::CONTAINER;
    const ELEMENT: &'static str = HopMapping::ELEMENT;

    fn apply(&self, record: &mut Self::Record, field: &str, text: &str) -> ImportResult<()> {
        match field {
            "amount" => record.weight = kilograms(field, text)?,
            "time" => record.time = minutes(field, text)?,
            "use" => record.hop_use = HopUses::from_beerxml(text)?,
            _ => HopMapping.apply(&mut record.hop, field, text)?,
        }
        Ok(())
    }

    fn finish(&self, record: Self::Record) -> ImportResult<HopAddition> {
        Ok(HopAddition {
            hop: HopMapping.finish(record.hop)?,
            weight: record.weight,
            time: record.time,
            hop_use: record.hop_use,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MiscAdditionMapping;

#[derive(Debug, Default)]
pub struct MiscAdditionRecord {
    misc: Misc,
    amount: PendingAmount,
}

impl RecordMapping for MiscAdditionMapping {
    type Record = MiscAdditionRecord;
    type Output = MiscAddition;
    const CONTAINER: &'static str = MiscMapping::CONTAINER;
    const ELEMENT: &'static str = MiscMapping::ELEMENT;

    fn apply(&self, record: &mut Self::Record, field: &str, text: &str) -> ImportResult<()> {
        match field {
            "amount" => record.amount.set_amount(number(field, text)?),
            "amount_is_weight" => record.amount.set_is_weight(flag(text)),
            _ => MiscMapping.apply(&mut record.misc, field, text)?,
        }
        Ok(())
    }

    /// The misc's `use` and `time` describe this addition.
    fn finish(&self, record: Self::Record) -> ImportResult<MiscAddition> {
        let misc = MiscMapping.finish(record.misc)?;
        Ok(MiscAddition {
            misc_use: misc.default_use.unwrap_or(MiscUse::Boil),
            time: misc.default_time.unwrap_or_default(),
            amount: record.amount.resolve(),
            misc,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct YeastAdditionMapping;

#[derive(Debug, Default)]
pub struct YeastAdditionRecord {
    yeast: Yeast,
    amount: PendingAmount,
    add_to_secondary: bool,
    times_cultured: u32,
}

impl RecordMapping for YeastAdditionMapping {
    type Record = YeastAdditionRecord;
    type Output = YeastAddition;
    const CONTAINER: &'static str = YeastMapping::CONTAINER;
    const ELEMENT: &'static str = YeastMapping::ELEMENT;

    fn apply(&self, record: &mut Self::Record, field: &str, text: &str) -> ImportResult<()> {
        match field {
            "amount" => record.amount.set_amount(number(field, text)?),
            "amount_is_weight" => record.amount.set_is_weight(flag(text)),
            "add_to_secondary" => record.add_to_secondary = flag(text),
            "times_cultured" => record.times_cultured = whole_number(field, text)?,
            _ => YeastMapping.apply(&mut record.yeast, field, text)?,
        }
        Ok(())
    }

    fn finish(&self, record: Self::Record) -> ImportResult<YeastAddition> {
        Ok(YeastAddition {
            yeast: YeastMapping.finish(record.yeast)?,
            amount: record.amount.resolve(),
            time: TimeSpan::default(),
            add_to_secondary: record.add_to_secondary,
            times_cultured: record.times_cultured,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WaterAdditionMapping;

#[derive(Debug, Default)]
pub struct WaterAdditionRecord {
    water: Water,
    volume: Volume,
}

impl RecordMapping for WaterAdditionMapping {
    type Record = WaterAdditionRecord;
    type Output = WaterAddition;
    const CONTAINER: &'static str = WaterMapping::CONTAINER;
    const ELEMENT: &'static str = WaterMapping::ELEMENT;

    fn apply(&self, record: &mut Self::Record, field: &str, text: &str) -> ImportResult<()> {
        match field {
            "amount" => record.volume = litres(field, text)?,
            _ => WaterMapping.apply(&mut record.water, field, text)?,
        }
        Ok(())
    }

    fn finish(&self, record: Self::Record) -> ImportResult<WaterAddition> {
        Ok(WaterAddition {
            water: WaterMapping.finish(record.water)?,
            volume: record.volume,
            temperature: Temperature::celsius(AMBIENT_WATER_TEMPERATURE),
            time: TimeSpan::default(),
        })
    }
}
