use super::quantity::{Percentage, Power, SpecificHeat, TimeSpan, Volume, Weight};
use serde::{Deserialize, Serialize};

/// Element power given to equipment profiles read from BeerXML, which has no
/// such field. No real kettle element comes near it, so downstream code can
/// recognise imported profiles.
pub const BEERXML_ELEMENT_POWER_SENTINEL: f64 = 9_999.0;

/// Headroom applied to boil size and batch size to infer vessel volumes.
pub const VESSEL_HEADROOM: f64 = 1.2;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentProfile {
    pub name: String,
    pub description: String,
    pub boil_size: Volume,
    pub batch_size: Volume,
    pub mash_tun_volume: Volume,
    pub mash_tun_weight: Weight,
    pub mash_tun_specific_heat: SpecificHeat,
    pub top_up_water: Volume,
    pub trub_chiller_loss: Volume,
    pub evaporation_rate: Percentage,
    pub boil_time: TimeSpan,
    pub calc_boil_volume: bool,
    pub lauter_deadspace: Volume,
    pub top_up_kettle: Volume,
    pub hop_utilisation: Percentage,
    pub boil_kettle_volume: Volume,
    pub fermenter_volume: Volume,
    pub conversion_efficiency: Percentage,
    pub boil_element_power: Power,
}

impl EquipmentProfile {
    /// Fills the fields BeerXML does not carry from the ones it does.
    pub fn infer_missing(&mut self) {
        self.conversion_efficiency = Percentage::new(1.0);
        self.boil_element_power = Power::new(BEERXML_ELEMENT_POWER_SENTINEL);
        self.boil_kettle_volume = self.boil_size.scaled(VESSEL_HEADROOM).estimated();
        self.fermenter_volume = self.batch_size.scaled(VESSEL_HEADROOM).estimated();
    }

    pub fn is_from_beerxml(&self) -> bool {
        self.boil_element_power.value() == BEERXML_ELEMENT_POWER_SENTINEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_missing() {
        let mut equipment = EquipmentProfile {
            boil_size: Volume::litres(30.0),
            batch_size: Volume::litres(20.0),
            ..Default::default()
        };
        equipment.infer_missing();

        assert!((equipment.boil_kettle_volume.value() - 36.0).abs() < 1e-9);
        assert!((equipment.fermenter_volume.value() - 24.0).abs() < 1e-9);
        assert_eq!(equipment.conversion_efficiency.value(), 1.0);
        assert!(equipment.is_from_beerxml());
    }
}
