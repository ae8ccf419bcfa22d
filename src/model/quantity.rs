//! Typed physical quantities.
//!
//! Every quantity stores its value in a canonical unit (litres, kilograms,
//! degrees Celsius, minutes, fraction, SRM ...) together with the unit it
//! was expressed in and an "estimated" flag. Values computed rather than
//! measured are flagged as estimated.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_quantity {
    (
        $(#[$meta:meta])*
        $name:ident in $unit:ident {
            canonical: $canonical:ident,
            $( $variant:ident => $symbol:literal ),+ $(,)?
        }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $unit {
            $( $variant, )+
        }

        impl $unit {
            pub fn symbol(&self) -> &'static str {
                match self {
                    $( Self::$variant => $symbol, )+
                }
            }
        }

        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            value: f64,
            unit: $unit,
            estimated: bool,
        }

        impl $name {
            /// Creates a quantity from a value in the canonical unit.
            pub fn new(value: f64) -> Self {
                Self {
                    value,
                    unit: $unit::$canonical,
                    estimated: false,
                }
            }

            /// Value in the canonical unit.
            pub fn value(&self) -> f64 {
                self.value
            }

            /// Unit the value was originally expressed in.
            pub fn unit(&self) -> $unit {
                self.unit
            }

            pub fn is_estimated(&self) -> bool {
                self.estimated
            }

            pub fn estimated(mut self) -> Self {
                self.estimated = true;
                self
            }

            #[allow(dead_code)]
            fn expressed_in(mut self, unit: $unit) -> Self {
                self.unit = unit;
                self
            }

            pub fn scaled(&self, factor: f64) -> Self {
                Self {
                    value: self.value * factor,
                    ..*self
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new(0.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:.2} {}", self.value, $unit::$canonical.symbol())
            }
        }
    };
}

define_quantity! {
    /// Volume, canonical unit litres.
    Volume in VolumeUnit {
        canonical: Litres,
        Litres => "l",
        Millilitres => "ml",
    }
}

define_quantity! {
    /// Weight, canonical unit kilograms.
    Weight in WeightUnit {
        canonical: Kilograms,
        Kilograms => "kg",
        Grams => "g",
    }
}

define_quantity! {
    /// Temperature, canonical unit degrees Celsius.
    Temperature in TemperatureUnit {
        canonical: Celsius,
        Celsius => "C",
        Fahrenheit => "F",
    }
}

define_quantity! {
    /// Duration, canonical unit minutes.
    TimeSpan in TimeUnit {
        canonical: Minutes,
        Minutes => "min",
        Hours => "h",
        Days => "d",
    }
}

define_quantity! {
    /// Ratio stored as a fraction (0.625 for 62.5%).
    Percentage in PercentageUnit {
        canonical: Fraction,
        Fraction => "%",
    }
}

define_quantity! {
    /// Density, canonical unit specific gravity.
    Density in DensityUnit {
        canonical: SpecificGravity,
        SpecificGravity => "SG",
    }
}

define_quantity! {
    /// Colour, canonical unit SRM.
    Colour in ColourUnit {
        canonical: Srm,
        Srm => "SRM",
        Lovibond => "L",
    }
}

define_quantity! {
    /// Bitterness in international bitterness units.
    Bitterness in BitternessUnit {
        canonical: Ibu,
        Ibu => "IBU",
    }
}

define_quantity! {
    Ph in PhUnit {
        canonical: Ph,
        Ph => "pH",
    }
}

define_quantity! {
    /// Dissolved ion concentration in parts per million.
    Ppm in PpmUnit {
        canonical: Ppm,
        Ppm => "ppm",
    }
}

define_quantity! {
    /// Electrical power, canonical unit kilowatts.
    Power in PowerUnit {
        canonical: Kilowatts,
        Kilowatts => "kW",
    }
}

define_quantity! {
    /// Dissolved CO2 in volumes.
    Carbonation in CarbonationUnit {
        canonical: Volumes,
        Volumes => "vol",
    }
}

define_quantity! {
    /// Specific heat, canonical unit cal/(g.C).
    SpecificHeat in SpecificHeatUnit {
        canonical: CaloriesPerGramCelsius,
        CaloriesPerGramCelsius => "cal/gC",
    }
}

define_quantity! {
    /// Diastatic power in degrees Lintner.
    DiastaticPower in DiastaticPowerUnit {
        canonical: Lintner,
        Lintner => "Lintner",
    }
}

define_quantity! {
    /// Dimensionless factor, e.g. a keg priming factor.
    Arbitrary in ArbitraryUnit {
        canonical: Factor,
        Factor => "",
    }
}

impl Volume {
    pub fn litres(value: f64) -> Self {
        Self::new(value)
    }

    pub fn millilitres(value: f64) -> Self {
        Self::new(value / 1000.0).expressed_in(VolumeUnit::Millilitres)
    }
}

impl Weight {
    pub fn kilograms(value: f64) -> Self {
        Self::new(value)
    }

    pub fn grams(value: f64) -> Self {
        Self::new(value / 1000.0).expressed_in(WeightUnit::Grams)
    }
}

impl Temperature {
    pub fn celsius(value: f64) -> Self {
        Self::new(value)
    }

    pub fn fahrenheit(value: f64) -> Self {
        Self::new((value - 32.0) * 5.0 / 9.0).expressed_in(TemperatureUnit::Fahrenheit)
    }
}

impl TimeSpan {
    pub fn minutes(value: f64) -> Self {
        Self::new(value)
    }

    pub fn hours(value: f64) -> Self {
        Self::new(value * 60.0).expressed_in(TimeUnit::Hours)
    }

    pub fn days(value: f64) -> Self {
        Self::new(value * 24.0 * 60.0).expressed_in(TimeUnit::Days)
    }

    pub fn as_days(&self) -> f64 {
        self.value / (24.0 * 60.0)
    }
}

impl Percentage {
    /// Builds a fraction from a 0-100 percentage.
    pub fn from_percent(value: f64) -> Self {
        Self::new(value / 100.0)
    }

    pub fn as_percent(&self) -> f64 {
        self.value * 100.0
    }
}

impl Colour {
    pub fn srm(value: f64) -> Self {
        Self::new(value)
    }

    /// Degrees Lovibond to SRM, clamped at zero for very pale sugars.
    pub fn lovibond(value: f64) -> Self {
        Self::new((1.3546 * value - 0.76).max(0.0)).expressed_in(ColourUnit::Lovibond)
    }
}

/// An amount BeerXML does not say is a volume or a weight until
/// `amount_is_weight` has been seen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Amount {
    Volume(Volume),
    Weight(Weight),
}

impl Amount {
    pub fn value(&self) -> f64 {
        match self {
            Amount::Volume(v) => v.value(),
            Amount::Weight(w) => w.value(),
        }
    }

    pub fn is_weight(&self) -> bool {
        matches!(self, Amount::Weight(_))
    }

    /// Keeps the numeric value and changes the interpretation to kilograms.
    pub fn reinterpret_as_weight(self) -> Self {
        match self {
            Amount::Volume(v) => Amount::Weight(Weight::kilograms(v.value())),
            weight => weight,
        }
    }

    /// Keeps the numeric value and changes the interpretation to litres.
    pub fn reinterpret_as_volume(self) -> Self {
        match self {
            Amount::Weight(w) => Amount::Volume(Volume::litres(w.value())),
            volume => volume,
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::Volume(Volume::default())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Volume(v) => v.fmt(f),
            Amount::Weight(w) => w.fmt(f),
        }
    }
}
