//! Fixed BeerXML literal tables.
//!
//! Matching is case-insensitive on trimmed text. A literal missing from a
//! table is a fatal import error; nothing is guessed.

use super::mash::MashStepType;
use super::recipe::RecipeType;
use crate::error::{ImportError, ImportResult};
use crate::model::{
    FermentableType, Flocculation, HopForm, HopType, HopUse, MiscType, MiscUse, StyleType,
    YeastForm, YeastType,
};

pub trait LiteralTable {
    type Value: Copy + PartialEq + 'static;

    /// Field name reported when a literal is not recognised.
    const FIELD: &'static str;

    /// Canonical BeerXML literal for each value, in the casing exporters use.
    const ENTRIES: &'static [(&'static str, Self::Value)];

    fn from_beerxml(text: &str) -> ImportResult<Self::Value> {
        let text = text.trim();
        Self::ENTRIES
            .iter()
            .find(|(literal, _)| literal.eq_ignore_ascii_case(text))
            .map(|(_, value)| *value)
            .ok_or_else(|| ImportError::unknown_literal(Self::FIELD, text))
    }

    /// Reverse lookup. `None` for values BeerXML has no literal for.
    fn to_beerxml(value: Self::Value) -> Option<&'static str> {
        Self::ENTRIES
            .iter()
            .find(|(_, candidate)| *candidate == value)
            .map(|(literal, _)| *literal)
    }
}

macro_rules! define_literal_table {
    (
        $(#[$meta:meta])*
        $table:ident: $value:ty as $field:literal {
            $( $literal:literal => $variant:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        pub struct $table;

        impl LiteralTable for $table {
            type Value = $value;
            const FIELD: &'static str = $field;
            const ENTRIES: &'static [(&'static str, $value)] = &[
                $( ($literal, $variant), )+
            ];
        }
    };
}

define_literal_table! {
    /// Juice and honey have no BeerXML literal; they only arise from defaults.
    FermentableTypes: FermentableType as "fermentable type" {
        "Grain" => FermentableType::Grain,
        "Sugar" => FermentableType::Sugar,
        "Extract" => FermentableType::LiquidExtract,
        "Dry Extract" => FermentableType::DryExtract,
        "Adjunct" => FermentableType::Adjunct,
    }
}

define_literal_table! {
    HopTypes: HopType as "hop type" {
        "Bittering" => HopType::Bittering,
        "Aroma" => HopType::Aroma,
        "Both" => HopType::Both,
    }
}

define_literal_table! {
    HopForms: HopForm as "hop form" {
        "Pellet" => HopForm::Pellet,
        "Plug" => HopForm::Plug,
        "Leaf" => HopForm::Leaf,
    }
}

define_literal_table! {
    HopUses: HopUse as "hop use" {
        "Boil" => HopUse::Boil,
        "Dry Hop" => HopUse::DryHop,
        "Mash" => HopUse::Mash,
        "First Wort" => HopUse::FirstWort,
        "Aroma" => HopUse::Aroma,
    }
}

define_literal_table! {
    YeastTypes: YeastType as "yeast type" {
        "Ale" => YeastType::Ale,
        "Lager" => YeastType::Lager,
        "Wheat" => YeastType::Wheat,
        "Wine" => YeastType::Wine,
        "Champagne" => YeastType::Champagne,
    }
}

define_literal_table! {
    YeastForms: YeastForm as "yeast form" {
        "Liquid" => YeastForm::Liquid,
        "Dry" => YeastForm::Dry,
        "Slant" => YeastForm::Slant,
        "Culture" => YeastForm::Culture,
    }
}

define_literal_table! {
    Flocculations: Flocculation as "yeast flocculation" {
        "Low" => Flocculation::Low,
        "Medium" => Flocculation::Medium,
        "High" => Flocculation::High,
        "Very High" => Flocculation::VeryHigh,
    }
}

define_literal_table! {
    MiscTypes: MiscType as "misc type" {
        "Spice" => MiscType::Spice,
        "Fining" => MiscType::Fining,
        "Water Agent" => MiscType::WaterAgent,
        "Herb" => MiscType::Herb,
        "Flavor" => MiscType::Flavour,
        "Other" => MiscType::Other,
    }
}

define_literal_table! {
    MiscUses: MiscUse as "misc use" {
        "Boil" => MiscUse::Boil,
        "Mash" => MiscUse::Mash,
        "Primary" => MiscUse::Primary,
        "Secondary" => MiscUse::Secondary,
        "Bottling" => MiscUse::Bottling,
    }
}

define_literal_table! {
    StyleTypes: StyleType as "style type" {
        "Lager" => StyleType::Lager,
        "Ale" => StyleType::Ale,
        "Mead" => StyleType::Mead,
        "Wheat" => StyleType::Wheat,
        "Mixed" => StyleType::Mixed,
        "Cider" => StyleType::Cider,
    }
}

define_literal_table! {
    RecipeTypes: RecipeType as "recipe type" {
        "Extract" => RecipeType::Extract,
        "Partial Mash" => RecipeType::PartialMash,
        "All Grain" => RecipeType::AllGrain,
    }
}

define_literal_table! {
    MashStepTypes: MashStepType as "mash step type" {
        "Infusion" => MashStepType::Infusion,
        "Temperature" => MashStepType::Temperature,
        "Decoction" => MashStepType::Decoction,
    }
}
