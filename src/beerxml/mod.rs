//! BeerXML 1.0 reading
//!
//! Each record family has its own handler that watches the event stream for
//! its container element and collects the records inside it. Handlers are
//! independent, so a document is read once per handler. [`BeerXmlParser`]
//! runs them all, merges documents and hands recipes to
//! [`crate::synthesis`].
//!
//! - [`handler`]: the handler trait and the generic list handler
//! - [`literals`]: BeerXML enumerated values and their domain counterparts
//! - [`fields`]: numeric, date and flag field parsing
//! - [`additions`]: recipe-embedded ingredient additions
//! - [`recipe`]: recipes with their embedded style, equipment and mash

pub mod additions;
pub mod equipment;
pub mod event;
pub mod fermentables;
pub mod fields;
pub mod handler;
pub mod hops;
pub mod literals;
pub mod mash;
pub mod miscs;
pub mod parser;
pub mod recipe;
pub mod styles;
pub mod waters;
pub mod yeasts;

pub use additions::{
    FermentableAdditionMapping, HopAdditionMapping, MiscAdditionMapping, WaterAdditionMapping,
    YeastAdditionMapping,
};
pub use equipment::{EquipmentHandler, EquipmentMapping};
pub use event::{XmlEvent, XmlEventReader};
pub use fermentables::{FermentableMapping, FermentablesHandler};
pub use handler::{run_handler, BeerXmlHandler, ListHandler, RecordMapping};
pub use hops::{HopMapping, HopsHandler};
pub use literals::LiteralTable;
pub use mash::{BeerXmlMashProfile, BeerXmlMashStep, MashHandler, MashStepMapping, MashStepType};
pub use miscs::{MiscMapping, MiscsHandler};
pub use parser::{BeerXmlParser, EntityKind, ImportedData, ParsedDocument};
pub use recipe::{BeerXmlRecipe, RecipeMapping, RecipeType, RecipesHandler};
pub use styles::{StyleMapping, StylesHandler};
pub use waters::{WaterMapping, WatersHandler};
pub use yeasts::{YeastMapping, YeastsHandler};
