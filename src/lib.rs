//! brewday - BeerXML import for the Brewday brewing model
//!
//! Reads BeerXML 1.0 documents into reference ingredients, styles,
//! equipment profiles and recipes. Every BeerXML recipe is turned into a
//! linear sequence of process steps (mash, lauter, boil, ferment, package)
//! connected by named volumes, together with a batch recording when it was
//! brewed.
//!
//! # Example Usage
//!
//! ```no_run
//! use brewday::{BeerXmlParser, ImportOptions};
//!
//! fn import() -> anyhow::Result<()> {
//!     let parser = BeerXmlParser::new(ImportOptions::default());
//!     let data = parser.parse(&["recipes.xml", "hops.xml"])?;
//!
//!     for (name, recipe) in &data.recipes {
//!         println!("{}: {:?}", name, recipe.step_types());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`beerxml`]: event handlers for each BeerXML record family and the parser
//! - [`synthesis`]: phases that turn a BeerXML recipe into process steps
//! - [`model`]: the brewing domain model produced by the import
//! - [`fs`]: file system abstraction used by the parser

pub mod beerxml;
pub mod config;
pub mod error;
pub mod fs;
pub mod model;
pub mod synthesis;
pub mod util;

pub use beerxml::{BeerXmlParser, BeerXmlRecipe, EntityKind, ImportedData};
pub use config::{BrewdayConfig, ConfigError, ImportOptions};
pub use error::{ImportError, ImportResult};
pub use model::{Batch, ProcessStep, Recipe, StepKind, StepType};
pub use synthesis::RecipeSynthesizer;
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
