//! Multi-file BeerXML import.

use super::equipment::{EquipmentHandler, EquipmentMapping};
use super::fermentables::{FermentableMapping, FermentablesHandler};
use super::handler::run_handler;
use super::hops::{HopMapping, HopsHandler};
use super::miscs::{MiscMapping, MiscsHandler};
use super::recipe::{BeerXmlRecipe, RecipesHandler};
use super::styles::{StyleMapping, StylesHandler};
use super::waters::{WaterMapping, WatersHandler};
use super::yeasts::{YeastMapping, YeastsHandler};
use crate::config::ImportOptions;
use crate::error::{ImportError, ImportResult};
use crate::fs::{FileSystem, RealFileSystem};
use crate::model::{
    Batch, EquipmentProfile, Fermentable, Hop, Misc, Recipe, Style, Water, Yeast,
};
use crate::synthesis::RecipeSynthesizer;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    Water,
    Fermentable,
    Hop,
    Yeast,
    Misc,
    Style,
    EquipmentProfile,
    Recipe,
    Batch,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Water => "water",
            EntityKind::Fermentable => "fermentable",
            EntityKind::Hop => "hop",
            EntityKind::Yeast => "yeast",
            EntityKind::Misc => "misc",
            EntityKind::Style => "style",
            EntityKind::EquipmentProfile => "equipment profile",
            EntityKind::Recipe => "recipe",
            EntityKind::Batch => "batch",
        };
        f.write_str(name)
    }
}

/// Everything read from one document, in document order.
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    pub waters: Vec<Water>,
    pub fermentables: Vec<Fermentable>,
    pub hops: Vec<Hop>,
    pub yeasts: Vec<Yeast>,
    pub miscs: Vec<Misc>,
    pub styles: Vec<Style>,
    pub equipment: Vec<EquipmentProfile>,
    pub recipes: Vec<BeerXmlRecipe>,
}

/// Import result keyed by entity name.
///
/// A later document silently replaces an earlier entry of the same kind and
/// name; every replacement is listed in `overwritten`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportedData {
    pub waters: BTreeMap<String, Water>,
    pub fermentables: BTreeMap<String, Fermentable>,
    pub hops: BTreeMap<String, Hop>,
    pub yeasts: BTreeMap<String, Yeast>,
    pub miscs: BTreeMap<String, Misc>,
    pub styles: BTreeMap<String, Style>,
    pub equipment: BTreeMap<String, EquipmentProfile>,
    pub recipes: BTreeMap<String, Recipe>,
    pub batches: BTreeMap<String, Batch>,
    pub overwritten: Vec<(EntityKind, String)>,
}

impl ImportedData {
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Water => self.waters.len(),
            EntityKind::Fermentable => self.fermentables.len(),
            EntityKind::Hop => self.hops.len(),
            EntityKind::Yeast => self.yeasts.len(),
            EntityKind::Misc => self.miscs.len(),
            EntityKind::Style => self.styles.len(),
            EntityKind::EquipmentProfile => self.equipment.len(),
            EntityKind::Recipe => self.recipes.len(),
            EntityKind::Batch => self.batches.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        [
            EntityKind::Water,
            EntityKind::Fermentable,
            EntityKind::Hop,
            EntityKind::Yeast,
            EntityKind::Misc,
            EntityKind::Style,
            EntityKind::EquipmentProfile,
            EntityKind::Recipe,
            EntityKind::Batch,
        ]
        .iter()
        .all(|kind| self.count(*kind) == 0)
    }

    /// Pretty-printed JSON snapshot of everything imported.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Merges one document's records into `map`. Only entries that came from an
/// earlier document count as overwritten; repeats inside the document do not.
fn merge_named<T>(
    map: &mut BTreeMap<String, T>,
    overwritten: &mut Vec<(EntityKind, String)>,
    kind: EntityKind,
    records: Vec<T>,
    name_of: impl Fn(&T) -> &str,
) {
    let mut seen_in_document = BTreeSet::new();
    for record in records {
        let name = name_of(&record).to_string();
        let first_in_document = seen_in_document.insert(name.clone());
        if map.insert(name.clone(), record).is_some() && first_in_document {
            debug!("Replacing {} '{}' from an earlier document", kind, name);
            overwritten.push((kind, name));
        }
    }
}

/// Accumulates documents before recipes are synthesized.
#[derive(Default)]
struct Merged {
    data: ImportedData,
    recipes: BTreeMap<String, BeerXmlRecipe>,
}

impl Merged {
    fn add(&mut self, document: ParsedDocument) {
        let data = &mut self.data;
        let overwritten = &mut data.overwritten;
        merge_named(&mut data.waters, overwritten, EntityKind::Water, document.waters, |w| &w.name);
        merge_named(
            &mut data.fermentables,
            overwritten,
            EntityKind::Fermentable,
            document.fermentables,
            |f| &f.name,
        );
        merge_named(&mut data.hops, overwritten, EntityKind::Hop, document.hops, |h| &h.name);
        merge_named(&mut data.yeasts, overwritten, EntityKind::Yeast, document.yeasts, |y| &y.name);
        merge_named(&mut data.miscs, overwritten, EntityKind::Misc, document.miscs, |m| &m.name);
        merge_named(&mut data.styles, overwritten, EntityKind::Style, document.styles, |s| &s.name);
        merge_named(
            &mut data.equipment,
            overwritten,
            EntityKind::EquipmentProfile,
            document.equipment,
            |e| &e.name,
        );
        merge_named(
            &mut self.recipes,
            overwritten,
            EntityKind::Recipe,
            document.recipes,
            |r| &r.name,
        );
    }
}

/// Reads BeerXML documents into reference data, recipes and batches.
pub struct BeerXmlParser<F: FileSystem = RealFileSystem> {
    options: ImportOptions,
    file_system: F,
    synthesizer: RecipeSynthesizer,
}

impl BeerXmlParser<RealFileSystem> {
    pub fn new(options: ImportOptions) -> Self {
        Self::with_file_system(options, RealFileSystem)
    }
}

impl<F: FileSystem> BeerXmlParser<F> {
    pub fn with_file_system(options: ImportOptions, file_system: F) -> Self {
        Self {
            options,
            file_system,
            synthesizer: RecipeSynthesizer::new(),
        }
    }

    pub fn options(&self) -> ImportOptions {
        self.options
    }

    /// Imports `files` in order. Any failure aborts the whole import.
    pub fn parse<P: AsRef<Path>>(&self, files: &[P]) -> Result<ImportedData> {
        let start = Instant::now();
        let mut merged = Merged::default();

        for path in files {
            let path = path.as_ref();
            info!("Importing BeerXML file: {}", path.display());
            let xml = self.read_document(path)?;
            let document = self
                .parse_document(&xml)
                .with_context(|| format!("Failed to import {}", path.display()))?;
            debug!(
                "{}: {} recipes, {} fermentables, {} hops",
                path.display(),
                document.recipes.len(),
                document.fermentables.len(),
                document.hops.len()
            );
            merged.add(document);
        }

        let data = self.synthesize(merged)?;
        info!(
            "Imported {} file(s): {} recipes in {:?}",
            files.len(),
            data.recipes.len(),
            start.elapsed()
        );
        Ok(data)
    }

    /// Imports one in-memory document.
    pub fn parse_str(&self, xml: &str) -> Result<ImportedData> {
        let mut merged = Merged::default();
        merged.add(self.parse_document(xml)?);
        self.synthesize(merged)
    }

    /// Runs every handler over `xml`, each in its own pass.
    pub fn parse_document(&self, xml: &str) -> ImportResult<ParsedDocument> {
        let mut waters = WatersHandler::new(WaterMapping);
        run_handler(xml, &mut waters)?;
        let mut fermentables = FermentablesHandler::new(FermentableMapping::new(self.options));
        run_handler(xml, &mut fermentables)?;
        let mut hops = HopsHandler::new(HopMapping);
        run_handler(xml, &mut hops)?;
        let mut yeasts = YeastsHandler::new(YeastMapping);
        run_handler(xml, &mut yeasts)?;
        let mut miscs = MiscsHandler::new(MiscMapping);
        run_handler(xml, &mut miscs)?;
        let mut styles = StylesHandler::new(StyleMapping);
        run_handler(xml, &mut styles)?;
        let mut equipment = EquipmentHandler::new(EquipmentMapping);
        run_handler(xml, &mut equipment)?;
        let mut recipes = RecipesHandler::new(self.options);
        run_handler(xml, &mut recipes)?;

        Ok(ParsedDocument {
            waters: waters.into_results(),
            fermentables: fermentables.into_results(),
            hops: hops.into_results(),
            yeasts: yeasts.into_results(),
            miscs: miscs.into_results(),
            styles: styles.into_results(),
            equipment: equipment.into_results(),
            recipes: recipes.into_results(),
        })
    }

    fn read_document(&self, path: &Path) -> Result<String> {
        if !self.file_system.exists(path) {
            return Err(ImportError::Io {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
            }
            .into());
        }
        let bytes = self.file_system.read_bytes(path)?;
        Ok(decode(&bytes, path))
    }

    fn synthesize(&self, merged: Merged) -> Result<ImportedData> {
        let Merged {
            mut data,
            recipes,
        } = merged;

        for source in recipes.values() {
            // Embedded reference data fills gaps only; standalone records win.
            if let Some(equipment) = &source.equipment {
                data.equipment
                    .entry(equipment.name.clone())
                    .or_insert_with(|| equipment.clone());
            }
            if let Some(style) = &source.style {
                data.styles
                    .entry(style.name.clone())
                    .or_insert_with(|| style.clone());
            }

            let (recipe, batch) = self.synthesizer.synthesize(source)?;
            data.batches.insert(batch.name.clone(), batch);
            data.recipes.insert(recipe.name.clone(), recipe);
        }

        Ok(data)
    }
}

/// UTF-8, falling back to ISO-8859-1 which several exporters write.
fn decode(bytes: &[u8], path: &Path) -> String {
    let text = match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            warn!(
                "{} is not valid UTF-8, reading it as ISO-8859-1",
                path.display()
            );
            bytes.iter().map(|&b| char::from(b)).collect()
        }
    };
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}
