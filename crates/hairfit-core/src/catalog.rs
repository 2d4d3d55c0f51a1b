//! Hairstyle catalog.
//!
//! Static reference data, loaded once and read-only afterwards. The built-in
//! catalog is embedded at compile time from `contrib/catalog/hairstyles.toml`.

use crate::types::FaceShape;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

const BUILTIN_CATALOG: &str = include_str!("../../../contrib/catalog/hairstyles.toml");

static BUILTIN: OnceLock<Result<Catalog, String>> = OnceLock::new();

/// Tags for styles that build height at the front and offset a high hairline.
pub const FRONT_VOLUME_TAGS: [StyleTag; 3] = [StyleTag::SidePart, StyleTag::Quiff, StyleTag::Pompadour];

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("duplicate hairstyle id: {0}")]
    DuplicateId(String),
    #[error("hairstyle entry #{0} has an empty id or name")]
    MissingField(usize),
    #[error("hairstyle {0}: jawline threshold must be a finite number")]
    InvalidThreshold(String),
    #[error("embedded catalog has no styles")]
    EmptyBuiltin,
    #[error("embedded catalog is invalid: {0}")]
    Builtin(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleCategory {
    Short,
    Medium,
    Long,
    Fade,
    Curly,
}

impl fmt::Display for StyleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            StyleCategory::Short => "short",
            StyleCategory::Medium => "medium",
            StyleCategory::Long => "long",
            StyleCategory::Fade => "fade",
            StyleCategory::Curly => "curly",
        })
    }
}

/// Which forehead widths a style suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForeheadTolerance {
    All,
    Wide,
    Normal,
}

/// Structural features of a style, independent of its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleTag {
    SidePart,
    Quiff,
    Pompadour,
    Fade,
    Textured,
    Slicked,
    Layered,
    Tied,
    Curls,
    Undercut,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HairstyleCatalogEntry {
    pub id: String,
    pub name: String,
    pub category: StyleCategory,
    pub compatible_shapes: Vec<FaceShape>,
    /// Minimum jawline strength [0, 100] for a full jawline bonus.
    #[serde(rename = "jawline_required")]
    pub jawline_required_threshold: f64,
    pub forehead_tolerance: ForeheadTolerance,
    #[serde(default)]
    pub tags: Vec<StyleTag>,
    #[serde(default)]
    pub notes: String,
}

impl HairstyleCatalogEntry {
    pub fn suits_shape(&self, shape: FaceShape) -> bool {
        self.compatible_shapes.contains(&shape)
    }

    pub fn has_tag(&self, tag: StyleTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn adds_front_volume(&self) -> bool {
        FRONT_VOLUME_TAGS.iter().any(|tag| self.has_tag(*tag))
    }
}

/// On-disk layout: a list of `[[style]]` tables.
#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "style")]
    styles: Vec<HairstyleCatalogEntry>,
}

/// Ordered hairstyle catalog with unique ids. Iteration follows file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<HairstyleCatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<HairstyleCatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if entry.id.trim().is_empty() || entry.name.trim().is_empty() {
                return Err(CatalogError::MissingField(i));
            }
            if !entry.jawline_required_threshold.is_finite() {
                return Err(CatalogError::InvalidThreshold(entry.id.clone()));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    pub fn from_toml_str(src: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(src)?;
        Self::new(file.styles)
    }

    /// Load a catalog from a TOML file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&src)?;
        tracing::info!(path = %path.display(), styles = catalog.len(), "loaded hairstyle catalog");
        Ok(catalog)
    }

    /// The embedded catalog, parsed on first use. Fails if it does not parse
    /// or has no styles.
    pub fn builtin() -> Result<&'static Catalog, CatalogError> {
        BUILTIN
            .get_or_init(|| {
                Self::parse_embedded(BUILTIN_CATALOG).map_err(|e| {
                    tracing::error!(error = %e, "built-in catalog is invalid");
                    e.to_string()
                })
            })
            .as_ref()
            .map_err(|reason| CatalogError::Builtin(reason.clone()))
    }

    fn parse_embedded(src: &str) -> Result<Self, CatalogError> {
        let catalog = Self::from_toml_str(src)?;
        if catalog.is_empty() {
            return Err(CatalogError::EmptyBuiltin);
        }
        tracing::debug!(styles = catalog.len(), "parsed built-in catalog");
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&HairstyleCatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entries(&self) -> &[HairstyleCatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HairstyleCatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a HairstyleCatalogEntry;
    type IntoIter = std::slice::Iter<'a, HairstyleCatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
