//! Zone Catalog - study zones with criteria definitions and default scores.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::analysis::OptionEvaluation;
use crate::domain::foundation::{Criterion, DomainError, ErrorCode};

const BUILTIN_CATALOG: &str = include_str!("zones.yaml");

/// Errors raised while loading a zone catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read zone catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid zone catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("zone catalog contains no zones")]
    Empty,

    #[error("default zone '{0}' is not in the catalog")]
    UnknownDefault(String),

    #[error("zone '{0}' appears more than once")]
    DuplicateZone(String),
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        DomainError::new(ErrorCode::ZoneCatalogError, err.to_string())
    }
}

/// Map position of a study zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

/// What a criterion means in a given zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionDefinition {
    pub criterion: Criterion,
    pub definition: String,
    pub details: String,
}

/// A district where supply options are evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyZone {
    pub key: String,
    pub district: String,
    pub city: String,
    pub sector: String,
    pub description: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub criteria: Vec<CriterionDefinition>,
    pub default_options: Vec<OptionEvaluation>,
}

impl StudyZone {
    /// Returns the definition of a criterion in this zone.
    pub fn criterion(&self, criterion: Criterion) -> Option<&CriterionDefinition> {
        self.criteria.iter().find(|d| d.criterion == criterion)
    }

    /// Returns a default option by id.
    pub fn default_option(&self, id: &str) -> Option<&OptionEvaluation> {
        self.default_options.iter().find(|o| o.id == id)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    default_zone: String,
    zones: Vec<StudyZone>,
}

/// Ordered set of study zones with a fallback zone.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneCatalog {
    zones: Vec<StudyZone>,
    default_index: usize,
}

impl ZoneCatalog {
    /// Loads the catalog shipped with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml_str(BUILTIN_CATALOG)
    }

    /// Loads a catalog from a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Parses and validates a catalog.
    ///
    /// Zones without criteria definitions inherit those of the default zone.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        let mut zones = file.zones;

        if zones.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for zone in &zones {
            if !seen.insert(zone.key.as_str()) {
                return Err(CatalogError::DuplicateZone(zone.key.clone()));
            }
        }

        let default_index = zones
            .iter()
            .position(|z| z.key == file.default_zone)
            .ok_or_else(|| CatalogError::UnknownDefault(file.default_zone.clone()))?;

        let inherited = zones[default_index].criteria.clone();
        for zone in zones.iter_mut().filter(|z| z.criteria.is_empty()) {
            zone.criteria = inherited.clone();
        }

        Ok(Self {
            zones,
            default_index,
        })
    }

    /// Returns the zone with this key, or the default zone.
    pub fn get(&self, key: &str) -> &StudyZone {
        self.find(key).unwrap_or_else(|| self.default_zone())
    }

    /// Returns the zone with this key, if present.
    pub fn find(&self, key: &str) -> Option<&StudyZone> {
        self.zones.iter().find(|z| z.key == key)
    }

    /// Returns the fallback zone.
    pub fn default_zone(&self) -> &StudyZone {
        &self.zones[self.default_index]
    }

    /// Returns zone keys in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.zones.iter().map(|z| z.key.as_str()).collect()
    }

    /// Returns all zones in catalog order.
    pub fn zones(&self) -> &[StudyZone] {
        &self.zones
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_lists_four_zones() {
        let catalog = ZoneCatalog::builtin().unwrap();
        assert_eq!(
            catalog.names(),
            vec!["Nkolbisson", "Biyem-Assi", "Mvog-Betsi", "Autre"]
        );
    }

    #[test]
    fn unknown_zone_falls_back_to_default() {
        let catalog = ZoneCatalog::builtin().unwrap();
        assert_eq!(catalog.get("Atlantis").key, "Nkolbisson");
        assert!(catalog.find("Atlantis").is_none());
    }

    #[test]
    fn zones_without_criteria_inherit_default() {
        let catalog = ZoneCatalog::builtin().unwrap();
        let zone = catalog.get("Biyem-Assi");
        assert_eq!(zone.criteria.len(), 3);
        assert_eq!(
            zone.criterion(Criterion::Cost),
            catalog.default_zone().criterion(Criterion::Cost)
        );

        let custom = catalog.get("Autre");
        assert_eq!(
            custom.criterion(Criterion::Cost).unwrap().definition,
            "Investment and operating costs."
        );
    }

    #[test]
    fn default_zone_scores_match_field_survey() {
        let catalog = ZoneCatalog::builtin().unwrap();
        let borehole = catalog.get("Nkolbisson").default_option("borehole").unwrap();
        let scores: Vec<u8> = borehole.scores.iter().map(|s| s.value()).collect();
        assert_eq!(scores, vec![4, 9, 8]);
    }

    #[test]
    fn rejects_unknown_default_zone() {
        let yaml = "default_zone: Missing\nzones:\n  - key: A\n    district: A\n    city: C\n    sector: S\n    description: D\n    coordinates: {latitude: 0.0, longitude: 0.0, zoom: 10}\n    default_options: []\n";
        assert!(matches!(
            ZoneCatalog::from_yaml_str(yaml),
            Err(CatalogError::UnknownDefault(name)) if name == "Missing"
        ));
    }

    #[test]
    fn rejects_duplicate_zones() {
        let zone = "  - key: A\n    district: A\n    city: C\n    sector: S\n    description: D\n    coordinates: {latitude: 0.0, longitude: 0.0, zoom: 10}\n    default_options: []\n";
        let yaml = format!("default_zone: A\nzones:\n{}{}", zone, zone);
        assert!(matches!(
            ZoneCatalog::from_yaml_str(&yaml),
            Err(CatalogError::DuplicateZone(_))
        ));
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(matches!(
            ZoneCatalog::from_yaml_str("default_zone: A\nzones: []\n"),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn rejects_out_of_range_scores() {
        let yaml = "default_zone: A\nzones:\n  - key: A\n    district: A\n    city: C\n    sector: S\n    description: D\n    coordinates: {latitude: 0.0, longitude: 0.0, zoom: 10}\n    default_options:\n      - {id: x, name: X, scores: [0, 5, 5]}\n";
        assert!(matches!(
            ZoneCatalog::from_yaml_str(yaml),
            Err(CatalogError::Parse(_))
        ));
    }
}
