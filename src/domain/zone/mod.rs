//! Zone Module - study zones where supply options are compared.

mod catalog;

pub use catalog::{
    CatalogError, Coordinates, CriterionDefinition, StudyZone, ZoneCatalog,
};
