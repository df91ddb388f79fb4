//! ts-catalog: declarative scale catalog files and validation.
//!
//! Catalogs let deployments ship extra temperature scales and promotion
//! rules as data. Loading goes through migration and validation before
//! anything touches a registry; installation checks every promotion rule
//! reference (rules may name both catalog scales and pre-existing ones)
//! before the first registration, so a failing catalog installs nothing.

pub mod migrate;
pub mod schema;
pub mod validate;

pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use schema::*;
pub use validate::{ValidationError, validate_catalog};

use ts_core::TsError;
use ts_registry::{ScaleHandle, ScaleRegistry, define_promotion, define_scale, lookup_scale};

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("Scale error: {0}")]
    Scale(#[from] TsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> CatalogResult<ScaleCatalog> {
    let content = std::fs::read_to_string(path)?;
    let mut catalog: ScaleCatalog = serde_yaml::from_str(&content)?;
    catalog = migrate_to_latest(catalog)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

pub fn save_yaml(path: &std::path::Path, catalog: &ScaleCatalog) -> CatalogResult<()> {
    validate_catalog(catalog)?;
    let content = serde_yaml::to_string(catalog)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> CatalogResult<ScaleCatalog> {
    let content = std::fs::read_to_string(path)?;
    let mut catalog: ScaleCatalog = serde_json::from_str(&content)?;
    catalog = migrate_to_latest(catalog)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

pub fn save_json(path: &std::path::Path, catalog: &ScaleCatalog) -> CatalogResult<()> {
    validate_catalog(catalog)?;
    let content = serde_json::to_string_pretty(catalog)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Install a catalog into the process-wide default registry.
///
/// Promotion rule references are resolved up front, before anything is
/// registered, so a catalog whose rules name unknown scales fails with
/// the registry untouched. Scales then register in file order (last write
/// wins on name collisions, like any registration) and the rules follow.
/// Returns the handles of the catalog's scales.
pub fn install(catalog: &ScaleCatalog) -> CatalogResult<Vec<ScaleHandle>> {
    validate_catalog(catalog)?;
    for rule in &catalog.promotions {
        for name in [&rule.scale_a, &rule.scale_b, &rule.result] {
            if !declares_scale(catalog, name) {
                lookup_scale(name)?;
            }
        }
    }

    let mut handles = Vec::with_capacity(catalog.scales.len());
    for def in &catalog.scales {
        handles.push(define_scale(
            def.name.clone(),
            def.slope,
            def.intercept,
            def.symbol.clone(),
        )?);
    }

    for rule in &catalog.promotions {
        let a = lookup_scale(&rule.scale_a)?;
        let b = lookup_scale(&rule.scale_b)?;
        let result = lookup_scale(&rule.result)?;
        define_promotion(&a, &b, &result);
    }

    Ok(handles)
}

/// Install a catalog into a caller-owned registry instead of the default.
///
/// Rule references are checked before any mutation, like [`install`].
pub fn install_into(
    catalog: &ScaleCatalog,
    registry: &mut ScaleRegistry,
) -> CatalogResult<Vec<ScaleHandle>> {
    validate_catalog(catalog)?;
    for rule in &catalog.promotions {
        for name in [&rule.scale_a, &rule.scale_b, &rule.result] {
            if !declares_scale(catalog, name) {
                registry.lookup(name)?;
            }
        }
    }

    let mut handles = Vec::with_capacity(catalog.scales.len());
    for def in &catalog.scales {
        handles.push(registry.register(
            def.name.clone(),
            def.slope,
            def.intercept,
            def.symbol.clone(),
        )?);
    }

    for rule in &catalog.promotions {
        let a = registry.lookup(&rule.scale_a)?;
        let b = registry.lookup(&rule.scale_b)?;
        let result = registry.lookup(&rule.result)?;
        registry.register_promotion(&a, &b, &result);
    }

    Ok(handles)
}

/// True when the catalog itself declares `name` (case-insensitively).
fn declares_scale(catalog: &ScaleCatalog, name: &str) -> bool {
    catalog.scales.iter().any(|def| def.name.eq_ignore_ascii_case(name))
}
