//! Schema migration framework.

use crate::CatalogError;
use crate::schema::ScaleCatalog;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut catalog: ScaleCatalog) -> Result<ScaleCatalog, CatalogError> {
    while catalog.version < LATEST_VERSION {
        catalog = migrate_one_version(catalog)?;
    }
    Ok(catalog)
}

fn migrate_one_version(catalog: ScaleCatalog) -> Result<ScaleCatalog, CatalogError> {
    match catalog.version {
        0 => migrate_v0_to_v1(catalog),
        v => Err(CatalogError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

// version: 0 files predate the gate; the shape is unchanged
fn migrate_v0_to_v1(mut catalog: ScaleCatalog) -> Result<ScaleCatalog, CatalogError> {
    catalog.version = 1;
    Ok(catalog)
}
