//! Catalog validation logic.

use std::collections::HashSet;

use crate::schema::ScaleCatalog;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate scale name: {name}")]
    DuplicateName { name: String },

    #[error("Empty name in {context}")]
    EmptyName { context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_catalog(catalog: &ScaleCatalog) -> Result<(), ValidationError> {
    if catalog.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: catalog.version,
        });
    }

    // names collide case-insensitively, matching registry lookup
    let mut names = HashSet::new();
    for scale in &catalog.scales {
        if scale.name.trim().is_empty() {
            return Err(ValidationError::EmptyName {
                context: "scales".to_string(),
            });
        }
        if !names.insert(scale.name.to_ascii_lowercase()) {
            return Err(ValidationError::DuplicateName {
                name: scale.name.clone(),
            });
        }
        if !scale.slope.is_finite() || scale.slope == 0.0 {
            return Err(ValidationError::InvalidValue {
                field: format!("scales.{}.slope", scale.name),
                value: scale.slope.to_string(),
                reason: "slope must be finite and nonzero".to_string(),
            });
        }
        if !scale.intercept.is_finite() {
            return Err(ValidationError::InvalidValue {
                field: format!("scales.{}.intercept", scale.name),
                value: scale.intercept.to_string(),
                reason: "intercept must be finite".to_string(),
            });
        }
    }

    for (idx, rule) in catalog.promotions.iter().enumerate() {
        for name in [&rule.scale_a, &rule.scale_b, &rule.result] {
            if name.trim().is_empty() {
                return Err(ValidationError::EmptyName {
                    context: format!("promotions[{}]", idx),
                });
            }
        }
    }

    Ok(())
}
