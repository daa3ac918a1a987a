//! The fixed, ordered model catalog.

use std::str::FromStr;

use crate::domain::GrowthClass;
use crate::error::AppError;

static CATALOG: [GrowthClass; 8] = GrowthClass::ALL;

/// All catalog entries in declared order.
pub fn catalog() -> &'static [GrowthClass] {
    &CATALOG
}

/// Look up a model by its exact catalog name (e.g. `"O(n log n)"`).
pub fn find_model(name: &str) -> Result<GrowthClass, AppError> {
    CATALOG
        .iter()
        .copied()
        .find(|m| m.name() == name)
        .ok_or_else(|| AppError::not_found(format!("No model with name {name}")))
}

impl FromStr for GrowthClass {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_model(s)
    }
}
