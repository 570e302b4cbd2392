use std::collections::HashMap;

use crate::error::EstimatorError;
use crate::estimator::{estimate_duration, DurationEstimate, QualityTier};

use super::types::{MaterialProfile, MaterialProperties, Temperatures, DEFAULT_TEMPERATURES};

/// Ordered, read-only set of materials with lookup by id.
///
/// Iteration follows the order materials were supplied in, which is the
/// order recommendation tie-breaks rely on.
#[derive(Debug, Clone, Default)]
pub struct MaterialCatalog {
    materials: Vec<MaterialProfile>,
    index: HashMap<String, usize>,
}

impl MaterialCatalog {
    /// Build a catalog, rejecting empty or duplicate ids and non-positive prices.
    pub fn new(materials: Vec<MaterialProfile>) -> Result<Self, EstimatorError> {
        let mut index = HashMap::with_capacity(materials.len());

        for (pos, material) in materials.iter().enumerate() {
            if material.id.trim().is_empty() {
                return Err(EstimatorError::InvalidCatalog(format!(
                    "material #{} has an empty id",
                    pos + 1
                )));
            }
            if !material.price_per_kg.is_finite() || material.price_per_kg <= 0.0 {
                return Err(EstimatorError::InvalidCatalog(format!(
                    "material '{}' has non-positive price {}",
                    material.id, material.price_per_kg
                )));
            }
            if index.insert(material.id.clone(), pos).is_some() {
                return Err(EstimatorError::InvalidCatalog(format!(
                    "duplicate material id '{}'",
                    material.id
                )));
            }
        }

        Ok(Self { materials, index })
    }

    pub fn get(&self, id: &str) -> Option<&MaterialProfile> {
        self.index.get(id).map(|&pos| &self.materials[pos])
    }

    /// All materials in catalog order.
    pub fn materials(&self) -> &[MaterialProfile] {
        &self.materials
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialProfile> {
        self.materials.iter()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Temperatures for a material, or `DEFAULT_TEMPERATURES` when the id is
    /// unknown or the material declares none.
    pub fn temperatures_for(&self, id: &str) -> Temperatures {
        self.get(id)
            .and_then(|m| m.temperatures)
            .unwrap_or(DEFAULT_TEMPERATURES)
    }

    pub fn properties_for(&self, id: &str) -> Option<MaterialProperties> {
        self.get(id).and_then(|m| m.properties)
    }

    /// Estimate print time, resolving `material_id` against this catalog.
    ///
    /// An id that does not resolve is not an error: the default print rate
    /// applies and the estimate carries no material name.
    pub fn estimate_duration(
        &self,
        mass_grams: f64,
        material_id: Option<&str>,
        quality: QualityTier,
    ) -> DurationEstimate {
        let material = material_id.and_then(|id| self.get(id));
        estimate_duration(mass_grams, material, quality)
    }
}
