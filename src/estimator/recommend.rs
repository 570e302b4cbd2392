//! Material recommendation scoring.

use crate::catalog::{MaterialCatalog, MaterialProfile};
use crate::error::EstimatorError;

use super::types::{RecommendationResult, Requirements};

/// Points for meeting a strength, flexibility or heat-resistance requirement.
const MAJOR_CRITERION_POINTS: u32 = 2;
/// Points for meeting a durability or budget requirement.
const MINOR_CRITERION_POINTS: u32 = 1;

/// Score one material. Each present requirement is tested independently.
pub fn score_material(requirements: &Requirements, material: &MaterialProfile) -> u32 {
    let props = material.properties.unwrap_or_default();

    let meets = |wanted: Option<f64>, have: Option<f64>| match (wanted, have) {
        (Some(wanted), Some(have)) => have >= wanted,
        _ => false,
    };

    let mut score = 0;
    if meets(requirements.strength, props.strength) {
        score += MAJOR_CRITERION_POINTS;
    }
    if meets(requirements.flexibility, props.flexibility) {
        score += MAJOR_CRITERION_POINTS;
    }
    if meets(requirements.heat_resistance, props.heat_resistance) {
        score += MAJOR_CRITERION_POINTS;
    }
    if meets(requirements.durability, props.durability) {
        score += MINOR_CRITERION_POINTS;
    }
    if let Some(budget) = requirements.budget {
        if material.price_per_kg <= budget {
            score += MINOR_CRITERION_POINTS;
        }
    }
    score
}

/// Pick the highest-scoring material.
///
/// Ties go to the material listed first in the catalog. A zero score is
/// still a recommendation; only an empty catalog is an error.
pub fn recommend_material(
    requirements: &Requirements,
    catalog: &MaterialCatalog,
) -> Result<RecommendationResult, EstimatorError> {
    let mut best: Option<(&MaterialProfile, u32)> = None;

    for material in catalog.iter() {
        let score = score_material(requirements, material);
        match best {
            // Strictly greater keeps the earlier material on ties
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((material, score)),
        }
    }

    let (material, score) = best.ok_or(EstimatorError::EmptyCatalog)?;
    Ok(RecommendationResult {
        material_id: material.id.clone(),
        material_name: material.name.clone(),
        score,
        properties: material.properties.unwrap_or_default(),
        price: material.price_per_kg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MaterialProperties;

    fn material(id: &str, strength: f64, price: f64) -> MaterialProfile {
        MaterialProfile {
            id: id.to_string(),
            name: id.to_uppercase(),
            price_per_kg: price,
            properties: Some(MaterialProperties {
                strength: Some(strength),
                ..MaterialProperties::default()
            }),
            temperatures: None,
            density: None,
            characteristics: Vec::new(),
        }
    }

    fn sample_catalog() -> MaterialCatalog {
        MaterialCatalog::new(vec![
            material("abs", 8.0, 450.0),
            material("pla", 6.0, 400.0),
            material("petg", 7.0, 500.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_strength_and_budget_tie_goes_to_first() {
        let requirements = Requirements {
            strength: Some(7.0),
            budget: Some(500.0),
            ..Requirements::default()
        };
        let catalog = sample_catalog();

        let scores: Vec<u32> = catalog
            .iter()
            .map(|m| score_material(&requirements, m))
            .collect();
        assert_eq!(scores, vec![3, 1, 3]);

        let result = recommend_material(&requirements, &catalog).unwrap();
        assert_eq!(result.material_id, "abs");
        assert_eq!(result.score, 3);
        assert_eq!(result.price, 450.0);
    }

    #[test]
    fn test_empty_requirements_pick_first_with_zero() {
        let result = recommend_material(&Requirements::default(), &sample_catalog()).unwrap();
        assert_eq!(result.material_id, "abs");
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let catalog = MaterialCatalog::default();
        let err = recommend_material(&Requirements::default(), &catalog).unwrap_err();
        assert_eq!(err, EstimatorError::EmptyCatalog);
    }

    #[test]
    fn test_material_without_properties_only_scores_budget() {
        let bare = MaterialProfile {
            properties: None,
            ..material("bare", 0.0, 100.0)
        };
        let requirements = Requirements {
            strength: Some(1.0),
            flexibility: Some(1.0),
            heat_resistance: Some(1.0),
            durability: Some(1.0),
            budget: Some(150.0),
        };
        assert_eq!(score_material(&requirements, &bare), 1);
    }

    #[test]
    fn test_weights() {
        let all = MaterialProfile {
            properties: Some(MaterialProperties {
                strength: Some(10.0),
                flexibility: Some(10.0),
                heat_resistance: Some(10.0),
                durability: Some(10.0),
            }),
            ..material("all", 10.0, 100.0)
        };
        let requirements = Requirements {
            strength: Some(5.0),
            flexibility: Some(5.0),
            heat_resistance: Some(5.0),
            durability: Some(5.0),
            budget: Some(100.0),
        };
        assert_eq!(score_material(&requirements, &all), 2 + 2 + 2 + 1 + 1);
    }

    #[test]
    fn test_later_higher_score_wins() {
        let requirements = Requirements {
            strength: Some(8.0),
            ..Requirements::default()
        };
        let catalog = MaterialCatalog::new(vec![
            material("pla", 6.0, 400.0),
            material("abs", 8.0, 450.0),
        ])
        .unwrap();
        let result = recommend_material(&requirements, &catalog).unwrap();
        assert_eq!(result.material_id, "abs");
        assert_eq!(result.score, 2);
    }
}
