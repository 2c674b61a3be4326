use crate::error::MappingError;

/// Downstream plant-type enumeration.
///
/// Each plant type is controlled by a single growth-stage threshold; the
/// field controller only consumes the stage that matches its plant type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlantType {
    Type1,
    Type2,
    Type3,
    Type4,
}

impl PlantType {
    /// Parse a scenario-store label. Returns `None` for anything outside
    /// the closed enumeration.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "type 1" => Some(PlantType::Type1),
            "type 2" => Some(PlantType::Type2),
            "type 3" => Some(PlantType::Type3),
            "type 4" => Some(PlantType::Type4),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PlantType::Type1 => "type 1",
            PlantType::Type2 => "type 2",
            PlantType::Type3 => "type 3",
            PlantType::Type4 => "type 4",
        }
    }

    /// Growth-stage index whose threshold drives this plant type.
    #[must_use]
    pub fn smt_index(self) -> usize {
        match self {
            PlantType::Type1 => 0,
            PlantType::Type2 => 1,
            PlantType::Type3 => 2,
            PlantType::Type4 => 3,
        }
    }
}

/// Look up the stage threshold for a plant-type label and round it to the
/// nearest whole percent for publication.
pub fn resolve_smt(label: &str, smts: &[f64]) -> Result<i64, MappingError> {
    let plant = PlantType::from_label(label)
        .ok_or_else(|| MappingError::UnknownPlantType(label.to_string()))?;
    let index = plant.smt_index();
    let value = smts
        .get(index)
        .copied()
        .ok_or(MappingError::StageOutOfRange {
            index,
            stages: smts.len(),
        })?;
    Ok(value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for plant in [
            PlantType::Type1,
            PlantType::Type2,
            PlantType::Type3,
            PlantType::Type4,
        ] {
            assert_eq!(PlantType::from_label(plant.label()), Some(plant));
        }
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(PlantType::from_label("type 5"), None);
        assert_eq!(PlantType::from_label(""), None);
        assert_eq!(PlantType::from_label("Type 1"), None);
    }

    #[test]
    fn test_resolve_smt_picks_mapped_stage() {
        let safe_smts = [51.0, 52.0, 53.0, 54.0];
        assert_eq!(resolve_smt("type 3", &safe_smts).unwrap(), 53);
        assert_eq!(resolve_smt("type 1", &safe_smts).unwrap(), 51);
    }

    #[test]
    fn test_resolve_smt_rounds_to_nearest() {
        let safe_smts = [50.4, 52.5, 53.6, 54.0];
        assert_eq!(resolve_smt("type 1", &safe_smts).unwrap(), 50);
        assert_eq!(resolve_smt("type 3", &safe_smts).unwrap(), 54);
    }

    #[test]
    fn test_resolve_smt_unknown_label() {
        let err = resolve_smt("cactus", &[50.0; 4]).unwrap_err();
        assert!(matches!(err, MappingError::UnknownPlantType(_)));
    }

    #[test]
    fn test_resolve_smt_short_vector() {
        let err = resolve_smt("type 4", &[50.0, 60.0]).unwrap_err();
        assert!(matches!(
            err,
            MappingError::StageOutOfRange { index: 3, stages: 2 }
        ));
    }
}
