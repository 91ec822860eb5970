use crate::core::colouring::kinds::ColourModeKinds;
use crate::core::colouring::maps::classic::ClassicColouring;
use crate::core::colouring::maps::distance_estimator::DistanceEstimatorColouring;
use crate::core::colouring::maps::grayscale::GrayscaleColouring;
use crate::core::colouring::maps::inverse_grayscale::InverseGrayscaleColouring;
use crate::core::colouring::strategy::ColourStrategy;

#[must_use]
pub fn colour_strategy_factory(kind: ColourModeKinds, steps: u32) -> Box<dyn ColourStrategy> {
    match kind {
        ColourModeKinds::Classic => Box::new(ClassicColouring::new(steps)),
        ColourModeKinds::Grayscale => Box::new(GrayscaleColouring::new(steps)),
        ColourModeKinds::InverseGrayscale => Box::new(InverseGrayscaleColouring::new(steps)),
        ColourModeKinds::DistanceEstimator => Box::new(DistanceEstimatorColouring::new(steps)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in ColourModeKinds::ALL {
            let strategy = colour_strategy_factory(kind, 256);
            assert_eq!(strategy.kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in ColourModeKinds::ALL {
            let strategy = colour_strategy_factory(kind, 256);
            assert_eq!(strategy.display_name(), kind.display_name());
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = ColourModeKinds::ALL
            .iter()
            .map(|k| k.display_name())
            .collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
