use crate::core::colouring::errors::UnsupportedModeError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourModeKinds {
    Classic,
    Grayscale,
    InverseGrayscale,
    DistanceEstimator,
}

impl ColourModeKinds {
    pub const ALL: &'static [Self] = &[
        Self::DistanceEstimator,
        Self::Classic,
        Self::Grayscale,
        Self::InverseGrayscale,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Grayscale => "Grayscale",
            Self::InverseGrayscale => "Inverse grayscale",
            Self::DistanceEstimator => "Distance estimator",
        }
    }

    /// Name used on the request boundary, matching [`FromStr`].
    #[must_use]
    pub const fn mode_name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Grayscale => "grayscale",
            Self::InverseGrayscale => "inverse_grayscale",
            Self::DistanceEstimator => "distance_estimator",
        }
    }

    /// Whether the iteration engine must track the orbit derivative for
    /// this mode.
    #[must_use]
    pub const fn tracks_derivative(self) -> bool {
        matches!(self, Self::DistanceEstimator)
    }
}

impl Default for ColourModeKinds {
    fn default() -> Self {
        Self::DistanceEstimator
    }
}

impl std::fmt::Display for ColourModeKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for ColourModeKinds {
    type Err = UnsupportedModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.mode_name() == s)
            .ok_or_else(|| UnsupportedModeError {
                mode: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            ColourModeKinds::ALL.first(),
            Some(&ColourModeKinds::default())
        );
    }

    #[test]
    fn all_array_lists_every_kind_once() {
        assert_eq!(ColourModeKinds::ALL.len(), 4);
        for (i, kind) in ColourModeKinds::ALL.iter().enumerate() {
            for other in &ColourModeKinds::ALL[i + 1..] {
                assert_ne!(kind, other);
            }
        }
    }

    #[test]
    fn mode_names_round_trip_through_from_str() {
        for &kind in ColourModeKinds::ALL {
            assert_eq!(kind.mode_name().parse::<ColourModeKinds>(), Ok(kind));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_mode() {
        let result = "sepia".parse::<ColourModeKinds>();

        assert_eq!(
            result,
            Err(UnsupportedModeError {
                mode: "sepia".to_string()
            })
        );
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert!("Classic".parse::<ColourModeKinds>().is_err());
    }

    #[test]
    fn test_only_distance_estimator_tracks_derivative() {
        for &kind in ColourModeKinds::ALL {
            assert_eq!(
                kind.tracks_derivative(),
                kind == ColourModeKinds::DistanceEstimator
            );
        }
    }
}
