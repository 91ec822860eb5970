use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedModeError {
    pub mode: String,
}

impl fmt::Display for UnsupportedModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported colour mode \"{}\", expected one of: classic, grayscale, inverse_grayscale, distance_estimator",
            self.mode
        )
    }
}

impl Error for UnsupportedModeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_rejected_mode() {
        let error = UnsupportedModeError {
            mode: "neon".to_string(),
        };

        assert!(error.to_string().contains("\"neon\""));
    }
}
