use crate::core::data::complex::Complex;

/// Terminal state of one pixel's orbit after the iteration loop.
///
/// A pixel escapes at most once; `Escaped` carries the 0-indexed iteration
/// at which its modulus first exceeded the bailout radius.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EscapeStatus {
    Active,
    Escaped { step: u32 },
}

/// Per-pixel result of the iteration engine.
///
/// `z` and `dz` are frozen at the escape step for escaped pixels, or hold
/// the final iterate for pixels presumed in the set. `dz` is only meaningful
/// when the engine was asked to track the derivative.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeRecord {
    pub status: EscapeStatus,
    pub z: Complex,
    pub dz: Complex,
}

impl EscapeRecord {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == EscapeStatus::Active
    }

    #[must_use]
    pub fn escape_step(&self) -> Option<u32> {
        match self.status {
            EscapeStatus::Active => None,
            EscapeStatus::Escaped { step } => Some(step),
        }
    }
}
