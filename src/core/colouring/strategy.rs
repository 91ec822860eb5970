use crate::core::colouring::kinds::ColourModeKinds;
use crate::core::data::escape_record::EscapeRecord;
use crate::core::data::hsv::Hsv;

/// Port for the per-render colouring pass.
///
/// A strategy consumes the iteration engine's records and stages one HSV
/// triple per pixel, including any raster-wide post-pass it needs (hue
/// smoothing, distance normalization). Strategies are chosen once per
/// render, never per pixel.
pub trait ColourStrategy: Send + Sync {
    fn kind(&self) -> ColourModeKinds;

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }

    /// One HSV triple per record, in record order.
    fn colour(&self, records: &[EscapeRecord]) -> Vec<Hsv>;
}
