use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use ttf_parser::Face;

use crate::error::PdfError;

/// TrueType font embedded into every rendered document.
///
/// The bytes are validated once when loaded and then shared read-only
/// between requests.
#[derive(Clone)]
pub struct EmbeddedFont {
    data: Arc<[u8]>,
}

impl EmbeddedFont {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PdfError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PdfError::FontMissing(path.display().to_string()),
            _ => PdfError::FontMissing(format!("{}: {}", path.display(), e)),
        })?;
        Self::from_bytes(data)
    }

    pub fn from_bytes(data: impl Into<Arc<[u8]>>) -> Result<Self, PdfError> {
        let font = Self { data: data.into() };
        let metrics = font.metrics()?;
        if metrics.face.glyph_index('A').is_none() {
            return Err(PdfError::FontInvalid("font has no Latin glyphs".to_string()));
        }
        Ok(font)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn metrics(&self) -> Result<FontMetrics<'_>, PdfError> {
        let face = Face::parse(&self.data, 0).map_err(|e| PdfError::FontInvalid(e.to_string()))?;
        if face.units_per_em() == 0 {
            return Err(PdfError::FontInvalid("units per em is zero".to_string()));
        }
        Ok(FontMetrics { face })
    }
}

impl std::fmt::Debug for EmbeddedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddedFont")
            .field("len", &self.data.len())
            .finish()
    }
}

/// Horizontal advances read from the font tables.
pub struct FontMetrics<'a> {
    face: Face<'a>,
}

impl FontMetrics<'_> {
    /// Width of `text` in points when set at `size` points.
    ///
    /// Characters without a glyph are measured as `.notdef`.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        let units: u32 = text
            .chars()
            .map(|c| {
                let glyph = self.face.glyph_index(c).unwrap_or(ttf_parser::GlyphId(0));
                u32::from(self.face.glyph_hor_advance(glyph).unwrap_or(0))
            })
            .sum();
        units as f32 * size / f32::from(self.face.units_per_em())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const FONT_PATH: &str =
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets/fonts/DejaVuSans.ttf");

    #[test]
    fn should_load_bundled_font() {
        let font = EmbeddedFont::load(FONT_PATH).unwrap();
        assert!(!font.bytes().is_empty());
    }

    #[test]
    fn should_report_missing_font() {
        let result = EmbeddedFont::load("/nonexistent/font.ttf");
        assert!(matches!(result, Err(PdfError::FontMissing(_))));
    }

    #[test]
    fn should_reject_bytes_that_are_not_a_font() {
        let result = EmbeddedFont::from_bytes(b"definitely not a font".to_vec());
        assert!(matches!(result, Err(PdfError::FontInvalid(_))));
    }

    #[test]
    fn should_measure_wider_text_as_wider() {
        let font = EmbeddedFont::load(FONT_PATH).unwrap();
        let metrics = font.metrics().unwrap();

        let short = metrics.text_width("flour", 10.0);
        let long = metrics.text_width("flour (g) - 350", 10.0);

        assert!(short > 0.0);
        assert!(long > short);
        assert!((metrics.text_width("flour", 20.0) - 2.0 * short).abs() < 0.01);
    }

    #[test]
    fn should_measure_cyrillic_text() {
        let font = EmbeddedFont::load(FONT_PATH).unwrap();
        let metrics = font.metrics().unwrap();

        assert!(metrics.text_width("картофель", 10.0) > 0.0);
    }
}
