use pdf::{PdfError, PdfShoppingListRenderer};

/// Environment variables:
/// - FONT_PATH: TrueType font embedded in shopping lists
///   (default: "assets/fonts/DejaVuSans.ttf")
pub struct PdfConfig {
    pub font_path: String,
}

impl PdfConfig {
    pub const DEFAULT_FONT_PATH: &'static str = "assets/fonts/DejaVuSans.ttf";

    pub fn from_env() -> Self {
        Self {
            font_path: std::env::var("FONT_PATH")
                .unwrap_or_else(|_| Self::DEFAULT_FONT_PATH.to_string()),
        }
    }

    pub fn build_renderer(&self) -> Result<PdfShoppingListRenderer, PdfError> {
        let renderer = PdfShoppingListRenderer::from_font_path(&self.font_path)?;
        tracing::info!("Loaded shopping list font from {}", self.font_path);
        Ok(renderer)
    }
}
