use business::domain::shopping_cart::errors::ShoppingCartError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("pdf.font_missing: {0}")]
    FontMissing(String),
    #[error("pdf.font_invalid: {0}")]
    FontInvalid(String),
    #[error("pdf.render_failed: {0}")]
    Render(String),
}

impl From<PdfError> for ShoppingCartError {
    fn from(error: PdfError) -> Self {
        ShoppingCartError::Rendering(error.to_string())
    }
}
