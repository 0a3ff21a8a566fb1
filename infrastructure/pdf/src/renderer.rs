use std::io::Cursor;
use std::path::Path;

use printpdf::{IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Pt};

use business::domain::shopping_cart::errors::ShoppingCartError;
use business::domain::shopping_cart::services::{ShoppingListDocument, ShoppingListRenderer};

use crate::error::PdfError;
use crate::font::{EmbeddedFont, FontMetrics};
use crate::layout::{
    self, BODY_SIZE, MARGIN, PAGE_HEIGHT, PAGE_WIDTH, PageCanvas, PageMeta,
    first_page_decorations, later_page_decorations,
};

/// Name printed in the footer of every page.
pub const DOCUMENT_IDENTIFIER: &str = "Foodgram";

const LAYER_NAME: &str = "Layer 1";

pub struct PdfShoppingListRenderer {
    font: EmbeddedFont,
}

impl PdfShoppingListRenderer {
    pub fn new(font: EmbeddedFont) -> Self {
        Self { font }
    }

    /// Loads and validates the font at `path`. Fails when the file is absent
    /// or is not a usable TrueType font.
    pub fn from_font_path(path: impl AsRef<Path>) -> Result<Self, PdfError> {
        Ok(Self::new(EmbeddedFont::load(path)?))
    }

    pub fn render_document(
        &self,
        title: &str,
        lines: &[String],
    ) -> Result<ShoppingListDocument, PdfError> {
        let metrics = self.font.metrics()?;
        let measure = |text: &str| metrics.text_width(text, BODY_SIZE);
        let pages = layout::paginate(lines, &measure);

        let (doc, first_page, first_layer) = PdfDocument::new(
            title,
            Mm::from(Pt(PAGE_WIDTH)),
            Mm::from(Pt(PAGE_HEIGHT)),
            LAYER_NAME,
        );
        let font = doc
            .add_external_font(self.font.bytes())
            .map_err(|e| PdfError::Render(e.to_string()))?;

        for (index, page) in pages.iter().enumerate() {
            let layer = if index == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page_index, layer_index) = doc.add_page(
                    Mm::from(Pt(PAGE_WIDTH)),
                    Mm::from(Pt(PAGE_HEIGHT)),
                    LAYER_NAME,
                );
                doc.get_page(page_index).get_layer(layer_index)
            };

            let mut canvas = LayerCanvas {
                layer,
                font: &font,
                metrics: &metrics,
            };
            let meta = PageMeta {
                number: index + 1,
                title,
                identifier: DOCUMENT_IDENTIFIER,
            };
            if index == 0 {
                first_page_decorations(&mut canvas, &meta);
            } else {
                later_page_decorations(&mut canvas, &meta);
            }

            for row in &page.rows {
                canvas.draw_text(&row.text, BODY_SIZE, MARGIN, row.baseline);
            }
        }

        let content = doc
            .save_to_bytes()
            .map_err(|e| PdfError::Render(e.to_string()))?;
        let content = compress_streams(content)?;

        tracing::debug!(
            "Rendered {} lines into {} pages ({} bytes)",
            lines.len(),
            pages.len(),
            content.len()
        );
        Ok(ShoppingListDocument {
            content,
            page_count: pages.len(),
        })
    }
}

/// printpdf writes its streams (the embedded font among them) uncompressed.
/// Re-saving through lopdf deflates them.
fn compress_streams(content: Vec<u8>) -> Result<Vec<u8>, PdfError> {
    let mut doc = lopdf::Document::load_mem(&content)
        .map_err(|e| PdfError::Render(format!("reparse failed: {e}")))?;
    doc.compress();

    let mut output = Cursor::new(Vec::with_capacity(content.len() / 2));
    doc.save_to(&mut output)
        .map_err(|e| PdfError::Render(format!("compressed save failed: {e}")))?;
    Ok(output.into_inner())
}

impl ShoppingListRenderer for PdfShoppingListRenderer {
    fn render(&self, title: &str, lines: &[String]) -> Result<ShoppingListDocument, ShoppingCartError> {
        Ok(self.render_document(title, lines)?)
    }
}

/// [`PageCanvas`] over one printpdf layer.
struct LayerCanvas<'a> {
    layer: PdfLayerReference,
    font: &'a IndirectFontRef,
    metrics: &'a FontMetrics<'a>,
}

impl PageCanvas for LayerCanvas<'_> {
    fn draw_text(&mut self, text: &str, size: f32, x: f32, y: f32) {
        self.layer
            .use_text(text, size, Mm::from(Pt(x)), Mm::from(Pt(y)), self.font);
    }

    fn text_width(&self, text: &str, size: f32) -> f32 {
        self.metrics.text_width(text, size)
    }
}
