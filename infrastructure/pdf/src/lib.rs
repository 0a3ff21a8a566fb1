//! PDF rendering of shopping lists.
//!
//! [`PdfShoppingListRenderer`] implements the `ShoppingListRenderer` port of
//! the business crate. Layout is computed in points by [`layout`] and drawn
//! through the [`layout::PageCanvas`] trait, so only `renderer` knows about
//! printpdf.

pub mod error;
pub mod font;
pub mod layout;
pub mod renderer;

pub use error::PdfError;
pub use font::EmbeddedFont;
pub use renderer::PdfShoppingListRenderer;
