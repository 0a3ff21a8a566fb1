use super::errors::ShoppingCartError;

/// A fully rendered shopping list, ready to be sent as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListDocument {
    pub content: Vec<u8>,
    pub page_count: usize,
}

/// Service port turning text lines into a paginated printable document.
///
/// Each line is an opaque paragraph. Implementations either return the
/// complete document or an error, never a partially written buffer.
pub trait ShoppingListRenderer: Send + Sync {
    fn render(&self, title: &str, lines: &[String])
    -> Result<ShoppingListDocument, ShoppingCartError>;
}
