//! Page geometry and text flow. All values are PostScript points with the
//! origin in the bottom-left corner of the page.

pub const INCH: f32 = 72.0;
pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;
pub const MARGIN: f32 = INCH;

pub const TITLE_SIZE: f32 = 16.0;
pub const TITLE_Y: f32 = PAGE_HEIGHT - 108.0;

pub const FOOTER_SIZE: f32 = 9.0;
pub const FOOTER_X: f32 = INCH;
pub const FOOTER_Y: f32 = 0.25 * INCH;

pub const BODY_SIZE: f32 = 10.0;
pub const LEADING: f32 = 12.0;
pub const PARAGRAPH_SPACING: f32 = 0.05 * INCH;

pub const FRAME_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;
/// Top of the body on the first page, one inch below the top margin.
pub const FIRST_PAGE_TOP: f32 = PAGE_HEIGHT - MARGIN - INCH;
pub const LATER_PAGE_TOP: f32 = PAGE_HEIGHT - MARGIN;
pub const FRAME_BOTTOM: f32 = MARGIN;

/// Minimal drawing surface the decorations are written against.
pub trait PageCanvas {
    fn draw_text(&mut self, text: &str, size: f32, x: f32, y: f32);
    fn text_width(&self, text: &str, size: f32) -> f32;
}

pub struct PageMeta<'a> {
    pub number: usize,
    pub title: &'a str,
    pub identifier: &'a str,
}

impl PageMeta<'_> {
    pub fn footer(&self) -> String {
        format!("Page {} / {}", self.number, self.identifier)
    }
}

/// Centered title and footer.
pub fn first_page_decorations(canvas: &mut dyn PageCanvas, page: &PageMeta<'_>) {
    let width = canvas.text_width(page.title, TITLE_SIZE);
    canvas.draw_text(page.title, TITLE_SIZE, (PAGE_WIDTH - width) / 2.0, TITLE_Y);
    canvas.draw_text(&page.footer(), FOOTER_SIZE, FOOTER_X, FOOTER_Y);
}

/// Footer only.
pub fn later_page_decorations(canvas: &mut dyn PageCanvas, page: &PageMeta<'_>) {
    canvas.draw_text(&page.footer(), FOOTER_SIZE, FOOTER_X, FOOTER_Y);
}

/// One line of body text positioned on its page.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub text: String,
    pub baseline: f32,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PageLayout {
    pub rows: Vec<Row>,
}

/// Splits a paragraph into rows no wider than `max_width`.
///
/// Breaks greedily on whitespace. A word that alone exceeds the width is cut
/// between characters. An empty paragraph still yields one empty row.
pub fn wrap_paragraph(text: &str, max_width: f32, measure: &dyn Fn(&str) -> f32) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if measure(&candidate) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            rows.push(std::mem::take(&mut current));
        }
        if measure(word) <= max_width {
            current = word.to_string();
        } else {
            let mut pieces = split_word(word, max_width, measure);
            current = pieces.pop().unwrap_or_default();
            rows.extend(pieces);
        }
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

fn split_word(word: &str, max_width: f32, measure: &dyn Fn(&str) -> f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    for c in word.chars() {
        piece.push(c);
        // A single character always stays, even if it is wider than the frame.
        if measure(&piece) > max_width && piece.chars().count() > 1 {
            piece.pop();
            pieces.push(std::mem::replace(&mut piece, c.to_string()));
        }
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// Flows paragraphs through the body frame of consecutive pages.
///
/// Always returns at least one page. `measure` gives the width of a string
/// set at [`BODY_SIZE`].
pub fn paginate(paragraphs: &[String], measure: &dyn Fn(&str) -> f32) -> Vec<PageLayout> {
    let mut pages = vec![PageLayout::default()];
    let mut cursor = FIRST_PAGE_TOP;

    for paragraph in paragraphs {
        for text in wrap_paragraph(paragraph, FRAME_WIDTH, measure) {
            if cursor - LEADING < FRAME_BOTTOM {
                pages.push(PageLayout::default());
                cursor = LATER_PAGE_TOP;
            }
            let baseline = cursor - BODY_SIZE;
            if let Some(page) = pages.last_mut() {
                page.rows.push(Row { text, baseline });
            }
            cursor -= LEADING;
        }
        cursor -= PARAGRAPH_SPACING;
    }

    pages
}
