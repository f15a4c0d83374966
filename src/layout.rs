//! Cursor-driven page layout.
//!
//! A [`PageComposer`] keeps a running vertical cursor on a fixed page and
//! records positioned text and rule operations instead of touching a PDF
//! backend directly. The resulting [`LaidOutDocument`] is plain data:
//! document composition stays pure, and tests can assert on positions, line
//! widths, and page counts without parsing rendered bytes.
//!
//! Coordinates are top-down millimeters from the upper-left page corner; the
//! renderer flips them into PDF space.

use crate::fonts::{approx_text_width_mm, FontSpec};

/// Fixed page dimensions and margins shared by all documents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
    /// Uniform left/right margin; also where the cursor column starts.
    pub margin_mm: f32,
    /// Distance from the bottom edge below which no new block may start.
    pub break_margin_mm: f32,
    /// Baseline of the absolute-positioned footer line.
    pub footer_margin_mm: f32,
    /// Cursor position at the top of every page.
    pub top_cursor_mm: f32,
}

impl PageGeometry {
    /// A4 portrait with the margins used by all backoffice documents.
    pub const A4: PageGeometry = PageGeometry {
        width_mm: 210.0,
        height_mm: 297.0,
        margin_mm: 20.0,
        break_margin_mm: 50.0,
        footer_margin_mm: 30.0,
        top_cursor_mm: 30.0,
    };

    /// Horizontal space available to text, margins excluded.
    pub fn printable_width_mm(&self) -> f32 {
        self.width_mm - 2.0 * self.margin_mm
    }

    /// Cursor positions beyond this start the next block on a new page.
    pub fn break_threshold_mm(&self) -> f32 {
        self.height_mm - self.break_margin_mm
    }

    /// Absolute baseline for footer lines.
    pub fn footer_baseline_mm(&self) -> f32 {
        self.height_mm - self.footer_margin_mm
    }
}

/// A positioned run of text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextOp {
    pub x_mm: f32,
    pub y_mm: f32,
    pub text: String,
    pub font: FontSpec,
}

/// A horizontal rule.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleOp {
    pub y_mm: f32,
    pub x_start_mm: f32,
    pub x_end_mm: f32,
}

/// Operations recorded for one page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub texts: Vec<TextOp>,
    pub rules: Vec<RuleOp>,
}

/// A fully laid out document, ready for rendering or inspection.
#[derive(Clone, Debug, PartialEq)]
pub struct LaidOutDocument {
    pub geometry: PageGeometry,
    pub pages: Vec<Page>,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Builder that tracks the cursor while a document is composed.
pub struct PageComposer {
    geometry: PageGeometry,
    pages: Vec<Page>,
    cursor_mm: f32,
}

impl PageComposer {
    /// Starts on a fresh page with the cursor at the top position.
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: vec![Page::default()],
            cursor_mm: geometry.top_cursor_mm,
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn cursor_mm(&self) -> f32 {
        self.cursor_mm
    }

    fn current_page(&mut self) -> &mut Page {
        self.pages.last_mut().expect("composer always has a page")
    }

    /// Writes a line at the left margin on the current cursor row.
    ///
    /// The cursor does not move; spacing between elements is explicit via
    /// [`advance`](Self::advance).
    pub fn text(&mut self, text: impl Into<String>, font: FontSpec) {
        let x_mm = self.geometry.margin_mm;
        self.text_at(x_mm, self.cursor_mm, text, font);
    }

    /// Writes a line indented `dx_mm` past the left margin on the cursor row.
    pub fn indented_text(&mut self, dx_mm: f32, text: impl Into<String>, font: FontSpec) {
        let x_mm = self.geometry.margin_mm + dx_mm;
        self.text_at(x_mm, self.cursor_mm, text, font);
    }

    /// Writes text at an absolute position, independent of the cursor.
    ///
    /// Used for the footer disclaimer, which sits at a fixed distance from
    /// the bottom edge regardless of how much content precedes it.
    pub fn text_at(&mut self, x_mm: f32, y_mm: f32, text: impl Into<String>, font: FontSpec) {
        let op = TextOp {
            x_mm,
            y_mm,
            text: text.into(),
            font,
        };
        self.current_page().texts.push(op);
    }

    /// Moves the cursor down.
    pub fn advance(&mut self, dy_mm: f32) {
        self.cursor_mm += dy_mm;
    }

    /// Draws a margin-to-margin rule on the cursor row.
    pub fn rule(&mut self) {
        let rule = RuleOp {
            y_mm: self.cursor_mm,
            x_start_mm: self.geometry.margin_mm,
            x_end_mm: self.geometry.width_mm - self.geometry.margin_mm,
        };
        self.current_page().rules.push(rule);
    }

    /// Whether the cursor has crossed the page-break threshold.
    pub fn past_break(&self) -> bool {
        self.cursor_mm > self.geometry.break_threshold_mm()
    }

    /// Starts a new page and resets the cursor to the top position.
    pub fn break_page(&mut self) {
        self.pages.push(Page::default());
        self.cursor_mm = self.geometry.top_cursor_mm;
    }

    /// Wraps `text` to the printable width and emits one line per row,
    /// advancing the cursor by `line_advance_mm` after each.
    pub fn wrapped_text(&mut self, text: &str, font: FontSpec, line_advance_mm: f32) {
        let max_width = self.geometry.printable_width_mm();
        for line in wrap_text(text, font.size_pt, max_width) {
            self.text(line, font);
            self.advance(line_advance_mm);
        }
    }

    pub fn into_document(self) -> LaidOutDocument {
        LaidOutDocument {
            geometry: self.geometry,
            pages: self.pages,
        }
    }
}

/// Greedy word wrap against the approximate Helvetica width model.
///
/// Embedded newlines are respected, blank source lines are preserved, and a
/// word wider than a whole line is hard-split at the last character that
/// still fits.
pub fn wrap_text(text: &str, size_pt: f32, max_width_mm: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for raw_line in text.lines() {
        if raw_line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            let mut word = word;

            while approx_text_width_mm(word, size_pt) > max_width_mm {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let (head, tail) = split_to_fit(word, size_pt, max_width_mm);
                lines.push(head.to_string());
                word = tail;
            }

            if current.is_empty() {
                current.push_str(word);
            } else {
                let candidate_width =
                    approx_text_width_mm(&current, size_pt) + approx_text_width_mm(" ", size_pt)
                        + approx_text_width_mm(word, size_pt);
                if candidate_width > max_width_mm {
                    lines.push(std::mem::take(&mut current));
                }
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

/// Splits `word` at the widest prefix not exceeding `max_width_mm`.
///
/// Always consumes at least one character so the caller makes progress even
/// on absurdly narrow widths.
fn split_to_fit(word: &str, size_pt: f32, max_width_mm: f32) -> (&str, &str) {
    let mut split_index = 0;
    for (index, ch) in word.char_indices() {
        let end = index + ch.len_utf8();
        if split_index > 0 && approx_text_width_mm(&word[..end], size_pt) > max_width_mm {
            break;
        }
        split_index = end;
    }
    word.split_at(split_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: FontSpec = FontSpec::regular(12.0);

    #[test]
    fn wrapped_lines_stay_within_width() {
        let width = PageGeometry::A4.printable_width_mm();
        let text = "Peça dobrada em L com furação de 10mm nas abas, acabamento \
                    escovado, entrega combinada para a obra da Rua das Laranjeiras \
                    com o mestre de obras no período da manhã.";
        let lines = wrap_text(text, 12.0, width);
        assert!(lines.len() > 1, "long note should wrap");
        for line in &lines {
            assert!(approx_text_width_mm(line, 12.0) <= width, "line too wide: {line}");
        }
    }

    #[test]
    fn wrapping_preserves_every_word() {
        let text = "um dois três quatro cinco seis sete oito nove dez onze doze";
        let lines = wrap_text(text, 12.0, 40.0);
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text);
    }

    #[test]
    fn oversized_word_is_hard_split() {
        let word = "a".repeat(200);
        let lines = wrap_text(&word, 12.0, 40.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(approx_text_width_mm(line, 12.0) <= 40.0);
        }
        assert_eq!(lines.concat(), word);
    }

    #[test]
    fn blank_source_lines_are_preserved() {
        let lines = wrap_text("primeira\n\nsegunda", 12.0, 100.0);
        assert_eq!(lines, vec!["primeira".to_string(), String::new(), "segunda".to_string()]);
    }

    #[test]
    fn break_page_resets_cursor_to_top() {
        let mut composer = PageComposer::new(PageGeometry::A4);
        composer.advance(230.0);
        assert!(composer.past_break());

        composer.break_page();
        assert!(!composer.past_break());
        assert_eq!(composer.cursor_mm(), PageGeometry::A4.top_cursor_mm);
        assert_eq!(composer.into_document().page_count(), 2);
    }

    #[test]
    fn text_lands_on_the_current_page_at_the_cursor() {
        let mut composer = PageComposer::new(PageGeometry::A4);
        composer.advance(10.0);
        composer.text("primeira página", BODY);
        composer.break_page();
        composer.text("segunda página", BODY);

        let document = composer.into_document();
        assert_eq!(document.pages[0].texts.len(), 1);
        assert_eq!(document.pages[0].texts[0].y_mm, 40.0);
        assert_eq!(document.pages[1].texts[0].y_mm, PageGeometry::A4.top_cursor_mm);
    }

    #[test]
    fn absolute_text_ignores_the_cursor() {
        let geometry = PageGeometry::A4;
        let mut composer = PageComposer::new(geometry);
        composer.advance(100.0);
        composer.text_at(
            geometry.margin_mm,
            geometry.footer_baseline_mm(),
            "rodapé",
            FontSpec::italic(10.0),
        );

        let document = composer.into_document();
        let op = &document.pages[0].texts[0];
        assert_eq!(op.y_mm, 267.0);
    }

    #[test]
    fn rule_spans_the_printable_width() {
        let mut composer = PageComposer::new(PageGeometry::A4);
        composer.rule();
        let document = composer.into_document();
        let rule = &document.pages[0].rules[0];
        assert_eq!(rule.x_start_mm, 20.0);
        assert_eq!(rule.x_end_mm, 190.0);
    }
}
