//! Font faces and the text metrics used for line wrapping.
//!
//! Documents are set entirely in the PDF built-in Helvetica family, so no
//! font files ship with the crate. Built-in faces carry no embedded metrics
//! we could query, which is fine for the fixed layouts here: wrapping only
//! needs a stable upper-bound estimate of how wide a run of text prints.

/// Helvetica faces used on generated documents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontFace {
    #[default]
    Regular,
    Bold,
    Italic,
}

/// A face/size pair attached to every emitted line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSpec {
    pub size_pt: f32,
    pub face: FontFace,
}

impl FontSpec {
    pub const fn new(size_pt: f32, face: FontFace) -> Self {
        Self { size_pt, face }
    }

    pub const fn regular(size_pt: f32) -> Self {
        Self::new(size_pt, FontFace::Regular)
    }

    pub const fn bold(size_pt: f32) -> Self {
        Self::new(size_pt, FontFace::Bold)
    }

    pub const fn italic(size_pt: f32) -> Self {
        Self::new(size_pt, FontFace::Italic)
    }
}

const MM_PER_PT: f32 = 25.4 / 72.0;

/// Average Helvetica advance width as a fraction of the font size.
const AVG_ADVANCE_EM: f32 = 0.5;

/// Estimated printed width of `text` at `size_pt`.
///
/// Uses a flat per-character advance; wrapping decisions made with this
/// estimate are what the layout tests assert against, so the same model is
/// both the producer and the checker of line widths.
pub fn approx_text_width_mm(text: &str, size_pt: f32) -> f32 {
    text.chars().count() as f32 * size_pt * AVG_ADVANCE_EM * MM_PER_PT
}
