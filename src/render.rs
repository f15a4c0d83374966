//! PDF rendering of laid-out documents.
//!
//! The layout layer works in top-down millimeters; this module flips those
//! positions into printpdf's bottom-left coordinate space and draws every
//! recorded operation with the built-in Helvetica faces.

use std::io::BufWriter;

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};

use crate::error::DocumentError;
use crate::fonts::FontFace;
use crate::layout::LaidOutDocument;

const RULE_THICKNESS: f32 = 0.5;

struct FontSet {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

impl FontSet {
    fn for_face(&self, face: FontFace) -> &IndirectFontRef {
        match face {
            FontFace::Regular => &self.regular,
            FontFace::Bold => &self.bold,
            FontFace::Italic => &self.italic,
        }
    }
}

/// Renders a laid-out document to PDF bytes.
///
/// Failures come back as a recoverable [`DocumentError`]; callers surface
/// them to the user instead of unwinding.
pub fn render(document: &LaidOutDocument, title: &str) -> Result<Vec<u8>, DocumentError> {
    let geometry = document.geometry;
    let (pdf, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(geometry.width_mm),
        Mm(geometry.height_mm),
        "Layer 1",
    );

    let fonts = FontSet {
        regular: builtin(&pdf, BuiltinFont::Helvetica)?,
        bold: builtin(&pdf, BuiltinFont::HelveticaBold)?,
        italic: builtin(&pdf, BuiltinFont::HelveticaOblique)?,
    };

    for (index, page) in document.pages.iter().enumerate() {
        let layer = if index == 0 {
            pdf.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                pdf.add_page(Mm(geometry.width_mm), Mm(geometry.height_mm), "Layer 1");
            pdf.get_page(page_index).get_layer(layer_index)
        };

        for op in &page.texts {
            layer.use_text(
                op.text.clone(),
                op.font.size_pt,
                Mm(op.x_mm),
                Mm(geometry.height_mm - op.y_mm),
                fonts.for_face(op.font.face),
            );
        }

        if !page.rules.is_empty() {
            layer.set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
            layer.set_outline_thickness(RULE_THICKNESS);
        }
        for rule in &page.rules {
            let y = geometry.height_mm - rule.y_mm;
            draw_rule(&layer, rule.x_start_mm, rule.x_end_mm, y);
        }
    }

    let mut bytes = Vec::new();
    {
        let mut writer = BufWriter::new(&mut bytes);
        pdf.save(&mut writer)
            .map_err(|err| DocumentError::Pdf(err.to_string()))?;
    }

    log::debug!("rendered {} page(s), {} bytes", document.page_count(), bytes.len());
    Ok(bytes)
}

fn builtin(
    pdf: &printpdf::PdfDocumentReference,
    font: BuiltinFont,
) -> Result<IndirectFontRef, DocumentError> {
    pdf.add_builtin_font(font)
        .map_err(|err| DocumentError::Pdf(err.to_string()))
}

fn draw_rule(layer: &PdfLayerReference, x_start: f32, x_end: f32, y: f32) {
    let line = Line {
        points: vec![
            (Point::new(Mm(x_start), Mm(y)), false),
            (Point::new(Mm(x_end), Mm(y)), false),
        ],
        is_closed: false,
    };
    layer.add_line(line);
}
