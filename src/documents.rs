//! Composition of the printable backoffice documents.
//!
//! Two documents exist: the single-order slip handed to production and
//! customers, and the multi-client roster report. Both are assembled
//! section by section through a [`PageComposer`] and rendered to PDF bytes
//! with their download filename attached.

use chrono::NaiveDate;

use crate::config::CompanyProfile;
use crate::error::DocumentError;
use crate::fonts::FontSpec;
use crate::layout::{LaidOutDocument, PageComposer, PageGeometry};
use crate::model::{ClientRecord, OrderRecord};
use crate::pricing::format_currency_brl;
use crate::render;

const TITLE: FontSpec = FontSpec::bold(20.0);
const SECTION: FontSpec = FontSpec::bold(16.0);
const LABEL: FontSpec = FontSpec::bold(12.0);
const BODY: FontSpec = FontSpec::regular(12.0);
const TOTAL: FontSpec = FontSpec::bold(14.0);
const FOOTNOTE: FontSpec = FontSpec::italic(10.0);

/// Column offset of the value column in the specification block.
const SPEC_VALUE_OFFSET_MM: f32 = 40.0;
/// Indent of the detail lines under each roster entry.
const ROSTER_DETAIL_INDENT_MM: f32 = 5.0;
/// Cursor advance per wrapped notes line.
const NOTES_LINE_ADVANCE_MM: f32 = 6.0;

/// A rendered artifact paired with its download filename.
#[derive(Clone, Debug)]
pub struct GeneratedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl GeneratedDocument {
    /// Writes the artifact into `dir` under its own filename.
    pub fn write_to_dir(
        &self,
        dir: impl AsRef<std::path::Path>,
    ) -> Result<std::path::PathBuf, DocumentError> {
        let path = dir.as_ref().join(&self.filename);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Company contact block shared by both documents: masthead plus one line
/// per contact detail.
fn company_header(composer: &mut PageComposer, company: &CompanyProfile) {
    composer.text(&company.name, TITLE);
    composer.advance(10.0);
    composer.text(&company.tagline, BODY);
    composer.advance(5.0);
    composer.text(&company.address, BODY);
    composer.advance(5.0);
    composer.text(&company.phone_line, BODY);
    composer.advance(5.0);
    composer.text(&company.email, BODY);
}

/// Lays out the order slip.
///
/// The slip is sized for one page: no mid-flow break checks run, and the
/// disclaimer sits at the absolute footer baseline rather than below the
/// last content row.
pub fn order_slip(order: &OrderRecord, company: &CompanyProfile) -> LaidOutDocument {
    let mut composer = PageComposer::new(PageGeometry::A4);

    company_header(&mut composer, company);
    composer.advance(15.0);
    composer.rule();

    composer.advance(15.0);
    composer.text(format!("PEDIDO {}", order.number), SECTION);
    composer.advance(10.0);
    composer.text(format!("Data: {}", format_date(order.date)), BODY);

    composer.advance(20.0);
    composer.text("DADOS DO CLIENTE:", LABEL);
    composer.advance(10.0);
    composer.text(format!("Cliente: {}", order.client_name), BODY);

    composer.advance(20.0);
    composer.text("ESPECIFICAÇÕES DO PEDIDO:", LABEL);
    composer.advance(15.0);

    let dimensions = format!("{} x {} mm", order.width_mm, order.length_mm);
    let quantity = format!("{} peças", order.quantity);
    let specifications = [
        ("Material:", order.material.as_str()),
        ("Espessura:", order.thickness.as_str()),
        ("Dimensões:", dimensions.as_str()),
        ("Quantidade:", quantity.as_str()),
    ];
    for (label, value) in specifications {
        composer.text(label, BODY);
        composer.indented_text(SPEC_VALUE_OFFSET_MM, value, BODY);
        composer.advance(8.0);
    }

    if let Some(notes) = order.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        composer.advance(10.0);
        composer.text("OBSERVAÇÕES:", LABEL);
        composer.advance(10.0);
        composer.wrapped_text(notes, BODY, NOTES_LINE_ADVANCE_MM);
    }

    composer.advance(20.0);
    composer.rule();

    composer.advance(15.0);
    composer.text(
        format!("VALOR TOTAL: {}", format_currency_brl(order.value_amount())),
        TOTAL,
    );

    composer.advance(15.0);
    composer.text(format!("Status: {}", order.status), BODY);

    let footer_y = composer.geometry().footer_baseline_mm();
    let footer_x = composer.geometry().margin_mm;
    composer.text_at(footer_x, footer_y, &company.disclaimer, FOOTNOTE);

    composer.into_document()
}

/// Lays out the client roster report.
///
/// Clients are emitted in input order, one block each; a block whose start
/// would fall past the break threshold opens a new page first. Conditional
/// detail lines are skipped when the record has no value for them. The
/// generation date is injected so composition stays deterministic.
pub fn client_roster(
    clients: &[ClientRecord],
    company: &CompanyProfile,
    generated_on: NaiveDate,
) -> LaidOutDocument {
    let mut composer = PageComposer::new(PageGeometry::A4);

    composer.text(&company.name, TITLE);
    composer.advance(15.0);
    composer.text("RELATÓRIO DE CLIENTES", SECTION);
    composer.advance(10.0);
    composer.text(format!("Gerado em: {}", format_date(generated_on)), BODY);

    composer.advance(15.0);
    composer.rule();

    composer.advance(15.0);
    composer.text(format!("TOTAL DE CLIENTES: {}", clients.len()), LABEL);
    composer.advance(15.0);

    for (index, client) in clients.iter().enumerate() {
        if composer.past_break() {
            composer.break_page();
        }

        composer.text(format!("{}. {}", index + 1, client.name), LABEL);

        composer.advance(8.0);
        composer.indented_text(
            ROSTER_DETAIL_INDENT_MM,
            format!("Contato: {}", client.contact),
            BODY,
        );

        if let Some(phone) = &client.phone {
            composer.advance(6.0);
            composer.indented_text(ROSTER_DETAIL_INDENT_MM, format!("Telefone: {phone}"), BODY);
        }

        if let Some(email) = &client.email {
            composer.advance(6.0);
            composer.indented_text(ROSTER_DETAIL_INDENT_MM, format!("E-mail: {email}"), BODY);
        }

        composer.advance(6.0);
        composer.indented_text(
            ROSTER_DETAIL_INDENT_MM,
            format!("Status: {}", client.status),
            BODY,
        );

        if let Some(registered_on) = client.registered_on {
            composer.advance(6.0);
            composer.indented_text(
                ROSTER_DETAIL_INDENT_MM,
                format!("Cadastrado em: {}", format_date(registered_on)),
                BODY,
            );
        }

        composer.advance(15.0);
    }

    composer.into_document()
}

/// Download filename for an order slip: whitespace runs in the client name
/// collapse to underscores.
pub fn order_slip_filename(order: &OrderRecord) -> String {
    let client = order
        .client_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("Pedido_{}_{}.pdf", order.number, client)
}

/// Download filename for the roster report, stamped with the ISO date.
pub fn client_roster_filename(generated_on: NaiveDate) -> String {
    format!("Relatorio_Clientes_{}.pdf", generated_on.format("%Y-%m-%d"))
}

/// Composes and renders an order slip.
pub fn generate_order_slip(
    order: &OrderRecord,
    company: &CompanyProfile,
) -> Result<GeneratedDocument, DocumentError> {
    let layout = order_slip(order, company);
    let bytes = render::render(&layout, &format!("Pedido {}", order.number))?;
    Ok(GeneratedDocument {
        filename: order_slip_filename(order),
        bytes,
    })
}

/// Composes and renders the client roster report.
pub fn generate_client_roster(
    clients: &[ClientRecord],
    company: &CompanyProfile,
    generated_on: NaiveDate,
) -> Result<GeneratedDocument, DocumentError> {
    let layout = client_roster(clients, company, generated_on);
    let bytes = render::render(&layout, "Relatório de Clientes")?;
    Ok(GeneratedDocument {
        filename: client_roster_filename(generated_on),
        bytes,
    })
}
