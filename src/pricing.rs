//! Order value calculation and monetary formatting.
//!
//! The calculator is a pure function over the form draft and the material
//! rate table: cheap enough to run on every keystroke, and forgiving of
//! incomplete drafts, which are worth zero rather than being errors. The
//! computed value is frozen into the order at submit time and never
//! recalculated when the rate table changes later.

use crate::model::{MaterialRate, OrderDraft};

const SQUARE_MM_PER_SQUARE_M: f64 = 1_000_000.0;

/// Mapping from material name to price per square meter.
///
/// Seeded once at startup and immutable for the session.
#[derive(Clone, Debug, PartialEq)]
pub struct RateTable {
    rates: Vec<MaterialRate>,
}

impl RateTable {
    pub fn new(rates: Vec<MaterialRate>) -> Self {
        Self { rates }
    }

    /// Price per square meter for `material`, if the table knows it.
    pub fn unit_price(&self, material: &str) -> Option<f64> {
        self.rates
            .iter()
            .find(|rate| rate.name == material)
            .map(|rate| rate.unit_price)
    }

    pub fn rates(&self) -> &[MaterialRate] {
        &self.rates
    }
}

impl Default for RateTable {
    /// The stock material list used when the backend provides none.
    fn default() -> Self {
        Self::new(vec![
            MaterialRate::new("Aço Carbono", 25.00),
            MaterialRate::new("Aço Galvanizado", 32.00),
            MaterialRate::new("Aço Inox", 85.00),
            MaterialRate::new("Alumínio", 45.00),
            MaterialRate::new("Ferro", 18.00),
        ])
    }
}

/// Total value of a draft order.
///
/// Area in m² is `width × length / 1_000_000`; the total is
/// `area × unit price × quantity`. Returns `0.0` while any input is unset or
/// the material is unknown, which is the partial-form display state. No
/// rounding is applied here; callers format for display or persistence.
pub fn order_value(draft: &OrderDraft, rates: &RateTable) -> f64 {
    let (Some(material), Some(width_mm), Some(length_mm), Some(quantity)) = (
        draft.material.as_deref(),
        draft.width_mm,
        draft.length_mm,
        draft.quantity,
    ) else {
        return 0.0;
    };

    let Some(unit_price) = rates.unit_price(material) else {
        return 0.0;
    };

    let area_m2 = (width_mm * length_mm) / SQUARE_MM_PER_SQUARE_M;
    area_m2 * unit_price * f64::from(quantity)
}

/// Rounds to two decimals, half away from zero, and returns the cent count
/// with the sign split off.
fn to_cents(value: f64) -> (bool, i64) {
    let cents = (value.abs() * 100.0).round() as i64;
    (value.is_sign_negative() && cents > 0, cents)
}

/// Plain two-decimal rendering, `.` as the decimal separator.
///
/// This is the persisted form of monetary values (`"250.00"`).
pub fn format_amount(value: f64) -> String {
    let (negative, cents) = to_cents(value);
    let sign = if negative { "-" } else { "" };
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}

/// Brazilian currency display: `R$ 1.234,56`.
pub fn format_currency_brl(value: f64) -> String {
    let (negative, cents) = to_cents(value);
    let integer = (cents / 100).to_string();

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, grouped, cents % 100)
}

/// Groups a 14-digit CNPJ as `NN.NNN.NNN/NNNN-NN`.
///
/// Anything that is not exactly 14 digits passes through unchanged, matching
/// how the client screen treats free-form tax ids.
pub fn format_cnpj(raw: &str) -> String {
    if raw.len() != 14 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &raw[0..2],
        &raw[2..5],
        &raw[5..8],
        &raw[8..12],
        &raw[12..14]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> OrderDraft {
        OrderDraft {
            material: Some("Aço Carbono".to_string()),
            width_mm: Some(1000.0),
            length_mm: Some(2000.0),
            quantity: Some(5),
            notes: None,
        }
    }

    #[test]
    fn computes_reference_value() {
        // (1000 * 2000 / 1_000_000) m² * 25.00 * 5
        let value = order_value(&complete_draft(), &RateTable::default());
        assert_eq!(value, 250.0);
    }

    #[test]
    fn incomplete_draft_is_worth_zero_for_every_missing_field_combination() {
        let rates = RateTable::default();

        // Every non-empty subset of unset fields must read as zero.
        for mask in 1u8..16 {
            let mut draft = complete_draft();
            if mask & 1 != 0 {
                draft.material = None;
            }
            if mask & 2 != 0 {
                draft.width_mm = None;
            }
            if mask & 4 != 0 {
                draft.length_mm = None;
            }
            if mask & 8 != 0 {
                draft.quantity = None;
            }
            assert_eq!(order_value(&draft, &rates), 0.0, "mask {mask:04b}");
        }
    }

    #[test]
    fn zero_quantity_is_worth_zero() {
        let mut draft = complete_draft();
        draft.quantity = Some(0);
        assert_eq!(order_value(&draft, &RateTable::default()), 0.0);
    }

    #[test]
    fn unknown_material_is_worth_zero() {
        let mut draft = complete_draft();
        draft.material = Some("Titânio".to_string());
        assert_eq!(order_value(&draft, &RateTable::default()), 0.0);
    }

    #[test]
    fn quantity_scales_linearly() {
        let rates = RateTable::default();
        let mut unit = complete_draft();
        unit.quantity = Some(1);
        let base = order_value(&unit, &rates);

        for quantity in [2u32, 3, 7, 40] {
            let mut draft = complete_draft();
            draft.quantity = Some(quantity);
            assert_eq!(order_value(&draft, &rates), f64::from(quantity) * base);
        }
    }

    #[test]
    fn amount_formatting_rounds_half_away_from_zero() {
        assert_eq!(format_amount(250.0), "250.00");
        assert_eq!(format_amount(0.125), "0.13");
        assert_eq!(format_amount(-0.125), "-0.13");
        assert_eq!(format_amount(0.0), "0.00");
    }

    #[test]
    fn currency_display_uses_brazilian_separators() {
        assert_eq!(format_currency_brl(250.0), "R$ 250,00");
        assert_eq!(format_currency_brl(1234.5), "R$ 1.234,50");
        assert_eq!(format_currency_brl(1_000_000.0), "R$ 1.000.000,00");
        assert_eq!(format_currency_brl(-12.3), "-R$ 12,30");
    }

    #[test]
    fn cnpj_grouping() {
        assert_eq!(format_cnpj("12345678000190"), "12.345.678/0001-90");
        assert_eq!(format_cnpj("12.345.678/0001-90"), "12.345.678/0001-90");
        assert_eq!(format_cnpj("123"), "123");
    }
}
