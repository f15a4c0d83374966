//! Deep links for sharing an order through messaging and e-mail.
//!
//! Both builders produce URLs the view layer hands to the browser; the order
//! summary travels percent-encoded in the query string. The value is shown
//! exactly as persisted (two-decimal string), matching the on-screen list.

use crate::config::CompanyProfile;
use crate::model::OrderRecord;

fn order_summary(order: &OrderRecord) -> String {
    format!(
        "Cliente: {}\nMaterial: {}\nValor: R$ {}",
        order.client_name, order.material, order.value
    )
}

/// WhatsApp deep link with a pre-filled order summary.
pub fn whatsapp_link(order: &OrderRecord) -> String {
    let message = format!("Olá! Segue o pedido {}:\n\n{}", order.number, order_summary(order));
    format!("https://wa.me/?text={}", urlencoding::encode(&message))
}

/// `mailto:` link with a pre-filled subject and body.
pub fn mailto_link(order: &OrderRecord, company: &CompanyProfile) -> String {
    let subject = format!("Pedido {} - {}", order.number, company.name);
    let body = format!("Pedido: {}\n{}", order.number, order_summary(order));
    format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}
