//! Fire-and-forget notification of new orders to the automation webhook.
//!
//! Called on successful order creation only, never on edits. Delivery is
//! best effort: the order is already persisted by the time this runs, so
//! failures are logged and swallowed rather than surfaced to the user.

use crate::model::OrderRecord;

/// Automation endpoint notified with the full payload of every new order.
pub const DEFAULT_ORDER_WEBHOOK_URL: &str =
    "https://n8n-nw.nicwalsolutions.com.br/webhook-test/evo-api-nw-5511979987046";

/// POSTs `order` as JSON to `url`, blocking until the round trip completes.
pub fn notify_order_created(url: &str, order: &OrderRecord) {
    match ureq::post(url).send_json(order) {
        Ok(response) => {
            log::info!(
                "order {} delivered to webhook ({})",
                order.number,
                response.status()
            );
        }
        Err(err) => {
            log::warn!("webhook delivery failed for order {}: {err}", order.number);
        }
    }
}
