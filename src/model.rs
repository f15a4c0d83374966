//! Data structures describing the backoffice records.
//!
//! The types in this module form a serialization-friendly model that mirrors
//! the JSON resources exposed by the REST backend. Field names are mapped to
//! the backend's Portuguese wire names through serde attributes so the values
//! can be fetched, persisted, or handed to the automation webhook without a
//! translation layer.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle states of an order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "Aguardando")]
    Awaiting,
    #[serde(rename = "Em Produção")]
    InProduction,
    #[serde(rename = "Concluído")]
    Completed,
    #[serde(rename = "Cancelado")]
    Cancelled,
}

impl OrderStatus {
    /// Display label as shown on screens and printed documents.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Awaiting => "Aguardando",
            OrderStatus::InProduction => "Em Produção",
            OrderStatus::Completed => "Concluído",
            OrderStatus::Cancelled => "Cancelado",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Registration states of a client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientStatus {
    #[default]
    #[serde(rename = "Ativo")]
    Active,
    #[serde(rename = "Inativo")]
    Inactive,
}

impl ClientStatus {
    pub fn label(self) -> &'static str {
        match self {
            ClientStatus::Active => "Ativo",
            ClientStatus::Inactive => "Inativo",
        }
    }

    /// The state written back by the dedicated status-toggle update.
    pub fn toggled(self) -> Self {
        match self {
            ClientStatus::Active => ClientStatus::Inactive,
            ClientStatus::Inactive => ClientStatus::Active,
        }
    }
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Price-per-area entry of the material rate table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialRate {
    #[serde(rename = "nome")]
    pub name: String,
    /// Currency per square meter.
    #[serde(rename = "preco")]
    pub unit_price: f64,
}

impl MaterialRate {
    pub fn new(name: impl Into<String>, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            unit_price,
        }
    }
}

/// Partial order form state, mutated field by field as the user types.
///
/// Every pricing input is optional so the value display can be driven on each
/// keystroke; [`crate::pricing::order_value`] treats incomplete drafts as
/// worth zero rather than as errors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderDraft {
    pub material: Option<String>,
    pub width_mm: Option<f64>,
    pub length_mm: Option<f64>,
    pub quantity: Option<u32>,
    pub notes: Option<String>,
}

/// Persisted order as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: i64,
    /// Backend-assigned display code, distinct from `id`.
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "cliente_id")]
    pub client_id: i64,
    #[serde(rename = "cliente_nome")]
    pub client_name: String,
    pub material: String,
    #[serde(rename = "espessura")]
    pub thickness: String,
    #[serde(rename = "largura")]
    pub width_mm: f64,
    #[serde(rename = "comprimento")]
    pub length_mm: f64,
    #[serde(rename = "quantidade")]
    pub quantity: u32,
    #[serde(rename = "observacoes", default)]
    pub notes: Option<String>,
    /// Total value frozen at submit time, as a two-decimal string.
    #[serde(rename = "valor")]
    pub value: String,
    pub status: OrderStatus,
    #[serde(rename = "data")]
    pub date: NaiveDate,
}

impl OrderRecord {
    /// Numeric reading of the frozen [`value`](Self::value) string.
    ///
    /// Unparseable values read as zero; this is a display concern, the
    /// persisted string stays untouched.
    pub fn value_amount(&self) -> f64 {
        self.value.parse().unwrap_or(0.0)
    }
}

/// Persisted client as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "contato")]
    pub contact: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,
    #[serde(rename = "endereco", default)]
    pub address: Option<String>,
    #[serde(default)]
    pub cnpj: Option<String>,
    #[serde(rename = "observacoes", default)]
    pub notes: Option<String>,
    pub status: ClientStatus,
    #[serde(rename = "data_cadastro", default)]
    pub registered_on: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_status_round_trips_wire_labels() {
        let json = serde_json::to_string(&OrderStatus::InProduction).unwrap();
        assert_eq!(json, "\"Em Produção\"");
        let back: OrderStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, OrderStatus::InProduction);
    }

    #[test]
    fn client_status_toggle_flips_both_ways() {
        assert_eq!(ClientStatus::Active.toggled(), ClientStatus::Inactive);
        assert_eq!(ClientStatus::Inactive.toggled(), ClientStatus::Active);
    }

    #[test]
    fn order_record_reads_backend_field_names() {
        let json = r#"{
            "id": 7,
            "numero": "0042",
            "cliente_id": 3,
            "cliente_nome": "Metalúrgica Silva",
            "material": "Aço Carbono",
            "espessura": "2mm",
            "largura": 1000.0,
            "comprimento": 2000.0,
            "quantidade": 5,
            "observacoes": "Entrega urgente",
            "valor": "250.00",
            "status": "Aguardando",
            "data": "2024-03-18"
        }"#;
        let order: OrderRecord = serde_json::from_str(json).unwrap();
        assert_eq!(order.number, "0042");
        assert_eq!(order.quantity, 5);
        assert_eq!(order.value_amount(), 250.0);
        assert_eq!(order.date, NaiveDate::from_ymd_opt(2024, 3, 18).unwrap());
    }

    #[test]
    fn client_record_tolerates_missing_optionals() {
        let json = r#"{
            "id": 1,
            "nome": "Oficina Central",
            "contato": "Paulo",
            "status": "Ativo"
        }"#;
        let client: ClientRecord = serde_json::from_str(json).unwrap();
        assert_eq!(client.phone, None);
        assert_eq!(client.registered_on, None);
    }
}
