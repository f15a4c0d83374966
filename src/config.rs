//! Company identity injected into every generated document.
//!
//! The contact block printed at the top of order slips and reports is not a
//! hidden constant: composers receive a [`CompanyProfile`] so alternate
//! identities (or test fixtures) can be swapped in without touching layout
//! code. [`CompanyProfile::default`] carries the production values.

use serde::{Deserialize, Serialize};

/// Contact block and fixed phrases printed on generated documents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyProfile {
    /// Trading name shown as the document masthead.
    pub name: String,
    /// One-line description of the business.
    pub tagline: String,
    pub address: String,
    pub phone_line: String,
    pub email: String,
    /// Italic line printed near the bottom margin of order slips.
    pub disclaimer: String,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            name: "GBL CORTE E DOBRA".to_string(),
            tagline: "Corte e Dobra de Chapas Metálicas".to_string(),
            address: "Rua John Speers nº 1370 - Pq. do Carmo - São Paulo/SP".to_string(),
            phone_line: "Tel: (11) 2521-2233 | (11) 94884-8301".to_string(),
            email: "contato@gblcortedobra.com.br".to_string(),
            disclaimer: "Este documento foi gerado automaticamente pelo sistema GBL."
                .to_string(),
        }
    }
}
