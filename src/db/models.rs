use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerAccount {
    pub id_customer: i32,
    pub document_id: String, // CPF or CNPJ
    pub name: String,
    pub active: bool,
    pub total_value: f64,
}

/// Inclusive customer id range plus a strict lower bound on the balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceFilter {
    pub min_customer_id: i32,
    pub max_customer_id: i32,
    pub min_total_value: f64,
}

impl Default for BalanceFilter {
    fn default() -> Self {
        Self::from(&ReportConfig::default())
    }
}

impl From<&ReportConfig> for BalanceFilter {
    fn from(value: &ReportConfig) -> Self {
        Self {
            min_customer_id: value.min_customer_id,
            max_customer_id: value.max_customer_id,
            min_total_value: value.min_total_value,
        }
    }
}
