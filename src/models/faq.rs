//! FAQ models

use serde::{Deserialize, Serialize};

/// Single question/answer entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
}

/// FAQ category with its entries
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqCategory {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub items: Vec<FaqItem>,
}
