use serde::{Deserialize, Serialize};

use crate::domain::common::lenient;

/// Возвращённая позиция, ожидающая проверки (row of `GET /employees/verify-returns`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnedItem {
    #[serde(deserialize_with = "lenient::required_i64")]
    pub id: i64,
    #[serde(default)]
    pub equipment_name: Option<String>,
    #[serde(default)]
    pub employee_name: Option<String>,
    /// Raw timestamp as sent by the API
    #[serde(default)]
    pub returned_at: Option<String>,
}

impl ReturnedItem {
    pub fn equipment_label(&self) -> &str {
        self.equipment_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("Equipment")
    }

    pub fn employee_label(&self) -> &str {
        self.employee_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("Unknown")
    }
}
