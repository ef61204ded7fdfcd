use serde::{Deserialize, Serialize};

use crate::domain::common::lenient;

/// Статус заявки на выдачу оборудования
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    #[serde(alias = "Pending", alias = "PENDING")]
    Pending,
    #[serde(alias = "Approved", alias = "APPROVED")]
    Approved,
    #[serde(alias = "Denied", alias = "DENIED", alias = "rejected")]
    Denied,
    #[serde(alias = "Returned", alias = "RETURNED")]
    Returned,
    /// Any status string this console does not know about
    #[serde(other)]
    Unknown,
}

impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Approved => "Approved",
            TransactionStatus::Denied => "Denied",
            TransactionStatus::Returned => "Returned",
            TransactionStatus::Unknown => "Unknown",
        }
    }
}

/// Заявка / выдача (row of `GET /employees/current-holders`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(deserialize_with = "lenient::required_i64")]
    pub id: i64,
    #[serde(default)]
    pub equipment_name: Option<String>,
    #[serde(default)]
    pub employee_name: Option<String>,
    /// Raw timestamp as sent by the API
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "status_or_default")]
    pub status: TransactionStatus,
}

// `null` is sent for freshly created rows
fn status_or_default<'de, D>(deserializer: D) -> Result<TransactionStatus, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<TransactionStatus>::deserialize(deserializer)?.unwrap_or_default())
}

impl Transaction {
    pub fn equipment_label(&self) -> &str {
        self.equipment_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("Equipment")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_decoding() {
        let decode = |s: &str| serde_json::from_str::<TransactionStatus>(s).unwrap();
        assert_eq!(decode(r#""pending""#), TransactionStatus::Pending);
        assert_eq!(decode(r#""Approved""#), TransactionStatus::Approved);
        assert_eq!(decode(r#""rejected""#), TransactionStatus::Denied);
        assert_eq!(decode(r#""lost""#), TransactionStatus::Unknown);
    }

    #[test]
    fn test_missing_status_is_pending() {
        let t: Transaction =
            serde_json::from_str(r#"{"id": 1, "equipment_name": "Projector"}"#).unwrap();
        assert_eq!(t.status, TransactionStatus::Pending);

        let t: Transaction = serde_json::from_str(r#"{"id": 2, "status": null}"#).unwrap();
        assert_eq!(t.status, TransactionStatus::Pending);
        assert_eq!(t.equipment_label(), "Equipment");
    }
}
