use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::hash::Hash;

use super::lenient;

/// Трейт для типов идентификаторов записей
pub trait RecordId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + fmt::Debug
{
    /// Преобразовать ID в строку
    fn as_string(&self) -> String;

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

macro_rules! numeric_record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl RecordId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                s.trim()
                    .parse::<i64>()
                    .map(Self)
                    .map_err(|e| format!("Invalid id '{}': {}", s, e))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        // The API sends ids both as JSON numbers and as numeric strings.
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                lenient::required_i64(deserializer).map(Self)
            }
        }
    };
}

numeric_record_id!(
    /// Идентификатор единицы оборудования (identity of a cart line)
    EquipmentId
);

numeric_record_id!(
    /// Идентификатор категории оборудования
    CategoryId
);
