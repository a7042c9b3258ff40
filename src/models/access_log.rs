use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::CHECK_IN_ACTIVE;

/// Registro de ingreso. Lo crea el backend en cada check-in; acá solo se lee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessLogEntry {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub member_name: String,
    #[serde(rename = "dni")]
    pub national_id: String,
    #[serde(rename = "fecha")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "statusAlIngresar")]
    pub status_at_entry: String,
    /// Foto de los servicios al momento del ingreso (formato libre)
    #[serde(rename = "servicios", default)]
    pub service_snapshot: Value,
}

impl AccessLogEntry {
    pub fn was_active(&self) -> bool {
        self.status_at_entry == CHECK_IN_ACTIVE
    }
}
