use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::member::is_absent_modality;
use crate::utils::CHECK_IN_ACTIVE;

/// Respuesta de `GET /clients/check/:dni`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInResult {
    pub status: String,
    pub nombre: String,
    /// categoría -> modalidad ("No" si no lo tiene)
    #[serde(default)]
    pub servicios: BTreeMap<String, String>,
    #[serde(default)]
    pub vence: Option<DateTime<Utc>>,
}

impl CheckInResult {
    pub fn is_active(&self) -> bool {
        self.status == CHECK_IN_ACTIVE
    }

    /// Servicios contratados, en el orden del mapa
    pub fn active_services(&self) -> impl Iterator<Item = (&str, &str)> {
        self.servicios
            .iter()
            .filter(|(_, modality)| !is_absent_modality(modality))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
