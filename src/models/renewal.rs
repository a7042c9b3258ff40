use serde::{Deserialize, Serialize};

use crate::models::member::{Member, ServiceCategory};

/// Body de `PUT /clients/renew/:id`. El backend recalcula inicio y vencimiento.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewalRequest {
    pub servicio: ServiceCategory,
    pub precio_total: f64,
    pub monto_pagado: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenewalResponse {
    pub client: Member,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_backend_field_names() {
        let req = RenewalRequest {
            servicio: ServiceCategory::Natacion,
            precio_total: 30_000.0,
            monto_pagado: 15_000.0,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["servicio"], "natacion");
        assert_eq!(json["precioTotal"], 30_000.0);
        assert_eq!(json["montoPagado"], 15_000.0);
    }
}
