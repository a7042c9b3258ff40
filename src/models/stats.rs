use serde::{Deserialize, Serialize};

/// Semáforo de cuotas: verde = al día, amarillo = parcial, rojo = vencido
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Semaphore {
    pub verde: u32,
    pub amarillo: u32,
    pub rojo: u32,
    pub p_verde: f64,
    pub p_amarillo: f64,
    pub p_rojo: f64,
}

/// Respuesta de `GET /clients/stats`. Campos ausentes valen 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total: u32,
    pub activos: u32,
    pub activos_gym: u32,
    pub activos_natacion: u32,
    pub activos_kids: u32,
    pub activos_profe: u32,
    pub cuotas_parciales: u32,
    pub total_vencidos: u32,
    pub ingresos_hoy: u32,
    pub monto_pendiente: f64,
    pub semaforo: Semaphore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_payload_defaults_to_zero() {
        let json = r#"{ "total": 42, "activosGym": 30, "semaforo": { "verde": 20, "pVerde": 47.6 } }"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total, 42);
        assert_eq!(stats.activos_gym, 30);
        assert_eq!(stats.total_vencidos, 0);
        assert_eq!(stats.semaforo.verde, 20);
        assert_eq!(stats.semaforo.p_rojo, 0.0);
    }
}
