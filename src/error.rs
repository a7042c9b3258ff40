// ============================================================================
// ERRORES DE LA APP
// ============================================================================

use serde::Deserialize;
use thiserror::Error;

/// Fallas de validación de formularios (se muestran en línea, no se envía nada)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("El campo {0} es obligatorio")]
    MissingField(&'static str),

    #[error("El DNI debe tener exactamente 8 dígitos")]
    InvalidNationalId,

    #[error("Selecciona al menos un servicio")]
    NoServiceSelected,

    #[error("Monto inválido en {0}")]
    InvalidAmount(&'static str),

    #[error("El servicio elegido no está activo para este socio")]
    ServiceNotActive,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Credenciales incorrectas, token vencido o ausente
    #[error("No autorizado: {0}")]
    Unauthorized(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Respuesta no-2xx del backend
    #[error("{message}")]
    Remote { status: u16, message: String },

    #[error("Error de red: {0}")]
    Network(String),

    #[error("Respuesta inválida: {0}")]
    Parse(String),

    #[error("Error de almacenamiento: {0}")]
    Storage(String),
}

/// Cuerpo de error del backend: `{ "msg": "..." }`
#[derive(Deserialize)]
struct RemoteErrorBody {
    msg: Option<String>,
}

impl AppError {
    /// Construye el error a partir del status y el cuerpo crudo de la respuesta
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<RemoteErrorBody>(body)
            .ok()
            .and_then(|b| b.msg)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Error del servidor (HTTP {})", status));

        match status {
            401 | 403 => AppError::Unauthorized(message),
            _ => AppError::Remote { status, message },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Unauthorized(_))
    }

    /// Texto para mostrar al usuario
    pub fn user_message(&self) -> String {
        match self {
            AppError::Unauthorized(msg) | AppError::Remote { message: msg, .. } => msg.clone(),
            other => other.to_string(),
        }
    }
}
