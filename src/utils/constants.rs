// ============================================================================
// CONSTANTES COMPARTIDAS
// ============================================================================

/// Claves de localStorage. `token` y `admin` se escriben y se borran juntas.
pub const STORAGE_KEY_TOKEN: &str = "token";
pub const STORAGE_KEY_ADMIN: &str = "admin";

/// Header con el que el backend espera el token de sesión
pub const AUTH_HEADER: &str = "x-auth-token";

/// Modalidad que marca un servicio como no contratado
pub const MODALITY_NONE: &str = "No";

/// Días de gracia desde el inicio del servicio para completar el pago
pub const GRACE_PERIOD_DAYS: i64 = 12;

/// Antigüedad mínima de los registros que purga `/clients/history/clean`
pub const HISTORY_RETENTION_DAYS: i64 = 7;

/// Largo fijo del DNI
pub const NATIONAL_ID_LEN: usize = 8;

/// Estado que devuelve el kiosco cuando el socio puede ingresar
pub const CHECK_IN_ACTIVE: &str = "ACTIVO";

/// Milisegundos que un error queda visible en el kiosco
pub const CHECK_IN_ERROR_MS: u32 = 3_000;

/// Milisegundos antes de ocultar una notificación transitoria
pub const NOTICE_TIMEOUT_MS: u32 = 4_000;
