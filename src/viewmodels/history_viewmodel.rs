// ============================================================================
// HISTORY VIEWMODEL - Filtro del historial de accesos
// ============================================================================

use chrono::{DateTime, Duration, Utc};

use crate::models::AccessLogEntry;
use crate::utils::HISTORY_RETENTION_DAYS;

pub fn filter_by_national_id<'a>(entries: &'a [AccessLogEntry], dni: &str) -> Vec<&'a AccessLogEntry> {
    let dni = dni.trim();
    entries.iter().filter(|e| e.national_id.contains(dni)).collect()
}

/// Registros que el purge del backend va a borrar (más viejos que 7 días).
/// Solo informativo para el diálogo de confirmación.
pub fn purgeable_count(entries: &[AccessLogEntry], now: DateTime<Utc>) -> usize {
    let cutoff = now - Duration::days(HISTORY_RETENTION_DAYS);
    entries.iter().filter(|e| e.timestamp < cutoff).count()
}
