// ============================================================================
// MEMBER LIST VIEWMODEL - Búsqueda, filtros y paginación del listado
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Member, ServiceCategory};
use crate::viewmodels::member_status::{service_statuses, ServiceStatus};

/// Filtro del listado. Los valores de texto son los que usan los links del
/// dashboard (`?filter=Vencidos`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberFilter {
    #[default]
    All,
    /// Algún servicio al día
    UpToDate,
    /// Algún servicio en gracia
    Partial,
    /// Algún servicio vencido
    PastDue,
    Service(ServiceCategory),
}

impl MemberFilter {
    pub const ALL: [MemberFilter; 8] = [
        MemberFilter::All,
        MemberFilter::UpToDate,
        MemberFilter::Partial,
        MemberFilter::PastDue,
        MemberFilter::Service(ServiceCategory::Gym),
        MemberFilter::Service(ServiceCategory::Natacion),
        MemberFilter::Service(ServiceCategory::Kids),
        MemberFilter::Service(ServiceCategory::Profe),
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MemberFilter::All => "Todos",
            MemberFilter::UpToDate => "Activos",
            MemberFilter::Partial => "Parciales",
            MemberFilter::PastDue => "Vencidos",
            MemberFilter::Service(ServiceCategory::Gym) => "Gym",
            MemberFilter::Service(ServiceCategory::Natacion) => "Natacion",
            MemberFilter::Service(ServiceCategory::Kids) => "Kids",
            MemberFilter::Service(ServiceCategory::Profe) => "Profe",
        }
    }

    /// Claves desconocidas caen en `All`
    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(key.trim()))
            .unwrap_or_default()
    }

    pub fn title(&self) -> &'static str {
        match self {
            MemberFilter::PastDue => "Socios con Deuda / Vencidos",
            _ => "Gestión de Socios",
        }
    }

    pub fn matches(&self, member: &Member, now: DateTime<Utc>) -> bool {
        let wanted = match self {
            MemberFilter::All => return true,
            MemberFilter::Service(cat) => return member.has_service(*cat),
            MemberFilter::UpToDate => ServiceStatus::UpToDate,
            MemberFilter::Partial => ServiceStatus::Grace,
            MemberFilter::PastDue => ServiceStatus::PastDue,
        };
        service_statuses(member, now).iter().any(|(_, s)| *s == wanted)
    }
}

/// Query de `/admin/clientes?filter=...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MemberListQuery {
    #[serde(default)]
    pub filter: Option<String>,
}

impl MemberListQuery {
    pub fn for_filter(filter: MemberFilter) -> Self {
        Self { filter: Some(filter.key().to_string()) }
    }

    pub fn filter(&self) -> MemberFilter {
        self.filter.as_deref().map(MemberFilter::from_key).unwrap_or_default()
    }
}

/// Nombre (sin distinguir mayúsculas) o DNI que contenga el texto
pub fn matches_search(member: &Member, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    member.full_name.to_lowercase().contains(&term.to_lowercase())
        || member.national_id.contains(term)
}

pub fn filter_members<'a>(
    members: &'a [Member],
    term: &str,
    filter: MemberFilter,
    now: DateTime<Utc>,
) -> Vec<&'a Member> {
    members
        .iter()
        .filter(|m| matches_search(m, term) && filter.matches(m, now))
        .collect()
}

/// Página de resultados. `page` empieza en 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// Posición (1-based) del primer y último elemento mostrado
    pub first_index: usize,
    pub last_index: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Corta la página pedida; páginas fuera de rango se ajustan al borde.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let page = page.clamp(1, total_pages.max(1));

    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total_items);
    let slice = if start < end { items[start..end].to_vec() } else { Vec::new() };

    Page {
        first_index: if slice.is_empty() { 0 } else { start + 1 },
        last_index: end,
        items: slice,
        page,
        total_pages,
        total_items,
    }
}

/// Reemplaza la copia local por la que devolvió el backend (mismo `id`)
pub fn replace_member(members: &mut [Member], updated: Member) -> bool {
    match members.iter_mut().find(|m| m.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

pub fn remove_member(members: &mut Vec<Member>, id: &str) {
    members.retain(|m| m.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Modality, ServiceSubscription};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 10, 12, 0, 0).unwrap()
    }

    fn member(id: &str, name: &str, dni: &str, services: &[(ServiceCategory, f64, i64)]) -> Member {
        // (categoría, pagado sobre 100, días desde el inicio hasta hoy)
        let services = services
            .iter()
            .map(|(cat, paid, started_days_ago)| {
                let start = now() - Duration::days(*started_days_ago);
                (
                    *cat,
                    ServiceSubscription {
                        modalidad: Modality::from("3 Días"),
                        precio_total: 100.0,
                        monto_pagado: *paid,
                        inicio: Some(start),
                        vencimiento: Some(start + Duration::days(30)),
                        fecha_pago: None,
                    },
                )
            })
            .collect();
        Member {
            id: id.into(),
            full_name: name.into(),
            national_id: dni.into(),
            services,
        }
    }

    fn sample() -> Vec<Member> {
        vec![
            member("1", "Ana Pérez", "30111222", &[(ServiceCategory::Gym, 100.0, 5)]),
            member("2", "Bruno Díaz", "28999000", &[(ServiceCategory::Natacion, 20.0, 3)]),
            member("3", "Carla Ruiz", "40123123", &[(ServiceCategory::Gym, 0.0, 40)]),
            member("4", "Dario Sosa", "35123000", &[]),
        ]
    }

    fn ids(list: &[&Member]) -> Vec<String> {
        list.iter().map(|m| m.id.clone()).collect()
    }

    #[test]
    fn search_by_name_ignores_case_and_by_dni_substring() {
        let members = sample();
        assert_eq!(ids(&filter_members(&members, "ana", MemberFilter::All, now())), vec!["1"]);
        assert_eq!(ids(&filter_members(&members, "123", MemberFilter::All, now())), vec!["3", "4"]);
        assert_eq!(filter_members(&members, "  ", MemberFilter::All, now()).len(), 4);
    }

    #[test]
    fn status_filters_use_derived_status() {
        let members = sample();
        assert_eq!(ids(&filter_members(&members, "", MemberFilter::UpToDate, now())), vec!["1"]);
        assert_eq!(ids(&filter_members(&members, "", MemberFilter::Partial, now())), vec!["2"]);
        assert_eq!(ids(&filter_members(&members, "", MemberFilter::PastDue, now())), vec!["3"]);
    }

    #[test]
    fn service_filter_checks_contracted_category() {
        let members = sample();
        let gym = MemberFilter::Service(ServiceCategory::Gym);
        assert_eq!(ids(&filter_members(&members, "", gym, now())), vec!["1", "3"]);
    }

    #[test]
    fn filter_keys_roundtrip_and_fallback() {
        for f in MemberFilter::ALL {
            assert_eq!(MemberFilter::from_key(f.key()), f);
        }
        assert_eq!(MemberFilter::from_key("vencidos"), MemberFilter::PastDue);
        assert_eq!(MemberFilter::from_key("otra cosa"), MemberFilter::All);
        assert_eq!(MemberListQuery::default().filter(), MemberFilter::All);
        assert_eq!(
            MemberListQuery::for_filter(MemberFilter::Partial).filter(),
            MemberFilter::Partial
        );
    }

    #[test]
    fn pagination_bounds() {
        let items: Vec<u32> = (1..=23).collect();

        let first = paginate(&items, 1, 10);
        assert_eq!(first.items, (1..=10).collect::<Vec<_>>());
        assert_eq!(first.total_pages, 3);
        assert!(!first.has_previous() && first.has_next());

        let last = paginate(&items, 3, 10);
        assert_eq!(last.items, vec![21, 22, 23]);
        assert_eq!((last.first_index, last.last_index), (21, 23));
        assert!(!last.has_next());

        let clamped = paginate(&items, 99, 10);
        assert_eq!(clamped.page, 3);
    }

    #[test]
    fn empty_list_paginates_to_single_empty_page() {
        let page = paginate::<u32>(&[], 1, 10);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
        assert_eq!(page.first_index, 0);
    }

    #[test]
    fn replace_uses_server_copy() {
        let mut members = sample();
        let mut renewed = members[2].clone();
        renewed.full_name = "Carla Ruiz (renovada)".into();

        assert!(replace_member(&mut members, renewed.clone()));
        assert_eq!(members[2], renewed);

        let stranger = member("99", "X", "00000000", &[]);
        assert!(!replace_member(&mut members, stranger));
        assert_eq!(members.len(), 4);
    }

    #[test]
    fn remove_drops_by_id() {
        let mut members = sample();
        remove_member(&mut members, "2");
        assert_eq!(members.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(), vec!["1", "3", "4"]);
    }
}
