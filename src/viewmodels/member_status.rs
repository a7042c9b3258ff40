// ============================================================================
// MEMBER STATUS - Estado de pago por servicio y estado global del socio
// ============================================================================
// Funciones puras: mismo input + mismo `now` => mismo resultado.
// Regla única para todas las pantallas (check-in, listado, historial,
// dashboard): 12 días de gracia desde el inicio del servicio.
// ============================================================================

use chrono::{DateTime, Duration, Utc};

use crate::models::{Member, Semaphore, ServiceCategory, ServiceSubscription};
use crate::utils::GRACE_PERIOD_DAYS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceStatus {
    UpToDate,
    Grace,
    PastDue,
}

impl ServiceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::UpToDate => "AL DÍA",
            ServiceStatus::Grace => "GRACIA",
            ServiceStatus::PastDue => "VENCIDO",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ServiceStatus::UpToDate => "status-ok",
            ServiceStatus::Grace => "status-grace",
            ServiceStatus::PastDue => "status-past-due",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberStatus {
    ActiveFull,
    ActivePartial,
    Expired,
}

impl MemberStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MemberStatus::ActiveFull => "ACTIVO",
            MemberStatus::ActivePartial => "PARCIAL",
            MemberStatus::Expired => "VENCIDO",
        }
    }
}

/// Último instante en que un pago incompleto todavía está en gracia
pub fn grace_limit(start: DateTime<Utc>) -> DateTime<Utc> {
    start + Duration::days(GRACE_PERIOD_DAYS)
}

/// Regla base. Los bordes son inclusivos: `now == due` no está vencido y
/// `now == start + 12d` sigue en gracia.
pub fn derive_status(
    now: DateTime<Utc>,
    start: DateTime<Utc>,
    due: DateTime<Utc>,
    amount_paid: f64,
    price_total: f64,
) -> ServiceStatus {
    if now > due {
        ServiceStatus::PastDue
    } else if amount_paid >= price_total {
        ServiceStatus::UpToDate
    } else if now <= grace_limit(start) {
        ServiceStatus::Grace
    } else {
        ServiceStatus::PastDue
    }
}

/// `None` si el servicio no está contratado ("No") o le faltan fechas
pub fn service_status(sub: &ServiceSubscription, now: DateTime<Utc>) -> Option<ServiceStatus> {
    if sub.is_absent() {
        return None;
    }
    let start = sub.inicio?;
    let due = sub.vencimiento?;
    Some(derive_status(now, start, due, sub.monto_pagado, sub.precio_total))
}

/// Combina los estados de los servicios contratados. `None` si no hay ninguno.
pub fn aggregate<I>(statuses: I) -> Option<MemberStatus>
where
    I: IntoIterator<Item = ServiceStatus>,
{
    let mut any = false;
    let mut all_up_to_date = true;
    let mut all_past_due = true;
    for status in statuses {
        any = true;
        all_up_to_date &= status == ServiceStatus::UpToDate;
        all_past_due &= status == ServiceStatus::PastDue;
    }

    match (any, all_up_to_date, all_past_due) {
        (false, _, _) => None,
        (true, true, _) => Some(MemberStatus::ActiveFull),
        (true, _, true) => Some(MemberStatus::Expired),
        _ => Some(MemberStatus::ActivePartial),
    }
}

/// Estado por servicio contratado, en orden de categoría
pub fn service_statuses(member: &Member, now: DateTime<Utc>) -> Vec<(ServiceCategory, ServiceStatus)> {
    member
        .services
        .iter()
        .filter_map(|(cat, sub)| service_status(sub, now).map(|s| (*cat, s)))
        .collect()
}

pub fn member_status(member: &Member, now: DateTime<Utc>) -> Option<MemberStatus> {
    aggregate(service_statuses(member, now).into_iter().map(|(_, s)| s))
}

/// Semáforo calculado sobre una lista de socios.
/// Los socios sin servicios contratados no cuentan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrafficLight {
    pub green: u32,
    pub yellow: u32,
    pub red: u32,
}

impl TrafficLight {
    pub fn from_members(members: &[Member], now: DateTime<Utc>) -> Self {
        members
            .iter()
            .filter_map(|m| member_status(m, now))
            .fold(Self::default(), |mut light, status| {
                match status {
                    MemberStatus::ActiveFull => light.green += 1,
                    MemberStatus::ActivePartial => light.yellow += 1,
                    MemberStatus::Expired => light.red += 1,
                }
                light
            })
    }

    pub fn total(&self) -> u32 {
        self.green + self.yellow + self.red
    }

    /// Porcentajes enteros (verde, amarillo, rojo)
    pub fn percentages(&self) -> (u32, u32, u32) {
        let total = self.total();
        if total == 0 {
            return (0, 0, 0);
        }
        let pct = |n: u32| ((n as f64) * 100.0 / total as f64).round() as u32;
        (pct(self.green), pct(self.yellow), pct(self.red))
    }
}

/// Semáforo ya calculado por `/clients/stats`
impl From<&Semaphore> for TrafficLight {
    fn from(s: &Semaphore) -> Self {
        Self { green: s.verde, yellow: s.amarillo, red: s.rojo }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Modality;
    use chrono::TimeZone;
    use std::collections::BTreeMap;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap()
    }

    fn sub(modality: &str, total: f64, paid: f64, due_days: i64) -> ServiceSubscription {
        ServiceSubscription {
            modalidad: Modality::from(modality),
            precio_total: total,
            monto_pagado: paid,
            inicio: Some(start()),
            vencimiento: Some(start() + Duration::days(due_days)),
            fecha_pago: None,
        }
    }

    fn member(services: Vec<(ServiceCategory, ServiceSubscription)>) -> Member {
        Member {
            id: "m1".into(),
            full_name: "Socio".into(),
            national_id: "12345678".into(),
            services: services.into_iter().collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn due_date_boundary_is_not_past_due() {
        let s = sub("3 Días", 25_000.0, 25_000.0, 30);
        let due = s.vencimiento.unwrap();
        assert_eq!(service_status(&s, due), Some(ServiceStatus::UpToDate));
        assert_eq!(
            service_status(&s, due + Duration::seconds(1)),
            Some(ServiceStatus::PastDue)
        );
    }

    #[test]
    fn grace_limit_boundary() {
        let s = sub("3 Días", 25_000.0, 5_000.0, 30);
        let limit = grace_limit(start());
        assert_eq!(limit, start() + Duration::days(12));
        assert_eq!(service_status(&s, limit), Some(ServiceStatus::Grace));
        assert_eq!(
            service_status(&s, limit + Duration::days(1)),
            Some(ServiceStatus::PastDue)
        );
    }

    #[test]
    fn fully_paid_ignores_grace_window() {
        let s = sub("5 Días", 30_000.0, 30_000.0, 30);
        let late_in_cycle = start() + Duration::days(25);
        assert_eq!(service_status(&s, late_in_cycle), Some(ServiceStatus::UpToDate));
    }

    #[test]
    fn overpayment_counts_as_up_to_date() {
        assert_eq!(
            derive_status(start(), start(), start() + Duration::days(30), 31_000.0, 30_000.0),
            ServiceStatus::UpToDate
        );
    }

    #[test]
    fn past_due_date_wins_over_full_payment() {
        let s = sub("3 Días", 20_000.0, 20_000.0, 30);
        assert_eq!(
            service_status(&s, start() + Duration::days(31)),
            Some(ServiceStatus::PastDue)
        );
    }

    #[test]
    fn same_inputs_same_output() {
        let s = sub("3 Días", 25_000.0, 1_000.0, 30);
        let now = start() + Duration::days(5);
        assert_eq!(service_status(&s, now), service_status(&s, now));
    }

    #[test]
    fn absent_service_has_no_status() {
        assert_eq!(service_status(&sub("No", 0.0, 0.0, 30), start()), None);
    }

    #[test]
    fn missing_dates_are_not_evaluated() {
        let mut s = sub("3 Días", 25_000.0, 0.0, 30);
        s.vencimiento = None;
        assert_eq!(service_status(&s, start()), None);
    }

    #[test]
    fn all_services_absent_has_no_aggregate() {
        let m = member(vec![
            (ServiceCategory::Gym, sub("No", 0.0, 0.0, 30)),
            (ServiceCategory::Natacion, sub("No", 0.0, 0.0, 30)),
        ]);
        assert_eq!(member_status(&m, start()), None);
        assert!(service_statuses(&m, start()).is_empty());
    }

    #[test]
    fn up_to_date_plus_grace_is_partial() {
        let m = member(vec![
            (ServiceCategory::Gym, sub("3 Días", 25_000.0, 25_000.0, 30)),
            (ServiceCategory::Natacion, sub("2 Días", 30_000.0, 10_000.0, 30)),
        ]);
        let now = start() + Duration::days(3);
        assert_eq!(
            service_statuses(&m, now),
            vec![
                (ServiceCategory::Gym, ServiceStatus::UpToDate),
                (ServiceCategory::Natacion, ServiceStatus::Grace),
            ]
        );
        assert_eq!(member_status(&m, now), Some(MemberStatus::ActivePartial));
    }

    #[test]
    fn both_past_due_is_expired() {
        let m = member(vec![
            (ServiceCategory::Gym, sub("3 Días", 25_000.0, 0.0, 30)),
            (ServiceCategory::Kids, sub("3 Días", 25_000.0, 25_000.0, 30)),
        ]);
        let now = start() + Duration::days(40);
        assert_eq!(member_status(&m, now), Some(MemberStatus::Expired));
    }

    #[test]
    fn absent_services_do_not_affect_aggregate() {
        let m = member(vec![
            (ServiceCategory::Gym, sub("3 Días", 25_000.0, 25_000.0, 30)),
            (ServiceCategory::Profe, sub("No", 0.0, 0.0, 0)),
        ]);
        assert_eq!(member_status(&m, start()), Some(MemberStatus::ActiveFull));
    }

    #[test]
    fn aggregate_rules() {
        use ServiceStatus::*;
        assert_eq!(aggregate(Vec::<ServiceStatus>::new()), None);
        assert_eq!(aggregate([UpToDate, UpToDate]), Some(MemberStatus::ActiveFull));
        assert_eq!(aggregate([PastDue]), Some(MemberStatus::Expired));
        assert_eq!(aggregate([Grace]), Some(MemberStatus::ActivePartial));
        assert_eq!(aggregate([UpToDate, PastDue]), Some(MemberStatus::ActivePartial));
    }

    #[test]
    fn traffic_light_skips_members_without_services() {
        let now = start() + Duration::days(3);
        let members = vec![
            member(vec![(ServiceCategory::Gym, sub("3 Días", 25_000.0, 25_000.0, 30))]),
            member(vec![(ServiceCategory::Gym, sub("3 Días", 25_000.0, 0.0, 30))]),
            member(vec![(ServiceCategory::Gym, sub("3 Días", 25_000.0, 0.0, 1))]),
            member(vec![(ServiceCategory::Gym, sub("No", 0.0, 0.0, 30))]),
        ];
        let light = TrafficLight::from_members(&members, now);
        assert_eq!(light, TrafficLight { green: 1, yellow: 1, red: 1 });
        assert_eq!(light.percentages(), (33, 33, 33));
        assert_eq!(TrafficLight::default().percentages(), (0, 0, 0));
    }

    #[test]
    fn traffic_light_from_backend_semaphore() {
        let semaphore = Semaphore { verde: 6, amarillo: 3, rojo: 1, ..Default::default() };
        let light = TrafficLight::from(&semaphore);
        assert_eq!(light.total(), 10);
        assert_eq!(light.percentages(), (60, 30, 10));
    }
}
