// ============================================================================
// MEMBER FORM VIEWMODEL - Validaciones de alta/edición y renovación
// ============================================================================

use crate::error::ValidationError;
use crate::models::{Member, MemberDraft, RenewalRequest, ServiceCategory};
use crate::utils::NATIONAL_ID_LEN;

/// DNI: exactamente 8 dígitos ASCII
pub fn validate_national_id(dni: &str) -> Result<(), ValidationError> {
    if dni.len() == NATIONAL_ID_LEN && dni.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidNationalId)
    }
}

fn validate_amount(value: f64, field: &'static str) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidAmount(field))
    }
}

/// Normaliza y valida el formulario antes de enviarlo
pub fn validate_draft(draft: &MemberDraft) -> Result<MemberDraft, ValidationError> {
    let mut clean = draft.clone();
    clean.nombre = draft.nombre.trim().to_string();
    clean.dni = draft.dni.trim().to_string();

    if clean.nombre.is_empty() {
        return Err(ValidationError::MissingField("nombre"));
    }
    validate_national_id(&clean.dni)?;
    if !clean.has_any_service() {
        return Err(ValidationError::NoServiceSelected);
    }
    for service in clean.servicios.values().filter(|s| !s.modalidad.is_absent()) {
        validate_amount(service.precio_total, "precio total")?;
        validate_amount(service.monto_pagado, "monto pagado")?;
    }
    Ok(clean)
}

/// Servicios del socio que se pueden renovar
pub fn renewable_services(member: &Member) -> Vec<ServiceCategory> {
    member.active_services().map(|(cat, _)| cat).collect()
}

/// Deuda del período actual de un servicio contratado, si queda algo por pagar
pub fn outstanding_balance(member: &Member, category: ServiceCategory) -> Option<f64> {
    member
        .services
        .get(&category)
        .filter(|sub| !sub.is_absent())
        .map(|sub| sub.outstanding())
        .filter(|debt| *debt > 0.0)
}

/// La renovación solo aplica a servicios contratados y con montos válidos
pub fn validate_renewal(member: &Member, request: &RenewalRequest) -> Result<(), ValidationError> {
    if !member.has_service(request.servicio) {
        return Err(ValidationError::ServiceNotActive);
    }
    if !(request.precio_total.is_finite() && request.precio_total > 0.0) {
        return Err(ValidationError::InvalidAmount("precio total"));
    }
    validate_amount(request.monto_pagado, "monto pagado")
}

/// Parsea un input numérico del formulario; vacío o no numérico => None
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Modality, ServiceSubscription};

    fn valid_draft() -> MemberDraft {
        let mut draft = MemberDraft::empty();
        draft.nombre = "  Ana Pérez ".into();
        draft.dni = "30111222".into();
        draft.set_modality(ServiceCategory::Gym, "3 Días");
        draft
    }

    #[test]
    fn national_id_must_be_eight_digits() {
        assert!(validate_national_id("30111222").is_ok());
        assert_eq!(validate_national_id("3011122"), Err(ValidationError::InvalidNationalId));
        assert_eq!(validate_national_id("301112223"), Err(ValidationError::InvalidNationalId));
        assert_eq!(validate_national_id("3011122a"), Err(ValidationError::InvalidNationalId));
        assert_eq!(validate_national_id("３０１１１２２２"), Err(ValidationError::InvalidNationalId));
    }

    #[test]
    fn valid_draft_is_trimmed() {
        let clean = validate_draft(&valid_draft()).unwrap();
        assert_eq!(clean.nombre, "Ana Pérez");
    }

    #[test]
    fn draft_requires_name_dni_and_a_service() {
        let mut draft = valid_draft();
        draft.nombre = " ".into();
        assert_eq!(validate_draft(&draft), Err(ValidationError::MissingField("nombre")));

        let mut draft = valid_draft();
        draft.dni = "123".into();
        assert_eq!(validate_draft(&draft), Err(ValidationError::InvalidNationalId));

        let mut draft = valid_draft();
        draft.set_modality(ServiceCategory::Gym, "No");
        assert_eq!(validate_draft(&draft), Err(ValidationError::NoServiceSelected));
    }

    #[test]
    fn negative_amount_is_rejected() {
        let mut draft = valid_draft();
        if let Some(gym) = draft.servicios.get_mut(&ServiceCategory::Gym) {
            gym.monto_pagado = -1.0;
        }
        assert_eq!(
            validate_draft(&draft),
            Err(ValidationError::InvalidAmount("monto pagado"))
        );
    }

    fn member_with_gym() -> Member {
        Member {
            id: "m1".into(),
            full_name: "Ana".into(),
            national_id: "30111222".into(),
            services: [
                (
                    ServiceCategory::Gym,
                    ServiceSubscription {
                        modalidad: Modality::from("3 Días"),
                        precio_total: 25_000.0,
                        ..Default::default()
                    },
                ),
                (ServiceCategory::Natacion, ServiceSubscription::default()),
            ]
            .into_iter()
            .collect(),
        }
    }

    #[test]
    fn renewal_only_for_contracted_services() {
        let member = member_with_gym();
        assert_eq!(renewable_services(&member), vec![ServiceCategory::Gym]);

        let ok = RenewalRequest {
            servicio: ServiceCategory::Gym,
            precio_total: 25_000.0,
            monto_pagado: 0.0,
        };
        assert!(validate_renewal(&member, &ok).is_ok());

        let swim = RenewalRequest { servicio: ServiceCategory::Natacion, ..ok.clone() };
        assert_eq!(validate_renewal(&member, &swim), Err(ValidationError::ServiceNotActive));

        let free = RenewalRequest { precio_total: 0.0, ..ok };
        assert_eq!(
            validate_renewal(&member, &free),
            Err(ValidationError::InvalidAmount("precio total"))
        );
    }

    #[test]
    fn outstanding_balance_only_for_contracted_debt() {
        let mut member = member_with_gym();
        assert_eq!(outstanding_balance(&member, ServiceCategory::Gym), Some(25_000.0));
        assert_eq!(outstanding_balance(&member, ServiceCategory::Natacion), None);
        assert_eq!(outstanding_balance(&member, ServiceCategory::Kids), None);

        if let Some(gym) = member.services.get_mut(&ServiceCategory::Gym) {
            gym.monto_pagado = 25_000.0;
        }
        assert_eq!(outstanding_balance(&member, ServiceCategory::Gym), None);
    }

    #[test]
    fn parse_amount_accepts_plain_numbers() {
        assert_eq!(parse_amount(" 25000 "), Some(25_000.0));
        assert_eq!(parse_amount("12.5"), Some(12.5));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
    }
}
