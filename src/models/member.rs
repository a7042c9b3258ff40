use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::MODALITY_NONE;

/// Categorías de servicio del gimnasio (nombres del backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Gym,
    Natacion,
    Kids,
    Profe,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 4] = [
        ServiceCategory::Gym,
        ServiceCategory::Natacion,
        ServiceCategory::Kids,
        ServiceCategory::Profe,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ServiceCategory::Gym => "gym",
            ServiceCategory::Natacion => "natacion",
            ServiceCategory::Kids => "kids",
            ServiceCategory::Profe => "profe",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::Gym => "Gimnasio",
            ServiceCategory::Natacion => "Natación",
            ServiceCategory::Kids => "Kids",
            ServiceCategory::Profe => "Profe",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Modalidades ofrecidas, "No" primero
    pub fn modality_options(&self) -> &'static [&'static str] {
        match self {
            ServiceCategory::Gym => &[MODALITY_NONE, "3 Días", "5 Días"],
            ServiceCategory::Natacion => &[MODALITY_NONE, "2 Días", "3 Días"],
            ServiceCategory::Kids => &[MODALITY_NONE, "3 Días"],
            ServiceCategory::Profe => &[MODALITY_NONE, "3 Días"],
        }
    }

    /// Precio de lista de una modalidad. Modalidades desconocidas valen 0.
    pub fn base_price(&self, modality: &str) -> f64 {
        match (self, modality) {
            (ServiceCategory::Gym, "3 Días") => 25_000.0,
            (ServiceCategory::Gym, "5 Días") => 30_000.0,
            (ServiceCategory::Natacion, "2 Días") => 30_000.0,
            (ServiceCategory::Natacion, "3 Días") => 30_000.0,
            (ServiceCategory::Kids, "3 Días") => 25_000.0,
            (ServiceCategory::Profe, "3 Días") => 20_000.0,
            _ => 0.0,
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Modalidad del plan ("No", "3 Días", ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Modality(pub String);

impl Modality {
    pub fn none() -> Self {
        Modality(MODALITY_NONE.to_string())
    }

    pub fn is_absent(&self) -> bool {
        is_absent_modality(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// "No" (o vacío) = servicio no contratado
pub fn is_absent_modality(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == MODALITY_NONE
}

impl Default for Modality {
    fn default() -> Self {
        Self::none()
    }
}

impl From<&str> for Modality {
    fn from(value: &str) -> Self {
        Modality(value.to_string())
    }
}

/// `null` o ausente se lee como 0
fn amount_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

fn modality_or_none<'de, D>(deserializer: D) -> Result<Modality, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Modality>::deserialize(deserializer)?.unwrap_or_default())
}

/// Lee `servicios` ignorando claves que no son categorías conocidas
/// (subdocumento `_id`, planes nuevos) y servicios en `null`.
fn known_services<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<ServiceCategory, ServiceSubscription>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ServicesVisitor;

    impl<'de> Visitor<'de> for ServicesVisitor {
        type Value = BTreeMap<ServiceCategory, ServiceSubscription>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of services or null")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut services = BTreeMap::new();
            while let Some(key) = map.next_key::<String>()? {
                match ServiceCategory::from_key(&key) {
                    Some(category) => {
                        if let Some(sub) = map.next_value::<Option<ServiceSubscription>>()? {
                            services.insert(category, sub);
                        }
                    }
                    None => {
                        log::debug!("🔍 [MEMBER] Servicio desconocido ignorado: {}", key);
                        map.next_value::<IgnoredAny>()?;
                    }
                }
            }
            Ok(services)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(BTreeMap::new())
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(BTreeMap::new())
        }
    }

    deserializer.deserialize_any(ServicesVisitor)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSubscription {
    #[serde(default, deserialize_with = "modality_or_none")]
    pub modalidad: Modality,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub precio_total: f64,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub monto_pagado: f64,
    #[serde(default)]
    pub inicio: Option<DateTime<Utc>>,
    #[serde(default)]
    pub vencimiento: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fecha_pago: Option<DateTime<Utc>>,
}

impl ServiceSubscription {
    pub fn is_absent(&self) -> bool {
        self.modalidad.is_absent()
    }

    pub fn outstanding(&self) -> f64 {
        (self.precio_total - self.monto_pagado).max(0.0)
    }
}

/// Socio. El backend es la fuente de verdad; esto es una copia local.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub full_name: String,
    #[serde(rename = "dni")]
    pub national_id: String,
    #[serde(rename = "servicios", default, deserialize_with = "known_services")]
    pub services: BTreeMap<ServiceCategory, ServiceSubscription>,
}

impl Member {
    /// Servicios contratados (modalidad distinta de "No")
    pub fn active_services(&self) -> impl Iterator<Item = (ServiceCategory, &ServiceSubscription)> {
        self.services
            .iter()
            .filter(|(_, sub)| !sub.is_absent())
            .map(|(cat, sub)| (*cat, sub))
    }

    pub fn has_service(&self, category: ServiceCategory) -> bool {
        self.services
            .get(&category)
            .map(|sub| !sub.is_absent())
            .unwrap_or(false)
    }
}

/// Datos editables de un servicio en el formulario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDraft {
    pub modalidad: Modality,
    pub precio_total: f64,
    pub monto_pagado: f64,
}

/// Body de `POST /clients` y `PUT /clients/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDraft {
    pub nombre: String,
    pub dni: String,
    pub servicios: BTreeMap<ServiceCategory, ServiceDraft>,
}

impl MemberDraft {
    /// Formulario vacío: las cuatro categorías en "No"
    pub fn empty() -> Self {
        Self {
            nombre: String::new(),
            dni: String::new(),
            servicios: ServiceCategory::ALL
                .into_iter()
                .map(|cat| (cat, ServiceDraft::default()))
                .collect(),
        }
    }

    pub fn from_member(member: &Member) -> Self {
        let mut draft = Self::empty();
        draft.nombre = member.full_name.clone();
        draft.dni = member.national_id.clone();
        for (cat, sub) in &member.services {
            draft.servicios.insert(
                *cat,
                ServiceDraft {
                    modalidad: sub.modalidad.clone(),
                    precio_total: sub.precio_total,
                    monto_pagado: sub.monto_pagado,
                },
            );
        }
        draft
    }

    /// Cambia la modalidad y aplica el precio de lista (editable después)
    pub fn set_modality(&mut self, category: ServiceCategory, modality: &str) {
        let entry = self.servicios.entry(category).or_default();
        entry.modalidad = Modality::from(modality);
        entry.precio_total = category.base_price(modality);
    }

    pub fn has_any_service(&self) -> bool {
        self.servicios.values().any(|s| !s.modalidad.is_absent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMBER_JSON: &str = r#"{
        "_id": "6650a1",
        "nombre": "Lucía Gómez",
        "dni": "30123456",
        "servicios": {
            "gym": {
                "modalidad": "3 Días",
                "precioTotal": 25000,
                "montoPagado": 10000,
                "inicio": "2025-03-01T10:00:00.000Z",
                "vencimiento": "2025-03-31T10:00:00.000Z",
                "fechaPago": "2025-03-01T10:05:00.000Z"
            },
            "natacion": { "modalidad": "No", "precioTotal": 0, "montoPagado": 0 },
            "kids": { "modalidad": "No" },
            "profe": { "modalidad": "No" }
        }
    }"#;

    #[test]
    fn member_deserializes_backend_shape() {
        let member: Member = serde_json::from_str(MEMBER_JSON).unwrap();
        assert_eq!(member.full_name, "Lucía Gómez");
        assert_eq!(member.services.len(), 4);

        let gym = &member.services[&ServiceCategory::Gym];
        assert_eq!(gym.precio_total, 25_000.0);
        assert_eq!(gym.outstanding(), 15_000.0);
        assert!(gym.vencimiento.is_some());

        let active: Vec<_> = member.active_services().map(|(c, _)| c).collect();
        assert_eq!(active, vec![ServiceCategory::Gym]);
        assert!(!member.has_service(ServiceCategory::Natacion));
    }

    #[test]
    fn member_list_survives_unknown_service_keys_and_null_amounts() {
        let json = r#"[
            {
                "_id": "a1",
                "nombre": "Ana",
                "dni": "30111222",
                "servicios": {
                    "gym": { "modalidad": "5 Días", "precioTotal": null, "montoPagado": null },
                    "_id": "abc",
                    "pilates": { "modalidad": "2 Días", "precioTotal": 18000 },
                    "kids": null
                }
            },
            { "_id": "b2", "nombre": "Beto", "dni": "28999000", "servicios": null },
            { "_id": "c3", "nombre": "Caro", "dni": "27000111" }
        ]"#;
        let members: Vec<Member> = serde_json::from_str(json).unwrap();
        assert_eq!(members.len(), 3);

        let ana = &members[0];
        assert_eq!(ana.services.len(), 1);
        let gym = &ana.services[&ServiceCategory::Gym];
        assert_eq!(gym.precio_total, 0.0);
        assert_eq!(gym.monto_pagado, 0.0);
        assert!(ana.has_service(ServiceCategory::Gym));

        assert!(members[1].services.is_empty());
        assert!(members[2].services.is_empty());
    }

    #[test]
    fn null_modality_reads_as_absent() {
        let sub: ServiceSubscription =
            serde_json::from_str(r#"{ "modalidad": null, "precioTotal": 100 }"#).unwrap();
        assert!(sub.is_absent());
        assert_eq!(sub.precio_total, 100.0);
    }

    #[test]
    fn absent_modality_detection() {
        assert!(Modality::none().is_absent());
        assert!(Modality::from("").is_absent());
        assert!(!Modality::from("5 Días").is_absent());
        assert!(is_absent_modality("  "));
        assert!(is_absent_modality(" No "));
    }

    #[test]
    fn set_modality_applies_list_price() {
        let mut draft = MemberDraft::empty();
        assert!(!draft.has_any_service());

        draft.set_modality(ServiceCategory::Gym, "5 Días");
        assert_eq!(draft.servicios[&ServiceCategory::Gym].precio_total, 30_000.0);
        assert!(draft.has_any_service());

        draft.set_modality(ServiceCategory::Gym, "No");
        assert_eq!(draft.servicios[&ServiceCategory::Gym].precio_total, 0.0);
    }

    #[test]
    fn draft_serializes_with_backend_keys() {
        let mut draft = MemberDraft::empty();
        draft.nombre = "Juan".into();
        draft.dni = "12345678".into();
        draft.set_modality(ServiceCategory::Profe, "3 Días");

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["servicios"]["profe"]["precioTotal"], 20_000.0);
        assert_eq!(json["servicios"]["gym"]["modalidad"], "No");
    }

    #[test]
    fn draft_from_member_keeps_amounts() {
        let member: Member = serde_json::from_str(MEMBER_JSON).unwrap();
        let draft = MemberDraft::from_member(&member);
        assert_eq!(draft.dni, "30123456");
        assert_eq!(draft.servicios[&ServiceCategory::Gym].monto_pagado, 10_000.0);
        assert!(draft.servicios[&ServiceCategory::Kids].modalidad.is_absent());
    }
}
