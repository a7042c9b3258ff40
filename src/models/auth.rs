use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Perfil del administrador tal como lo entrega el backend.
///
/// Se trata como opaco: solo se lee `usuario` para mostrarlo, el resto de
/// los campos se conserva tal cual al persistirlo.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct AdminProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuario: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AdminProfile {
    pub fn from_username(usuario: &str) -> Self {
        Self {
            usuario: Some(usuario.to_string()),
            extra: Map::new(),
        }
    }

    pub fn display_name(&self) -> &str {
        self.usuario.as_deref().unwrap_or("Administrador")
    }
}

/// Body de `POST /auth/login` y `POST /auth/register`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Credentials {
    pub usuario: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub admin: Option<AdminProfile>,
}

/// Respuesta genérica `{ "msg": "..." }` de register, delete y clean
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Ack {
    #[serde(default)]
    pub msg: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_keeps_unknown_fields() {
        let json = r#"{"usuario":"ana","_id":"65f1","rol":"owner"}"#;
        let profile: AdminProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.display_name(), "ana");
        assert_eq!(profile.extra["rol"], "owner");

        let back: Value = serde_json::to_value(&profile).unwrap();
        assert_eq!(back["_id"], "65f1");
    }

    #[test]
    fn login_response_without_profile() {
        let res: LoginResponse = serde_json::from_str(r#"{"token":"jwt.abc"}"#).unwrap();
        assert_eq!(res.token, "jwt.abc");
        assert!(res.admin.is_none());
    }
}
