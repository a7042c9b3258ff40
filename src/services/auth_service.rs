use crate::error::{AppError, ValidationError};
use crate::models::{AdminProfile, Ack, Credentials};
use crate::services::ApiClient;
use crate::state::SessionStore;

/// Usuario y contraseña obligatorios (el usuario se recorta, la contraseña no)
pub fn validate_credentials(usuario: &str, password: &str) -> Result<Credentials, ValidationError> {
    let usuario = usuario.trim();
    if usuario.is_empty() {
        return Err(ValidationError::MissingField("usuario"));
    }
    if password.is_empty() {
        return Err(ValidationError::MissingField("contraseña"));
    }
    Ok(Credentials {
        usuario: usuario.to_string(),
        password: password.to_string(),
    })
}

/// Login contra el backend y alta de la sesión local.
///
/// Si el backend no devuelve el perfil se guarda uno mínimo con el usuario.
pub async fn login_admin(
    api: &ApiClient,
    session: &SessionStore,
    usuario: &str,
    password: &str,
) -> Result<AdminProfile, AppError> {
    let credentials = validate_credentials(usuario, password)?;
    let response = api.login(&credentials).await?;
    let admin = response
        .admin
        .unwrap_or_else(|| AdminProfile::from_username(&credentials.usuario));

    session.login(admin.clone(), response.token)?;
    Ok(admin)
}

pub async fn register_admin(api: &ApiClient, usuario: &str, password: &str) -> Result<Ack, AppError> {
    let credentials = validate_credentials(usuario, password)?;
    api.register(&credentials).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_are_required() {
        assert_eq!(
            validate_credentials("  ", "x"),
            Err(ValidationError::MissingField("usuario"))
        );
        assert_eq!(
            validate_credentials("ana", ""),
            Err(ValidationError::MissingField("contraseña"))
        );
        let ok = validate_credentials(" ana ", " secreto ").unwrap();
        assert_eq!(ok.usuario, "ana");
        assert_eq!(ok.password, " secreto ");
    }
}
