use once_cell::sync::Lazy;
use regex::Regex;

static USUARIO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid usuario regex"));

pub fn validate_usuario(usuario: &str) -> Result<(), &'static str> {
    // Longitud del usuario: 5 <= x <= 16
    if usuario.len() < 5 || usuario.len() > 16 {
        return Err("El usuario debe tener entre 5 y 16 caracteres");
    }
    // Solo letras, numeros, guion bajo o guion
    if !USUARIO_RE.is_match(usuario) {
        return Err("El usuario solo puede contener letras, numeros, guion bajo o guion");
    }
    Ok(())
}

pub fn validate_nombre(nombre: &str) -> Result<(), &'static str> {
    if nombre.trim().is_empty() {
        return Err("El nombre no puede estar vacio");
    }
    Ok(())
}

/// Resultado de la validacion de politica de contrasenas
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// Valida la contrasena contra la politica de seguridad
///
/// Politica:
/// - minimo 8 caracteres
/// - al menos una mayuscula, una minuscula y un digito
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    if password.len() < 8 {
        errors.push("La contrasena debe tener al menos 8 caracteres");
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("La contrasena debe contener al menos una mayuscula");
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("La contrasena debe contener al menos una minuscula");
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("La contrasena debe contener al menos un digito");
    }

    // Contrasenas debiles comunes
    let weak_passwords = [
        "password",
        "12345678",
        "123456789",
        "qwerty123",
        "admin123",
        "password1",
        "Password1",
        "Qwerty123",
        "Abcd1234",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("La contrasena es demasiado comun, elige una mas fuerte");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Validacion simplificada de contrasena (devuelve Result)
pub fn validate_password_simple(password: &str) -> Result<(), String> {
    let result = validate_password(password);
    if result.is_valid {
        Ok(())
    } else {
        Err(result.error_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_valida() {
        assert!(validate_password("SeguraP@ss1").is_valid);
        assert!(validate_password("MiClave2026").is_valid);
    }

    #[test]
    fn test_password_corta() {
        let result = validate_password("Ab1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"La contrasena debe tener al menos 8 caracteres")
        );
    }

    #[test]
    fn test_password_sin_mayuscula() {
        let result = validate_password("abcd1234");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"La contrasena debe contener al menos una mayuscula")
        );
    }

    #[test]
    fn test_password_sin_digito() {
        let result = validate_password("AbcdEfgh");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"La contrasena debe contener al menos un digito")
        );
    }

    #[test]
    fn test_password_comun() {
        let result = validate_password("Password1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"La contrasena es demasiado comun, elige una mas fuerte")
        );
    }

    #[test]
    fn test_usuario() {
        assert!(validate_usuario("lmendoza").is_ok());
        assert!(validate_usuario("ana").is_err());
        assert!(validate_usuario("con espacio").is_err());
    }
}
