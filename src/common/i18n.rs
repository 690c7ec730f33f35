// src/common/i18n.rs

// Catálogo de mensagens voltadas ao usuário, nos dois idiomas da UI.
// As chaves são códigos estáveis (vindos de AppError::status_and_code);
// o front também pode usar o `code` da resposta e ignorar a mensagem.

#[derive(Debug, Clone, Default)]
pub struct I18nStore;

impl I18nStore {
    pub fn new() -> Self {
        I18nStore
    }

    // Qualquer idioma fora do catálogo cai no inglês.
    pub fn message(&self, locale: &str, code: &str) -> &'static str {
        match locale {
            "es" => Self::es(code),
            _ => Self::en(code),
        }
    }

    fn en(code: &str) -> &'static str {
        match code {
            "validation_error" => "One or more fields are invalid.",
            "email_already_exists" => "This email is already in use.",
            "invalid_credentials" => "Invalid email or password.",
            "invalid_token" => "Missing or invalid authentication token.",
            "user_not_found" => "User not found.",
            "client_not_found" => "Client not found.",
            "appointment_not_found" => "Appointment not found.",
            "invoice_not_found" => "Invoice not found.",
            "limit_reached" => "Your plan allows up to {limit} clients. Upgrade to add more.",
            _ => "An unexpected error occurred.",
        }
    }

    fn es(code: &str) -> &'static str {
        match code {
            "validation_error" => "Uno o más campos son inválidos.",
            "email_already_exists" => "Este correo ya está en uso.",
            "invalid_credentials" => "Correo o contraseña inválidos.",
            "invalid_token" => "Token de autenticación ausente o inválido.",
            "user_not_found" => "Usuario no encontrado.",
            "client_not_found" => "Cliente no encontrado.",
            "appointment_not_found" => "Cita no encontrada.",
            "invoice_not_found" => "Factura no encontrada.",
            "limit_reached" => "Tu plan permite hasta {limit} clientes. Mejora tu plan para agregar más.",
            _ => "Ocurrió un error inesperado.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_both_locales() {
        let store = I18nStore::new();
        assert_eq!(
            store.message("en", "invalid_credentials"),
            "Invalid email or password."
        );
        assert_eq!(
            store.message("es", "invalid_credentials"),
            "Correo o contraseña inválidos."
        );
    }

    #[test]
    fn unknown_locale_falls_back_to_english() {
        let store = I18nStore::new();
        assert_eq!(
            store.message("pt", "client_not_found"),
            store.message("en", "client_not_found")
        );
    }

    #[test]
    fn unknown_code_has_generic_message() {
        let store = I18nStore::new();
        assert_eq!(
            store.message("en", "whatever"),
            "An unexpected error occurred."
        );
    }
}
