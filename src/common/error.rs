use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::{common::i18n::I18nStore, middleware::i18n::Locale};

// Nosso tipo de erro interno, com `thiserror` para melhor ergonomia.
// A mensagem voltada ao usuário sai do I18nStore, não daqui.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Cliente não encontrado")]
    ClientNotFound,

    #[error("Agendamento não encontrado")]
    AppointmentNotFound,

    #[error("Fatura não encontrada")]
    InvoiceNotFound,

    // Checagem de direito de uso falhou: o plano não permite mais clientes.
    // Vira um banner bloqueante no front, não uma falha inesperada.
    #[error("Limite de {limit} clientes do plano atingido")]
    ClientLimitReached { limit: u32 },

    // Variante para erros de banco de dados (sqlx)
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    // Status HTTP + código estável (a chave do catálogo i18n)
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::ValidationError(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::EmailAlreadyExists => (StatusCode::CONFLICT, "email_already_exists"),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "invalid_credentials"),
            AppError::InvalidToken => (StatusCode::UNAUTHORIZED, "invalid_token"),
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "user_not_found"),
            AppError::ClientNotFound => (StatusCode::NOT_FOUND, "client_not_found"),
            AppError::AppointmentNotFound => (StatusCode::NOT_FOUND, "appointment_not_found"),
            AppError::InvoiceNotFound => (StatusCode::NOT_FOUND, "invoice_not_found"),
            AppError::ClientLimitReached { .. } => (StatusCode::FORBIDDEN, "limit_reached"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    // Converte o erro interno no erro da API, já com a mensagem no idioma
    // negociado pelo extrator `Locale`.
    pub fn to_api_error(&self, locale: &Locale, store: &I18nStore) -> ApiError {
        let (status, code) = self.status_and_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            // O `tracing` loga a mensagem detalhada que o `thiserror` nos deu;
            // o cliente só vê a mensagem genérica.
            tracing::error!("Erro Interno do Servidor: {}", self);
        }

        let mut message = store.message(&locale.0, code).to_string();
        let mut details = None;

        match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut map = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let codes: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    map.insert(field.to_string(), codes);
                }
                details = serde_json::to_value(map).ok();
            }
            AppError::ClientLimitReached { limit } => {
                message = message.replace("{limit}", &limit.to_string());
                details = Some(json!({ "limit": limit }));
            }
            _ => {}
        }

        ApiError {
            status,
            code,
            message,
            details,
        }
    }
}

// Usado onde não há `Locale` negociado (middleware de auth, extratores):
// responde com o catálogo padrão em inglês.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_api_error(&Locale::default(), &I18nStore::new())
            .into_response()
    }
}

// O erro que atravessa a fronteira HTTP: status + mensagem já localizada.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "error": self.message,
            "code": self.code,
        });
        if let Some(details) = self.details {
            body["details"] = details;
        }
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_reached_maps_to_forbidden_with_limit() {
        let err = AppError::ClientLimitReached { limit: 15 };
        let api = err.to_api_error(&Locale("en".to_string()), &I18nStore::new());

        assert_eq!(api.status, StatusCode::FORBIDDEN);
        assert_eq!(api.code, "limit_reached");
        assert!(api.message.contains("15"));
        assert_eq!(api.details, Some(json!({ "limit": 15 })));
    }

    #[test]
    fn limit_reached_message_is_localized() {
        let err = AppError::ClientLimitReached { limit: 15 };
        let en = err.to_api_error(&Locale("en".to_string()), &I18nStore::new());
        let es = err.to_api_error(&Locale("es".to_string()), &I18nStore::new());

        assert_ne!(en.message, es.message);
        assert!(es.message.contains("15"));
    }

    #[test]
    fn invalid_credentials_is_unauthorized() {
        let (status, code) = AppError::InvalidCredentials.status_and_code();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(code, "invalid_credentials");
    }
}
