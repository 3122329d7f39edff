use actix_web::HttpResponse;
use serde::Serialize;

/// Error body shared by every failure response.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorResponse {
            success: false,
            error: error.into(),
        }
    }
}

/// Creates a configured JsonConfig with standardized error handling for the entire project
pub fn json_config() -> actix_web_validator::JsonConfig {
    actix_web_validator::JsonConfig::default().error_handler(|err, _req| {
        let message = match err {
            actix_web_validator::Error::Validate(validation_errors) => validation_errors
                .field_errors()
                .values()
                .flat_map(|errors| errors.iter())
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "Validation failed".to_string()),
            actix_web_validator::Error::Deserialize(de_err) => {
                let err_string = de_err.to_string();
                if err_string.contains("EOF while parsing") {
                    "Request body is empty. Expected JSON payload".to_string()
                } else {
                    "Invalid JSON format".to_string()
                }
            }
            _ => "Validation failed".to_string(),
        };

        actix_web::error::InternalError::from_response(
            "",
            HttpResponse::BadRequest().json(ErrorResponse::new(message)),
        )
        .into()
    })
}
