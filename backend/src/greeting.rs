const NAME_LIMIT: usize = 256;

#[derive(Debug, thiserror::Error)]
pub(crate) enum GreetingError {
    #[error("name missing")]
    NameMissing,
    #[error("name too long")]
    NameTooLong,
}

impl actix_web::ResponseError for GreetingError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code()).json(common::ErrorBody {
            error: Some(self.to_string()),
        })
    }
}

struct GreetingManager;

impl GreetingManager {
    fn greet(name: &str) -> Result<common::Greeting, GreetingError> {
        if name.trim().is_empty() {
            return Err(GreetingError::NameMissing);
        }
        if name.chars().count() > NAME_LIMIT {
            return Err(GreetingError::NameTooLong);
        }
        Ok(common::Greeting {
            message: format!("Hello, {name}"),
        })
    }
}

pub(crate) async fn hello(
    name: actix_web::web::Path<String>,
) -> Result<actix_web::HttpResponse, GreetingError> {
    let greeting = GreetingManager::greet(&name.into_inner())?;
    Ok(actix_web::HttpResponse::Ok().json(greeting))
}

pub(crate) async fn hello_missing() -> Result<actix_web::HttpResponse, GreetingError> {
    Err(GreetingError::NameMissing)
}
