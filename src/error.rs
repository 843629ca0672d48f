use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use snafu::Snafu;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub))]
pub enum Error {
    // Deserialization
    #[snafu(display("Encountered error during json deserialization"))]
    DeserializationErrorJson { source: serde_json::Error },

    // Upstream statistics
    #[snafu(display("Failed to send http request: {}", source))]
    Reqwest { source: reqwest::Error },
    #[snafu(display("Statistics endpoint answered with status {status}"))]
    UpstreamStatus { status: reqwest::StatusCode },

    // Formatting
    #[snafu(display("Duration must not be negative, got {seconds} seconds"))]
    NegativeDuration { seconds: i64 },

    // Rendering
    #[snafu(display("Failed to register template {name}"))]
    TemplateRegister {
        name: &'static str,
        source: handlebars::TemplateError,
    },
    #[snafu(display("Failed to render template {name}"))]
    TemplateRender {
        name: &'static str,
        source: handlebars::RenderError,
    },

    // Configuration
    #[snafu(display("Missing environment variable {name}"))]
    MissingEnvVar {
        name: &'static str,
        source: std::env::VarError,
    },
    #[snafu(display("Failed to read {path}"))]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },
    #[snafu(display("Failed to deserialize {path}"))]
    ConfigParse {
        path: String,
        source: serde_norway::Error,
    },
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::Reqwest { .. }
            | Error::UpstreamStatus { .. }
            | Error::DeserializationErrorJson { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
