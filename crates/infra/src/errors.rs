//! Conversions from external infrastructure errors into domain errors.

use packlist_domain::PacklistError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub PacklistError);

impl From<InfraError> for PacklistError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<PacklistError> for InfraError {
    fn from(value: PacklistError) -> Self {
        InfraError(value)
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → PacklistError */
/* -------------------------------------------------------------------------- */

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        if value.is_timeout() {
            return InfraError(PacklistError::Network("HTTP request timed out".into()));
        }
        if value.is_connect() {
            return InfraError(PacklistError::Network("HTTP connection failure".into()));
        }

        if let Some(status) = value.status() {
            let code = status.as_u16();
            let message = format!(
                "HTTP {} {}",
                code,
                status.canonical_reason().unwrap_or("unknown status")
            );
            let mapped = match code {
                404 => PacklistError::NotFound(message),
                400..=499 => PacklistError::InvalidInput(message),
                _ => PacklistError::Network(message),
            };
            return InfraError(mapped);
        }

        if value.is_decode() {
            return InfraError(PacklistError::Network(format!(
                "failed to decode HTTP response: {value}"
            )));
        }

        InfraError(PacklistError::Network(value.to_string()))
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → PacklistError */
/* -------------------------------------------------------------------------- */

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        let mapped = match value.kind() {
            std::io::ErrorKind::NotFound => {
                PacklistError::NotFound("file not found".into())
            }
            std::io::ErrorKind::PermissionDenied => {
                PacklistError::Storage("permission denied".into())
            }
            _ => PacklistError::Storage(value.to_string()),
        };
        InfraError(mapped)
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → PacklistError */
/* -------------------------------------------------------------------------- */

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(PacklistError::Storage(format!("invalid JSON: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* csv::Error → PacklistError */
/* -------------------------------------------------------------------------- */

impl From<csv::Error> for InfraError {
    fn from(value: csv::Error) -> Self {
        InfraError(PacklistError::InvalidInput(format!("invalid tabular data: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_not_found_maps_to_not_found() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let mapped: PacklistError = InfraError::from(err).into();
        assert!(matches!(mapped, PacklistError::NotFound(_)));
    }

    #[test]
    fn io_other_maps_to_storage() {
        let err = std::io::Error::other("disk full");
        let mapped: PacklistError = InfraError::from(err).into();
        match mapped {
            PacklistError::Storage(msg) => assert!(msg.contains("disk full")),
            other => panic!("expected storage error, got {:?}", other),
        }
    }

    #[test]
    fn json_error_maps_to_storage() {
        let err = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
        let mapped: PacklistError = InfraError::from(err).into();
        assert!(matches!(mapped, PacklistError::Storage(_)));
    }

    #[tokio::test]
    async fn http_500_maps_to_network_error() {
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        let error =
            client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

        let mapped: PacklistError = InfraError::from(error).into();
        match mapped {
            PacklistError::Network(msg) => assert!(msg.contains("500")),
            other => panic!("expected network error, got {:?}", other),
        }
    }
}
