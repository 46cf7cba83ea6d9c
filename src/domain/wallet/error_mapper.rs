//! Maps WalletAPI HTTP statuses to [`WalletApiError`].

use reqwest::StatusCode;

use crate::error::{Error, WalletApiError};
use crate::http::{ErrorDetail, ErrorMapper};

/// Installed on every [`WalletApi`](super::WalletApi) transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalletApiErrorMapper;

impl ErrorMapper for WalletApiErrorMapper {
    fn map_error(&self, status: StatusCode, detail: Option<&ErrorDetail>) -> Error {
        let message = detail.and_then(|d| d.message.clone());

        let err = match status.as_u16() {
            400 => WalletApiError::BadRequest(message.unwrap_or_default()),
            401 => WalletApiError::Unauthorized,
            403 => WalletApiError::NoWalletOpen,
            404 => WalletApiError::NotFound,
            500 => WalletApiError::InternalError,
            code => WalletApiError::UnexpectedStatus {
                status: code,
                message: message.unwrap_or_else(|| {
                    status.canonical_reason().unwrap_or("Unknown Status").to_string()
                }),
            },
        };
        err.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(message: &str) -> ErrorDetail {
        ErrorDetail {
            code: Some(1),
            message: Some(message.to_string()),
        }
    }

    #[test]
    fn test_bad_request_includes_upstream_message() {
        let err = WalletApiErrorMapper.map_error(
            StatusCode::BAD_REQUEST,
            Some(&detail("Address is not valid")),
        );
        assert_eq!(
            err.to_string(),
            "A parse error occured, or an error occured processing your request: Address is not valid"
        );
    }

    #[test]
    fn test_unauthorized_ignores_body() {
        let err = WalletApiErrorMapper.map_error(StatusCode::UNAUTHORIZED, Some(&detail("x")));
        assert_eq!(err.to_string(), "API key is missing or invalid");
        let err = WalletApiErrorMapper.map_error(StatusCode::UNAUTHORIZED, None);
        assert!(matches!(err, Error::WalletApi(WalletApiError::Unauthorized)));
    }

    #[test]
    fn test_fixed_statuses() {
        assert!(matches!(
            WalletApiErrorMapper.map_error(StatusCode::FORBIDDEN, None),
            Error::WalletApi(WalletApiError::NoWalletOpen)
        ));
        assert!(matches!(
            WalletApiErrorMapper.map_error(StatusCode::NOT_FOUND, None),
            Error::WalletApi(WalletApiError::NotFound)
        ));
        assert!(matches!(
            WalletApiErrorMapper.map_error(StatusCode::INTERNAL_SERVER_ERROR, None),
            Error::WalletApi(WalletApiError::InternalError)
        ));
    }

    #[test]
    fn test_other_status_is_wrapped() {
        let err = WalletApiErrorMapper.map_error(StatusCode::BAD_GATEWAY, None);
        assert_eq!(err.to_string(), "Unexpected status 502: Bad Gateway");
    }
}
