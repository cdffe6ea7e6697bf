//! Data Transfer Objects

use serde::Deserialize;

use crate::domain::client::{ClientError, NewClient};

/// 创建客户请求
///
/// 同时接受表单风格（`first-name`）和存储风格（`firstName`）的键名
#[derive(Debug, Default, Deserialize)]
pub struct CreateClientRequest {
    #[serde(default, rename = "firstName", alias = "first-name")]
    pub first_name: Option<String>,

    #[serde(default, rename = "lastName", alias = "last-name")]
    pub last_name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

impl TryFrom<CreateClientRequest> for NewClient {
    type Error = ClientError;

    fn try_from(req: CreateClientRequest) -> Result<Self, Self::Error> {
        NewClient::new(req.first_name, req.last_name, req.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::ClientField;

    #[test]
    fn test_accepts_both_key_conventions() {
        let dashed: CreateClientRequest = serde_json::from_str(
            r#"{"first-name":"Ada","last-name":"Lovelace","email":"ada@x.io"}"#,
        )
        .unwrap();
        let camel: CreateClientRequest = serde_json::from_str(
            r#"{"firstName":"Ada","lastName":"Lovelace","email":"ada@x.io"}"#,
        )
        .unwrap();

        let dashed = NewClient::try_from(dashed).unwrap();
        let camel = NewClient::try_from(camel).unwrap();
        assert_eq!(dashed, camel);
    }

    #[test]
    fn test_null_field_counts_as_missing() {
        let req: CreateClientRequest =
            serde_json::from_str(r#"{"firstName":"Ada","lastName":null,"email":"a@x.io"}"#)
                .unwrap();
        assert_eq!(
            NewClient::try_from(req).unwrap_err(),
            ClientError::MissingField(ClientField::LastName)
        );
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let req: CreateClientRequest = serde_json::from_str(
            r#"{"firstName":"Ada","lastName":"Lovelace","email":"a@x.io","phone":"555"}"#,
        )
        .unwrap();
        assert!(NewClient::try_from(req).is_ok());
    }
}
