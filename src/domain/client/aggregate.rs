//! Client Context - Aggregate Root

use serde::{Deserialize, Serialize};

use super::{ClientError, ClientField, ClientId};

/// 待插入的客户文档
///
/// 不变量:
/// - 三个字段均非空（去除首尾空白后）
/// - email 不做格式校验
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    first_name: String,
    last_name: String,
    email: String,
}

impl NewClient {
    /// 按 firstName → lastName → email 顺序校验，报告第一个缺失字段
    pub fn new(
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
    ) -> Result<Self, ClientError> {
        let first_name = require(first_name, ClientField::FirstName)?;
        let last_name = require(last_name, ClientField::LastName)?;
        let email = require(email, ClientField::Email)?;

        Ok(Self {
            first_name,
            last_name,
            email,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

fn require(value: Option<String>, field: ClientField) -> Result<String, ClientError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ClientError::MissingField(field)),
    }
}

/// Client 聚合根
///
/// 创建后不可修改，只能整体删除。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "_id")]
    id: ClientId,
    #[serde(flatten)]
    document: NewClient,
}

impl Client {
    pub fn new(id: ClientId, document: NewClient) -> Self {
        Self { id, document }
    }

    // Getters
    pub fn id(&self) -> &ClientId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        self.document.first_name()
    }

    pub fn last_name(&self) -> &str {
        self.document.last_name()
    }

    pub fn email(&self) -> &str {
        self.document.email()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn test_new_client_accepts_all_fields() {
        let client = NewClient::new(s("Ada"), s("Lovelace"), s("ada@x.io")).unwrap();
        assert_eq!(client.first_name(), "Ada");
        assert_eq!(client.last_name(), "Lovelace");
        assert_eq!(client.email(), "ada@x.io");
    }

    #[test]
    fn test_first_missing_field_is_reported() {
        let err = NewClient::new(None, None, None).unwrap_err();
        assert_eq!(err, ClientError::MissingField(ClientField::FirstName));

        let err = NewClient::new(s("Ada"), s("  "), None).unwrap_err();
        assert_eq!(err, ClientError::MissingField(ClientField::LastName));

        let err = NewClient::new(s("Ada"), s("Lovelace"), s("")).unwrap_err();
        assert_eq!(err, ClientError::MissingField(ClientField::Email));
    }

    #[test]
    fn test_email_format_not_checked() {
        assert!(NewClient::new(s("Ada"), s("Lovelace"), s("not an email")).is_ok());
    }

    #[test]
    fn test_client_wire_shape() {
        let id = ClientId::new();
        let client = Client::new(
            id,
            NewClient::new(s("Ada"), s("Lovelace"), s("ada@x.io")).unwrap(),
        );
        let value = serde_json::to_value(&client).unwrap();
        assert_eq!(value["_id"], id.to_string());
        assert_eq!(value["firstName"], "Ada");
        assert_eq!(value["lastName"], "Lovelace");
        assert_eq!(value["email"], "ada@x.io");
        assert_eq!(value.as_object().unwrap().len(), 4);
    }
}
