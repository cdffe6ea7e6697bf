//! Client Context - Value Objects

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use super::ClientError;

/// 连字符形式 UUID 的长度
const HYPHENATED_LEN: usize = 36;

/// 客户唯一标识
///
/// 由存储在插入时生成，文本形式为标准 UUID。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(Uuid);

impl ClientId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// 解析请求中的 ID
    ///
    /// 空白输入视为缺失；只接受 36 字符的连字符形式，
    /// 首尾空白、花括号、`urn:uuid:` 前缀和无连字符形式都视为格式错误。
    pub fn parse(raw: &str) -> Result<Self, ClientError> {
        if raw.trim().is_empty() {
            return Err(ClientError::MissingId);
        }
        if raw.len() != HYPHENATED_LEN {
            return Err(ClientError::MalformedId(raw.to_string()));
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| ClientError::MalformedId(raw.to_string()))
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for ClientId {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 创建客户时的必填字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientField {
    FirstName,
    LastName,
    Email,
}

impl ClientField {
    /// 面向用户的字段描述
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::Email => "email",
        }
    }
}

impl std::fmt::Display for ClientField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_display() {
        let id = ClientId::new();
        assert_eq!(ClientId::parse(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_blank_is_missing() {
        assert_eq!(ClientId::parse("   "), Err(ClientError::MissingId));
        assert_eq!(ClientId::parse(""), Err(ClientError::MissingId));
    }

    #[test]
    fn test_parse_garbage_is_malformed() {
        assert_eq!(
            ClientId::parse("not-an-id"),
            Err(ClientError::MalformedId("not-an-id".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_non_canonical_forms() {
        let id = ClientId::new();
        let uuid = id.to_string();
        let variants = [
            format!(" {} ", uuid),
            format!("urn:uuid:{}", uuid),
            format!("{{{}}}", uuid),
            uuid.replace('-', ""),
        ];

        for raw in variants {
            assert_eq!(
                ClientId::parse(&raw),
                Err(ClientError::MalformedId(raw.clone())),
                "{}",
                raw
            );
        }
        assert_eq!(ClientId::parse(&uuid.to_uppercase()).unwrap(), id);
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(ClientField::FirstName.to_string(), "first name");
        assert_eq!(ClientField::LastName.to_string(), "last name");
        assert_eq!(
            ClientError::MissingField(ClientField::Email).to_string(),
            "missing email"
        );
    }
}
