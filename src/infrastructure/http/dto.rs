//! Data Transfer Objects

use serde::{Deserialize, Deserializer, Serialize};

use crate::application::{UserView, DEFAULT_PAGE_SIZE};
use crate::domain::{UserError, UserName};

// ============================================================================
// 请求
// ============================================================================

/// 创建 / 更新用户请求体
///
/// 字段缺失或为 `null` 时反序列化为空字符串，由 `validate` 报告为校验错误。
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dob: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// 单个字段的校验错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl CreateUserRequest {
    /// 字段级校验：必填与最小长度
    ///
    /// dob 的格式不在这里检查，由应用层解析。
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if let Err(UserError::InvalidName(message)) = UserName::new(self.name.as_str()) {
            errors.push(FieldError {
                field: "name",
                message,
            });
        }

        if self.dob.is_empty() {
            errors.push(FieldError {
                field: "dob",
                message: "dob is required".to_string(),
            });
        }

        errors
    }
}

/// 拼接校验错误为一条可读消息
pub fn describe_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// 列表查询参数
///
/// 宽松解析：缺失或为空时使用默认值，无法解析为整数时记为 0（随后由查询侧修正）。
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListUsersParams {
    pub fn page(&self) -> i64 {
        lenient_int(self.page.as_deref(), 1)
    }

    pub fn limit(&self) -> i64 {
        lenient_int(self.limit.as_deref(), DEFAULT_PAGE_SIZE)
    }
}

fn lenient_int(raw: Option<&str>, default: i64) -> i64 {
    match raw {
        None | Some("") => default,
        Some(value) => value.parse().unwrap_or(0),
    }
}

// ============================================================================
// 响应
// ============================================================================

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub dob: String,
    pub age: i32,
}

impl From<UserView> for UserResponse {
    fn from(view: UserView) -> Self {
        Self {
            id: view.id,
            name: view.name,
            dob: view.dob,
            age: view.age,
        }
    }
}

/// 分页列表响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ListUsersResponse {
    pub page: i64,
    pub limit: i64,
    pub data: Vec<UserResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, dob: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            dob: dob.to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("Alice", "1990-01-01").validate().is_empty());
    }

    #[test]
    fn test_missing_fields() {
        let errors = CreateUserRequest::default().validate();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "dob"]);
        assert_eq!(
            describe_field_errors(&errors),
            "name is required; dob is required"
        );
    }

    #[test]
    fn test_short_name() {
        let errors = request("A", "1990-01-01").validate();
        assert_eq!(
            errors,
            vec![FieldError {
                field: "name",
                message: "name must be at least 2 characters".to_string(),
            }]
        );
    }

    #[test]
    fn test_malformed_dob_passes_field_validation() {
        assert!(request("Alice", "31-12-1990").validate().is_empty());
    }

    #[test]
    fn test_missing_json_fields_deserialize_to_empty() {
        let req: CreateUserRequest = serde_json::from_str(r#"{"name":"Alice"}"#).unwrap();
        assert_eq!(req.dob, "");
    }

    #[test]
    fn test_null_json_fields_deserialize_to_empty() {
        let req: CreateUserRequest =
            serde_json::from_str(r#"{"name":null,"dob":null}"#).unwrap();
        assert_eq!(req.name, "");
        assert_eq!(req.dob, "");
        assert_eq!(
            describe_field_errors(&req.validate()),
            "name is required; dob is required"
        );

        assert!(serde_json::from_str::<CreateUserRequest>(r#"{"name":1}"#).is_err());
    }

    #[test]
    fn test_list_params_defaults() {
        let params = ListUsersParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 10);

        let params = ListUsersParams {
            page: Some(String::new()),
            limit: Some(String::new()),
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 10);
    }

    #[test]
    fn test_list_params_garbage_becomes_zero() {
        let params = ListUsersParams {
            page: Some("abc".to_string()),
            limit: Some("2x".to_string()),
        };
        assert_eq!(params.page(), 0);
        assert_eq!(params.limit(), 0);
    }

    #[test]
    fn test_list_params_reject_surrounding_whitespace() {
        let params = ListUsersParams {
            page: Some(" 2".to_string()),
            limit: Some("5 ".to_string()),
        };
        assert_eq!(params.page(), 0);
        assert_eq!(params.limit(), 0);
    }
}
