//! Wire DTOs for the ledger server.
//!
//! The server speaks camelCase JSON and encodes enums as small integers.
//! Response DTOs convert into `model` entities with `into_model`, which
//! rejects codes we do not know rather than guessing.

use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::model::{Account, AccountKind, Bill, FlowKind, PayType, User};

// Requests

#[derive(Debug, Serialize)]
pub struct LoginBody {
    pub username: String,
    pub password: String,
    pub code: String,
    pub uuid: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBody {
    pub username: String,
    pub nick_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct ForgotBody {
    pub email: String,
}

/// `{}` for endpoints that take no request body.
#[derive(Debug, Serialize)]
pub struct EmptyBody {}

#[derive(Debug, Serialize)]
pub struct ActivateBody {
    pub username: String,
    pub code: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillCreateBody {
    #[serde(rename = "type")]
    pub kind: i32,
    pub amount: i64,
    pub pay_type_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    pub bill_time: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayTypeCreateBody {
    pub name: String,
    pub parent_id: i64,
    #[serde(rename = "type")]
    pub kind: i32,
}

#[derive(Debug, Serialize)]
pub struct PayTypeRenameBody {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct PayTypeSortBody {
    pub ids: Vec<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileBody {
    pub nick_name: String,
    pub email: String,
}

// Responses

#[derive(Debug, Deserialize)]
pub struct CaptchaDto {
    pub uuid: String,
    /// Base64 PNG, sometimes prefixed with a `data:` scheme.
    pub img: String,
}

#[derive(Debug, Deserialize)]
pub struct TokenDto {
    pub token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillDto {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: i32,
    pub amount: i64,
    pub pay_type_id: i64,
    #[serde(default)]
    pub pay_type_name: Option<String>,
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
    pub bill_time: i64,
}

impl BillDto {
    pub fn into_model(self) -> Result<Bill, ApiError> {
        let kind = FlowKind::from_code(self.kind)
            .ok_or_else(|| ApiError::Decode(format!("unknown bill type {}", self.kind)))?;
        Ok(Bill {
            id: self.id,
            kind,
            amount_minor: self.amount,
            pay_type_id: self.pay_type_id,
            pay_type_name: self.pay_type_name.unwrap_or_else(|| "Uncategorized".to_string()),
            account_id: self.account_id,
            account_name: self.account_name,
            remark: self.remark,
            image: self.img,
            happened_at: self.bill_time,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayTypeDto {
    pub id: i64,
    #[serde(default)]
    pub parent_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: i32,
    #[serde(default)]
    pub sort: i32,
}

impl PayTypeDto {
    pub fn into_model(self) -> Result<PayType, ApiError> {
        let kind = FlowKind::from_code(self.kind)
            .ok_or_else(|| ApiError::Decode(format!("unknown category type {}", self.kind)))?;
        Ok(PayType {
            id: self.id,
            parent_id: self.parent_id,
            name: self.name,
            kind,
            sort: self.sort,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: i32,
    #[serde(default)]
    pub balance: i64,
    #[serde(default)]
    pub remark: Option<String>,
}

impl AccountDto {
    pub fn into_model(self) -> Result<Account, ApiError> {
        let kind = AccountKind::from_code(self.kind)
            .ok_or_else(|| ApiError::Decode(format!("unknown account type {}", self.kind)))?;
        Ok(Account {
            id: self.id,
            name: self.name,
            kind,
            balance_minor: self.balance,
            remark: self.remark,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub nick_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bill_count: i64,
    #[serde(default)]
    pub account_count: i64,
}

impl UserDto {
    pub fn into_model(self) -> User {
        User {
            id: self.id,
            username: self.username,
            nick_name: self.nick_name,
            email: self.email,
            bill_count: self.bill_count,
            account_count: self.account_count,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AgreementDto {
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bill_dto_maps_camel_case() {
        let json = r#"{
            "id": 9,
            "type": 1,
            "amount": 12345,
            "payTypeId": 3,
            "payTypeName": "Food",
            "accountId": 2,
            "accountName": "Wallet",
            "img": "uploads/9.jpg",
            "billTime": 1755800000
        }"#;
        let dto: BillDto = serde_json::from_str(json).expect("bill parses");
        let bill = dto.into_model().expect("known type code");
        assert_eq!(bill.kind, FlowKind::Expense);
        assert_eq!(bill.amount_minor, 12345);
        assert_eq!(bill.pay_type_name, "Food");
        assert_eq!(bill.account_name.as_deref(), Some("Wallet"));
        assert_eq!(bill.image.as_deref(), Some("uploads/9.jpg"));
    }

    #[test]
    fn bill_dto_rejects_unknown_kind() {
        let json = r#"{"id": 1, "type": 9, "amount": 1, "payTypeId": 1, "billTime": 0}"#;
        let dto: BillDto = serde_json::from_str(json).expect("bill parses");
        match dto.into_model() {
            Err(ApiError::Decode(msg)) => assert!(msg.contains("unknown bill type")),
            other => panic!("Expected Decode, got {:?}", other),
        }
    }

    #[test]
    fn create_body_serializes_wire_names() {
        let body = BillCreateBody {
            kind: FlowKind::Income.code(),
            amount: 500,
            pay_type_id: 4,
            account_id: None,
            remark: None,
            bill_time: 100,
        };
        let value = serde_json::to_value(&body).expect("serializes");
        assert_eq!(value["type"], 2);
        assert_eq!(value["payTypeId"], 4);
        assert_eq!(value["billTime"], 100);
        assert!(value.get("accountId").is_none());
    }

    #[test]
    fn pay_type_dto_defaults_parent_to_root() {
        let json = r#"{"id": 5, "name": "Food", "type": 1}"#;
        let dto: PayTypeDto = serde_json::from_str(json).expect("parses");
        let pay_type = dto.into_model().expect("known type code");
        assert!(pay_type.is_root());
        assert_eq!(pay_type.sort, 0);
    }

    #[test]
    fn user_dto_tolerates_missing_counts() {
        let json = r#"{"id": 1, "username": "user123", "nickName": "Sam"}"#;
        let dto: UserDto = serde_json::from_str(json).expect("parses");
        let user = dto.into_model();
        assert_eq!(user.nick_name, "Sam");
        assert_eq!(user.bill_count, 0);
        assert!(user.email.is_none());
    }
}
