//! Typed ledger operations on top of [`ApiClient`].
//!
//! Screens never call endpoints directly: they queue an [`ApiCall`] and
//! later receive the matching [`ApiOutcome`]. This module owns the
//! endpoint paths, the DTO to model mapping, and the small amount of
//! local work some calls need (captcha images, agreement HTML).

use once_cell::sync::Lazy;
use regex::Regex;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::api::types::{
    AccountDto, ActivateBody, AgreementDto, BillCreateBody, BillDto, CaptchaDto, EmptyBody,
    ForgotBody, LoginBody, PayTypeCreateBody, PayTypeDto, PayTypeRenameBody, PayTypeSortBody,
    ProfileBody, RegisterBody, TokenDto, UserDto,
};
use crate::api::{required, ApiClient, ApiError};
use crate::model::{Account, AgreementDoc, AgreementKind, Bill, Captcha, FlowKind, Month, PayType, User};

/// A new bill as entered in the form.
#[derive(Debug, Clone, PartialEq)]
pub struct BillDraft {
    pub kind: FlowKind,
    pub amount_minor: i64,
    pub pay_type_id: i64,
    pub account_id: Option<i64>,
    pub remark: Option<String>,
    pub happened_at: i64,
}

/// Everything the UI can ask the server for.
#[derive(Debug, Clone)]
pub enum ApiCall {
    FetchCaptcha,
    Login {
        username: String,
        password: String,
        code: String,
        uuid: String,
    },
    Register {
        username: String,
        nick_name: String,
        email: String,
        password: String,
    },
    ForgotPassword {
        email: String,
    },
    Activate {
        username: String,
        code: String,
    },
    FetchAgreement {
        kind: AgreementKind,
    },
    FetchBills {
        month: Month,
    },
    CreateBill(BillDraft),
    FetchPayTypes,
    CreatePayType {
        name: String,
        parent_id: i64,
        kind: FlowKind,
    },
    RenamePayType {
        id: i64,
        name: String,
    },
    SortPayTypes {
        ids: Vec<i64>,
    },
    DeletePayType {
        id: i64,
    },
    FetchAccounts,
    FetchUser,
    SaveProfile {
        nick_name: String,
        email: String,
    },
    Logout,
}

/// The reply to an [`ApiCall`], one variant per call.
#[derive(Debug)]
pub enum ApiOutcome {
    Captcha(Result<Captcha, ApiError>),
    LoggedIn {
        username: String,
        result: Result<String, ApiError>,
    },
    Registered(Result<(), ApiError>),
    ResetRequested(Result<(), ApiError>),
    Activated(Result<(), ApiError>),
    Agreement(Result<AgreementDoc, ApiError>),
    Bills(Result<Vec<Bill>, ApiError>),
    BillCreated(Result<(), ApiError>),
    PayTypes(Result<Vec<PayType>, ApiError>),
    PayTypeSaved(Result<(), ApiError>),
    PayTypesSorted(Result<(), ApiError>),
    PayTypeDeleted(Result<(), ApiError>),
    Accounts(Result<Vec<Account>, ApiError>),
    UserLoaded(Result<User, ApiError>),
    ProfileSaved {
        nick_name: String,
        email: String,
        result: Result<(), ApiError>,
    },
    LoggedOut(Result<(), ApiError>),
}

pub async fn execute(client: &ApiClient, call: ApiCall) -> ApiOutcome {
    match call {
        ApiCall::FetchCaptcha => ApiOutcome::Captcha(fetch_captcha(client).await),
        ApiCall::Login {
            username,
            password,
            code,
            uuid,
        } => {
            let result = login(client, &username, password, code, uuid).await;
            ApiOutcome::LoggedIn { username, result }
        }
        ApiCall::Register {
            username,
            nick_name,
            email,
            password,
        } => {
            let body = RegisterBody {
                username,
                nick_name,
                email,
                password,
            };
            ApiOutcome::Registered(post_unit(client, "register", &body).await)
        }
        ApiCall::ForgotPassword { email } => {
            let body = ForgotBody { email };
            ApiOutcome::ResetRequested(post_unit(client, "password/forgot", &body).await)
        }
        ApiCall::Activate { username, code } => {
            let body = ActivateBody { username, code };
            ApiOutcome::Activated(post_unit(client, "activate", &body).await)
        }
        ApiCall::FetchAgreement { kind } => {
            ApiOutcome::Agreement(fetch_agreement(client, kind).await)
        }
        ApiCall::FetchBills { month } => ApiOutcome::Bills(fetch_bills(client, month).await),
        ApiCall::CreateBill(draft) => {
            let body = BillCreateBody {
                kind: draft.kind.code(),
                amount: draft.amount_minor,
                pay_type_id: draft.pay_type_id,
                account_id: draft.account_id,
                remark: draft.remark,
                bill_time: draft.happened_at,
            };
            ApiOutcome::BillCreated(post_unit(client, "bill", &body).await)
        }
        ApiCall::FetchPayTypes => ApiOutcome::PayTypes(fetch_pay_types(client).await),
        ApiCall::CreatePayType {
            name,
            parent_id,
            kind,
        } => {
            let body = PayTypeCreateBody {
                name,
                parent_id,
                kind: kind.code(),
            };
            ApiOutcome::PayTypeSaved(post_unit(client, "payType", &body).await)
        }
        ApiCall::RenamePayType { id, name } => {
            let body = PayTypeRenameBody { id, name };
            ApiOutcome::PayTypeSaved(put_unit(client, "payType", &body).await)
        }
        ApiCall::SortPayTypes { ids } => {
            let body = PayTypeSortBody { ids };
            ApiOutcome::PayTypesSorted(put_unit(client, "payType/sort", &body).await)
        }
        ApiCall::DeletePayType { id } => {
            let path = format!("payType/{}", id);
            ApiOutcome::PayTypeDeleted(delete_unit(client, &path).await)
        }
        ApiCall::FetchAccounts => ApiOutcome::Accounts(fetch_accounts(client).await),
        ApiCall::FetchUser => ApiOutcome::UserLoaded(fetch_user(client).await),
        ApiCall::SaveProfile { nick_name, email } => {
            let body = ProfileBody {
                nick_name: nick_name.clone(),
                email: email.clone(),
            };
            let result = put_unit(client, "user/profile", &body).await;
            ApiOutcome::ProfileSaved {
                nick_name,
                email,
                result,
            }
        }
        ApiCall::Logout => ApiOutcome::LoggedOut(post_unit(client, "logout", &EmptyBody {}).await),
    }
}

async fn fetch_captcha(client: &ApiClient) -> Result<Captcha, ApiError> {
    let dto: CaptchaDto = required(client.get("captchaImage", &[]).await?)?;
    store_captcha_image(&dto)
}

/// Decodes the base64 captcha into a temp file the user can open in an
/// image viewer alongside the terminal.
fn store_captcha_image(dto: &CaptchaDto) -> Result<Captcha, ApiError> {
    let encoded: String = dto
        .img
        .rsplit(',')
        .next()
        .unwrap_or(dto.img.as_str())
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| ApiError::Decode(format!("captcha image: {}", e)))?;

    let path = std::env::temp_dir().join(format!("billfold-captcha-{}.png", dto.uuid));
    std::fs::write(&path, bytes).map_err(|e| ApiError::Io {
        context: "write captcha image",
        source: e,
    })?;

    Ok(Captcha {
        uuid: dto.uuid.clone(),
        image_path: path,
    })
}

async fn login(
    client: &ApiClient,
    username: &str,
    password: String,
    code: String,
    uuid: String,
) -> Result<String, ApiError> {
    let body = LoginBody {
        username: username.to_string(),
        password,
        code,
        uuid,
    };
    let dto: TokenDto = required(client.post("login", &body).await?)?;
    Ok(dto.token)
}

async fn fetch_agreement(client: &ApiClient, kind: AgreementKind) -> Result<AgreementDoc, ApiError> {
    let path = format!("agreement/{}", kind.segment());
    let dto: AgreementDto = required(client.get(&path, &[]).await?)?;
    Ok(AgreementDoc {
        title: dto.title.unwrap_or_else(|| kind.title().to_string()),
        body: html_to_text(&dto.content),
    })
}

async fn fetch_bills(client: &ApiClient, month: Month) -> Result<Vec<Bill>, ApiError> {
    let dtos: Vec<BillDto> = required(client.get("bill/list", &[("month", month.query())]).await?)?;
    let mut bills = dtos
        .into_iter()
        .map(BillDto::into_model)
        .collect::<Result<Vec<_>, _>>()?;
    // Newest first, whatever order the server used.
    bills.sort_by(|a, b| b.happened_at.cmp(&a.happened_at));
    Ok(bills)
}

async fn fetch_pay_types(client: &ApiClient) -> Result<Vec<PayType>, ApiError> {
    let dtos: Vec<PayTypeDto> = required(client.get("payType/list", &[]).await?)?;
    let mut pay_types = dtos
        .into_iter()
        .map(PayTypeDto::into_model)
        .collect::<Result<Vec<_>, _>>()?;
    pay_types.sort_by(|a, b| a.sort.cmp(&b.sort).then(a.id.cmp(&b.id)));
    Ok(pay_types)
}

async fn fetch_accounts(client: &ApiClient) -> Result<Vec<Account>, ApiError> {
    let dtos: Vec<AccountDto> = required(client.get("account/list", &[]).await?)?;
    dtos.into_iter().map(AccountDto::into_model).collect()
}

async fn fetch_user(client: &ApiClient) -> Result<User, ApiError> {
    let dto: UserDto = required(client.get("user/info", &[]).await?)?;
    Ok(dto.into_model())
}

async fn post_unit<B: serde::Serialize>(
    client: &ApiClient,
    path: &str,
    body: &B,
) -> Result<(), ApiError> {
    let _: Option<serde_json::Value> = client.post(path, body).await?;
    Ok(())
}

async fn put_unit<B: serde::Serialize>(
    client: &ApiClient,
    path: &str,
    body: &B,
) -> Result<(), ApiError> {
    let _: Option<serde_json::Value> = client.put(path, body).await?;
    Ok(())
}

async fn delete_unit(client: &ApiClient, path: &str) -> Result<(), ApiError> {
    let _: Option<serde_json::Value> = client.delete(path).await?;
    Ok(())
}

static BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?>|</p>|</h[1-6]>|</li>|</div>|</tr>").expect("regex"));
static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<li[^>]*>").expect("regex"));
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("regex"));
static BLANKS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("regex"));

/// Reduces agreement HTML to plain text for terminal display. Block
/// closers become line breaks, list items become bullets, every other
/// tag is dropped, and common entities are decoded.
pub fn html_to_text(html: &str) -> String {
    let text = BREAK_RE.replace_all(html, "\n");
    let text = BULLET_RE.replace_all(&text, "- ");
    let text = TAG_RE.replace_all(&text, "");
    let text = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    let trimmed: Vec<&str> = text.lines().map(str::trim_end).collect();
    let joined = trimmed.join("\n");
    BLANKS_RE.replace_all(&joined, "\n\n").trim().to_string()
}
