//! Ledger operations end to end: typed calls in, wire requests out,
//! model values back.

mod common;

use billfold::model::{FlowKind, Month};
use billfold::repo::{self, ApiCall, ApiOutcome, BillDraft};

use common::build_client;
use common::mock_server::{MockResponse, MockServer};

#[tokio::test]
async fn login_round_trip_returns_the_token() {
    let server = MockServer::start().await;
    let tc = build_client(&server);
    server
        .enqueue(MockResponse::ok(r#"{"token": "tok-abc"}"#))
        .await;

    let outcome = repo::execute(
        &tc.client,
        ApiCall::Login {
            username: "user123".to_string(),
            password: "secret12".to_string(),
            code: "8421".to_string(),
            uuid: "cap-1".to_string(),
        },
    )
    .await;

    match outcome {
        ApiOutcome::LoggedIn { username, result } => {
            assert_eq!(username, "user123");
            assert_eq!(result.expect("token"), "tok-abc");
        }
        other => panic!("Expected LoggedIn, got {:?}", other),
    }
    let requests = server.captured_requests().await;
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/dev-api/app/login");
    let body = requests[0].body_json();
    assert_eq!(body["username"], "user123");
    assert_eq!(body["code"], "8421");
    assert_eq!(body["uuid"], "cap-1");
}

#[tokio::test]
async fn captcha_fetch_writes_the_image_beside_the_uuid() {
    let server = MockServer::start().await;
    let tc = build_client(&server);
    server
        .enqueue(MockResponse::ok(r#"{"uuid": "cap-9", "img": "aGVsbG8="}"#))
        .await;

    let outcome = repo::execute(&tc.client, ApiCall::FetchCaptcha).await;

    let captcha = match outcome {
        ApiOutcome::Captcha(result) => result.expect("captcha"),
        other => panic!("Expected Captcha, got {:?}", other),
    };
    assert_eq!(captcha.uuid, "cap-9");
    assert_eq!(
        std::fs::read(&captcha.image_path).expect("image file"),
        b"hello"
    );
    std::fs::remove_file(&captcha.image_path).ok();
}

#[tokio::test]
async fn bills_are_windowed_by_month_and_sorted_newest_first() {
    let server = MockServer::start().await;
    let tc = build_client(&server);
    server
        .enqueue(MockResponse::ok(
            r#"[
                {"id": 1, "type": 1, "amount": 1200, "payTypeId": 3, "payTypeName": "Lunch", "billTime": 100},
                {"id": 2, "type": 2, "amount": 99999, "payTypeId": 9, "payTypeName": "Salary", "billTime": 300},
                {"id": 3, "type": 1, "amount": 450, "payTypeId": 4, "billTime": 200}
            ]"#,
        ))
        .await;

    let outcome = repo::execute(
        &tc.client,
        ApiCall::FetchBills {
            month: Month {
                year: 2026,
                month: 8,
            },
        },
    )
    .await;

    let bills = match outcome {
        ApiOutcome::Bills(result) => result.expect("bills"),
        other => panic!("Expected Bills, got {:?}", other),
    };
    let ids: Vec<i64> = bills.iter().map(|bill| bill.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
    assert_eq!(bills[2].pay_type_name, "Lunch");

    let requests = server.captured_requests().await;
    assert_eq!(requests[0].path, "/dev-api/app/bill/list");
    assert_eq!(requests[0].query, "month=2026-08");
}

#[tokio::test]
async fn creating_a_bill_posts_wire_field_names() {
    let server = MockServer::start().await;
    let tc = build_client(&server);
    server.enqueue(MockResponse::ok_empty()).await;

    let outcome = repo::execute(
        &tc.client,
        ApiCall::CreateBill(BillDraft {
            kind: FlowKind::Expense,
            amount_minor: 1250,
            pay_type_id: 11,
            account_id: Some(2),
            remark: Some("lunch".to_string()),
            happened_at: 1755850000,
        }),
    )
    .await;

    match outcome {
        ApiOutcome::BillCreated(result) => result.expect("created"),
        other => panic!("Expected BillCreated, got {:?}", other),
    }
    let requests = server.captured_requests().await;
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/dev-api/app/bill");
    let body = requests[0].body_json();
    assert_eq!(body["type"], 1);
    assert_eq!(body["amount"], 1250);
    assert_eq!(body["payTypeId"], 11);
    assert_eq!(body["accountId"], 2);
    assert_eq!(body["billTime"], 1755850000i64);
}

#[tokio::test]
async fn deleting_a_category_hits_the_id_path() {
    let server = MockServer::start().await;
    let tc = build_client(&server);
    server.enqueue(MockResponse::ok_empty()).await;

    let outcome = repo::execute(&tc.client, ApiCall::DeletePayType { id: 42 }).await;

    match outcome {
        ApiOutcome::PayTypeDeleted(result) => result.expect("deleted"),
        other => panic!("Expected PayTypeDeleted, got {:?}", other),
    }
    let requests = server.captured_requests().await;
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/dev-api/app/payType/42");
}

#[tokio::test]
async fn reordering_sends_the_flat_id_list() {
    let server = MockServer::start().await;
    let tc = build_client(&server);
    server.enqueue(MockResponse::ok_empty()).await;

    let outcome = repo::execute(
        &tc.client,
        ApiCall::SortPayTypes {
            ids: vec![1, 12, 11, 2, 21],
        },
    )
    .await;

    match outcome {
        ApiOutcome::PayTypesSorted(result) => result.expect("sorted"),
        other => panic!("Expected PayTypesSorted, got {:?}", other),
    }
    let requests = server.captured_requests().await;
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/dev-api/app/payType/sort");
    let body = requests[0].body_json();
    assert_eq!(body["ids"], serde_json::json!([1, 12, 11, 2, 21]));
}

#[tokio::test]
async fn agreement_html_arrives_as_plain_text() {
    let server = MockServer::start().await;
    let tc = build_client(&server);
    server
        .enqueue(MockResponse::ok(
            r#"{"title": "Privacy Policy", "content": "<h1>Privacy</h1><p>We keep your data.</p>"}"#,
        ))
        .await;

    let outcome = repo::execute(
        &tc.client,
        ApiCall::FetchAgreement {
            kind: billfold::model::AgreementKind::Privacy,
        },
    )
    .await;

    let doc = match outcome {
        ApiOutcome::Agreement(result) => result.expect("agreement"),
        other => panic!("Expected Agreement, got {:?}", other),
    };
    assert_eq!(doc.title, "Privacy Policy");
    assert_eq!(doc.body, "Privacy\nWe keep your data.");
}
