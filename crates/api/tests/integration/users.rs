use crate::common::*;
use async_graphql::Variables;
use serde_json::json;
use uuid::Uuid;

const USER_FIELDS: &str = r#"
    query GetUser($id: UUID!) {
        user(id: $id) { id name balance }
    }
"#;

#[tokio::test]
async fn test_created_user_round_trips() {
    let schema = setup_schema().await;

    let user_id = create_test_user(&schema, "Ann", 10.0).await;

    let data = execute_ok(&schema, USER_FIELDS, json!({ "id": user_id })).await;
    assert_eq!(data["user"]["id"], user_id);
    assert_eq!(data["user"]["name"], "Ann");
    assert_eq!(data["user"]["balance"], 10.0);
}

#[tokio::test]
async fn test_users_query_lists_every_user() {
    let schema = setup_schema().await;

    let ann = create_test_user(&schema, "Ann", 10.0).await;
    let bo = create_test_user(&schema, "Bo", 5.0).await;

    let data = execute_ok(&schema, "query { users { id name } }", json!({})).await;
    let ids: Vec<&str> = data["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_str().unwrap())
        .collect();

    assert_eq!(ids, vec![ann.as_str(), bo.as_str()]);
}

#[tokio::test]
async fn test_missing_user_is_null() {
    let schema = setup_schema().await;

    let data = execute_ok(&schema, USER_FIELDS, json!({ "id": Uuid::new_v4() })).await;

    assert!(data["user"].is_null());
}

#[tokio::test]
async fn test_change_user_updates_only_given_fields() {
    let schema = setup_schema().await;
    let user_id = create_test_user(&schema, "Ann", 10.0).await;

    let data = execute_ok(
        &schema,
        r#"
        mutation ChangeUser($id: UUID!, $dto: ChangeUserInput!) {
            changeUser(id: $id, dto: $dto) { id name balance }
        }
        "#,
        json!({ "id": user_id, "dto": { "balance": 42.5 } }),
    )
    .await;

    assert_eq!(data["changeUser"]["name"], "Ann");
    assert_eq!(data["changeUser"]["balance"], 42.5);
}

#[tokio::test]
async fn test_change_user_with_empty_input_is_a_no_op() {
    let schema = setup_schema().await;
    let user_id = create_test_user(&schema, "Ann", 10.0).await;

    let data = execute_ok(
        &schema,
        r#"
        mutation ChangeUser($id: UUID!) {
            changeUser(id: $id, dto: {}) { id name balance }
        }
        "#,
        json!({ "id": user_id }),
    )
    .await;

    assert_eq!(data["changeUser"]["id"], user_id);
    assert_eq!(data["changeUser"]["name"], "Ann");
    assert_eq!(data["changeUser"]["balance"], 10.0);
}

#[tokio::test]
async fn test_change_unknown_user_is_not_found() {
    let schema = setup_schema().await;

    let response = execute_graphql(
        &schema,
        r#"
        mutation ChangeUser($id: UUID!) {
            changeUser(id: $id, dto: { name: "Nobody" }) { id }
        }
        "#,
        Some(Variables::from_json(json!({ "id": Uuid::new_v4() }))),
    )
    .await;

    assert_eq!(first_error_code(&response).as_deref(), Some("NOT_FOUND"));
}

#[tokio::test]
async fn test_delete_user_then_lookup_is_null() {
    let schema = setup_schema().await;
    let user_id = create_test_user(&schema, "Ann", 10.0).await;

    let data = execute_ok(
        &schema,
        "mutation DeleteUser($id: UUID!) { deleteUser(id: $id) }",
        json!({ "id": user_id }),
    )
    .await;
    assert_eq!(data["deleteUser"], format!("User {user_id} deleted"));

    let data = execute_ok(&schema, USER_FIELDS, json!({ "id": user_id })).await;
    assert!(data["user"].is_null());

    let response = execute_graphql(
        &schema,
        "mutation DeleteUser($id: UUID!) { deleteUser(id: $id) }",
        Some(Variables::from_json(json!({ "id": user_id }))),
    )
    .await;
    assert_eq!(first_error_code(&response).as_deref(), Some("NOT_FOUND"));
}

#[tokio::test]
async fn test_malformed_uuid_argument_is_rejected() {
    let schema = setup_schema().await;

    let response = execute_graphql(
        &schema,
        USER_FIELDS,
        Some(Variables::from_json(json!({ "id": "not-a-uuid" }))),
    )
    .await;

    assert!(
        !response.errors.is_empty(),
        "Malformed UUID should fail argument coercion"
    );
}
