use crate::common::*;
use async_graphql::Variables;
use serde_json::json;
use uuid::Uuid;

const CREATE_PROFILE: &str = r#"
    mutation CreateProfile($dto: CreateProfileInput!) {
        createProfile(dto: $dto) { id isMale yearOfBirth userId memberTypeId }
    }
"#;

#[tokio::test]
async fn test_created_profile_round_trips() {
    let schema = setup_schema().await;
    let user_id = create_test_user(&schema, "Ann", 10.0).await;

    let data = execute_ok(
        &schema,
        CREATE_PROFILE,
        json!({ "dto": {
            "isMale": false,
            "yearOfBirth": 1994,
            "userId": user_id,
            "memberTypeId": "BASIC"
        } }),
    )
    .await;
    let profile_id = data["createProfile"]["id"].as_str().unwrap().to_string();

    let data = execute_ok(
        &schema,
        r#"
        query GetProfile($id: UUID!) {
            profile(id: $id) {
                id isMale yearOfBirth userId
                memberType { id postsLimitPerMonth }
            }
        }
        "#,
        json!({ "id": profile_id }),
    )
    .await;

    let profile = &data["profile"];
    assert_eq!(profile["isMale"], false);
    assert_eq!(profile["yearOfBirth"], 1994);
    assert_eq!(profile["userId"], user_id);
    assert_eq!(profile["memberType"]["id"], "BASIC");
    assert_eq!(profile["memberType"]["postsLimitPerMonth"], 20);
}

#[tokio::test]
async fn test_profile_for_unknown_user_is_not_found() {
    let schema = setup_schema().await;

    let response = execute_graphql(
        &schema,
        CREATE_PROFILE,
        Some(Variables::from_json(json!({ "dto": {
            "isMale": true,
            "yearOfBirth": 1980,
            "userId": Uuid::new_v4(),
            "memberTypeId": "BUSINESS"
        } }))),
    )
    .await;

    assert_eq!(first_error_code(&response).as_deref(), Some("NOT_FOUND"));
}

#[tokio::test]
async fn test_second_profile_for_user_conflicts() {
    let schema = setup_schema().await;
    let user_id = create_test_user(&schema, "Ann", 10.0).await;
    create_test_profile(&schema, &user_id, "BASIC").await;

    let response = execute_graphql(
        &schema,
        CREATE_PROFILE,
        Some(Variables::from_json(json!({ "dto": {
            "isMale": true,
            "yearOfBirth": 1980,
            "userId": user_id,
            "memberTypeId": "BUSINESS"
        } }))),
    )
    .await;

    assert_eq!(first_error_code(&response).as_deref(), Some("CONFLICT"));
}

#[tokio::test]
async fn test_change_profile_switches_member_type() {
    let schema = setup_schema().await;
    let user_id = create_test_user(&schema, "Ann", 10.0).await;
    let profile_id = create_test_profile(&schema, &user_id, "BASIC").await;

    let data = execute_ok(
        &schema,
        r#"
        mutation ChangeProfile($id: UUID!, $dto: ChangeProfileInput!) {
            changeProfile(id: $id, dto: $dto) {
                isMale yearOfBirth memberTypeId
                memberType { id discount }
            }
        }
        "#,
        json!({ "id": profile_id, "dto": { "memberTypeId": "BUSINESS" } }),
    )
    .await;

    let profile = &data["changeProfile"];
    assert_eq!(profile["isMale"], true);
    assert_eq!(profile["yearOfBirth"], 1990);
    assert_eq!(profile["memberTypeId"], "BUSINESS");
    assert_eq!(profile["memberType"]["discount"], 7.7);
}

#[tokio::test]
async fn test_change_profile_with_empty_input_is_a_no_op() {
    let schema = setup_schema().await;
    let user_id = create_test_user(&schema, "Ann", 10.0).await;
    let profile_id = create_test_profile(&schema, &user_id, "BASIC").await;

    let data = execute_ok(
        &schema,
        r#"
        mutation ChangeProfile($id: UUID!) {
            changeProfile(id: $id, dto: {}) { id isMale yearOfBirth memberTypeId userId }
        }
        "#,
        json!({ "id": profile_id }),
    )
    .await;

    let profile = &data["changeProfile"];
    assert_eq!(profile["id"], profile_id);
    assert_eq!(profile["isMale"], true);
    assert_eq!(profile["yearOfBirth"], 1990);
    assert_eq!(profile["memberTypeId"], "BASIC");
    assert_eq!(profile["userId"], user_id);
}

#[tokio::test]
async fn test_delete_profile() {
    let schema = setup_schema().await;
    let user_id = create_test_user(&schema, "Ann", 10.0).await;
    let profile_id = create_test_profile(&schema, &user_id, "BASIC").await;

    let data = execute_ok(
        &schema,
        "mutation DeleteProfile($id: UUID!) { deleteProfile(id: $id) }",
        json!({ "id": profile_id }),
    )
    .await;
    assert_eq!(data["deleteProfile"], format!("Profile {profile_id} deleted"));

    let data = execute_ok(
        &schema,
        "query GetProfile($id: UUID!) { profile(id: $id) { id } }",
        json!({ "id": profile_id }),
    )
    .await;
    assert!(data["profile"].is_null());

    let data = execute_ok(
        &schema,
        "query GetUser($id: UUID!) { user(id: $id) { profile { id } } }",
        json!({ "id": user_id }),
    )
    .await;
    assert!(data["user"]["profile"].is_null());
}

#[tokio::test]
async fn test_delete_unknown_profile_is_not_found() {
    let schema = setup_schema().await;

    let response = execute_graphql(
        &schema,
        "mutation DeleteProfile($id: UUID!) { deleteProfile(id: $id) }",
        Some(Variables::from_json(json!({ "id": Uuid::new_v4() }))),
    )
    .await;

    assert_eq!(first_error_code(&response).as_deref(), Some("NOT_FOUND"));
}
