use crate::common::*;
use async_graphql::Variables;
use serde_json::json;
use uuid::Uuid;

const SUBSCRIBE: &str = r#"
    mutation SubscribeTo($userId: UUID!, $authorId: UUID!) {
        subscribeTo(userId: $userId, authorId: $authorId)
    }
"#;

const UNSUBSCRIBE: &str = r#"
    mutation UnsubscribeFrom($userId: UUID!, $authorId: UUID!) {
        unsubscribeFrom(userId: $userId, authorId: $authorId)
    }
"#;

fn pair(user_id: &str, author_id: &str) -> Option<Variables> {
    Some(Variables::from_json(
        json!({ "userId": user_id, "authorId": author_id }),
    ))
}

#[tokio::test]
async fn test_subscribe_scenario_links_both_directions() {
    let schema = setup_schema().await;
    let ann = create_test_user(&schema, "Ann", 10.0).await;
    let bo = create_test_user(&schema, "Bo", 5.0).await;

    let data = execute_ok(&schema, SUBSCRIBE, json!({ "userId": ann, "authorId": bo })).await;
    assert_eq!(data["subscribeTo"], "Subscribed successfully");

    let data = execute_ok(
        &schema,
        r#"
        query Both($ann: UUID!, $bo: UUID!) {
            ann: user(id: $ann) { userSubscribedTo { id name } subscribedToUser { id } }
            bo: user(id: $bo) { subscribedToUser { id name } userSubscribedTo { id } }
        }
        "#,
        json!({ "ann": ann, "bo": bo }),
    )
    .await;

    let followed = data["ann"]["userSubscribedTo"].as_array().unwrap();
    assert_eq!(followed.len(), 1);
    assert_eq!(followed[0]["id"], bo);
    assert_eq!(followed[0]["name"], "Bo");
    assert!(data["ann"]["subscribedToUser"].as_array().unwrap().is_empty());

    let followers = data["bo"]["subscribedToUser"].as_array().unwrap();
    assert_eq!(followers.len(), 1);
    assert_eq!(followers[0]["id"], ann);
    assert_eq!(followers[0]["name"], "Ann");
    assert!(data["bo"]["userSubscribedTo"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_subscribe_is_null_with_conflict() {
    let schema = setup_schema().await;
    let ann = create_test_user(&schema, "Ann", 10.0).await;
    let bo = create_test_user(&schema, "Bo", 5.0).await;

    execute_ok(&schema, SUBSCRIBE, json!({ "userId": ann, "authorId": bo })).await;
    let response = execute_graphql(&schema, SUBSCRIBE, pair(&ann, &bo)).await;

    assert_eq!(first_error_code(&response).as_deref(), Some("CONFLICT"));
    let data = response.data.into_json().unwrap();
    assert!(data["subscribeTo"].is_null());

    let data = execute_ok(
        &schema,
        "query F($id: UUID!) { user(id: $id) { userSubscribedTo { id } } }",
        json!({ "id": ann }),
    )
    .await;
    assert_eq!(data["user"]["userSubscribedTo"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_subscribe_to_missing_user_is_null_with_not_found() {
    let schema = setup_schema().await;
    let ann = create_test_user(&schema, "Ann", 10.0).await;
    let ghost = Uuid::new_v4().to_string();

    for (user_id, author_id) in [(&ann, &ghost), (&ghost, &ann)] {
        let response = execute_graphql(&schema, SUBSCRIBE, pair(user_id, author_id)).await;

        assert_eq!(first_error_code(&response).as_deref(), Some("NOT_FOUND"));
        let data = response.data.into_json().unwrap();
        assert!(data["subscribeTo"].is_null());
    }
}

#[tokio::test]
async fn test_user_can_subscribe_to_themselves_once() {
    let schema = setup_schema().await;
    let ann = create_test_user(&schema, "Ann", 10.0).await;

    let data = execute_ok(&schema, SUBSCRIBE, json!({ "userId": ann, "authorId": ann })).await;
    assert_eq!(data["subscribeTo"], "Subscribed successfully");

    let response = execute_graphql(&schema, SUBSCRIBE, pair(&ann, &ann)).await;
    assert_eq!(first_error_code(&response).as_deref(), Some("CONFLICT"));
    assert!(response.data.into_json().unwrap()["subscribeTo"].is_null());

    let data = execute_ok(
        &schema,
        r#"
        query SelfEdge($id: UUID!) {
            user(id: $id) { userSubscribedTo { id } subscribedToUser { id } }
        }
        "#,
        json!({ "id": ann }),
    )
    .await;

    let followed = data["user"]["userSubscribedTo"].as_array().unwrap();
    let followers = data["user"]["subscribedToUser"].as_array().unwrap();
    assert_eq!(followed.len(), 1);
    assert_eq!(followed[0]["id"], ann);
    assert_eq!(followers.len(), 1);
    assert_eq!(followers[0]["id"], ann);
}

#[tokio::test]
async fn test_second_unsubscribe_fails() {
    let schema = setup_schema().await;
    let ann = create_test_user(&schema, "Ann", 10.0).await;
    let bo = create_test_user(&schema, "Bo", 5.0).await;

    execute_ok(&schema, SUBSCRIBE, json!({ "userId": ann, "authorId": bo })).await;

    let data = execute_ok(&schema, UNSUBSCRIBE, json!({ "userId": ann, "authorId": bo })).await;
    assert_eq!(data["unsubscribeFrom"], "Unsubscribed successfully");

    let response = execute_graphql(&schema, UNSUBSCRIBE, pair(&ann, &bo)).await;
    assert_eq!(first_error_code(&response).as_deref(), Some("NOT_FOUND"));
}

#[tokio::test]
async fn test_concurrent_subscribe_creates_one_edge() {
    let schema = setup_schema().await;
    let ann = create_test_user(&schema, "Ann", 10.0).await;
    let bo = create_test_user(&schema, "Bo", 5.0).await;

    let responses = futures_util::future::join_all(
        (0..8).map(|_| execute_graphql(&schema, SUBSCRIBE, pair(&ann, &bo))),
    )
    .await;

    let succeeded = responses.iter().filter(|r| r.errors.is_empty()).count();
    let conflicts = responses
        .iter()
        .filter(|r| first_error_code(r).as_deref() == Some("CONFLICT"))
        .count();
    assert_eq!(succeeded, 1);
    assert_eq!(conflicts, 7);
}

#[tokio::test]
async fn test_deleting_user_removes_their_edges() {
    let schema = setup_schema().await;
    let ann = create_test_user(&schema, "Ann", 10.0).await;
    let bo = create_test_user(&schema, "Bo", 5.0).await;

    execute_ok(&schema, SUBSCRIBE, json!({ "userId": ann, "authorId": bo })).await;
    execute_ok(
        &schema,
        "mutation D($id: UUID!) { deleteUser(id: $id) }",
        json!({ "id": ann }),
    )
    .await;

    let data = execute_ok(
        &schema,
        "query F($id: UUID!) { user(id: $id) { subscribedToUser { id } } }",
        json!({ "id": bo }),
    )
    .await;
    assert!(data["user"]["subscribedToUser"]
        .as_array()
        .unwrap()
        .is_empty());
}
