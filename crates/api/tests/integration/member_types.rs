use crate::common::*;
use serde_json::json;

#[tokio::test]
async fn test_member_types_query_returns_seeded_tiers() {
    let schema = setup_schema().await;

    let data = execute_ok(
        &schema,
        r#"
        query {
            memberTypes { id discount postsLimitPerMonth }
        }
        "#,
        json!({}),
    )
    .await;

    let member_types = data["memberTypes"].as_array().unwrap();
    assert_eq!(member_types.len(), 2);

    let business = member_types
        .iter()
        .find(|m| m["id"] == "BUSINESS")
        .expect("BUSINESS tier should be seeded");
    assert_eq!(business["discount"], 7.7);
    assert_eq!(business["postsLimitPerMonth"], 100);
}

#[tokio::test]
async fn test_member_type_by_id() {
    let schema = setup_schema().await;

    let data = execute_ok(
        &schema,
        r#"
        query GetMemberType($id: MemberTypeId!) {
            memberType(id: $id) { id discount postsLimitPerMonth }
        }
        "#,
        json!({ "id": "BASIC" }),
    )
    .await;

    assert_eq!(data["memberType"]["id"], "BASIC");
    assert_eq!(data["memberType"]["discount"], 2.3);
    assert_eq!(data["memberType"]["postsLimitPerMonth"], 20);
}

#[tokio::test]
async fn test_unknown_member_type_id_is_rejected() {
    let schema = setup_schema().await;

    let response = execute_graphql(
        &schema,
        r#"
        query {
            memberType(id: PREMIUM) { id }
        }
        "#,
        None,
    )
    .await;

    assert!(
        !response.errors.is_empty(),
        "Enum values outside BASIC/BUSINESS should fail validation"
    );
}
