//! Request-pipeline tests for the typed API wrappers: header injection,
//! query serialization, body shapes, and error lowering.

use crate::helpers::{TEST_TOKEN, client_fixture, detail_error_json, user_json};

use client_core::api::{
    AUTHORIZATION_HEADER_KEY, BYPASS_KEY_HEADER_KEY, FORWARDED_FOR_HEADER_KEY,
};

use models::ContentType;
use models::detail_error::DetailErrorCode;
use models::post::{GetPostsQuery, PostAlgorithmOrder, PostToCreate};
use models::user::{GetUsersQuery, GetUsersSort};
use models::verification::VerificationTargetWrapper;

use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn post_json(id: u32, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "created_by_id": 1,
        "title": title,
        "content": "body text",
        "content_type": 0,
        "likes": 2,
        "dislikes": 0,
        "views": 40,
        "total_comment": 1,
        "total_comment_post": 1,
        "last_comment_at": 1700000100,
        "last_comment_by_id": 1,
        "category_id": 2,
        "tags": ["rust"],
        "created_at": 1700000000,
        "last_edit_at": 1700000000,
        "last_edit_by_id": 1,
        "status": 0
    })
}

#[tokio::test]
async fn given_stored_token_when_requesting_then_headers_are_injected() {
    let (server, mut client, _store_dir) = client_fixture().await;

    client.token_store().set(TEST_TOKEN, 30).expect("seed token");
    client.forwarded_for = Some("203.0.113.9".to_string());
    client.bypass_key = Some("trusted-deploy".to_string());

    Mock::given(method("GET"))
        .and(path("/api/post/5"))
        .and(header(AUTHORIZATION_HEADER_KEY, TEST_TOKEN))
        .and(header(FORWARDED_FOR_HEADER_KEY, "203.0.113.9"))
        .and(header(BYPASS_KEY_HEADER_KEY, "trusted-deploy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_json(5, "hello")))
        .expect(1)
        .mount(&server)
        .await;

    let post = client.get_post(5).await.expect("fetch post");

    assert_eq!(post.id, 5);
    assert_eq!(post.title, "hello");
}

#[tokio::test]
async fn given_typed_query_when_listing_users_then_params_serialize_as_integers() {
    let (server, client, _store_dir) = client_fixture().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("index", "0"))
        .and(query_param("limit", "20"))
        .and(query_param("sort", "1"))
        .and(query_param("desc", "true"))
        .and(query_param("extended", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "items": [user_json(1, "alice")], "total": 1 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let listing = client
        .get_users(&GetUsersQuery {
            index: 0,
            limit: 20,
            sort: GetUsersSort::Username,
            desc: true,
            extended: true,
        })
        .await
        .expect("list users");

    assert_eq!(listing.data.total, 1);
}

/// Optional query fields are omitted entirely, not sent as empty strings.
#[tokio::test]
async fn given_optional_fields_unset_when_listing_posts_then_params_are_omitted() {
    let (server, client, _store_dir) = client_fixture().await;

    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .and(query_param("sort", "3"))
        .and(query_param("index", "0"))
        .and(query_param("limit", "10"))
        .and(query_param("extended", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "items": [], "total": 0 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let listing = client
        .get_posts_no_content(&GetPostsQuery {
            distinct: None,
            created_by_id: None,
            category_id: None,
            sort: PostAlgorithmOrder::Newest,
            time_num: None,
            time: None,
            index: 0,
            limit: 10,
            extended: false,
            top_order_enable: None,
        })
        .await
        .expect("list posts");

    assert!(listing.data.items.is_empty());
    let received = &server.received_requests().await.expect("requests recorded")[0];
    assert!(
        !received.url.query().unwrap_or("").contains("category_id"),
        "unset optional params must not appear in the query string"
    );
}

#[tokio::test]
async fn given_create_post_when_sent_then_wrapper_body_matches_wire_shape() {
    let (server, client, _store_dir) = client_fixture().await;

    Mock::given(method("POST"))
        .and(path("/api/post"))
        .and(body_json(json!({
            "target": {
                "title": "hello",
                "content": "body text",
                "content_type": 0,
                "category_id": 2,
                "tags": ["rust"]
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_json(9, "hello")))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .create_post(&VerificationTargetWrapper {
            target: PostToCreate {
                title: "hello".into(),
                content: "body text".into(),
                content_type: ContentType::Markdown,
                category_id: 2,
                tags: vec!["rust".into()],
                cover_url: None,
                top_index: None,
            },
            verification: None,
        })
        .await
        .expect("create post");

    assert_eq!(created.id, 9);
}

#[tokio::test]
async fn given_structured_error_body_when_requesting_then_api_error_is_typed() {
    let (server, client, _store_dir) = client_fixture().await;

    Mock::given(method("GET"))
        .and(path("/api/post/404"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(detail_error_json(10400, "Post not found.")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let error = client.get_post(404).await.expect_err("request fails");

    let detail = error.detail();
    assert!(detail.is(DetailErrorCode::PostNotFound));
    assert_eq!(detail.msg, "Post not found.");
    assert_eq!(error.status().expect("has status").0, 404);
}

#[tokio::test]
async fn given_shapeless_error_body_when_requesting_then_code_zero_with_raw_payload() {
    let (server, client, _store_dir) = client_fixture().await;

    Mock::given(method("GET"))
        .and(path("/api/server_info"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>gateway died</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let error = client.get_server_info().await.expect_err("request fails");

    let detail = error.detail();
    assert_eq!(detail.code, 0);
    assert_eq!(detail.msg, "<html>gateway died</html>");
}

#[tokio::test]
async fn given_presigned_url_when_uploading_then_bytes_and_auth_travel() {
    let (server, client, _store_dir) = client_fixture().await;

    client.token_store().set(TEST_TOKEN, 30).expect("seed token");

    Mock::given(method("PUT"))
        .and(path("/bucket/avatar.png"))
        .and(header(AUTHORIZATION_HEADER_KEY, TEST_TOKEN))
        .and(body_string("raw image bytes"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let presigned = format!("{}/bucket/avatar.png", server.uri());
    client
        .upload_file(&presigned, b"raw image bytes".to_vec())
        .await
        .expect("upload");
}
