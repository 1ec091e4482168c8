use crate::extended::GetDatasExtended;
use crate::post::PostInfo;

use serde_json::json;

fn post_json(id: u32, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "created_by_id": 1,
        "title": title,
        "content_type": 0,
        "likes": 0,
        "dislikes": 0,
        "views": 10,
        "total_comment": 0,
        "total_comment_post": 0,
        "last_comment_at": 0,
        "last_comment_by_id": 0,
        "category_id": 2,
        "tags": ["rust"],
        "created_at": 1700000000,
        "last_edit_at": 1700000000,
        "last_edit_by_id": 1,
        "status": 0
    })
}

/// Sideloaded maps arrive keyed by stringified ids (JSON object keys).
#[test]
fn given_extended_listing_when_deserialized_then_maps_are_id_keyed() {
    let body = json!({
        "data": { "items": [post_json(5, "hello")], "total": 1 },
        "users": {
            "1": {
                "id": 1,
                "username": "alice",
                "alias": "Alice",
                "group_ids": [],
                "status": 0,
                "user_type": 1,
                "signature": "",
                "created_at": 1700000000,
                "total_post": 1,
                "total_comment": 0
            }
        }
    });

    let extended: GetDatasExtended<PostInfo> = serde_json::from_value(body).unwrap();

    assert_eq!(extended.data.total, 1);
    assert_eq!(extended.data.items[0].title, "hello");
    assert_eq!(extended.user(1).unwrap().username, "alice");
    assert!(extended.user(99).is_none());
    assert!(extended.post(5).is_none(), "no posts map was sideloaded");
    assert!(extended.category(2).is_none());
}

#[test]
fn given_minimal_listing_when_deserialized_then_optional_maps_are_none() {
    let body = json!({
        "data": { "items": [], "total": 0 }
    });

    let extended: GetDatasExtended<PostInfo> = serde_json::from_value(body).unwrap();

    assert!(extended.posts.is_none());
    assert!(extended.comments.is_none());
    assert!(extended.users.is_none());
    assert!(extended.posts_like_status.is_none());
}
