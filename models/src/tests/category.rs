use crate::ContentType;
use crate::category::{Category, CategoryStatus};
use crate::user::{SafeUserInfo, UserStatus, UserType};

fn category_fixture() -> Category {
    Category {
        id: 2,
        title: "General".into(),
        description: None,
        description_content_type: ContentType::Markdown,
        status: CategoryStatus::Active,
        read_level: UserType::Guest,
        write_level: UserType::General,
        comment_level: UserType::General,
        moderator_ids: vec![7],
        group_ids: vec![],
        total_post: 0,
    }
}

fn user_fixture(id: u32, user_type: UserType) -> SafeUserInfo {
    SafeUserInfo {
        id,
        username: "alice".into(),
        alias: "Alice".into(),
        group_ids: vec![],
        status: UserStatus::Active,
        user_type,
        avatar_url: None,
        signature: String::new(),
        created_at: 1700000000,
        total_post: 0,
        total_comment: 0,
    }
}

#[test]
fn given_admin_or_listed_moderator_when_checked_then_has_manage_permission() {
    let category = category_fixture();

    assert!(category.has_manage_permission(&user_fixture(1, UserType::Administrator)));
    assert!(category.has_manage_permission(&user_fixture(7, UserType::General)));
    assert!(!category.has_manage_permission(&user_fixture(8, UserType::General)));
}

#[test]
fn given_read_level_when_checked_then_lower_levels_are_rejected() {
    let mut category = category_fixture();
    category.read_level = UserType::General;

    assert!(category.readable_by(UserType::General));
    assert!(category.readable_by(UserType::Administrator));
    assert!(!category.readable_by(UserType::Guest));
}
