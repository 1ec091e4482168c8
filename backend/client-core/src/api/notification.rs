use crate::api::ForumClient;
use crate::error::forum_client::ForumClientError;

use models::extended::GetDatasExtended;
use models::notification::{
    GetUserNotificationsQuery, SetUserNotificationReadedQuery, UserNotification,
};

impl ForumClient {
    pub async fn get_user_notifications(
        &self,
        query: &GetUserNotificationsQuery,
    ) -> Result<GetDatasExtended<UserNotification>, ForumClientError> {
        self.get_json_query("user_notifications", query).await
    }

    pub async fn set_user_notification_readed(
        &self,
        query: &SetUserNotificationReadedQuery,
    ) -> Result<UserNotification, ForumClientError> {
        self.get_json_query("set_user_notification_readed", query)
            .await
    }
}
