use crate::casdoor_client::CasdoorClient;
use crate::entity::impl_entity;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub owner: String,
    pub name: String,
    pub created_time: String,
    pub updated_time: String,

    pub id: String,
    #[serde(rename = "type")]
    pub user_type: String,
    pub password: String,
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
    pub email: String,
    pub email_verified: bool,
    pub phone: String,
    pub country_code: String,
    pub region: String,
    pub location: String,
    pub affiliation: String,
    pub title: String,
    pub homepage: String,
    pub bio: String,
    pub tag: String,
    pub language: String,
    pub gender: String,
    pub birthday: String,
    pub education: String,
    pub score: i64,
    pub karma: i64,
    pub ranking: i64,
    pub is_default_avatar: bool,
    pub is_online: bool,
    pub is_admin: bool,
    pub is_forbidden: bool,
    pub is_deleted: bool,
    pub signup_application: String,
    pub created_ip: String,
    pub last_signin_time: String,
    pub last_signin_ip: String,

    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub properties: HashMap<String, String>,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub groups: Vec<String>,
}

impl_entity!(User, "user", "users");

impl CasdoorClient {
    pub async fn get_users(&self) -> Result<Vec<User>> {
        self.get_entities().await
    }

    /// Users ordered by the `sorter` field, at most `limit` of them.
    pub async fn get_sorted_users(&self, sorter: &str, limit: usize) -> Result<Vec<User>> {
        let limit = limit.to_string();
        let query = [
            ("owner", self.settings.organization_name.as_str()),
            ("sorter", sorter),
            ("limit", limit.as_str()),
        ];

        let users: Option<Vec<User>> = self.get_data("get-sorted-users", &query).await?;
        Ok(users.unwrap_or_default())
    }

    /// Number of users, optionally only those (not) online.
    pub async fn get_user_count(&self, is_online: Option<bool>) -> Result<i64> {
        let is_online = match is_online {
            Some(true) => "1",
            Some(false) => "0",
            None => "",
        };
        let query = [
            ("owner", self.settings.organization_name.as_str()),
            ("isOnline", is_online),
        ];

        self.get_data("get-user-count", &query).await
    }

    pub async fn get_user(&self, name: &str) -> Result<Option<User>> {
        self.get_entity(name).await
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let query = [
            ("owner", self.settings.organization_name.as_str()),
            ("email", email),
        ];

        self.get_data("get-user", &query).await
    }

    pub async fn add_user(&self, user: &User) -> Result<bool> {
        self.add_entity(user).await
    }

    pub async fn update_user(&self, user: &User) -> Result<bool> {
        self.update_entity(user).await
    }

    pub async fn update_user_columns(&self, user: &User, columns: &[&str]) -> Result<bool> {
        self.update_entity_columns(user, columns).await
    }

    pub async fn delete_user(&self, user: &User) -> Result<bool> {
        self.delete_entity(user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn type_field_is_renamed() {
        let user: User = serde_json::from_value(json!({
            "owner": "built-in",
            "name": "alice",
            "type": "normal-user",
            "isAdmin": true,
            "properties": { "team": "blue" }
        }))
        .unwrap();

        assert_eq!(user.user_type, "normal-user");
        assert!(user.is_admin);
        assert_eq!(user.properties["team"], "blue");
        assert_eq!(serde_json::to_value(&user).unwrap()["type"], "normal-user");
    }
}
