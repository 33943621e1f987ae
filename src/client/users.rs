//! User administration endpoints (third-party authorities)

use super::Client;
use crate::error::Result;
use crate::http::RequestConfig;
use crate::types::JsonValue;
use serde_json::json;

impl Client {
    /// Create a user in a third-party authority's namespace
    pub async fn create_user(
        &self,
        authority: &str,
        username: &str,
        email: &str,
        display_name: Option<&str>,
        identities: Option<JsonValue>,
    ) -> Result<JsonValue> {
        let mut payload = json!({
            "authority": authority,
            "username": username,
            "email": email,
        });
        if let Some(display_name) = display_name {
            payload["display_name"] = json!(display_name);
        }
        if let Some(identities) = identities {
            payload["identities"] = identities;
        }
        self.http()
            .post(&self.http().url("users"), RequestConfig::new().json(payload))
            .await
    }

    /// Get a user by `acct:` id
    pub async fn get_user(&self, userid: &str) -> Result<JsonValue> {
        let url = self.http().endpoint(&["users", userid])?;
        self.http().get(&url, RequestConfig::new()).await
    }

    /// Update a user's email and/or display name
    pub async fn update_user(
        &self,
        userid: &str,
        email: Option<&str>,
        display_name: Option<&str>,
    ) -> Result<JsonValue> {
        let mut payload = json!({});
        if let Some(email) = email {
            payload["email"] = json!(email);
        }
        if let Some(display_name) = display_name {
            payload["display_name"] = json!(display_name);
        }
        let url = self.http().endpoint(&["users", userid])?;
        self.http()
            .patch(&url, RequestConfig::new().json(payload))
            .await
    }
}
