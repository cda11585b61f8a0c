use crate::models::UserId;
use crate::services::store::{ChannelError, ChannelService};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;

/// Payload accepted by the channel service
#[derive(Debug, Serialize)]
struct CreateChannelPayload<'a> {
    #[serde(rename = "channelId")]
    channel_id: &'a str,
    #[serde(rename = "participantA")]
    participant_a: UserId,
    #[serde(rename = "participantB")]
    participant_b: UserId,
}

/// HTTP client for the chat channel service
///
/// Handles:
/// - Creating a channel when a match is accepted
/// - Looking up whether a channel exists
pub struct HttpChannelClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl HttpChannelClient {
    /// Create a new channel client
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Result<Self, ChannelError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }

    fn channels_url(&self) -> String {
        format!("{}/channels", self.base_url.trim_end_matches('/'))
    }

    /// Check whether a channel with the given id exists
    pub async fn channel_exists(&self, channel_id: &str) -> Result<bool, ChannelError> {
        let url = format!("{}/{}", self.channels_url(), urlencoding::encode(channel_id));

        tracing::debug!("Looking up channel: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(ChannelError::Api(format!(
                "Failed to look up channel {}: {}",
                channel_id, status
            ))),
        }
    }
}

#[async_trait]
impl ChannelService for HttpChannelClient {
    async fn create_channel(
        &self,
        channel_id: &str,
        participant_a: UserId,
        participant_b: UserId,
    ) -> Result<(), ChannelError> {
        let payload = CreateChannelPayload {
            channel_id,
            participant_a,
            participant_b,
        };

        let response = self
            .client
            .post(self.channels_url())
            .header("X-Api-Key", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::CONFLICT {
            return Err(ChannelError::AlreadyExists(channel_id.to_string()));
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Failed to create channel {}: {} - {}", channel_id, status, body);
            return Err(ChannelError::Api(format!(
                "Failed to create channel: {}",
                status
            )));
        }

        tracing::debug!(
            "Created channel {} for {} and {}",
            channel_id,
            participant_a,
            participant_b
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(server: &mockito::ServerGuard) -> HttpChannelClient {
        HttpChannelClient::new(
            format!("{}/", server.url()),
            "test_key".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_channel_posts_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/channels")
            .match_header("x-api-key", "test_key")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "channelId": "chat_3_7",
                "participantA": 3,
                "participantB": 7,
            })))
            .with_status(201)
            .create_async()
            .await;

        let client = client_for(&server);
        client.create_channel("chat_3_7", 3, 7).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_channel_conflict() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/channels")
            .with_status(409)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.create_channel("chat_1_2", 1, 2).await.unwrap_err();

        assert!(matches!(err, ChannelError::AlreadyExists(id) if id == "chat_1_2"));
    }

    #[tokio::test]
    async fn test_create_channel_server_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/channels")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.create_channel("chat_1_2", 1, 2).await.unwrap_err();

        assert!(matches!(err, ChannelError::Api(_)));
    }

    #[tokio::test]
    async fn test_channel_exists() {
        let mut server = mockito::Server::new_async().await;
        let _found = server
            .mock("GET", "/channels/chat_1_2")
            .with_status(200)
            .create_async()
            .await;
        let _missing = server
            .mock("GET", "/channels/chat_1_3")
            .with_status(404)
            .create_async()
            .await;

        let client = client_for(&server);

        assert!(client.channel_exists("chat_1_2").await.unwrap());
        assert!(!client.channel_exists("chat_1_3").await.unwrap());
    }
}
