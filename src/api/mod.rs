//! Restaurant API module.
//!
//! `RestaurantApi` is the only outbound collaborator of the form: it posts a
//! stamped restaurant payload to the manager creation endpoint.

mod client;
mod error;

pub use error::ApiError;

use crate::restaurant::RestaurantPayload;
use client::Client;
use log::*;

/// Path of the restaurant creation endpoint, relative to the API base URL.
pub const CREATE_RESTAURANT_PATH: &str = "manager/restaurants";

/// Responsible for asynchronous interaction with the restaurant API.
///
pub struct RestaurantApi {
    client: Client,
}

impl RestaurantApi {
    /// Returns a new instance for the base URL, authenticating with the
    /// access token when one is configured.
    ///
    pub fn new(access_token: Option<&str>, base_url: &str) -> RestaurantApi {
        debug!("Initializing restaurant API client for {}...", base_url);
        RestaurantApi {
            client: Client::new(access_token, base_url),
        }
    }

    /// Create the restaurant described by the payload. Any success status
    /// means the restaurant was created; the response body is only logged.
    ///
    pub async fn create_restaurant(&self, payload: &RestaurantPayload) -> Result<(), ApiError> {
        debug!(
            "Posting restaurant '{}' (ID {})...",
            payload.restaurant.name, payload.restaurant_id
        );
        let response = self.client.post(CREATE_RESTAURANT_PATH, payload).await?;
        let status = response.status();
        match response.text().await {
            Ok(body) => debug!("Restaurant creation returned status {}: {}", status, body),
            Err(err) => warn!(
                "Restaurant creation returned status {} but the response body could not be read: {}",
                status, err
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restaurant::{DayOfWeek, OperatingHoursSlot, RestaurantDraft, TimeOfDay};
    use chrono::Utc;
    use fake::faker::address::en::{CityName, StateAbbr, StreetName, ZipCode};
    use fake::faker::company::en::CompanyName;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::lorem::en::Sentence;
    use fake::Fake;
    use httpmock::prelude::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use uuid::Uuid;

    fn payload() -> RestaurantPayload {
        let draft = RestaurantDraft {
            name: CompanyName().fake(),
            description: Sentence(3..8).fake(),
            address_line1: StreetName().fake(),
            city: CityName().fake(),
            state: StateAbbr().fake(),
            zip_code: ZipCode().fake(),
            cost_rating: "2".to_string(),
            email: SafeEmail().fake(),
            phone_number: "555-123-4567".to_string(),
            operating_hours: vec![OperatingHoursSlot::new(
                DayOfWeek::Tuesday,
                TimeOfDay::new(11, 0).unwrap(),
                TimeOfDay::new(21, 0).unwrap(),
            )],
            ..RestaurantDraft::default()
        };
        RestaurantPayload::new(draft, Utc::now())
    }

    #[tokio::test]
    async fn create_restaurant_success() -> anyhow::Result<()> {
        let token = Uuid::new_v4();
        let authorization = format!("Bearer {}", token);
        let payload = payload();

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/manager/restaurants")
                    .header("Authorization", authorization.as_str())
                    .json_body_includes(
                        json!({
                            "name": payload.restaurant.name,
                            "restaurant_id": payload.restaurant_id,
                            "created_at": payload.created_at,
                            "operating_hours": [
                                { "day_of_week": "tuesday", "opening_time": "11:00", "closing_time": "21:00" }
                            ]
                        })
                        .to_string(),
                    );
                then.status(201).json_body(json!({ "message": "created" }));
            })
            .await;

        let api = RestaurantApi::new(Some(&token.to_string()), &server.base_url());
        api.create_restaurant(&payload).await?;
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn create_restaurant_without_token() -> anyhow::Result<()> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/manager/restaurants")
                    .header_missing("Authorization");
                then.status(200);
            })
            .await;

        let api = RestaurantApi::new(None, &server.base_url());
        api.create_restaurant(&payload()).await?;
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn create_restaurant_rejected() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/manager/restaurants");
                then.status(401).body("Not authenticated");
            })
            .await;

        let api = RestaurantApi::new(None, &server.base_url());
        let result = api.create_restaurant(&payload()).await;
        match result {
            Err(ApiError::Status { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Not authenticated");
            }
            other => panic!("expected status error, got {:?}", other),
        }
        mock.assert_async().await;
    }

    /// Read one HTTP request, headers and body, from the socket.
    async fn read_request(socket: &mut TcpStream) -> std::io::Result<()> {
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let read = socket.read(&mut chunk).await?;
            if read == 0 {
                return Ok(());
            }
            request.extend_from_slice(&chunk[..read]);
            let text = String::from_utf8_lossy(&request);
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if request.len() >= end + 4 + length {
                    return Ok(());
                }
            }
        }
    }

    #[tokio::test]
    async fn create_restaurant_with_truncated_body_succeeds() -> anyhow::Result<()> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let address = listener.local_addr()?;
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await?;
            read_request(&mut socket).await?;
            socket
                .write_all(b"HTTP/1.1 201 Created\r\nContent-Length: 100\r\n\r\n{\"id\":")
                .await?;
            socket.shutdown().await?;
            Ok::<(), std::io::Error>(())
        });

        let api = RestaurantApi::new(None, &format!("http://{}", address));
        api.create_restaurant(&payload()).await?;
        server.await??;
        Ok(())
    }

    #[tokio::test]
    async fn create_restaurant_unreachable() {
        let api = RestaurantApi::new(None, "http://127.0.0.1:1");
        let result = api.create_restaurant(&payload()).await;
        assert!(matches!(result, Err(ApiError::HttpRequest(_))));
    }
}
