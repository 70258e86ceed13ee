// Standard library
use std::net::IpAddr;

// 3rd party crates
use reqwest::StatusCode;
use serde_json::json;
use tracing::{debug, info};

// Project imports
use crate::zones::types::Zone;

// Current module imports
use super::constants::{BUNNY_API_BASE, PLACEHOLDER_RECORD_VALUE, RECORD_TYPE_A};
use super::errors::BunnyError;
use super::functions::create_reqwest_client;
use super::models::{RecordItem, UpdateRecord, ZoneItem, ZoneListResponse};
use super::types::Bunny;

impl Bunny {
    /// Creates a client for the public Bunny API endpoint.
    pub fn new(api_key: &str) -> Result<Self, BunnyError> {
        Ok(Self {
            client: create_reqwest_client(api_key)?,
            base_url: BUNNY_API_BASE.to_string(),
        })
    }

    /// Creates a client against a custom endpoint, for tests.
    #[cfg(test)]
    pub(crate) fn with_base_url(api_key: &str, base_url: String) -> Result<Self, BunnyError> {
        Ok(Self {
            client: create_reqwest_client(api_key)?,
            base_url,
        })
    }

    /// Resolves a zone name to its provider zone and A record identifiers.
    ///
    /// Returns [`BunnyError::ZoneNotFound`] when the search yields no zone,
    /// or the zone has no A record; callers may recover from that by
    /// provisioning the zone.
    pub async fn resolve_zone(&self, name: &str) -> Result<Zone, BunnyError> {
        let url = format!("{}/dnszone", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("search", name)])
            .send()
            .await
            .map_err(|e| BunnyError::ResolveFailed {
                zone: name.to_string(),
                message: format!("Failed to send zone search request: {}", e),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(BunnyError::ResolveFailed {
                zone: name.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        let data: ZoneListResponse =
            response
                .json()
                .await
                .map_err(|e| BunnyError::ResolveFailed {
                    zone: name.to_string(),
                    message: format!("Failed to parse zone search response: {}", e),
                })?;

        let zone: ZoneItem = data
            .items
            .into_iter()
            .next()
            .ok_or_else(|| BunnyError::ZoneNotFound(name.to_string()))?;

        let record: &RecordItem = zone
            .records
            .iter()
            .find(|record| record.record_type == RECORD_TYPE_A)
            .ok_or_else(|| BunnyError::ZoneNotFound(name.to_string()))?;

        debug!(
            zone = %name,
            zone_id = zone.id,
            record_id = record.id,
            "Resolved zone identifiers"
        );

        Ok(Zone::new(name, zone.id.to_string(), record.id.to_string()))
    }

    /// Provisions a new zone with an A record at the zone apex.
    ///
    /// The record starts out with a placeholder value; the first poll tick
    /// rewrites it with the detected address.
    pub async fn create_zone(&self, name: &str) -> Result<Zone, BunnyError> {
        info!(zone = %name, "Creating DNS zone");

        let url = format!("{}/dnszone", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&json!({ "Domain": name }))
            .send()
            .await
            .map_err(|e| BunnyError::CreateFailed {
                zone: name.to_string(),
                message: format!("Failed to send zone create request: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(BunnyError::CreateFailed {
                zone: name.to_string(),
                message: format!("HTTP {} - {}", status, error_body),
            });
        }

        let zone: ZoneItem = response.json().await.map_err(|e| BunnyError::CreateFailed {
            zone: name.to_string(),
            message: format!("Failed to parse zone create response: {}", e),
        })?;

        let zone_id = zone.id.to_string();
        let record = self.create_record(name, &zone_id).await?;

        info!(
            zone = %name,
            zone_id = %zone_id,
            record_id = record.id,
            "Created DNS zone"
        );

        Ok(Zone::new(name, zone_id, record.id.to_string()))
    }

    /// Adds the apex A record to a freshly created zone.
    async fn create_record(&self, name: &str, zone_id: &str) -> Result<RecordItem, BunnyError> {
        let url = format!("{}/dnszone/{}/records", self.base_url, zone_id);

        let response = self
            .client
            .put(&url)
            .json(&json!({
                "Type": RECORD_TYPE_A,
                "Name": "",
                "Value": PLACEHOLDER_RECORD_VALUE,
            }))
            .send()
            .await
            .map_err(|e| BunnyError::CreateFailed {
                zone: name.to_string(),
                message: format!("Failed to send record create request: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BunnyError::CreateFailed {
                zone: name.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        response.json().await.map_err(|e| BunnyError::CreateFailed {
            zone: name.to_string(),
            message: format!("Failed to parse record create response: {}", e),
        })
    }

    /// Pushes a new value for the zone's A record.
    ///
    /// The provider signals success for this operation with `204 No
    /// Content`, not a data-bearing response.
    pub async fn update_zone_record(&self, zone: &Zone, ip: IpAddr) -> Result<(), BunnyError> {
        let url = format!(
            "{}/dnszone/{}/records/{}",
            self.base_url, zone.zone_id, zone.record_id
        );

        let body = UpdateRecord {
            id: zone.record_id.clone(),
            record_type: RECORD_TYPE_A,
            value: ip.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| BunnyError::UpdateFailed {
                zone: zone.name.clone(),
                message: format!("Failed to send update request: {}", e),
            })?;

        let status = response.status();
        if status != StatusCode::NO_CONTENT {
            return Err(BunnyError::UpdateFailed {
                zone: zone.name.clone(),
                message: format!("HTTP {}", status),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn client(server: &MockServer) -> Bunny {
        Bunny::with_base_url("test-api-key", server.uri()).unwrap()
    }

    #[tokio::test]
    async fn resolve_zone_maps_payload_identifiers() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/dnszone"))
            .and(query_param("search", "example.com"))
            .and(header("AccessKey", "test-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Items": [{
                    "Id": 42,
                    "Records": [
                        { "Id": 11, "Type": 3, "Name": "www" },
                        { "Id": 7, "Type": 0, "Name": "" }
                    ]
                }]
            })))
            .mount(&server)
            .await;

        let zone = client(&server)
            .await
            .resolve_zone("example.com")
            .await
            .unwrap();

        assert_eq!(zone.name, "example.com");
        assert_eq!(zone.zone_id, "42");
        assert_eq!(zone.record_id, "7");
    }

    #[tokio::test]
    async fn resolve_zone_with_no_items_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/dnszone"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "Items": [] })),
            )
            .mount(&server)
            .await;

        let err = client(&server)
            .await
            .resolve_zone("example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, BunnyError::ZoneNotFound(name) if name == "example.com"));
    }

    #[tokio::test]
    async fn resolve_zone_without_a_record_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/dnszone"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Items": [{
                    "Id": 42,
                    "Records": [{ "Id": 11, "Type": 3, "Name": "" }]
                }]
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .await
            .resolve_zone("example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, BunnyError::ZoneNotFound(_)));
    }

    #[tokio::test]
    async fn resolve_zone_propagates_unexpected_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/dnszone"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client(&server)
            .await
            .resolve_zone("example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, BunnyError::ResolveFailed { .. }));
    }

    #[tokio::test]
    async fn update_zone_record_posts_the_record_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/dnszone/42/records/7"))
            .and(body_json(serde_json::json!({
                "Id": "7",
                "Type": 0,
                "Value": "203.0.113.5"
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let zone = Zone::new("example.com", "42", "7");
        let ip: IpAddr = "203.0.113.5".parse().unwrap();

        client(&server)
            .await
            .update_zone_record(&zone, ip)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn update_zone_record_requires_no_content() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/dnszone/42/records/7"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let zone = Zone::new("example.com", "42", "7");
        let ip: IpAddr = "203.0.113.5".parse().unwrap();

        let err = client(&server)
            .await
            .update_zone_record(&zone, ip)
            .await
            .unwrap_err();

        assert!(matches!(err, BunnyError::UpdateFailed { .. }));
    }

    #[tokio::test]
    async fn create_zone_provisions_zone_and_record() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/dnszone"))
            .and(body_json(serde_json::json!({ "Domain": "new.example" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "Id": 99,
                "Records": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/dnszone/99/records"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "Id": 123,
                "Type": 0,
                "Name": ""
            })))
            .expect(1)
            .mount(&server)
            .await;

        let zone = client(&server).await.create_zone("new.example").await.unwrap();

        assert_eq!(zone.name, "new.example");
        assert_eq!(zone.zone_id, "99");
        assert_eq!(zone.record_id, "123");
    }

    #[tokio::test]
    async fn create_zone_propagates_provider_rejection() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/dnszone"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let err = client(&server)
            .await
            .create_zone("new.example")
            .await
            .unwrap_err();

        assert!(matches!(err, BunnyError::CreateFailed { .. }));
    }
}
