// Standard library
use std::net::IpAddr;
use std::time::Duration;

// 3rd party crates
use tracing::debug;

// Current module imports
use super::constants::{IP_LOOKUP_SERVICES, REQUEST_TIMEOUT_SECS, TRACE_IP_PREFIX};
use super::errors::IpResolutionError;
use super::types::{Extraction, IpResolver, LookupService};

impl Default for IpResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl IpResolver {
    pub fn new() -> Self {
        let services = IP_LOOKUP_SERVICES
            .iter()
            .map(|(url, extraction)| LookupService {
                url: (*url).to_string(),
                extraction: *extraction,
            })
            .collect();

        Self {
            client: reqwest::Client::new(),
            services,
        }
    }

    /// Builds a resolver against a custom service list, for tests.
    #[cfg(test)]
    pub(crate) fn with_services(services: Vec<LookupService>) -> Self {
        Self {
            client: reqwest::Client::new(),
            services,
        }
    }

    /// Resolves the current public IP address.
    ///
    /// Services are tried in order; per-service failures are routine and
    /// only surface at debug level. Fails once the whole list is
    /// exhausted.
    pub async fn resolve(&self) -> Result<IpAddr, IpResolutionError> {
        for service in &self.services {
            match self.query(service).await {
                Ok(ip) => {
                    debug!(service = %service.url, ip = %ip, "Resolved public IP address");
                    return Ok(ip);
                }
                Err(e) => {
                    debug!(
                        service = %service.url,
                        error = %e,
                        "IP lookup failed, trying next service"
                    );
                }
            }
        }

        Err(IpResolutionError::ServicesExhausted)
    }

    async fn query(&self, service: &LookupService) -> Result<IpAddr, IpResolutionError> {
        let response = self
            .client
            .get(&service.url)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .send()
            .await
            .map_err(|error| IpResolutionError::Request {
                service: service.url.clone(),
                error,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(IpResolutionError::Status {
                service: service.url.clone(),
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|error| IpResolutionError::Request {
                service: service.url.clone(),
                error,
            })?;

        let token = match service.extraction {
            Extraction::Trace => body
                .lines()
                .find_map(|line| line.strip_prefix(TRACE_IP_PREFIX))
                .unwrap_or(""),
            Extraction::Plain => body.lines().next().unwrap_or(""),
        }
        .trim();

        token
            .parse()
            .map_err(|_| IpResolutionError::InvalidResponse {
                service: service.url.clone(),
                response: token.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn service(server: &MockServer, route: &str, extraction: Extraction) -> LookupService {
        LookupService {
            url: format!("{}{}", server.uri(), route),
            extraction,
        }
    }

    async fn mount(server: &MockServer, route: &str, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(template)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn extracts_address_from_trace_response() {
        let server = MockServer::start().await;
        mount(
            &server,
            "/trace",
            ResponseTemplate::new(200)
                .set_body_string("fl=123abc\nh=1.1.1.1\nip=203.0.113.5\nts=1700000000.0\n"),
        )
        .await;

        let resolver =
            IpResolver::with_services(vec![service(&server, "/trace", Extraction::Trace)]);

        let ip = resolver.resolve().await.unwrap();
        assert_eq!(ip, "203.0.113.5".parse::<IpAddr>().unwrap());
    }

    #[tokio::test]
    async fn extracts_address_from_plain_response() {
        let server = MockServer::start().await;
        mount(
            &server,
            "/plain",
            ResponseTemplate::new(200).set_body_string("203.0.113.5\n"),
        )
        .await;

        let resolver =
            IpResolver::with_services(vec![service(&server, "/plain", Extraction::Plain)]);

        let ip = resolver.resolve().await.unwrap();
        assert_eq!(ip, "203.0.113.5".parse::<IpAddr>().unwrap());
    }

    #[tokio::test]
    async fn earlier_service_wins_when_it_succeeds() {
        let server = MockServer::start().await;
        mount(
            &server,
            "/first",
            ResponseTemplate::new(200).set_body_string("203.0.113.1"),
        )
        .await;
        mount(
            &server,
            "/second",
            ResponseTemplate::new(200).set_body_string("203.0.113.2"),
        )
        .await;

        let resolver = IpResolver::with_services(vec![
            service(&server, "/first", Extraction::Plain),
            service(&server, "/second", Extraction::Plain),
        ]);

        let ip = resolver.resolve().await.unwrap();
        assert_eq!(ip, "203.0.113.1".parse::<IpAddr>().unwrap());
    }

    #[tokio::test]
    async fn failed_services_are_skipped_in_order() {
        let server = MockServer::start().await;
        mount(&server, "/down", ResponseTemplate::new(500)).await;
        mount(
            &server,
            "/garbage",
            ResponseTemplate::new(200).set_body_string("<html>not an ip</html>"),
        )
        .await;
        mount(
            &server,
            "/up",
            ResponseTemplate::new(200).set_body_string("203.0.113.7"),
        )
        .await;

        let resolver = IpResolver::with_services(vec![
            service(&server, "/down", Extraction::Plain),
            service(&server, "/garbage", Extraction::Plain),
            service(&server, "/up", Extraction::Plain),
        ]);

        let ip = resolver.resolve().await.unwrap();
        assert_eq!(ip, "203.0.113.7".parse::<IpAddr>().unwrap());
    }

    #[tokio::test]
    async fn trace_without_ip_line_is_treated_as_failure() {
        let server = MockServer::start().await;
        mount(
            &server,
            "/trace",
            ResponseTemplate::new(200).set_body_string("fl=123abc\nts=1700000000.0\n"),
        )
        .await;
        mount(
            &server,
            "/plain",
            ResponseTemplate::new(200).set_body_string("203.0.113.9"),
        )
        .await;

        let resolver = IpResolver::with_services(vec![
            service(&server, "/trace", Extraction::Trace),
            service(&server, "/plain", Extraction::Plain),
        ]);

        let ip = resolver.resolve().await.unwrap();
        assert_eq!(ip, "203.0.113.9".parse::<IpAddr>().unwrap());
    }

    #[tokio::test]
    async fn exhausting_all_services_fails() {
        let server = MockServer::start().await;
        mount(&server, "/one", ResponseTemplate::new(503)).await;
        mount(
            &server,
            "/two",
            ResponseTemplate::new(200).set_body_string(""),
        )
        .await;

        let resolver = IpResolver::with_services(vec![
            service(&server, "/one", Extraction::Plain),
            service(&server, "/two", Extraction::Plain),
        ]);

        let err = resolver.resolve().await.unwrap_err();
        assert!(matches!(err, IpResolutionError::ServicesExhausted));
    }

    #[tokio::test]
    async fn ipv6_addresses_are_accepted() {
        let server = MockServer::start().await;
        mount(
            &server,
            "/plain",
            ResponseTemplate::new(200).set_body_string("2001:db8::1\n"),
        )
        .await;

        let resolver =
            IpResolver::with_services(vec![service(&server, "/plain", Extraction::Plain)]);

        let ip = resolver.resolve().await.unwrap();
        assert_eq!(ip, "2001:db8::1".parse::<IpAddr>().unwrap());
    }
}
