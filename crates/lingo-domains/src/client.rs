//! Asynchronous domain and DNS record client implementation.

use crate::models::{Domain, DomainRecord};
use crate::Result;
use bytes::Bytes;
use lingo_core::client::Dispatch;
use lingo_core::error::Error;
use lingo_core::page::Page;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Client for domains and the records inside them.
#[derive(Clone)]
pub struct DomainClient {
    api: Arc<dyn Dispatch>,
}

impl DomainClient {
    /// Create a client on top of the given dispatcher.
    pub fn new(api: Arc<dyn Dispatch>) -> Self {
        Self { api }
    }

    /// List domains on the account.
    pub async fn list_domains(&self) -> Result<Page<Domain>> {
        let data = self
            .api
            .fetch("domains")
            .await
            .map_err(|err| err.context("failed to make request for ListDomains"))?;
        decode("ListDomains", &data)
    }

    /// Fetch a single domain.
    pub async fn view_domain(&self, id: u64) -> Result<Domain> {
        let data = self
            .api
            .fetch(&format!("domains/{id}"))
            .await
            .map_err(|err| err.context("failed to make request for ViewDomain"))?;
        decode("ViewDomain", &data)
    }

    /// Create a new domain.
    pub async fn create_domain(&self, domain: &Domain) -> Result<Domain> {
        let payload = encode("CreateDomain", domain)?;
        let data = self
            .api
            .create("domains", Some(payload))
            .await
            .map_err(|err| err.context("failed to make request for CreateDomain"))?;
        decode("CreateDomain", &data)
    }

    /// Update an existing domain.
    pub async fn update_domain(&self, id: u64, domain: &Domain) -> Result<Domain> {
        let payload = encode("UpdateDomain", domain)?;
        let data = self
            .api
            .replace(&format!("domains/{id}"), payload)
            .await
            .map_err(|err| err.context("failed to make request for UpdateDomain"))?;
        decode("UpdateDomain", &data)
    }

    /// Delete a domain.
    pub async fn delete_domain(&self, id: u64) -> Result<()> {
        self.api
            .remove(&format!("domains/{id}"))
            .await
            .map_err(|err| err.context("failed to make request for DeleteDomain"))?;
        Ok(())
    }

    /// List the records inside a domain.
    pub async fn list_domain_records(&self, domain_id: u64) -> Result<Page<DomainRecord>> {
        let data = self
            .api
            .fetch(&format!("domains/{domain_id}/records"))
            .await
            .map_err(|err| err.context("failed to make request for ListDomainRecords"))?;
        decode("ListDomainRecords", &data)
    }

    /// Fetch a single record.
    pub async fn view_domain_record(&self, domain_id: u64, record_id: u64) -> Result<DomainRecord> {
        let data = self
            .api
            .fetch(&format!("domains/{domain_id}/records/{record_id}"))
            .await
            .map_err(|err| err.context("failed to make request for ViewDomainRecord"))?;
        decode("ViewDomainRecord", &data)
    }

    /// Create a record inside a domain.
    pub async fn create_domain_record(
        &self,
        domain_id: u64,
        record: &DomainRecord,
    ) -> Result<DomainRecord> {
        let payload = encode("CreateDomainRecord", record)?;
        let data = self
            .api
            .create(&format!("domains/{domain_id}/records"), Some(payload))
            .await
            .map_err(|err| err.context("failed to make request for CreateDomainRecord"))?;
        decode("CreateDomainRecord", &data)
    }

    /// Update a record inside a domain.
    pub async fn update_domain_record(
        &self,
        domain_id: u64,
        record_id: u64,
        record: &DomainRecord,
    ) -> Result<DomainRecord> {
        let payload = encode("UpdateDomainRecord", record)?;
        let data = self
            .api
            .replace(&format!("domains/{domain_id}/records/{record_id}"), payload)
            .await
            .map_err(|err| err.context("failed to make request for UpdateDomainRecord"))?;
        decode("UpdateDomainRecord", &data)
    }

    /// Delete a record from a domain.
    pub async fn delete_domain_record(&self, domain_id: u64, record_id: u64) -> Result<()> {
        self.api
            .remove(&format!("domains/{domain_id}/records/{record_id}"))
            .await
            .map_err(|err| err.context("failed to make request for DeleteDomainRecord"))?;
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(op: &str, data: &[u8]) -> Result<T> {
    serde_json::from_slice(data)
        .map_err(|err| Error::Decode(format!("failed to decode {op} response: {err}")))
}

fn encode<T: Serialize>(op: &str, payload: &T) -> Result<Bytes> {
    serde_json::to_vec(payload)
        .map(Bytes::from)
        .map_err(|err| Error::Encode(format!("failed to marshal request for {op}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DomainRecordType, DomainType};
    use lingo_core::client::ApiClient;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> DomainClient {
        let api = ApiClient::builder("test-key")
            .with_base_url(server.uri())
            .build()
            .unwrap();
        DomainClient::new(Arc::new(api))
    }

    fn example_domain() -> Domain {
        Domain {
            id: None,
            domain: "example.org".to_string(),
            domain_type: DomainType::Master,
            status: None,
            description: None,
            ttl_sec: Some(300),
            retry_sec: None,
            master_ips: None,
            axfr_ips: None,
            expire_sec: None,
            refresh_sec: None,
            soa_email: Some("admin@example.org".to_string()),
        }
    }

    #[tokio::test]
    async fn create_domain_round_trips() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/domains"))
            .and(body_json(json!({
                "domain": "example.org",
                "type": "master",
                "ttl_sec": 300,
                "soa_email": "admin@example.org"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 11,
                "domain": "example.org",
                "type": "master",
                "status": "active"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let created = client.create_domain(&example_domain()).await.unwrap();
        assert_eq!(created.id, Some(11));
        assert_eq!(created.status, Some(crate::models::DomainStatus::Active));
    }

    #[tokio::test]
    async fn record_crud_uses_nested_paths() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/domains/11/records"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{
                    "id": 21,
                    "name": "www",
                    "target": "203.0.113.1",
                    "type": "A",
                    "ttl_sec": 300
                }],
                "page": 1,
                "pages": 1,
                "results": 1
            })))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/domains/11/records/21"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let page = client.list_domain_records(11).await.unwrap();
        assert_eq!(page.data[0].record_type, DomainRecordType::A);
        client.delete_domain_record(11, 21).await.unwrap();
    }
}
