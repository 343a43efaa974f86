//! Asynchronous networking client implementation.

use crate::models::{
    Address, AllocateAddressRequest, AssignAddressRequest, IPv6Pool, IPv6Range, SharingRequest,
    UpdateRdnsRequest,
};
use crate::Result;
use bytes::Bytes;
use lingo_core::client::Dispatch;
use lingo_core::error::Error;
use lingo_core::page::Page;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Client for the networking endpoints.
#[derive(Clone)]
pub struct NetworkClient {
    api: Arc<dyn Dispatch>,
}

impl NetworkClient {
    /// Create a client on top of the given dispatcher.
    pub fn new(api: Arc<dyn Dispatch>) -> Self {
        Self { api }
    }

    /// List addresses allocated on the account.
    pub async fn list_addresses(&self) -> Result<Page<Address>> {
        let data = self
            .api
            .fetch("networking/ips")
            .await
            .map_err(|err| err.context("failed to make request for ListAddresses"))?;
        decode("ListAddresses", &data)
    }

    /// Fetch a single address.
    pub async fn view_address(&self, address: &str) -> Result<Address> {
        let data = self
            .api
            .fetch(&format!("networking/ips/{address}"))
            .await
            .map_err(|err| err.context("failed to make request for ViewAddress"))?;
        decode("ViewAddress", &data)
    }

    /// Allocate a new address to an instance.
    pub async fn allocate_address(&self, req: &AllocateAddressRequest) -> Result<Address> {
        let payload = encode("AllocateAddress", req)?;
        let data = self
            .api
            .create("networking/ips", Some(payload))
            .await
            .map_err(|err| err.context("failed to make request for AllocateAddress"))?;
        decode("AllocateAddress", &data)
    }

    /// Update the reverse DNS name of an address.
    pub async fn update_address_rdns(
        &self,
        address: &str,
        req: &UpdateRdnsRequest,
    ) -> Result<Address> {
        let payload = encode("UpdateAddressRDNS", req)?;
        let data = self
            .api
            .replace(&format!("networking/ips/{address}"), payload)
            .await
            .map_err(|err| err.context("failed to make request for UpdateAddressRDNS"))?;
        decode("UpdateAddressRDNS", &data)
    }

    /// Assign existing addresses to instances in one region.
    pub async fn assign_addresses(&self, req: &AssignAddressRequest) -> Result<()> {
        let payload = encode("AssignAddresses", req)?;
        self.api
            .create("networking/ipv4/assign", Some(payload))
            .await
            .map_err(|err| err.context("failed to make request for AssignAddresses"))?;
        Ok(())
    }

    /// Configure IP sharing for an instance.
    pub async fn configure_sharing(&self, req: &SharingRequest) -> Result<()> {
        let payload = encode("ConfigureSharing", req)?;
        self.api
            .create("networking/ipv4/share", Some(payload))
            .await
            .map_err(|err| err.context("failed to make request for ConfigureSharing"))?;
        Ok(())
    }

    /// List IPv6 pools on the account.
    pub async fn list_ipv6_pools(&self) -> Result<Page<IPv6Pool>> {
        let data = self
            .api
            .fetch("networking/ipv6/pools")
            .await
            .map_err(|err| err.context("failed to make request for ListIPv6Pools"))?;
        decode("ListIPv6Pools", &data)
    }

    /// List routed IPv6 ranges on the account.
    pub async fn list_ipv6_ranges(&self) -> Result<Page<IPv6Range>> {
        let data = self
            .api
            .fetch("networking/ipv6/ranges")
            .await
            .map_err(|err| err.context("failed to make request for ListIPv6Ranges"))?;
        decode("ListIPv6Ranges", &data)
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
    use crate::models::AddressType;
    use lingo_core::client::ApiClient;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn address_json(address: &str) -> serde_json::Value {
        json!({
            "address": address,
            "gateway": "203.0.113.1",
            "subnet_mask": "255.255.255.0",
            "prefix": 24,
            "type": "ipv4",
            "public": true,
            "rdns": "li-203-0-113-10.members.linode.com",
            "linode_id": 42,
            "region": "us-east"
        })
    }

    fn test_client(server: &MockServer) -> NetworkClient {
        let api = ApiClient::builder("test-key")
            .with_base_url(server.uri())
            .build()
            .unwrap();
        NetworkClient::new(Arc::new(api))
    }

    #[tokio::test]
    async fn view_address_parses_type_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/networking/ips/203.0.113.10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(address_json("203.0.113.10")))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let ip = client.view_address("203.0.113.10").await.unwrap();
        assert_eq!(ip.address_type, AddressType::IPv4);
        assert_eq!(ip.linode_id, 42);
    }

    #[tokio::test]
    async fn update_rdns_puts_to_address_path() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/networking/ips/203.0.113.10"))
            .and(body_json(json!({"rdns": "www.example.com"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(address_json("203.0.113.10")))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let req = UpdateRdnsRequest {
            rdns: Some("www.example.com".to_string()),
        };
        client.update_address_rdns("203.0.113.10", &req).await.unwrap();
    }

    #[tokio::test]
    async fn assign_addresses_posts_assignment_list() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/networking/ipv4/assign"))
            .and(body_json(json!({
                "region": "us-east",
                "assignments": [{"linode_id": 42, "address": "203.0.113.10"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let req = AssignAddressRequest {
            region: "us-east".to_string(),
            assignments: vec![crate::models::Assignment {
                linode_id: 42,
                address: "203.0.113.10".to_string(),
            }],
        };
        client.assign_addresses(&req).await.unwrap();
    }

    #[tokio::test]
    async fn list_ipv6_pools_decodes_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/networking/ipv6/pools"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"range": "2600:3c01::2:5000/64", "region": "us-east"}],
                "page": 1,
                "pages": 1,
                "results": 1
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let page = client.list_ipv6_pools().await.unwrap();
        assert_eq!(page.data[0].region, "us-east");
    }
}
