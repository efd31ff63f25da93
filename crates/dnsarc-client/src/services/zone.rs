use dnsarc_types::Zone;

use crate::error::ConnectError;
use crate::proto::{
    CreateZoneRequest, CreateZoneResponse, DeleteResponse, Empty, GetZoneResponse, IdRequest,
    ListZonesResponse, ZoneNameRequest,
};
use crate::rpc::RpcClient;
use crate::transport::Transport;

pub const CREATE_ZONE: &str = "zone.v1.ZoneService/CreateZone";
pub const LIST_ZONES: &str = "zone.v1.ZoneService/ListZones";
pub const GET_ZONE: &str = "zone.v1.ZoneService/GetZone";
pub const GET_ZONE_BY_NAME: &str = "zone.v1.ZoneService/GetZoneByName";
pub const DELETE_ZONE: &str = "zone.v1.ZoneService/DeleteZone";

pub struct ZoneService<'a, T> {
    rpc: &'a RpcClient<T>,
}

impl<'a, T: Transport> ZoneService<'a, T> {
    pub(crate) fn new(rpc: &'a RpcClient<T>) -> Self {
        Self { rpc }
    }

    pub async fn create_zone(&self, zone_name: &str) -> Result<Zone, ConnectError> {
        let request = CreateZoneRequest {
            zone_name: zone_name.to_string(),
        };
        let response: CreateZoneResponse = self.rpc.call(CREATE_ZONE, &request).await?;
        response.zone.ok_or_else(|| ConnectError::missing("zone"))
    }

    pub async fn list_zones(&self) -> Result<Vec<Zone>, ConnectError> {
        let response: ListZonesResponse = self.rpc.call(LIST_ZONES, &Empty::default()).await?;
        Ok(response.zones)
    }

    pub async fn get_zone(&self, id: &str) -> Result<Zone, ConnectError> {
        let request = IdRequest { id: id.to_string() };
        let response: GetZoneResponse = self.rpc.call(GET_ZONE, &request).await?;
        response.zone.ok_or_else(|| ConnectError::missing("zone"))
    }

    pub async fn get_zone_by_name(&self, zone_name: &str) -> Result<Zone, ConnectError> {
        let request = ZoneNameRequest {
            zone_name: zone_name.to_string(),
        };
        let response: GetZoneResponse = self.rpc.call(GET_ZONE_BY_NAME, &request).await?;
        response.zone.ok_or_else(|| ConnectError::missing("zone"))
    }

    pub async fn delete_zone(&self, id: &str) -> Result<(), ConnectError> {
        let request = IdRequest { id: id.to_string() };
        let _: DeleteResponse = self.rpc.call(DELETE_ZONE, &request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingTransport;
    use serde_json::json;

    #[tokio::test]
    async fn list_zones_decodes_wire_names() {
        let transport = RecordingTransport::default();
        transport.respond(json!({
            "zones": [
                {"id": "z1", "zoneName": "example.com", "isActive": true},
                {"id": "z2", "zoneName": "example.org"}
            ]
        }));
        let rpc = RpcClient::new(transport.clone());

        let zones = rpc.zones().list_zones().await.unwrap();
        assert_eq!(zones.len(), 2);
        assert!(zones[0].is_active);
        assert!(!zones[1].is_active);
        assert_eq!(transport.procedures(), vec![LIST_ZONES]);
    }

    #[tokio::test]
    async fn get_zone_by_name_sends_zone_name() {
        let transport = RecordingTransport::default();
        transport.respond(json!({"zone": {"id": "z1", "zoneName": "example.com"}}));
        let rpc = RpcClient::new(transport.clone());

        let zone = rpc.zones().get_zone_by_name("example.com").await.unwrap();
        assert_eq!(zone.id, "z1");
        assert_eq!(transport.calls()[0].body, json!({"zoneName": "example.com"}));
    }

    #[tokio::test]
    async fn get_zone_sends_id() {
        let transport = RecordingTransport::default();
        transport.respond(json!({"zone": {"id": "z9", "zoneName": "example.net"}}));
        let rpc = RpcClient::new(transport.clone());

        let zone = rpc.zones().get_zone("z9").await.unwrap();
        assert_eq!(zone.zone_name, "example.net");
        assert_eq!(transport.procedures(), vec![GET_ZONE]);
        assert_eq!(transport.calls()[0].body, json!({"id": "z9"}));
    }

    #[tokio::test]
    async fn missing_zone_in_response_is_an_error() {
        let transport = RecordingTransport::default();
        let rpc = RpcClient::new(transport);
        let err = rpc.zones().create_zone("example.com").await.unwrap_err();
        assert!(err.message.contains("zone"));
    }
}
