use dnsarc_types::{DnsRecord, NewRecord, RecordUpdate};

use crate::error::ConnectError;
use crate::proto::{
    CreateDnsRecordRequest, DeleteResponse, IdRequest, ListDnsRecordsResponse, RecordResponse,
    UpdateDnsRecordRequest, ZoneNameRequest,
};
use crate::rpc::RpcClient;
use crate::transport::Transport;

pub const CREATE_DNS_RECORD: &str = "dns_record.v1.DNSRecordService/CreateDNSRecord";
pub const LIST_DNS_RECORDS_BY_ZONE_NAME: &str =
    "dns_record.v1.DNSRecordService/ListDNSRecordsByZoneName";
pub const GET_DNS_RECORD: &str = "dns_record.v1.DNSRecordService/GetDNSRecord";
pub const UPDATE_DNS_RECORD: &str = "dns_record.v1.DNSRecordService/UpdateDNSRecord";
pub const DELETE_DNS_RECORD: &str = "dns_record.v1.DNSRecordService/DeleteDNSRecord";

pub struct DnsRecordService<'a, T> {
    rpc: &'a RpcClient<T>,
}

impl<'a, T: Transport> DnsRecordService<'a, T> {
    pub(crate) fn new(rpc: &'a RpcClient<T>) -> Self {
        Self { rpc }
    }

    pub async fn create_record(
        &self,
        zone_name: &str,
        record: &NewRecord,
    ) -> Result<DnsRecord, ConnectError> {
        let request = CreateDnsRecordRequest {
            zone_name: zone_name.to_string(),
            name: record.name.clone(),
            record_type: record.record_type.to_string(),
            content: record.content.clone(),
            ttl: record.ttl,
        };
        let response: RecordResponse = self.rpc.call(CREATE_DNS_RECORD, &request).await?;
        response.record.ok_or_else(|| ConnectError::missing("record"))
    }

    pub async fn list_records_by_zone_name(
        &self,
        zone_name: &str,
    ) -> Result<Vec<DnsRecord>, ConnectError> {
        let request = ZoneNameRequest {
            zone_name: zone_name.to_string(),
        };
        let response: ListDnsRecordsResponse =
            self.rpc.call(LIST_DNS_RECORDS_BY_ZONE_NAME, &request).await?;
        Ok(response.records)
    }

    pub async fn get_record(&self, id: &str) -> Result<DnsRecord, ConnectError> {
        let request = IdRequest { id: id.to_string() };
        let response: RecordResponse = self.rpc.call(GET_DNS_RECORD, &request).await?;
        response.record.ok_or_else(|| ConnectError::missing("record"))
    }

    pub async fn update_record(&self, update: &RecordUpdate) -> Result<DnsRecord, ConnectError> {
        let request = UpdateDnsRecordRequest {
            id: update.id.clone(),
            content: update.content.clone(),
            ttl: update.ttl,
        };
        let response: RecordResponse = self.rpc.call(UPDATE_DNS_RECORD, &request).await?;
        response.record.ok_or_else(|| ConnectError::missing("record"))
    }

    pub async fn delete_record(&self, id: &str) -> Result<(), ConnectError> {
        let request = IdRequest { id: id.to_string() };
        let _: DeleteResponse = self.rpc.call(DELETE_DNS_RECORD, &request).await?;
        Ok(())
    }
}
