use crate::domain::{ScannerError, ScannerResult};
use cjmon_payload::RawAdvertisement;
use serde::Deserialize;
use std::collections::HashMap;

/// One captured advertisement as written by the capture tooling, one JSON
/// object per line:
///
/// ```json
/// {"name": "CJMon kitchen", "manufacturer_data": {"65535": "fe10e8003280"}}
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct AdvertisementRecord {
    #[serde(default)]
    pub name: Option<String>,

    /// Hex-encoded payloads keyed by decimal manufacturer id
    #[serde(default)]
    pub manufacturer_data: HashMap<u16, String>,
}

impl AdvertisementRecord {
    pub fn into_advertisement(self) -> ScannerResult<RawAdvertisement> {
        let manufacturer_data = self
            .manufacturer_data
            .into_iter()
            .map(|(manufacturer_id, payload)| {
                hex::decode(payload.trim())
                    .map(|bytes| (manufacturer_id, bytes))
                    .map_err(|source| ScannerError::InvalidHex {
                        manufacturer_id,
                        source,
                    })
            })
            .collect::<ScannerResult<HashMap<_, _>>>()?;

        Ok(RawAdvertisement {
            manufacturer_data,
            name: self.name,
        })
    }
}

/// Parse a single input line into an advertisement
pub fn parse_record(line: &str) -> ScannerResult<RawAdvertisement> {
    let record: AdvertisementRecord = serde_json::from_str(line)?;
    record.into_advertisement()
}
