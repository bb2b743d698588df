//! End-to-end: JSON-line advertisement records through the real decoder into a
//! collecting sink.

use async_trait::async_trait;
use cjmon_payload::{CjMonitorDecoder, DecodedAdvertisement, SensorKind, SensorValue};
use cjmon_scanner::{scan, AdvertisementService, ReadingSink, ScanSummary, ScannerResult};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

const CJ_MANUFACTURER_ID: u16 = 0xFFFF;

#[derive(Default)]
struct CollectingSink {
    published: Mutex<Vec<DecodedAdvertisement>>,
}

#[async_trait]
impl ReadingSink for CollectingSink {
    async fn publish(&self, decoded: &DecodedAdvertisement) -> ScannerResult<()> {
        self.published.lock().unwrap().push(decoded.clone());
        Ok(())
    }
}

#[tokio::test]
async fn test_pipeline_decodes_mixed_capture() {
    let sink = Arc::new(CollectingSink::default());
    let service = AdvertisementService::new(
        Arc::new(CjMonitorDecoder::new(CJ_MANUFACTURER_ID)),
        sink.clone(),
    );

    let capture = [
        // CJ Monitor base frame
        r#"{"name": "office", "manufacturer_data": {"65535": "fe10e8003280"}}"#,
        // Unrelated beacon
        r#"{"name": "phone", "manufacturer_data": {"76": "10050b1c"}}"#,
        // CJ Monitor extended frame: 87% battery, 1013 mbar
        r#"{"name": "greenhouse", "manufacturer_data": {"65535": "ff10c3003d4057f50300"}}"#,
        // Our manufacturer id but an unknown model
        r#"{"manufacturer_data": {"65535": "3e11e8003280"}}"#,
        // Truncated frame
        r#"{"manufacturer_data": {"65535": "fe10e8"}}"#,
        // Broken hex
        r#"{"manufacturer_data": {"65535": "zz"}}"#,
    ]
    .join("\n");

    let summary = scan(&service, capture.as_bytes(), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(
        summary,
        ScanSummary {
            lines: 6,
            decoded: 2,
            ignored: 3,
            invalid: 1,
        }
    );

    let published = sink.published.lock().unwrap();
    assert_eq!(published.len(), 2);

    let office = &published[0];
    assert_eq!(office.identity.name, "office");
    assert_eq!(office.identity.model, "CJMon-4350");
    assert_eq!(office.readings.len(), 3);
    assert_eq!(
        office.readings.get(SensorKind::Temperature),
        Some(SensorValue::Float(23.2))
    );

    let greenhouse = &published[1];
    assert_eq!(greenhouse.identity.model, "CJMon-4351");
    assert_eq!(
        greenhouse.readings.get(SensorKind::Battery),
        Some(SensorValue::Integer(87))
    );
    assert_eq!(
        greenhouse.readings.get(SensorKind::Pressure),
        Some(SensorValue::Integer(1013))
    );
}
