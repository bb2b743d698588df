use crate::domain::{ReadingSink, ScannerResult};
use cjmon_payload::{AdvertisementDecoder, RawAdvertisement};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Domain service that turns received advertisements into published readings
///
/// Flow:
/// 1. Decode the advertisement's manufacturer data
/// 2. Drop it silently if it is not a CJ Monitor frame
/// 3. Publish identity + readings via the sink trait
pub struct AdvertisementService {
    decoder: Arc<dyn AdvertisementDecoder>,
    sink: Arc<dyn ReadingSink>,
}

impl AdvertisementService {
    pub fn new(decoder: Arc<dyn AdvertisementDecoder>, sink: Arc<dyn ReadingSink>) -> Self {
        Self { decoder, sink }
    }

    /// Process one advertisement. Returns `true` if readings were published,
    /// `false` if the advertisement was not ours.
    #[instrument(skip_all, fields(device_name = advertisement.display_name()))]
    pub async fn process(&self, advertisement: &RawAdvertisement) -> ScannerResult<bool> {
        let Some(decoded) = self.decoder.decode(advertisement) else {
            debug!(
                manufacturer_ids = ?advertisement.manufacturer_data.keys().collect::<Vec<_>>(),
                "advertisement not decoded, skipping"
            );
            return Ok(false);
        };

        debug!(
            model = %decoded.identity.model,
            reading_count = decoded.readings.len(),
            "decoded advertisement"
        );

        self.sink.publish(&decoded).await?;
        Ok(true)
    }
}
