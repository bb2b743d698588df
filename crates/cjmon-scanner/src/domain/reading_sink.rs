use crate::domain::ScannerResult;
use async_trait::async_trait;
use cjmon_payload::DecodedAdvertisement;

/// Trait for handing decoded readings to the sensor registry
///
/// Implementations should:
/// - Attach the readings to the device described by the identity
/// - Return error if the registry cannot accept the update
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ReadingSink: Send + Sync {
    /// Publish one decoded advertisement
    ///
    /// # Arguments
    /// * `decoded` - Device identity and readings from a single advertisement
    ///
    /// # Returns
    /// () on success, ScannerError on failure
    async fn publish(&self, decoded: &DecodedAdvertisement) -> ScannerResult<()>;
}
