//! Decoder for CJ Monitor environmental beacon advertisements.
//!
//! A CJ Monitor broadcasts its readings inside the manufacturer-specific data of
//! a short-range wireless advertisement. This crate turns that byte buffer into a
//! [`DecodedAdvertisement`]: the device identity plus an ordered [`ReadingSet`].
//!
//! Foreign, truncated or unknown-model buffers are not errors in the normal
//! decode path; they simply produce `None`. Use [`CjMonitorDecoder::try_decode`]
//! or [`CjMonitorPayload::parse`] when the rejection reason matters.

pub mod advertisement;
pub mod cj_monitor;
mod error;
pub mod model;
pub mod mulaw;
pub mod reading;

pub use advertisement::RawAdvertisement;
pub use cj_monitor::{decode, CjMonitorDecoder, CjMonitorPayload, ExtendedBlock};
pub use error::{PayloadError, Result};
pub use model::CjMonitorModel;
pub use mulaw::mulaw_to_value;
pub use reading::{
    DecodedAdvertisement, DeviceIdentity, Reading, ReadingSet, SensorKind, SensorValue,
    MANUFACTURER,
};

/// Trait for decoding a received advertisement into sensor readings
pub trait AdvertisementDecoder: Send + Sync {
    /// Decode the advertisement, or `None` if it does not carry a payload this
    /// decoder understands
    fn decode(&self, advertisement: &RawAdvertisement) -> Option<DecodedAdvertisement>;
}
