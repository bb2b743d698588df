use crate::reading::MANUFACTURER;
use crate::{
    mulaw_to_value, AdvertisementDecoder, CjMonitorModel, DecodedAdvertisement, DeviceIdentity,
    PayloadError, RawAdvertisement, Reading, ReadingSet, Result, SensorKind,
};
use std::collections::HashMap;
use tracing::{debug, trace};

// Byte offsets into the manufacturer data (little-endian throughout)
pub const OFFSET_MODEL: usize = 0;
pub const OFFSET_TEMPERATURE: usize = 2;
pub const OFFSET_HUMIDITY: usize = 4;
pub const OFFSET_LIGHT: usize = 5;
pub const OFFSET_BATTERY: usize = 6;
pub const OFFSET_PRESSURE: usize = 7;
pub const OFFSET_RESERVED: usize = 9;

/// Model, temperature, humidity and light
pub const SIZE_BASE: usize = 6;
/// Base block followed by battery, pressure and one reserved byte
pub const SIZE_EXTENDED: usize = 10;

/// Temperature is transmitted in tenths of a degree
const TEMPERATURE_SCALE: f64 = 10.0;

/// Battery, pressure and the trailing reserved byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendedBlock {
    pub battery: u8,
    pub pressure: u16,
    pub reserved: u8,
}

/// A validated CJ Monitor frame, before unit conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CjMonitorPayload {
    pub model: CjMonitorModel,
    pub temperature_raw: i16,
    pub humidity: u8,
    pub light_raw: u8,
    pub extended: Option<ExtendedBlock>,
}

impl CjMonitorPayload {
    /// Parse manufacturer data into a typed frame.
    ///
    /// The extended block is only read when the buffer is exactly
    /// [`SIZE_EXTENDED`] bytes; any other length past [`SIZE_BASE`] is treated as
    /// padding and yields the base fields alone.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(PayloadError::EmptyPayload);
        }
        if bytes.len() < SIZE_BASE {
            return Err(PayloadError::InsufficientData {
                expected: SIZE_BASE,
                actual: bytes.len(),
            });
        }

        let model = CjMonitorModel::try_from(read_u16_le(bytes, OFFSET_MODEL))?;

        let extended = if bytes.len() == SIZE_EXTENDED {
            Some(ExtendedBlock {
                battery: bytes[OFFSET_BATTERY],
                pressure: read_u16_le(bytes, OFFSET_PRESSURE),
                reserved: bytes[OFFSET_RESERVED],
            })
        } else {
            None
        };

        Ok(Self {
            model,
            temperature_raw: read_i16_le(bytes, OFFSET_TEMPERATURE),
            humidity: bytes[OFFSET_HUMIDITY],
            light_raw: bytes[OFFSET_LIGHT],
            extended,
        })
    }

    pub fn temperature(&self) -> f64 {
        f64::from(self.temperature_raw) / TEMPERATURE_SCALE
    }

    pub fn light(&self) -> u32 {
        mulaw_to_value(self.light_raw)
    }

    /// Convert to readings: temperature, humidity and light first, then
    /// pressure and battery when the extended block was present
    pub fn readings(&self) -> ReadingSet {
        let mut readings = ReadingSet::new();
        readings.push(Reading::new(SensorKind::Temperature, self.temperature()));
        readings.push(Reading::new(SensorKind::Humidity, self.humidity));
        readings.push(Reading::new(SensorKind::Light, self.light()));

        if let Some(extended) = self.extended {
            readings.push(Reading::new(SensorKind::Pressure, extended.pressure));
            readings.push(Reading::new(SensorKind::Battery, extended.battery));
        }

        readings
    }

    pub fn into_decoded(self, device_name: &str) -> DecodedAdvertisement {
        DecodedAdvertisement {
            identity: DeviceIdentity {
                manufacturer: MANUFACTURER,
                name: device_name.to_string(),
                model: self.model.tag(),
            },
            readings: self.readings(),
        }
    }
}

// Callers check the length before reading a field group
fn read_u16_le(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn read_i16_le(data: &[u8], offset: usize) -> i16 {
    i16::from_le_bytes([data[offset], data[offset + 1]])
}

fn try_decode_entry(
    manufacturer_data: &HashMap<u16, Vec<u8>>,
    device_name: &str,
    manufacturer_id: u16,
) -> Result<DecodedAdvertisement> {
    let bytes = manufacturer_data
        .get(&manufacturer_id)
        .ok_or(PayloadError::MissingManufacturerData(manufacturer_id))?;

    let payload = CjMonitorPayload::parse(bytes)?;
    debug!(
        model = payload.model.id(),
        length = bytes.len(),
        extended = payload.extended.is_some(),
        "parsed CJ Monitor advertisement"
    );

    Ok(payload.into_decoded(device_name))
}

/// Decode the CJ Monitor entry of an advertisement's manufacturer data.
///
/// Returns `None` when the entry is missing, too short, or from an unknown
/// model. Those are normal outcomes on a shared radio channel, so they are only
/// logged at trace level.
pub fn decode(
    manufacturer_data: &HashMap<u16, Vec<u8>>,
    device_name: &str,
    manufacturer_id: u16,
) -> Option<DecodedAdvertisement> {
    match try_decode_entry(manufacturer_data, device_name, manufacturer_id) {
        Ok(decoded) => Some(decoded),
        Err(reason) => {
            trace!(manufacturer_id, %reason, "ignoring advertisement");
            None
        }
    }
}

/// Decoder bound to the manufacturer ID the CJ Monitor family advertises under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CjMonitorDecoder {
    manufacturer_id: u16,
}

impl CjMonitorDecoder {
    pub fn new(manufacturer_id: u16) -> Self {
        Self { manufacturer_id }
    }

    /// Decode, reporting why the advertisement was rejected
    pub fn try_decode(&self, advertisement: &RawAdvertisement) -> Result<DecodedAdvertisement> {
        try_decode_entry(
            &advertisement.manufacturer_data,
            advertisement.display_name(),
            self.manufacturer_id,
        )
    }
}

impl AdvertisementDecoder for CjMonitorDecoder {
    fn decode(&self, advertisement: &RawAdvertisement) -> Option<DecodedAdvertisement> {
        decode(
            &advertisement.manufacturer_data,
            advertisement.display_name(),
            self.manufacturer_id,
        )
    }
}
