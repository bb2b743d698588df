use crate::Result;
use serde::Serialize;
use serde_json::Value;

/// Manufacturer reported for every CJ Monitor device
pub const MANUFACTURER: &str = "Control-J";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    Temperature,
    Humidity,
    Light,
    Battery,
    Pressure,
}

impl SensorKind {
    pub fn unit(self) -> &'static str {
        match self {
            SensorKind::Temperature => "°C",
            SensorKind::Humidity | SensorKind::Battery => "%",
            SensorKind::Light => "lx",
            SensorKind::Pressure => "mbar",
        }
    }
}

/// Physical quantity of a reading. Temperature is fractional, everything else
/// is reported exactly as the device sent it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SensorValue {
    Integer(i64),
    Float(f64),
}

impl From<f64> for SensorValue {
    fn from(value: f64) -> Self {
        SensorValue::Float(value)
    }
}

impl From<u8> for SensorValue {
    fn from(value: u8) -> Self {
        SensorValue::Integer(i64::from(value))
    }
}

impl From<u16> for SensorValue {
    fn from(value: u16) -> Self {
        SensorValue::Integer(i64::from(value))
    }
}

impl From<u32> for SensorValue {
    fn from(value: u32) -> Self {
        SensorValue::Integer(i64::from(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reading {
    pub kind: SensorKind,
    pub value: SensorValue,
    pub unit: &'static str,
}

impl Reading {
    pub fn new(kind: SensorKind, value: impl Into<SensorValue>) -> Self {
        Self {
            kind,
            value: value.into(),
            unit: kind.unit(),
        }
    }
}

/// Readings from one advertisement, in the order they were decoded
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReadingSet(Vec<Reading>);

impl ReadingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, reading: Reading) {
        self.0.push(reading);
    }

    pub fn get(&self, kind: SensorKind) -> Option<SensorValue> {
        self.0.iter().find(|r| r.kind == kind).map(|r| r.value)
    }

    pub fn contains(&self, kind: SensorKind) -> bool {
        self.get(kind).is_some()
    }

    pub fn kinds(&self) -> Vec<SensorKind> {
        self.0.iter().map(|r| r.kind).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceIdentity {
    pub manufacturer: &'static str,
    pub name: String,
    pub model: String,
}

/// Identity and readings produced together from one accepted payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedAdvertisement {
    pub identity: DeviceIdentity,
    pub readings: ReadingSet,
}

impl DecodedAdvertisement {
    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_units() {
        assert_eq!(SensorKind::Temperature.unit(), "°C");
        assert_eq!(SensorKind::Humidity.unit(), "%");
        assert_eq!(SensorKind::Light.unit(), "lx");
        assert_eq!(SensorKind::Battery.unit(), "%");
        assert_eq!(SensorKind::Pressure.unit(), "mbar");
    }

    #[test]
    fn test_reading_set_preserves_order() {
        let mut set = ReadingSet::new();
        assert!(set.is_empty());
        set.push(Reading::new(SensorKind::Light, 12u32));
        set.push(Reading::new(SensorKind::Temperature, -4.5));
        assert_eq!(set.kinds(), vec![SensorKind::Light, SensorKind::Temperature]);
        assert_eq!(set.get(SensorKind::Temperature), Some(SensorValue::Float(-4.5)));
        assert!(!set.contains(SensorKind::Battery));
    }

    #[test]
    fn test_decoded_advertisement_json() {
        let mut readings = ReadingSet::new();
        readings.push(Reading::new(SensorKind::Temperature, 21.5));
        readings.push(Reading::new(SensorKind::Humidity, 40u8));

        let decoded = DecodedAdvertisement {
            identity: DeviceIdentity {
                manufacturer: MANUFACTURER,
                name: "hall".to_string(),
                model: "CJMon-4351".to_string(),
            },
            readings,
        };

        assert_eq!(
            decoded.to_json().unwrap(),
            json!({
                "identity": {
                    "manufacturer": "Control-J",
                    "name": "hall",
                    "model": "CJMon-4351"
                },
                "readings": [
                    {"kind": "temperature", "value": 21.5, "unit": "°C"},
                    {"kind": "humidity", "value": 40, "unit": "%"}
                ]
            })
        );
    }
}
