use std::collections::HashMap;

/// Manufacturer data and display name extracted from one received advertisement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAdvertisement {
    /// Manufacturer-specific payloads keyed by company identifier
    pub manufacturer_data: HashMap<u16, Vec<u8>>,
    /// Advertised local name, if the frame carried one
    pub name: Option<String>,
}

impl RawAdvertisement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_manufacturer_data(
        mut self,
        manufacturer_id: u16,
        data: impl Into<Vec<u8>>,
    ) -> Self {
        self.manufacturer_data.insert(manufacturer_id, data.into());
        self
    }

    /// Payload for `manufacturer_id`, if present
    pub fn manufacturer_payload(&self, manufacturer_id: u16) -> Option<&[u8]> {
        self.manufacturer_data.get(&manufacturer_id).map(Vec::as_slice)
    }

    /// Display name, or an empty string when the advertisement had none
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}
