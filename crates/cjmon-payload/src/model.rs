use crate::PayloadError;

/// Hardware variants that broadcast the CJ Monitor payload layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum CjMonitorModel {
    Model4350 = 4350,
    Model4351 = 4351,
}

impl CjMonitorModel {
    pub const ALL: [CjMonitorModel; 2] = [CjMonitorModel::Model4350, CjMonitorModel::Model4351];

    pub fn id(self) -> u16 {
        self as u16
    }

    /// Device type tag reported alongside the readings, e.g. `CJMon-4350`
    pub fn tag(self) -> String {
        format!("CJMon-{}", self.id())
    }
}

impl TryFrom<u16> for CjMonitorModel {
    type Error = PayloadError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            4350 => Ok(CjMonitorModel::Model4350),
            4351 => Ok(CjMonitorModel::Model4351),
            other => Err(PayloadError::UnsupportedModel(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_models() {
        for model in CjMonitorModel::ALL {
            assert_eq!(CjMonitorModel::try_from(model.id()).unwrap(), model);
        }
    }

    #[test]
    fn test_neighbouring_ids_rejected() {
        for id in [0, 4349, 4352, 0x3E11, u16::MAX] {
            let result = CjMonitorModel::try_from(id);
            assert!(matches!(result, Err(PayloadError::UnsupportedModel(got)) if got == id));
        }
    }

    #[test]
    fn test_tag() {
        assert_eq!(CjMonitorModel::Model4350.tag(), "CJMon-4350");
        assert_eq!(CjMonitorModel::Model4351.tag(), "CJMon-4351");
    }
}
