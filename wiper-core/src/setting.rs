//! Resistance settings
//!
//! A setting is the wiper tap position of a 10k potentiometer in 1k steps.
//! The AD5160 has 256 taps, so each setting maps to a control byte through
//! a fixed table (setting x 25.5, rounded).

/// Number of distinct settings (0k through 10k)
pub const SETTING_COUNT: usize = 11;

/// Resistance represented by one setting step, in ohms
pub const STEP_OHMS: u32 = 1_000;

/// Control byte written to the potentiometer for each setting
pub const CONTROL_BYTES: [u8; SETTING_COUNT] = [0, 26, 51, 77, 102, 128, 154, 179, 205, 230, 255];

/// Setting could not be built from a raw value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingError {
    /// Value above 10
    OutOfRange(u8),
    /// Byte is not an ASCII digit
    NotADigit(u8),
}

/// Validated tap position in [0, 10]
///
/// The only way to build one is through a range-checked constructor, so
/// indexing [`CONTROL_BYTES`] with it cannot go out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResistanceSetting(u8);

impl ResistanceSetting {
    /// 0k (wiper at terminal B)
    pub const MIN: Self = Self(0);
    /// 1k, the only setting that needs a confirming Enter
    pub const ONE_K: Self = Self(1);
    /// 10k (full scale)
    pub const MAX: Self = Self(10);

    /// Build a setting from a number of kilo-ohms
    pub const fn new(kilo_ohms: u8) -> Result<Self, SettingError> {
        if kilo_ohms as usize >= SETTING_COUNT {
            Err(SettingError::OutOfRange(kilo_ohms))
        } else {
            Ok(Self(kilo_ohms))
        }
    }

    /// Build a setting from a single ASCII digit ('0'..='9')
    pub const fn from_ascii_digit(byte: u8) -> Result<Self, SettingError> {
        if byte.is_ascii_digit() {
            Ok(Self(byte - b'0'))
        } else {
            Err(SettingError::NotADigit(byte))
        }
    }

    /// Setting in kilo-ohms
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Control byte for this setting
    pub const fn control_byte(self) -> u8 {
        CONTROL_BYTES[self.0 as usize]
    }

    /// Nominal W-B resistance in ohms
    ///
    /// Ignores the 50-120 ohm wiper resistance; A-W is the complement.
    pub const fn nominal_ohms(self) -> u32 {
        self.0 as u32 * STEP_OHMS
    }

    /// Iterate over every setting from 0k to 10k
    pub fn all() -> impl Iterator<Item = Self> {
        (0..SETTING_COUNT as u8).map(Self)
    }
}

impl TryFrom<u8> for ResistanceSetting {
    type Error = SettingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ResistanceSetting> for u8 {
    fn from(setting: ResistanceSetting) -> Self {
        setting.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_values() {
        let expected = [0u8, 26, 51, 77, 102, 128, 154, 179, 205, 230, 255];
        for (setting, &byte) in ResistanceSetting::all().zip(expected.iter()) {
            assert_eq!(setting.control_byte(), byte);
        }
        assert_eq!(ResistanceSetting::all().count(), SETTING_COUNT);
    }

    #[test]
    fn test_table_is_injective_and_increasing() {
        for pair in CONTROL_BYTES.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_table_tracks_linear_scale() {
        // Within one tap of setting x 25.5
        for setting in ResistanceSetting::all() {
            let byte_x10 = setting.control_byte() as i32 * 10;
            let ideal_x10 = setting.value() as i32 * 255;
            assert!((byte_x10 - ideal_x10).abs() <= 10);
        }
    }

    #[test]
    fn test_range_check() {
        assert_eq!(ResistanceSetting::new(0), Ok(ResistanceSetting::MIN));
        assert_eq!(ResistanceSetting::new(10), Ok(ResistanceSetting::MAX));
        assert_eq!(
            ResistanceSetting::new(11),
            Err(SettingError::OutOfRange(11))
        );
        assert_eq!(
            ResistanceSetting::try_from(255),
            Err(SettingError::OutOfRange(255))
        );
    }

    #[test]
    fn test_from_ascii_digit() {
        assert_eq!(
            ResistanceSetting::from_ascii_digit(b'7').map(u8::from),
            Ok(7)
        );
        assert_eq!(
            ResistanceSetting::from_ascii_digit(b'a'),
            Err(SettingError::NotADigit(b'a'))
        );
        assert_eq!(
            ResistanceSetting::from_ascii_digit(b'\r'),
            Err(SettingError::NotADigit(b'\r'))
        );
    }

    #[test]
    fn test_nominal_ohms() {
        assert_eq!(ResistanceSetting::MIN.nominal_ohms(), 0);
        assert_eq!(ResistanceSetting::MAX.nominal_ohms(), 10_000);
        assert_eq!(ResistanceSetting::new(3).unwrap().nominal_ohms(), 3_000);
    }
}
