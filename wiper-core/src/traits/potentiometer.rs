//! Digital potentiometer trait

use crate::setting::ResistanceSetting;

/// Write-only digital potentiometer
///
/// Implementations move the wiper to the tap for `setting`. There is no
/// read-back; success means the bus reported the transfer complete.
pub trait Potentiometer {
    /// Error type for the underlying bus
    type Error;

    /// Move the wiper to `setting`
    ///
    /// Blocks until the transfer has finished.
    fn apply(&mut self, setting: ResistanceSetting) -> Result<(), Self::Error>;
}
