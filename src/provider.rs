//! The `TimeZoneProvider` trait.

use crate::{iso::IsoDateTime, Instant, IsoResult, UtcOffset};

/// The `TimeZoneProvider` trait resolves the UTC offset of a time zone.
///
/// Offset resolution happens once per format or parse call, before the
/// codec itself runs. Implementors backed by a time zone database choose
/// how ambiguous or skipped local times are resolved.
pub trait TimeZoneProvider {
    /// Returns the offset observed at `instant`.
    fn offset_for_instant(&self, instant: Instant) -> IsoResult<UtcOffset>;

    /// Returns the offset observed when wall clocks read `local`.
    fn offset_for_local(&self, local: &IsoDateTime) -> IsoResult<UtcOffset>;
}

impl<T: TimeZoneProvider + ?Sized> TimeZoneProvider for &T {
    fn offset_for_instant(&self, instant: Instant) -> IsoResult<UtcOffset> {
        (**self).offset_for_instant(instant)
    }

    fn offset_for_local(&self, local: &IsoDateTime) -> IsoResult<UtcOffset> {
        (**self).offset_for_local(local)
    }
}
