use crate::{IsoError, IsoResult};

use web_time::{SystemTime, UNIX_EPOCH};

/// Returns the system time in milliseconds since the Unix epoch.
pub(crate) fn get_system_milliseconds() -> IsoResult<i64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| IsoError::general("Error fetching system time"))
        .and_then(|d| {
            i64::try_from(d.as_millis())
                .map_err(|_| IsoError::range().with_message("system time is out of range."))
        })
}
