use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Clamps `value` into `[low, high]`, collapsing to the midpoint when the
/// bounds cross.
///
/// `f64::clamp` panics on `low > high`, which happens whenever a window is
/// wider than the range it has to fit in.
#[must_use]
pub fn clamp_between(value: f64, low: f64, high: f64) -> f64 {
    if low > high {
        return (low + high) / 2.0;
    }
    value.max(low).min(high)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_between_handles_crossed_bounds() {
        assert_eq!(clamp_between(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp_between(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp_between(11.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp_between(3.0, 6.0, 4.0), 5.0);
    }
}
