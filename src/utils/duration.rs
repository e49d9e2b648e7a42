use std::time::Duration;

const SEC_MS: u128 = 1000;
const MIN_MS: u128 = SEC_MS * 60;
const HOUR_MS: u128 = MIN_MS * 60;

/// Human-readable elapsed time in the largest unit that fits: `12 msec`, `1.50 sec`, `2.00 min`, `1.00 hours`.
pub fn format_duration(took: Duration) -> String {
    let ms = took.as_millis();
    if ms >= HOUR_MS {
        format!("{:.2} hours", took.as_secs_f64() / 3600.0)
    } else if ms >= MIN_MS {
        format!("{:.2} min", took.as_secs_f64() / 60.0)
    } else if ms >= SEC_MS {
        format!("{:.2} sec", took.as_secs_f64())
    } else {
        format!("{} msec", ms)
    }
}
