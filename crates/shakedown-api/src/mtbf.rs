//! Failure-rate / MTBF conversions and mission-time formatting.

/// Floor applied to failure rates before conversion; a rate of exactly zero
/// would produce an infinite MTBF.
pub const MIN_FAILURE_RATE: f32 = 0.000_001;

/// Units for mean-time-between-failures conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MtbfUnits {
    Seconds,
    Minutes,
    Hours,
    Days,
    Years,
}

impl MtbfUnits {
    fn seconds(self) -> f32 {
        match self {
            Self::Seconds => 1.0,
            Self::Minutes => 60.0,
            Self::Hours => 3_600.0,
            Self::Days => 86_400.0,
            Self::Years => 31_536_000.0,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
            Self::Years => "years",
        }
    }

    fn short_label(self) -> &'static str {
        match self {
            Self::Seconds => "s",
            Self::Minutes => "m",
            Self::Hours => "h",
            Self::Days => "d",
            Self::Years => "y",
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            Self::Seconds => Some(Self::Minutes),
            Self::Minutes => Some(Self::Hours),
            Self::Hours => Some(Self::Days),
            Self::Days => Some(Self::Years),
            Self::Years => None,
        }
    }
}

/// Mean time between failures for `rate`, expressed in `units`.
///
/// The rate is clamped to [`MIN_FAILURE_RATE`] from below.
pub fn failure_rate_to_mtbf(rate: f32, units: MtbfUnits) -> f32 {
    let rate = rate.max(MIN_FAILURE_RATE);
    (1.0 / rate) / units.seconds()
}

/// MTBF display string: "123.00 hours", or "0.20d" in short form.
///
/// When `max` is given and the value in `units` exceeds it, units escalate
/// ("600.00 minutes" becomes "10.00 hours") until the value fits or years
/// are reached.
pub fn mtbf_display(rate: f32, mut units: MtbfUnits, short: bool, max: Option<f32>) -> String {
    let mut value = failure_rate_to_mtbf(rate, units);
    if let Some(max) = max {
        while value > max {
            match units.next() {
                Some(next) => {
                    units = next;
                    value = failure_rate_to_mtbf(rate, units);
                }
                None => break,
            }
        }
    }
    if short {
        format!("{value:.2}{}", units.short_label())
    } else {
        format!("{value:.2} {}", units.label())
    }
}

/// Mission elapsed time as "HH:MM:SS". Negative input clamps to zero.
pub fn format_met(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!(
        "{:02}:{:02}:{:02}",
        total / 3_600,
        (total / 60) % 60,
        total % 60
    )
}
