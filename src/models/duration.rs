/// Unit a stored duration value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Minutes,
    Hours,
}

impl DurationUnit {
    pub fn tag(self, value: f64) -> WorkDuration {
        match self {
            DurationUnit::Minutes => WorkDuration::Minutes(value),
            DurationUnit::Hours => WorkDuration::Hours(value),
        }
    }
}

/// A duration that carries its own unit.
///
/// The only conversion is [`WorkDuration::hours`], so a stored value is
/// converted once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkDuration {
    Minutes(f64),
    Hours(f64),
}

impl WorkDuration {
    pub fn hours(self) -> f64 {
        match self {
            WorkDuration::Minutes(m) => m / 60.0,
            WorkDuration::Hours(h) => h,
        }
    }
}
