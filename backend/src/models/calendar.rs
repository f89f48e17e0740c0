//! Calendar and locale configuration.
//!
//! Weekday/month labels, the first day of the week, and shift parameters are
//! passed explicitly to the engine instead of being read from ambient locale
//! state, so the same inputs always produce the same output.

use chrono::Weekday;

/// Calendar, locale, and shift configuration for the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarConfig {
    /// First day of the week for the `week` named period.
    pub week_start: Weekday,
    /// Weekday short labels, indexed from Monday.
    pub weekday_labels: [String; 7],
    /// Month abbreviations, indexed from January.
    pub month_labels: [String; 12],
    /// Planned operating minutes per active day, used for MTBF/availability.
    pub minutes_per_shift: f64,
    /// Availability target percentage for target-attainment.
    pub target_availability_pct: f64,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            week_start: Weekday::Mon,
            weekday_labels: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"].map(String::from),
            month_labels: [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]
            .map(String::from),
            minutes_per_shift: 480.0,
            target_availability_pct: 95.0,
        }
    }
}

impl CalendarConfig {
    /// Label for the given weekday.
    pub fn weekday_label(&self, weekday: Weekday) -> &str {
        &self.weekday_labels[weekday.num_days_from_monday() as usize]
    }

    /// Label for a zero-based month index (0 = January).
    pub fn month_label(&self, month0: u32) -> &str {
        &self.month_labels[(month0 % 12) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let config = CalendarConfig::default();
        assert_eq!(config.weekday_label(Weekday::Mon), "Mon");
        assert_eq!(config.weekday_label(Weekday::Sun), "Sun");
        assert_eq!(config.month_label(0), "Jan");
        assert_eq!(config.month_label(11), "Dec");
    }

    #[test]
    fn test_custom_locale_labels() {
        let config = CalendarConfig {
            weekday_labels: ["Seg", "Ter", "Qua", "Qui", "Sex", "Sáb", "Dom"].map(String::from),
            ..CalendarConfig::default()
        };
        assert_eq!(config.weekday_label(Weekday::Sat), "Sáb");
    }
}
