use crate::state::{DisplayOptions, SystemSnapshot};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Separator placed between enabled stats in the info label.
pub const STAT_SEPARATOR: &str = "   ";

/// `strftime` format of the time chip.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Text produced by one refresh tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayLine {
    /// `None` hides the time chip.
    pub time: Option<String>,
    /// Enabled stats joined by [`STAT_SEPARATOR`]; empty when none are enabled.
    pub info: String,
}

/// Compose the label for the current tick from the enabled fields.
pub fn compose<Tz>(
    options: &DisplayOptions,
    now: &DateTime<Tz>,
    system: &SystemSnapshot,
) -> DisplayLine
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let time = options
        .show_time
        .then(|| now.format(TIME_FORMAT).to_string());

    let mut parts = Vec::with_capacity(2);
    if options.show_cpu {
        parts.push(format!("CPU: {:.1}%", system.cpu_average));
    }
    if options.show_ram {
        parts.push(format!("RAM: {:.1}%", system.ram_percent()));
    }

    DisplayLine { time, info: parts.join(STAT_SEPARATOR) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn at_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 34, 56).unwrap()
    }

    fn busy() -> SystemSnapshot {
        SystemSnapshot { cpu_average: 12.34, ram_used: 3, ram_total: 4 }
    }

    #[test]
    fn default_options_show_only_time() {
        let line = compose(&DisplayOptions::default(), &at_noon(), &busy());
        assert_eq!(line.time.as_deref(), Some("12:34:56"));
        assert_eq!(line.info, "");
    }

    #[test]
    fn all_stats_joined_with_separator() {
        let opts = DisplayOptions { show_cpu: true, show_ram: true, ..Default::default() };
        let line = compose(&opts, &at_noon(), &busy());
        assert_eq!(line.info, "CPU: 12.3%   RAM: 75.0%");
    }

    #[test]
    fn toggling_off_removes_text_on_next_compose() {
        let mut opts = DisplayOptions { show_cpu: true, show_ram: true, ..Default::default() };
        let before = compose(&opts, &at_noon(), &busy());
        assert!(before.info.contains("CPU"));

        opts.show_cpu = false;
        opts.show_time = false;
        let after = compose(&opts, &at_noon(), &busy());

        assert!(!after.info.contains("CPU"));
        assert_eq!(after.info, "RAM: 75.0%");
        assert_eq!(after.time, None);
    }
}
