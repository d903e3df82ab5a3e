/// Application-level constants
pub const APP_NAME: &str = "Clinic Desk";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Rendering used for appointment timestamps in every listing and report line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Gap between the demo's first slot and its follow-up booking.
pub const DEMO_FOLLOW_UP_HOURS: i64 = 1;

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_CRATE_NAME"))
}

/// Render a timestamp for human-readable output.
pub fn format_timestamp(at: &chrono::NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn app_name_is_clinic_desk() {
        assert_eq!(APP_NAME, "Clinic Desk");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_filter_targets_this_crate() {
        assert_eq!(default_log_filter(), "clinic_desk_lib=info");
    }

    #[test]
    fn timestamp_renders_to_the_second() {
        let at = NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(9, 30, 45)
            .unwrap();
        assert_eq!(format_timestamp(&at), "2026-03-02 09:30:45");
    }
}
