pub mod clinic;
pub mod config;
pub mod core_state;
pub mod demo;
pub mod display;
pub mod models;
pub mod prescriptions;
pub mod scheduler;
pub mod search;
pub mod store;

use chrono::{Local, NaiveDateTime, Timelike};
use tracing_subscriber::EnvFilter;

pub use clinic::{BookingReport, ClinicSystem};
pub use store::StoreError;

/// Install the tracing subscriber. Safe to call more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Current local time truncated to the minute.
fn demo_start() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}

pub fn run() -> Result<(), StoreError> {
    init_tracing();
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    for line in demo::run_demo(demo_start())? {
        println!("{line}");
    }
    Ok(())
}
