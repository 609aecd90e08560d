pub use configuration::*;
pub use startup::CaptureApp;
pub use telemetry::setup_tracing;

mod configuration;
mod startup;
mod telemetry;
