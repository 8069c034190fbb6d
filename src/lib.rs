pub mod configuration;
pub mod model;
pub mod notification;
pub mod telemetry;
pub mod util;
