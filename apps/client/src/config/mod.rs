pub mod settings;

pub use settings::{timeout_from_millis, ClientConfig, DEFAULT_BASE_URL};
