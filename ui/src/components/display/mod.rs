pub mod alert_banner;
pub mod loading_indicator;

pub use alert_banner::*;
pub use loading_indicator::*;
