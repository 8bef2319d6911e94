pub mod all_conference_alert;
pub mod config;
pub mod logging;
pub mod render;
