pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod network;
pub mod photo;
pub mod share;
pub mod ui;
