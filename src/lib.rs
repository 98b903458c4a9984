pub mod change_detector;
pub mod cli;
pub mod config;
pub mod data_models;
pub mod display;
pub mod error;
pub mod presenter;
pub mod query_client;
pub mod session;
pub mod transcript;
pub mod transport;
