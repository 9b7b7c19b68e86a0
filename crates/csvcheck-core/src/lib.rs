pub mod config;
pub mod logging;

pub mod adapter;
pub mod endpoint;
pub mod error;
pub mod file;
pub mod ports;
pub mod report;
pub mod response;
pub mod storage;
pub mod transport;
pub mod url_model;

mod guard;
