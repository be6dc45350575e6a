// src/lib.rs
pub mod config;
pub mod dashboard;
pub mod inputs;
pub mod logger;
pub mod market;
pub mod models;
pub mod report;
pub mod sensitivity;
pub mod utils;
