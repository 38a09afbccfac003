// src/application/mod.rs
pub mod commands;
pub mod dto;
pub mod editor;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;

pub use error::ApplicationResult;
