pub mod client;
/// Application configuration module
pub mod config;
/// Typed service interfaces
pub mod interfaces;
/// Bearer token providers
pub mod token;
