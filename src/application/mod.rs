/// Application layer - Use cases, services and DTOs
///
/// This layer orchestrates the domain services and reaches the filesystem,
/// the manifest parser and the license classifier only through ports.
pub mod dto;
pub mod services;
pub mod use_cases;
