/// Application layer - Use cases and application services
///
/// This layer orchestrates the domain logic and coordinates
/// between the domain layer and infrastructure (adapters).
pub mod dto;
pub mod factories;
pub mod use_cases;
