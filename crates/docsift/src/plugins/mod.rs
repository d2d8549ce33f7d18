//! Strategy plumbing: the [`TextStrategy`] trait and the format-keyed registry.
//!
//! Strategies are stored as `Arc<dyn TextStrategy>` and shared by every
//! extraction running in the process.

pub mod registry;
pub mod strategy;

pub use registry::StrategyRegistry;
pub use strategy::TextStrategy;
