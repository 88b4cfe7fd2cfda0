//! Skill-readiness scoring engine: pure, synchronous functions with no
//! I/O or shared mutable state. The HTTP layer is just a consumer.

pub mod aggregator;
pub mod handlers;
pub mod matcher;
pub mod recommender;
pub mod simple;
