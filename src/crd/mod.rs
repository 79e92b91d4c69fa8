//! Strimzi custom resources exposed by the provider
//!
//! Every resource lives in `kafka.strimzi.io/v1beta2` and is namespaced.

pub mod common;
mod kafka_bridge;
mod kafka_rebalance;
mod kafka_topic;
mod kafka_user;

pub use kafka_bridge::*;
pub use kafka_rebalance::*;
pub use kafka_topic::*;
pub use kafka_user::*;
