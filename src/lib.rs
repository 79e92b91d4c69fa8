//! Strimzi CRD Provider
//!
//! Exposes Strimzi Kafka custom resources (`kafka.strimzi.io/v1beta2`) as
//! managed resources, data sources and manifest data sources. Resources are
//! written with server-side apply through a dynamic Kubernetes client.

pub mod adapters;
pub mod crd;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod provider;
pub mod schema;

pub use error::{Error, Result};
