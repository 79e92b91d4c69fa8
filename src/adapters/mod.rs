//! Adapters between the configuration model and the Kubernetes API

pub mod client;
pub mod codec;
pub mod identity;

pub use client::{ApplyOptions, ClusterClient, KubeClusterClient};
pub use identity::ObjectKey;
