//! Lambda Cloud client and data models.
//!
//! Provides typed structures and an asynchronous client for the Lambda Cloud
//! REST API: instance types, instances, SSH keys and file systems.
//!
//! ```no_run
//! use lambda_cloud::{LambdaCloudClient, LambdaCloudConfig, LaunchInstanceConfiguration};
//!
//! # async fn run() -> lambda_cloud::Result<()> {
//! let client = LambdaCloudClient::new(LambdaCloudConfig::new("secret_key"))?;
//!
//! let launched = client
//!     .launch_instance(&LaunchInstanceConfiguration::new("us-east-1", "gpu_1x_a100", "mykey"))
//!     .await?;
//! println!("launched {:?}", launched.instance_ids);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{LambdaCloudClient, LambdaCloudClientBuilder};
pub use lambda_cloud_core::ids::{FileSystemId, InstanceId, SshKeyId};
pub use lambda_cloud_core::{Error, ErrorCode, ErrorDetail, ErrorResponse, LambdaCloudConfig};
pub use models::{
    AddSshKeyConfiguration, AddedSshKey, FileSystem, Instance, InstanceSpecs, InstanceType,
    InstanceTypeAvailability, InstanceTypes, LaunchInstanceConfiguration, LaunchedInstances,
    Region, RestartedInstances, SshKey, SshKeyWithPrivateKey, TerminatedInstances, User,
};

/// Convenient result alias that reuses the shared Lambda Cloud error type.
pub type Result<T> = lambda_cloud_core::Result<T>;
