//! Asynchronous Lambda Cloud client implementation.

use crate::models::{
    AddSshKeyConfiguration, AddedSshKey, FileSystem, Instance, InstanceIdList, InstanceTypes,
    LaunchInstanceConfiguration, LaunchedInstances, RestartedInstances, SshKey,
    TerminatedInstances,
};
use crate::Result;
use lambda_cloud_core::ids::{InstanceId, SshKeyId};
use lambda_cloud_core::{Dispatcher, HttpMethod, HttpTransport, LambdaCloudConfig, Transport};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

const USER_AGENT: &str = concat!("lambda-cloud/", env!("CARGO_PKG_VERSION"));

/// Builder for [`LambdaCloudClient`].
#[derive(Clone)]
pub struct LambdaCloudClientBuilder {
    config: LambdaCloudConfig,
    transport: Option<Arc<dyn Transport>>,
    user_agent: String,
}

impl LambdaCloudClientBuilder {
    /// Create a builder for the given configuration.
    #[must_use]
    pub fn new(config: LambdaCloudConfig) -> Self {
        Self {
            config,
            transport: None,
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Override the `User-Agent` sent by the default transport.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Send requests through an existing `reqwest` client, e.g. one with a timeout.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.transport = Some(Arc::new(HttpTransport::from_client(http)));
        self
    }

    /// Send requests through a custom [`Transport`].
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<LambdaCloudClient> {
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(&self.user_agent)?),
        };
        let dispatcher = Dispatcher::new(Arc::new(self.config), transport)?;
        Ok(LambdaCloudClient { dispatcher })
    }
}

/// Asynchronous Lambda Cloud client.
///
/// Cheap to clone; clones share the configuration and transport.
#[derive(Clone)]
pub struct LambdaCloudClient {
    dispatcher: Dispatcher,
}

impl LambdaCloudClient {
    /// Construct a client with the default transport.
    pub fn new(config: LambdaCloudConfig) -> Result<Self> {
        LambdaCloudClientBuilder::new(config).build()
    }

    /// Start a builder for the given configuration.
    #[must_use]
    pub fn builder(config: LambdaCloudConfig) -> LambdaCloudClientBuilder {
        LambdaCloudClientBuilder::new(config)
    }

    /// Return the configuration.
    #[must_use]
    pub fn config(&self) -> &LambdaCloudConfig {
        self.dispatcher.config()
    }

    /// Return the API root requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.config().base_path()
    }

    /// List instance types and the regions with capacity for each.
    pub async fn list_instance_types(&self) -> Result<InstanceTypes> {
        self.get(&["instance-types"]).await
    }

    /// List running instances.
    pub async fn list_running_instances(&self) -> Result<Vec<Instance>> {
        self.get(&["instances"]).await
    }

    /// Fetch a running instance.
    ///
    /// Fails with `global/object-does-not-exist` if there is no such instance.
    pub async fn get_running_instance(&self, id: &InstanceId) -> Result<Instance> {
        self.get(&["instances", id.as_str()]).await
    }

    /// Launch instances.
    ///
    /// Capacity, region and file-system problems are reported by the API as
    /// `instance-operations/launch/*` error codes.
    pub async fn launch_instance(
        &self,
        config: &LaunchInstanceConfiguration,
    ) -> Result<LaunchedInstances> {
        info!(
            region = %config.region_name,
            instance_type = %config.instance_type_name,
            quantity = config.quantity.unwrap_or(1),
            "launching Lambda Cloud instances"
        );
        self.post(&["instance-operations", "launch"], config).await
    }

    /// Terminate instances.
    pub async fn terminate_instances(&self, ids: &[InstanceId]) -> Result<TerminatedInstances> {
        info!(count = ids.len(), "terminating Lambda Cloud instances");
        self.post(
            &["instance-operations", "terminate"],
            &InstanceIdList { instance_ids: ids },
        )
        .await
    }

    /// Terminate a single instance.
    pub async fn terminate_instance(&self, id: &InstanceId) -> Result<TerminatedInstances> {
        self.terminate_instances(std::slice::from_ref(id)).await
    }

    /// Restart instances.
    pub async fn restart_instances(&self, ids: &[InstanceId]) -> Result<RestartedInstances> {
        info!(count = ids.len(), "restarting Lambda Cloud instances");
        self.post(
            &["instance-operations", "restart"],
            &InstanceIdList { instance_ids: ids },
        )
        .await
    }

    /// List SSH keys.
    pub async fn list_ssh_keys(&self) -> Result<Vec<SshKey>> {
        self.get(&["ssh-keys"]).await
    }

    /// Add an SSH key.
    ///
    /// Without a public key, Lambda Cloud generates a key pair and returns the
    /// private key once, as [`AddedSshKey::Generated`].
    pub async fn add_ssh_key(&self, config: &AddSshKeyConfiguration) -> Result<AddedSshKey> {
        self.post(&["ssh-keys"], config).await
    }

    /// Delete an SSH key.
    pub async fn delete_ssh_key(&self, id: &SshKeyId) -> Result<()> {
        info!(%id, "deleting SSH key");
        self.dispatcher
            .dispatch_empty(&["ssh-keys", id.as_str()], HttpMethod::Delete, None)
            .await
    }

    /// List file systems.
    pub async fn list_file_systems(&self) -> Result<Vec<FileSystem>> {
        self.get(&["file-systems"]).await
    }

    async fn get<R>(&self, route: &[&str]) -> Result<R>
    where
        R: serde::de::DeserializeOwned,
    {
        self.dispatcher.dispatch(route, HttpMethod::Get, None).await
    }

    async fn post<B, R>(&self, route: &[&str], body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: serde::de::DeserializeOwned,
    {
        let payload = serde_json::to_string(body)?;
        self.dispatcher
            .dispatch(route, HttpMethod::Post, Some(payload))
            .await
    }
}
