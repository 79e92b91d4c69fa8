//! Line-delimited JSON requests and responses understood by the host

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

use super::{Provider, ProviderSchema};
use crate::diagnostics::Diagnostic;
use crate::engine::PlanResult;
use crate::{Error, Result};

/// One request, tagged by `op`
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    Configure {
        #[serde(default)]
        config: Value,
    },
    Schema,
    /// Validate a resource or data source configuration
    Validate {
        #[serde(rename = "type")]
        type_name: String,
        config: Value,
    },
    Plan {
        #[serde(rename = "type")]
        type_name: String,
        #[serde(default)]
        prior_state: Option<Value>,
        config: Value,
    },
    Create {
        #[serde(rename = "type")]
        type_name: String,
        config: Value,
    },
    Read {
        #[serde(rename = "type")]
        type_name: String,
        state: Value,
    },
    Update {
        #[serde(rename = "type")]
        type_name: String,
        prior_state: Value,
        config: Value,
    },
    Delete {
        #[serde(rename = "type")]
        type_name: String,
        state: Value,
    },
    Import {
        #[serde(rename = "type")]
        type_name: String,
        id: String,
    },
    ReadDataSource {
        #[serde(rename = "type")]
        type_name: String,
        config: Value,
    },
}

impl Request {
    /// Operation name, as written in the `op` tag
    pub fn op(&self) -> &'static str {
        match self {
            Request::Configure { .. } => "configure",
            Request::Schema => "schema",
            Request::Validate { .. } => "validate",
            Request::Plan { .. } => "plan",
            Request::Create { .. } => "create",
            Request::Read { .. } => "read",
            Request::Update { .. } => "update",
            Request::Delete { .. } => "delete",
            Request::Import { .. } => "import",
            Request::ReadDataSource { .. } => "read_data_source",
        }
    }
}

/// Response to one request; absent members are omitted
#[derive(Clone, Debug, Default, Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<PlanResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<ProviderSchema>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl Response {
    fn state(state: Value) -> Self {
        Self {
            state: Some(state),
            ..Self::default()
        }
    }

    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            diagnostics,
            ..Self::default()
        }
    }

    pub fn from_error(err: &Error) -> Self {
        Self::from_diagnostics(Diagnostic::from_error(err))
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

impl Provider {
    /// Handle one request; failures come back as error diagnostics
    pub async fn handle(&mut self, request: Request) -> Response {
        let op = request.op();
        debug!(op, "Handling request");
        match self.dispatch(request).await {
            Ok(response) => response,
            Err(err) => {
                error!(op, "Request failed: {}", err);
                Response::from_error(&err)
            }
        }
    }

    async fn dispatch(&mut self, request: Request) -> Result<Response> {
        match request {
            Request::Configure { config } => {
                self.configure(&config).await?;
                if self.context().is_offline() {
                    return Ok(Response::from_diagnostics(vec![Diagnostic::warning(
                        "Provider is offline",
                        "No Kubernetes client was configured. Only manifest data sources \
                         can be used.",
                    )]));
                }
                Ok(Response::default())
            }
            Request::Schema => Ok(Response {
                schema: Some(self.schema()),
                ..Response::default()
            }),
            Request::Validate { type_name, config } => {
                match self.resource(&type_name) {
                    Ok(resource) => resource.validate(&config)?,
                    Err(_) => self.data_source(&type_name)?.validate(&config)?,
                }
                Ok(Response::default())
            }
            Request::Plan {
                type_name,
                prior_state,
                config,
            } => {
                let plan = self
                    .resource(&type_name)?
                    .plan(prior_state.as_ref(), &config)?;
                Ok(Response {
                    plan: Some(plan),
                    ..Response::default()
                })
            }
            Request::Create { type_name, config } => {
                let state = self.resource(&type_name)?.create(&config).await?;
                Ok(Response::state(state))
            }
            Request::Read { type_name, state } => {
                let state = self.resource(&type_name)?.read(&state).await?;
                Ok(Response::state(state))
            }
            Request::Update {
                type_name,
                prior_state,
                config,
            } => {
                let state = self
                    .resource(&type_name)?
                    .update(&prior_state, &config)
                    .await?;
                Ok(Response::state(state))
            }
            Request::Delete { type_name, state } => {
                self.resource(&type_name)?.delete(&state).await?;
                Ok(Response::default())
            }
            Request::Import { type_name, id } => {
                let state = self.resource(&type_name)?.import(&id)?;
                Ok(Response::state(state))
            }
            Request::ReadDataSource { type_name, config } => {
                let state = self.data_source(&type_name)?.read(&config).await?;
                Ok(Response::state(state))
            }
        }
    }
}
