//! AWS Systems Manager Parameter Store client

use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_sdk_ssm::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_ssm::operation::get_parameter::GetParameterError;
use aws_sdk_ssm::Client;
use types::StoreError;

use crate::store::{ParameterStore, StoredParameter};

const ACCESS_DENIED_CODE: &str = "AccessDeniedException";

/// Parameter store backed by AWS SSM `GetParameter`
#[derive(Debug, Clone)]
pub struct SsmParameterStore {
    client: Client,
}

impl SsmParameterStore {
    /// Create a client from the default AWS configuration chain
    ///
    /// Region, credentials and endpoint come from the usual `AWS_*`
    /// variables and shared config files. SDK retries are turned off, a
    /// failed fetch fails the run.
    pub async fn from_env() -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .retry_config(RetryConfig::disabled())
            .load()
            .await;

        tracing::info!(
            region = %shared.region().map(|r| r.to_string()).unwrap_or_default(),
            "Loaded AWS configuration"
        );

        Self {
            client: Client::new(&shared),
        }
    }

    /// Create a client from an explicit SDK configuration
    pub fn from_conf(conf: aws_sdk_ssm::Config) -> Self {
        Self {
            client: Client::from_conf(conf),
        }
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    async fn fetch(&self, path: &str, with_decryption: bool) -> Result<StoredParameter, StoreError> {
        let output = self
            .client
            .get_parameter()
            .name(path)
            .with_decryption(with_decryption)
            .send()
            .await
            .map_err(|e| classify_error(path, e))?;

        let parameter = output
            .parameter()
            .ok_or_else(|| StoreError::MalformedResponse {
                path: path.to_string(),
            })?;
        let value = parameter
            .value()
            .ok_or_else(|| StoreError::MalformedResponse {
                path: path.to_string(),
            })?;

        Ok(StoredParameter::new(value, parameter.version()))
    }

    fn name(&self) -> &str {
        "ssm"
    }
}

/// Map an SDK failure onto the store error taxonomy
fn classify_error(path: &str, err: SdkError<GetParameterError>) -> StoreError {
    if let Some(service) = err.as_service_error() {
        if service.is_parameter_not_found() || service.is_parameter_version_not_found() {
            return StoreError::NotFound {
                path: path.to_string(),
            };
        }
        if service.code() == Some(ACCESS_DENIED_CODE) {
            return StoreError::AccessDenied {
                path: path.to_string(),
                message: service.message().unwrap_or(ACCESS_DENIED_CODE).to_string(),
            };
        }
    }

    StoreError::Transport {
        path: path.to_string(),
        message: DisplayErrorContext(&err).to_string(),
    }
}
