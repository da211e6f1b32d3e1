//! One loader run, from environment snapshot to output file

use config::{ConfigLoader, Environment};
use pipeline::{extract, resolve, write_output};
use std::future::Future;
use std::path::PathBuf;
use store_client::ParameterStore;
use tracing::info;
use types::Result;

/// How a successful run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No `SSM_LOAD_` variables were declared
    NothingToDo,
    /// Every parameter resolved and the file was written
    Written { path: PathBuf, count: usize },
}

/// Run the pipeline against `env`
///
/// `connect` builds the store and is only called once there is at least
/// one parameter to fetch.
pub async fn run<F, Fut, S>(env: &Environment, connect: F) -> Result<RunOutcome>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = S>,
    S: ParameterStore,
{
    info!("Loading global configuration");
    let config = ConfigLoader::load(env)?;

    let mut params = extract(env, config.name_stripping);
    if params.is_empty() {
        info!("No parameters provided, exiting");
        return Ok(RunOutcome::NothingToDo);
    }
    info!(count = params.len(), "Parameters declared");

    let store = connect().await;
    resolve(&mut params, &store).await?;

    if config.debug {
        for param in &params {
            info!(%param, version = param.version, "Obtained parameter");
        }
    }

    let path = write_output(&params, &config)?;

    Ok(RunOutcome::Written {
        path,
        count: params.len(),
    })
}
