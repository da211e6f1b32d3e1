//! Resolve parameters against a store

use store_client::ParameterStore;
use types::{Param, ResolveError};

/// Fetch every parameter in order, filling in value and version in place
///
/// Stops at the first failure. Entries resolved before it keep their
/// values, later entries are never requested.
pub async fn resolve<S>(params: &mut [Param], store: &S) -> Result<(), ResolveError>
where
    S: ParameterStore + ?Sized,
{
    for param in params.iter_mut() {
        tracing::info!(name = %param.name, path = %param.path, store = store.name(), "Obtaining parameter");

        let stored = store
            .fetch(&param.path, true)
            .await
            .map_err(|cause| ResolveError {
                name: param.name.clone(),
                cause,
            })?;

        param.resolve(stored.value, stored.version);
    }

    Ok(())
}
