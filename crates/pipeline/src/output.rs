//! Write resolved parameters to the output file

use config::RunConfig;
use std::path::PathBuf;
use types::{Output, Param, WriteError};

/// Destination of the output file
///
/// Directory and filename are joined with a separator, so a filename with
/// a leading `/` still lands inside the directory.
pub fn output_path(config: &RunConfig) -> PathBuf {
    PathBuf::from(format!(
        "{}/{}",
        config.output_directory, config.output_filename
    ))
}

/// Serialize `params` inside the envelope and write them in one call
///
/// The file is created or truncated. The directory is not checked
/// beforehand, a missing one surfaces as [`WriteError::Io`].
pub fn write_output(params: &[Param], config: &RunConfig) -> Result<PathBuf, WriteError> {
    let payload = serde_json::to_string(&Output::new(params))?;

    if config.debug {
        tracing::info!(payload = %payload, "JSON payload");
    }

    let path = output_path(config);
    tracing::info!(path = %path.display(), count = params.len(), "Writing configuration file");

    std::fs::write(&path, payload).map_err(|source| WriteError::Io {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
