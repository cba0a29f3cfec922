use std::fs;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::error::CollectError;
use crate::fetch::Fetch;
use crate::model::ErrorDetails;
use crate::parser::Source;

/// Collect one source into `<output_dir>/<source file name>`.
pub fn collect(
    source: &dyn Source,
    fetcher: &dyn Fetch,
    output_dir: &Path,
) -> Result<PathBuf, CollectError> {
    let path = output_dir.join(source.file_name());
    collect_error_codes(source.urls(), source, fetcher, &path)?;
    Ok(path)
}

/// Fetch and parse every URL in order, then write all records in one shot.
/// Nothing is written unless every page succeeded.
pub fn collect_error_codes(
    urls: &[&str],
    source: &dyn Source,
    fetcher: &dyn Fetch,
    path: &Path,
) -> Result<usize, CollectError> {
    let pb = ProgressBar::new(urls.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:>8} [{bar:40}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    pb.set_message(source.name());

    let mut details = ErrorDetails::default();
    for url in urls {
        let parsed = source.extract(fetcher, url).inspect_err(|_| pb.abandon())?;
        debug!("{} records from {}", parsed.len(), url);
        details.errors.extend(parsed);
        pb.inc(1);
    }
    pb.finish_and_clear();

    write_json(&details, path)?;
    info!(
        "Wrote {} {} error codes to {}",
        details.errors.len(),
        source.name(),
        path.display()
    );
    Ok(details.errors.len())
}

/// Two-space indented, non-ASCII left unescaped, `\n` line endings.
fn write_json(details: &ErrorDetails, path: &Path) -> Result<(), CollectError> {
    let json = serde_json::to_string_pretty(details)?;
    fs::write(path, json).map_err(|source| CollectError::Io {
        path: path.to_path_buf(),
        source,
    })
}
