//! Startup seeding of users from a JSON file.
//!
//! The file holds an array of `{"name": ..., "email": ...}` objects. Each
//! entry goes through [`UserRegistrationService`], so seeded data obeys the
//! same presence and uniqueness rules as any other write. Rejected entries
//! are logged and skipped.

use std::io;
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use tracing::{info, warn};

use crate::domain::{NewUser, UserRegistrationService};

/// Outcome of a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub registered: usize,
    pub rejected: usize,
}

/// Failures that abort seeding before any entry is processed.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("seed path {path:?} has no file name")]
    InvalidPath { path: PathBuf },
    #[error("failed to read seed file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse seed file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn read_seed_file(path: &Path) -> Result<String, SeedError> {
    let file_name = path.file_name().ok_or_else(|| SeedError::InvalidPath {
        path: path.to_path_buf(),
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let read_error = |source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    dir.read_to_string(file_name).map_err(read_error)
}

/// Register every user listed in the JSON file at `path`.
///
/// # Errors
/// Returns [`SeedError`] when the file cannot be read or is not a JSON array
/// of user objects. Individual rejections are counted, not returned.
pub async fn seed_users_from_file(
    path: &Path,
    service: &UserRegistrationService,
) -> Result<SeedReport, SeedError> {
    let contents = read_seed_file(path)?;
    let drafts: Vec<NewUser> = serde_json::from_str(&contents).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut report = SeedReport::default();
    for (index, draft) in drafts.into_iter().enumerate() {
        match service.register(draft).await {
            Ok(user) => {
                info!(user_id = %user.id(), "seeded user");
                report.registered += 1;
            }
            Err(error) => {
                warn!(
                    entry = index,
                    code = ?error.code(),
                    error = %error,
                    "skipping seed entry"
                );
                report.rejected += 1;
            }
        }
    }
    Ok(report)
}
