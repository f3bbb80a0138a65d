use std::{fs, io, path::Path};

use tracing::{info, warn};

use crate::error::{Result, SeedError};

/// Replaces the content of `path` with `statement`. An absent statement
/// leaves an empty file so stale output from an earlier run never survives.
pub fn write_statement(path: &Path, statement: Option<&str>) -> Result<()> {
    let output_err = |source: io::Error| SeedError::Output {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(output_err)?;
    }
    match statement {
        Some(statement) => {
            fs::write(path, statement).map_err(output_err)?;
            info!("Wrote {} bytes to {}", statement.len(), path.display());
        }
        None => {
            fs::write(path, "").map_err(output_err)?;
            warn!("No rows for {}, left it empty", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scripts").join("userAccounts.sql");
        write_statement(&path, Some("INSERT INTO `user` VALUES (1), (2);")).unwrap();
        write_statement(&path, Some("INSERT INTO `user` VALUES (3);")).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "INSERT INTO `user` VALUES (3);"
        );
    }

    #[test]
    fn missing_statement_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("likedSaleListings.sql");
        fs::write(&path, "stale").unwrap();
        write_statement(&path, None).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
