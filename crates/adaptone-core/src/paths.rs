use anyhow::Result;
use std::path::PathBuf;

const ADAPTONE_DIR: &str = ".adaptone";
const DB_FILE: &str = "adaptone.db";

/// Environment variable to override the Adaptone data directory.
const ADAPTONE_DIR_ENV: &str = "ADAPTONE_DIR";

/// Resolve the Adaptone data directory.
/// Priority: ADAPTONE_DIR env var > ~/.adaptone/
pub fn resolve_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(ADAPTONE_DIR_ENV)
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(ADAPTONE_DIR))
        .ok_or_else(|| anyhow::anyhow!("Failed to determine home directory"))
}

/// Ensure the data directory exists and return its path.
pub fn ensure_data_dir() -> Result<PathBuf> {
    let dir = resolve_data_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Ensure the database path exists: ~/.adaptone/adaptone.db
pub fn ensure_database_path() -> Result<PathBuf> {
    Ok(ensure_data_dir()?.join(DB_FILE))
}

/// Convenience helper returning the database path as a UTF-8 string.
pub fn ensure_database_path_string() -> Result<String> {
    Ok(ensure_database_path()?.to_string_lossy().into_owned())
}
