use anyhow::{Context, Result};
use reelnight_core::Movie;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub fn reelnight_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".reelnight"))
}

pub fn ensure_reelnight_home() -> Result<PathBuf> {
    let dir = reelnight_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self { timezone: default_timezone() }
    }
}

fn default_timezone() -> String {
    "America/Chicago".to_string()
}

pub fn catalog_path() -> Result<PathBuf> {
    Ok(ensure_reelnight_home()?.join("catalog.json"))
}

pub fn profile_path() -> Result<PathBuf> {
    Ok(ensure_reelnight_home()?.join("profile.json"))
}

pub fn events_path() -> Result<PathBuf> {
    Ok(ensure_reelnight_home()?.join("events.json"))
}

pub fn read_profile() -> Result<Profile> {
    let p = profile_path()?;
    if !p.exists() {
        return Ok(Profile::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(serde_json::from_str(&s)?)
}

pub fn read_catalog() -> Result<Vec<Movie>> {
    let p = catalog_path()?;
    if !p.exists() {
        return Ok(Vec::new());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(serde_json::from_str(&s)?)
}

pub fn write_catalog(movies: &[Movie]) -> Result<()> {
    let p = catalog_path()?;
    let json = serde_json::to_string_pretty(movies)?;
    fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

/// Find a movie by id, returning its index into the catalog.
pub fn find_movie(movies: &[Movie], id: &str) -> Option<usize> {
    movies.iter().position(|m| m.id == id)
}

/// Derive a catalog id from a title: lowercase, alphanumeric runs joined
/// by dashes.
pub fn slug_id(title: &str) -> String {
    let mut out = String::new();
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_punctuation() {
        assert_eq!(slug_id("The Iron Giant"), "the-iron-giant");
        assert_eq!(slug_id("Wall-E (2008)!"), "wall-e-2008");
    }
}
