use anyhow::{Context, Result};
use resvg::usvg::fontdb;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::FontConfig;
use crate::constants;

/// A font file that loaded and exposes at least one family name
#[derive(Clone)]
pub struct ScalableFont {
    pub path: PathBuf,
    pub family: String,
    pub(crate) database: Arc<fontdb::Database>,
}

impl std::fmt::Debug for ScalableFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalableFont")
            .field("path", &self.path)
            .field("family", &self.family)
            .finish()
    }
}

/// The font used for every string on the icon
#[derive(Debug, Clone)]
pub enum ResolvedFont {
    Scalable(ScalableFont),
    /// Built-in 5×7 bitmap font, always available
    Builtin,
}

impl ResolvedFont {
    pub fn describe(&self) -> String {
        match self {
            ResolvedFont::Scalable(font) => format!("{} ({})", font.family, font.path.display()),
            ResolvedFont::Builtin => "built-in bitmap font".to_string(),
        }
    }
}

/// Candidate paths in the order they are tried
pub fn candidate_paths(config: &FontConfig) -> Vec<PathBuf> {
    let mut paths = config.candidates.clone();

    if config.search_user_font_dir {
        if let Some(dir) = dirs::font_dir() {
            paths.extend(
                constants::fonts::USER_FONT_DIR_NAMES
                    .iter()
                    .map(|name| dir.join(name)),
            );
        }
    }

    paths
}

/// Try every candidate in order; the first that loads wins.
///
/// Never fails: when nothing loads the built-in bitmap font is returned.
pub fn resolve_font(config: &FontConfig) -> ResolvedFont {
    for path in candidate_paths(config) {
        match load_font(&path) {
            Ok(font) => {
                debug!("Using font {} from {}", font.family, path.display());
                return ResolvedFont::Scalable(font);
            }
            Err(e) => debug!("Skipping font candidate {}: {:#}", path.display(), e),
        }
    }

    info!("No scalable font found, falling back to the built-in bitmap font");
    ResolvedFont::Builtin
}

pub fn load_font(path: &Path) -> Result<ScalableFont> {
    let data = fs::read(path)
        .with_context(|| format!("Failed to read font file {}", path.display()))?;

    let mut database = fontdb::Database::new();
    database.load_font_data(data);

    let family = database
        .faces()
        .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
        .with_context(|| format!("No usable font face in {}", path.display()))?;

    Ok(ScalableFont {
        path: path.to_path_buf(),
        family,
        database: Arc::new(database),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_candidates_fall_back_to_builtin() {
        let font = resolve_font(&FontConfig::builtin_only());
        assert!(matches!(font, ResolvedFont::Builtin));
        assert_eq!(font.describe(), "built-in bitmap font");
    }

    #[test]
    fn test_missing_and_corrupt_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let corrupt = dir.path().join("broken.ttf");
        fs::write(&corrupt, b"not a font").unwrap();

        let config = FontConfig {
            candidates: vec![dir.path().join("missing.ttf"), corrupt],
            search_user_font_dir: false,
        };
        assert!(matches!(resolve_font(&config), ResolvedFont::Builtin));
    }

    #[test]
    fn test_load_font_reports_path() {
        let err = load_font(Path::new("/nonexistent/font.ttf")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/font.ttf"));
    }

    #[test]
    fn test_user_font_dir_only_when_enabled() {
        let config = FontConfig {
            candidates: vec![PathBuf::from("a.ttf")],
            search_user_font_dir: false,
        };
        assert_eq!(candidate_paths(&config), vec![PathBuf::from("a.ttf")]);
    }
}
