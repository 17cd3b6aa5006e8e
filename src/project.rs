use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::auditor::{self, AuditReport, FileManifest};
use crate::composer::{self, SavedIcons};
use crate::config::Config;
use crate::constants::icon;
use crate::exporter::{self, ExportedIcon};
use crate::fonts;
use crate::installer::{self, InstalledFile};

/// A project root plus its configuration; every step resolves paths against `root`
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
}

impl Project {
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        Project { root: root.into(), config }
    }

    /// Load `icon-kit.yaml` (or `config_path`) for `root`
    pub fn open(root: impl Into<PathBuf>, config_path: Option<&Path>) -> Result<Self> {
        let root = root.into();
        let config = Config::load(config_path, &root)?;
        Ok(Project { root, config })
    }

    /// Like [`Project::open`], but a broken config only warns and falls back to defaults
    pub fn open_or_default(root: impl Into<PathBuf>, config_path: Option<&Path>) -> Self {
        let root = root.into();
        let config = Config::load(config_path, &root).unwrap_or_else(|e| {
            eprintln!("⚠️  Ignoring config: {:#}", e);
            Config::default()
        });
        Project { root, config }
    }

    pub fn app_icons_dir(&self) -> PathBuf {
        self.root.join(&self.config.paths.app_icons_dir)
    }

    pub fn base_png(&self) -> PathBuf {
        self.app_icons_dir().join(icon::PNG_FILE_NAME)
    }

    pub fn android_icons_dir(&self) -> PathBuf {
        self.root.join(&self.config.paths.android_icons_dir)
    }

    pub fn manifest(&self) -> FileManifest {
        FileManifest::from_paths(&self.config.paths)
    }

    pub fn compose(&self) -> Result<SavedIcons> {
        let font = fonts::resolve_font(&self.config.fonts);
        composer::run(
            &font,
            &self.app_icons_dir(),
            self.config.output.jpeg_quality,
            self.config.output.size_warning_bytes,
        )
    }

    pub fn export(&self) -> Result<Vec<ExportedIcon>> {
        exporter::run(&self.base_png(), &self.android_icons_dir())
    }

    pub fn install(&self) -> Result<Vec<InstalledFile>> {
        installer::run(&self.root, &self.config.paths)
    }

    pub fn audit(&self) -> AuditReport {
        auditor::run(&self.root, &self.manifest())
    }

    /// Compose, export, install, then audit
    pub fn run_all(&self) -> Result<AuditReport> {
        self.compose()?;
        println!();
        self.export()?;
        println!();
        self.install()?;
        println!();
        Ok(self.audit())
    }
}
