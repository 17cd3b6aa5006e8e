use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants;

/// Name of the optional config file looked up in the project root
pub const CONFIG_FILE_NAME: &str = "icon-kit.yaml";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub fonts: FontConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PathsConfig {
    #[serde(default = "default_app_icons_dir")]
    pub app_icons_dir: PathBuf,
    #[serde(default = "default_android_icons_dir")]
    pub android_icons_dir: PathBuf,
    #[serde(default = "default_assets_images_dir")]
    pub assets_images_dir: PathBuf,
    #[serde(default = "default_android_res_dir")]
    pub android_res_dir: PathBuf,
}

fn default_app_icons_dir() -> PathBuf {
    PathBuf::from("app_icons")
}

fn default_android_icons_dir() -> PathBuf {
    PathBuf::from("android_icons")
}

fn default_assets_images_dir() -> PathBuf {
    PathBuf::from("assets/images")
}

fn default_android_res_dir() -> PathBuf {
    PathBuf::from("android/app/src/main/res")
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            app_icons_dir: default_app_icons_dir(),
            android_icons_dir: default_android_icons_dir(),
            assets_images_dir: default_assets_images_dir(),
            android_res_dir: default_android_res_dir(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FontConfig {
    #[serde(default = "default_font_candidates")]
    pub candidates: Vec<PathBuf>,
    #[serde(default = "default_search_user_font_dir")]
    pub search_user_font_dir: bool,
}

fn default_font_candidates() -> Vec<PathBuf> {
    constants::fonts::DEFAULT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .collect()
}

fn default_search_user_font_dir() -> bool {
    true
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            candidates: default_font_candidates(),
            search_user_font_dir: default_search_user_font_dir(),
        }
    }
}

impl FontConfig {
    /// Only the built-in bitmap font; gives the same pixels on every host
    pub fn builtin_only() -> Self {
        FontConfig {
            candidates: Vec::new(),
            search_user_font_dir: false,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
    #[serde(default = "default_size_warning_bytes")]
    pub size_warning_bytes: u64,
}

fn default_jpeg_quality() -> u8 {
    constants::icon::DEFAULT_JPEG_QUALITY
}

fn default_size_warning_bytes() -> u64 {
    constants::icon::SIZE_WARNING_BYTES
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            jpeg_quality: default_jpeg_quality(),
            size_warning_bytes: default_size_warning_bytes(),
        }
    }
}

impl Config {
    /// Load from an explicit path, or from `icon-kit.yaml` under `root` if it exists.
    ///
    /// Falls back to defaults when no file is found. The file is never created.
    pub fn load(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        let config_path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = root.join(CONFIG_FILE_NAME);
                if !candidate.exists() {
                    tracing::debug!(
                        "No {} in {}, using defaults",
                        CONFIG_FILE_NAME,
                        root.display()
                    );
                    return Ok(Config::default());
                }
                candidate
            }
        };

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        let config = Self::from_yaml(&contents)
            .with_context(|| format!("Failed to load config file {}", config_path.display()))?;

        tracing::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        // An empty file parses as YAML null
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = serde_yaml::from_str(contents)
            .context("Failed to parse config file")?;

        // Validate configuration after loading
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.output.jpeg_quality == 0 || self.output.jpeg_quality > 100 {
            bail!("jpeg_quality must be between 1 and 100");
        }

        if self.output.size_warning_bytes == 0 {
            bail!("size_warning_bytes must be greater than 0");
        }

        let paths = [
            ("app_icons_dir", &self.paths.app_icons_dir),
            ("android_icons_dir", &self.paths.android_icons_dir),
            ("assets_images_dir", &self.paths.assets_images_dir),
            ("android_res_dir", &self.paths.android_res_dir),
        ];
        for (name, path) in paths {
            if path.as_os_str().is_empty() {
                bail!("{} cannot be empty", name);
            }
        }

        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize config")
    }
}
