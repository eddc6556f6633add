use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use shared::error::ShowcaseError;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShowcaseItem {
    pub label: String,
    pub glyph: String,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub hero_title: String,
    pub items: Vec<ShowcaseItem>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Astro Showcase".into(),
            window_width: 1180.0,
            window_height: 640.0,
            hero_title: "Exploring Code Among the Stars".into(),
            items: default_items(),
        }
    }
}

fn default_items() -> Vec<ShowcaseItem> {
    [
        ("Rust", "🦀"),
        ("Python", "🐍"),
        ("TypeScript", "🟦"),
        ("Docker", "🐳"),
        ("PostgreSQL", "🐘"),
        ("Linux", "🐧"),
        ("Git", "🌿"),
        ("WebAssembly", "🕸"),
        ("Kubernetes", "☸"),
        ("Redis", "🧱"),
    ]
    .into_iter()
    .map(|(label, glyph)| ShowcaseItem {
        label: label.into(),
        glyph: glyph.into(),
    })
    .collect()
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    window_title: Option<String>,
    window_width: Option<f32>,
    window_height: Option<f32>,
    hero_title: Option<String>,
    items: Option<Vec<ShowcaseItem>>,
}

/// Layered settings: built-in defaults, then an optional showcase.toml,
/// then environment overrides. A broken config file degrades to defaults
/// with a warning instead of failing startup.
pub fn load_settings(explicit_path: Option<&Path>) -> Settings {
    let mut settings = Settings::default();

    if let Some(path) = resolve_config_path(explicit_path) {
        match read_settings_file(&path) {
            Ok(file) => apply_file(&mut settings, file),
            Err(err) => warn!("ignoring config file '{}': {err:#}", path.display()),
        }
    }

    if let Ok(v) = std::env::var("SHOWCASE__WINDOW_TITLE") {
        settings.window_title = v;
    }
    if let Ok(v) = std::env::var("SHOWCASE__HERO_TITLE") {
        settings.hero_title = v;
    }

    if settings.items.is_empty() {
        // An empty item set leaves the carousel disabled; the shell still
        // comes up with the hero title and footer.
        warn!("showcase item set is empty; the carousel will stay disabled");
    }
    settings
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = std::env::var("SHOWCASE_CONFIG") {
        return Some(PathBuf::from(path));
    }
    let local = Path::new("showcase.toml");
    if local.exists() {
        return Some(local.to_path_buf());
    }
    let user = dirs::config_dir()?.join("showcase").join("showcase.toml");
    user.exists().then_some(user)
}

fn read_settings_file(path: &Path) -> anyhow::Result<SettingsFile> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    let parsed = toml::from_str::<SettingsFile>(&raw).map_err(|err| {
        ShowcaseError::invalid_config(path.display().to_string(), err.to_string())
    })?;
    Ok(parsed)
}

fn apply_file(settings: &mut Settings, file: SettingsFile) {
    if let Some(v) = file.window_title {
        settings.window_title = v;
    }
    if let Some(v) = file.window_width {
        settings.window_width = v;
    }
    if let Some(v) = file.window_height {
        settings.window_height = v;
    }
    if let Some(v) = file.hero_title {
        settings.hero_title = v;
    }
    if let Some(v) = file.items {
        settings.items = v;
    }
}
