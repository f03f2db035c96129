// File: crates/bracket-cli/src/config.rs
// Summary: Saved CLI defaults, stored as flag tokens in a global config file and a local `.bracketrc`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConfigFlags {
    pub no_labels: bool,
    pub label_actual_offset: bool,
    pub theme: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub out: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge `other` over `self`: switches are OR-ed, valued flags from `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            no_labels: self.no_labels || other.no_labels,
            label_actual_offset: self.label_actual_offset || other.label_actual_offset,
            theme: other.theme.clone().or_else(|| self.theme.clone()),
            width: other.width.or(self.width),
            height: other.height.or(self.height),
            out: other.out.clone().or_else(|| self.out.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("bracket-spacing").join("config");
        }
    }

    #[cfg(not(target_os = "windows"))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("bracket-spacing").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("bracket-spacing").join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".bracketrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# bracket-spacing defaults (saved with --save)".to_string());
    if flags.no_labels {
        lines.push("--no-labels".to_string());
    }
    if flags.label_actual_offset {
        lines.push("--label-actual-offset".to_string());
    }
    if let Some(theme) = &flags.theme {
        lines.push(format!("--theme {}", theme));
    }
    if let Some(width) = flags.width {
        lines.push(format!("--width {}", width));
    }
    if let Some(height) = flags.height {
        lines.push(format!("--height {}", height));
    }
    if let Some(out) = &flags.out {
        lines.push(format!("--out {}", out.display()));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(path, lines.join("\n") + "\n")
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Parse the persisted subset of flags out of raw tokens. Unknown tokens are ignored,
/// so a full argv (including the program name and request values) can be passed.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        let (name, inline) = match token.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (token, None),
        };
        let mut value = || -> Option<String> {
            if inline.is_some() {
                return inline.clone();
            }
            let next = tokens.get(i + 1)?.clone();
            i += 1;
            Some(next)
        };
        match name {
            "--no-labels" => flags.no_labels = true,
            "--label-actual-offset" => flags.label_actual_offset = true,
            "--theme" => flags.theme = value(),
            "--width" => flags.width = value().and_then(|v| v.parse().ok()),
            "--height" => flags.height = value().and_then(|v| v.parse().ok()),
            "--out" => flags.out = value().map(PathBuf::from),
            _ => {}
        }
        i += 1;
    }
    flags
}
