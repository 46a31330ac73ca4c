//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ShaderWatchError, ShaderWatchResult};

use super::types::Settings;

/// Project config file name, looked up in the watch root
pub const PROJECT_CONFIG_FILE: &str = "shader-watch.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Settings plus where they came from
#[derive(Debug, Clone, Default)]
pub struct LoadedSettings {
    pub settings: Settings,
    /// File the settings were read from; `None` means built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ShaderWatchResult<(Settings, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let settings: Settings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ShaderWatchError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((settings, warnings))
}

/// Load from the project config, the user config, or defaults.
///
/// The first file found wins; environment overrides apply on top. A file
/// that exists but does not parse is an error, not a silent fallback.
pub fn load_or_default(watch_root: &Path) -> ShaderWatchResult<LoadedSettings> {
    load_layered(watch_root, user_config_file(), |key| std::env::var(key).ok())
}

pub(crate) fn load_layered(
    watch_root: &Path,
    user_config: Option<PathBuf>,
    get_env: impl Fn(&str) -> Option<String>,
) -> ShaderWatchResult<LoadedSettings> {
    let candidates = std::iter::once(watch_root.join(PROJECT_CONFIG_FILE)).chain(user_config);

    for path in candidates {
        if path.is_file() {
            let (settings, warnings) = load_with_warnings(&path)?;
            return Ok(LoadedSettings {
                settings: with_env_overrides_from(settings, &get_env),
                source: Some(path),
                warnings,
            });
        }
    }

    Ok(LoadedSettings {
        settings: with_env_overrides_from(Settings::default(), &get_env),
        source: None,
        warnings: Vec::new(),
    })
}

/// Apply environment variable overrides (SHADER_WATCH_* prefix)
pub fn with_env_overrides(settings: Settings) -> Settings {
    with_env_overrides_from(settings, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut settings: Settings,
    get_env: impl Fn(&str) -> Option<String>,
) -> Settings {
    // SHADER_WATCH_COMPILER
    if let Some(compiler) = get_env("SHADER_WATCH_COMPILER").filter(|v| !v.trim().is_empty()) {
        settings.compiler.path = Some(compiler);
    }

    // SHADER_WATCH_DEBUG / SHADER_WATCH_OPTIMIZE
    if let Some(val) = get_env("SHADER_WATCH_DEBUG") {
        settings.compiler.debug = parse_flag(&val);
    }
    if let Some(val) = get_env("SHADER_WATCH_OPTIMIZE") {
        settings.compiler.optimize = parse_flag(&val);
    }

    // SHADER_WATCH_TARGET_ENV
    if let Some(env) = get_env("SHADER_WATCH_TARGET_ENV") {
        settings.compiler.target_env = if env.trim().is_empty() {
            None
        } else {
            Some(env)
        };
    }

    // SHADER_WATCH_TIMEOUT (seconds); unparseable values are ignored
    if let Some(secs) = get_env("SHADER_WATCH_TIMEOUT").and_then(|v| v.trim().parse::<u64>().ok())
    {
        if secs > 0 {
            settings.compiler.timeout_secs = secs;
        }
    }

    // SHADER_WATCH_OUTPUT
    if let Some(dir) = get_env("SHADER_WATCH_OUTPUT").filter(|v| !v.trim().is_empty()) {
        settings.output.dir = Some(PathBuf::from(dir));
    }

    settings
}

fn parse_flag(val: &str) -> bool {
    !matches!(
        val.trim().to_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}

/// `<config-dir>/shader-watch/config.toml`
fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("shader-watch").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "compiler",
        "path",
        "debug",
        "optimize",
        "target_env",
        "timeout_secs",
        "output",
        "dir",
        "extension",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
