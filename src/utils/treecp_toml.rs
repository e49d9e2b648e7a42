//! Load `.treecp.toml` (CLI only). Lib callers pass [`Opts`] directly.

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

use crate::{Opts, Result};
use crate::engine::copier::CopierKind;
use crate::utils::config::PackagePaths;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TreecpToml {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsSection {
    workers: Option<usize>,
    verbose: Option<bool>,
    skip_existing: Option<bool>,
    copier: Option<CopierKind>,
}

/// Parse a config file from its text.
pub fn parse_treecp_toml(text: &str) -> Result<TreecpToml> {
    toml::from_str(text).context("parse treecp config")
}

/// Load an explicitly requested config file. Missing or malformed files are errors.
pub fn load_treecp_toml(path: &Path) -> Result<TreecpToml> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    parse_treecp_toml(&text).with_context(|| format!("in {}", path.display()))
}

/// Load `.treecp.toml` from `dir` if present. `Ok(None)` when there is no such file.
pub fn load_default_treecp_toml(dir: &Path) -> Result<Option<TreecpToml>> {
    let path = dir.join(PackagePaths::get().config_filename());
    if !path.is_file() {
        return Ok(None);
    }
    load_treecp_toml(&path).map(Some)
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($section:expr, $opts:expr, $file_field:ident => $opts_field:ident) => {
        if let Some(v) = $section.$file_field {
            $opts.$opts_field = v;
        }
    };
}

/// Apply file config to opts (only fields present in the file). Call before applying CLI flags.
pub fn apply_file_to_opts(file: &TreecpToml, opts: &mut Opts) {
    let settings = &file.settings;
    if let Some(n) = settings.workers {
        opts.workers = Some(n);
    }
    apply_file_opt!(settings, opts, verbose => verbose);
    apply_file_opt!(settings, opts, skip_existing => skip_existing);
    apply_file_opt!(settings, opts, copier => copier);
}
