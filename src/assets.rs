//! Embedded assets — templates and scripts compiled into the binary.
//!
//! At compile time, `include_dir!` embeds everything under `assets/`:
//!   - `initd/service.tmpl`       — init.d service script template
//!   - `initd/service-conf.tmpl`  — /etc/default environment file template
//!   - `disable-requiretty.sh`    — one-time sudoers fix-up script

use anyhow::Result;
use include_dir::{Dir, include_dir};

static EMBEDDED_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Return the contents of a single embedded asset as UTF-8 text.
///
/// # Errors
///
/// Returns an error if no asset with the given `name` exists or it is not
/// valid UTF-8.
pub fn get_asset(name: &str) -> Result<&'static str> {
    EMBEDDED_ASSETS
        .get_file(name)
        .and_then(|f| f.contents_utf8())
        .ok_or_else(|| anyhow::anyhow!("embedded asset not found: {name}"))
}
