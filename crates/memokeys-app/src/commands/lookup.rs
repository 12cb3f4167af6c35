use std::io::Write;

use memokeys_common::{Platform, Result};
use memokeys_keys::KeyCombo;

use super::Context;

pub fn run(
    ctx: &Context,
    combo: &str,
    mode: Option<&str>,
    platform: Option<Platform>,
    out: &mut dyn Write,
) -> Result<()> {
    let table = ctx.table(mode, ctx.platform(platform))?;
    let shown = KeyCombo::parse(combo).display(ctx.settings.display.mode);

    match table.lookup(combo) {
        Some(action) => writeln!(out, "{shown}: {action}")?,
        None => writeln!(out, "{shown}: no shortcut found")?,
    }
    Ok(())
}
