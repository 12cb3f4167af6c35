use std::io::Write;

use memokeys_common::Result;
use memokeys_config::validation::{validate_library, validate_settings};

use super::Context;

pub fn run(ctx: &Context, out: &mut dyn Write) -> Result<()> {
    validate_settings(&ctx.settings)?;
    writeln!(out, "settings: ok")?;

    validate_library(&ctx.library)?;
    let modes = ctx.library.modes()?;
    let files = ctx.library.shortcut_files()?;
    writeln!(
        out,
        "library {}: ok ({} modes, {} shortcut files)",
        ctx.library.root().display(),
        modes.len(),
        files.len()
    )?;
    Ok(())
}
