use std::io::Write;

use memokeys_common::Result;

use super::Context;

pub fn run(ctx: &Context, json: bool, out: &mut dyn Write) -> Result<()> {
    let modes = ctx.library.modes()?;

    if json {
        let text = serde_json::to_string_pretty(&modes)?;
        writeln!(out, "{text}")?;
        return Ok(());
    }

    for (id, mode) in &modes {
        writeln!(out, "{id}: {} ({} files)", mode.name, mode.files.len())?;
        if !mode.description.is_empty() {
            writeln!(out, "    {}", mode.description)?;
        }
        for file in &mode.files {
            writeln!(out, "    - {file}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::cli::Command;
    use crate::commands::fixtures;

    #[test]
    fn lists_modes_sorted() {
        let dir = fixtures::library();
        let out = fixtures::output(&dir, Command::Modes { json: false }, "").unwrap();
        let basic = out.find("basic: Basic (1 files)").unwrap();
        let vscode = out.find("vscode: VS Code (2 files)").unwrap();
        assert!(basic < vscode);
        assert!(out.contains("    - editors/vscode.json"));
    }

    #[test]
    fn json_output() {
        let dir = fixtures::library();
        let out = fixtures::output(&dir, Command::Modes { json: true }, "").unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["vscode"]["files"][1], "editors/vscode.json");
    }

    #[test]
    fn missing_index_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(fixtures::output(&dir, Command::Modes { json: false }, "").is_err());
    }
}
