//! Default settings template with inline documentation comments.

pub(crate) fn default_config_toml() -> &'static str {
    r##"# MemoKeys settings
# Only override what you want to change -- missing fields use defaults.

[data]
# dir = "data/shortcuts"   # overridden by MEMOKEYS_DATA_DIR or --data-dir
# mode = "basic"           # omit to load every shortcut file

[display]
# mode = "icons"           # icons, text
# platform = "mac"         # mac, windows, linux (default: host platform)

[quiz]
# question_count = 5       # 1-50
# answer_rule = "canonical" # canonical, compact, cross_platform

[logging]
# level = "info"           # trace, debug, info, warn, error
"##
}
