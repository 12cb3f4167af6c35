//! Shortcut strings: modifiers, named keys and normalization.
//!
//! Every comparison of shortcut text goes through [`normalize`], so
//! `"Cmd + C"`, `"⌘C"` and `"command+c"` all meet at `"cmd+c"`.

mod normalize;
mod types;

pub use normalize::{compact, icons_to_text, normalize, KeyCombo};
pub use types::{Modifier, NamedKey};

#[cfg(test)]
mod tests {
    use super::*;
    use memokeys_common::DisplayMode;

    #[test]
    fn normalize_simple() {
        assert_eq!(normalize("Cmd+C"), "cmd+c");
        assert_eq!(normalize("Ctrl+Shift+T"), "ctrl+shift+t");
        assert_eq!(normalize("F5"), "f5");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in [
            "Cmd + Shift + P",
            "⌘⇧P",
            "Option+Period",
            "Ctrl++",
            "+",
            "Shift+Return",
            "Ctrl+A+B",
            "",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn modifier_order_does_not_matter() {
        assert_eq!(normalize("Shift+Cmd+P"), normalize("Cmd+Shift+P"));
        assert_eq!(normalize("Shift+Alt+Ctrl+Cmd+K"), "alt+cmd+ctrl+shift+k");
    }

    #[test]
    fn synonyms_fold() {
        assert_eq!(normalize("Command+C"), "cmd+c");
        assert_eq!(normalize("Control+C"), "ctrl+c");
        assert_eq!(normalize("Option+Left"), "alt+left");
        assert_eq!(normalize("Cmd+Return"), "cmd+enter");
        assert_eq!(normalize("Esc"), "escape");
    }

    #[test]
    fn icons_and_text_agree() {
        assert_eq!(normalize("⌘C"), normalize("Cmd+C"));
        assert_eq!(normalize("⌘+C"), normalize("Cmd+C"));
        assert_eq!(normalize("⌘⇧P"), "cmd+shift+p");
        assert_eq!(normalize("⌃⌥↑"), "alt+ctrl+up");
        assert_eq!(normalize("⌘↩"), "cmd+enter");
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(normalize("  Cmd +   Shift+P "), "cmd+shift+p");
        assert_eq!(normalize("Command + Space"), "cmd+space");
    }

    #[test]
    fn plus_key() {
        assert_eq!(normalize("Cmd++"), "cmd++");
        assert_eq!(normalize("Cmd + +"), "cmd++");
        assert_eq!(normalize("+"), "+");
        assert_eq!(normalize("⌘+"), "cmd++");
        assert_eq!(normalize("⌘⇧+"), "cmd+shift++");
        assert_eq!(normalize("Cmd+"), "cmd");
    }

    #[test]
    fn plus_key_survives_display_round_trip() {
        for raw in ["Cmd++", "Cmd+Shift++", "Ctrl++", "Cmd+Shift+P"] {
            let combo = KeyCombo::parse(raw);
            for mode in [DisplayMode::Icons, DisplayMode::Text] {
                let shown = combo.display(mode);
                assert_eq!(normalize(&shown), normalize(raw), "{raw} shown as {shown}");
            }
        }
    }

    #[test]
    fn duplicate_modifiers_collapse() {
        assert_eq!(normalize("Cmd+Command+⌘+C"), "cmd+c");
    }

    #[test]
    fn last_main_key_wins() {
        assert_eq!(normalize("Ctrl+A+B"), "ctrl+b");
    }

    #[test]
    fn modifiers_only_and_blank() {
        assert_eq!(normalize("Cmd+Shift"), "cmd+shift");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert!(KeyCombo::parse(" ").is_empty());
    }

    #[test]
    fn icons_to_text_only_touches_modifiers() {
        assert_eq!(icons_to_text("⌘+C"), "cmd+C");
        assert_eq!(icons_to_text("⌃⇧↩"), "ctrlshift↩");
        assert_eq!(icons_to_text("Cmd + C"), "Cmd + C");
    }

    #[test]
    fn compact_strips_separators() {
        assert_eq!(compact("Ctrl + C"), "ctrlc");
        assert_eq!(compact("ctrlc"), "ctrlc");
        assert_eq!(compact("  "), "");
    }

    #[test]
    fn combo_display() {
        let combo = KeyCombo::parse("shift+cmd+p");
        assert_eq!(combo.display(DisplayMode::Icons), "⌘⇧P");
        assert_eq!(combo.display(DisplayMode::Text), "Cmd+Shift+P");

        let combo = KeyCombo::parse("ctrl+alt+delete");
        assert_eq!(combo.display(DisplayMode::Icons), "⌃⌥⌦");
        assert_eq!(combo.display(DisplayMode::Text), "Ctrl+Alt+Delete");
    }

    #[test]
    fn cmd_folds_into_ctrl() {
        let mac = KeyCombo::parse("Cmd+C").with_cmd_as_ctrl();
        let win = KeyCombo::parse("Ctrl+C").with_cmd_as_ctrl();
        assert_eq!(mac, win);
        assert_eq!(mac.to_string(), "ctrl+c");
    }

    #[test]
    fn modifier_key_names() {
        assert_eq!(Modifier::from_key_name("cmd_r"), Some(Modifier::Cmd));
        assert_eq!(Modifier::from_key_name("ctrl_l"), Some(Modifier::Ctrl));
        assert_eq!(Modifier::from_key_name("alt_gr"), Some(Modifier::Alt));
        assert_eq!(Modifier::from_key_name("meta"), Some(Modifier::Cmd));
        assert_eq!(Modifier::from_key_name("a"), None);
    }

    #[test]
    fn named_keys() {
        assert_eq!(NamedKey::from_name("page_up"), Some(NamedKey::PageUp));
        assert_eq!(NamedKey::from_name("arrowleft"), Some(NamedKey::Left));
        assert_eq!(NamedKey::from_name("f12"), Some(NamedKey::Function(12)));
        assert_eq!(NamedKey::from_name("f13"), None);
        assert_eq!(NamedKey::from_name("period"), None);
        assert_eq!(NamedKey::CapsLock.label(DisplayMode::Text), "CAPS");
        assert_eq!(NamedKey::Function(3).label(DisplayMode::Icons), "F3");
    }

    #[test]
    fn modifier_serde() {
        let json = serde_json::to_string(&Modifier::Cmd).unwrap();
        assert_eq!(json, "\"cmd\"");
        let back: Modifier = serde_json::from_str("\"shift\"").unwrap();
        assert_eq!(back, Modifier::Shift);
    }
}
