//! Shared helpers used by the validators.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Modifier spellings accepted before the main key in a data file combo.
const MODIFIERS: &[&str] = &[
    "cmd", "command", "ctrl", "control", "alt", "option", "shift", "⌘", "⌃", "⌥", "⇧",
];

/// Push an error if `combo` is not `Modifier+...+Key`.
pub(crate) fn validate_combo(errors: &mut Vec<String>, context: &str, combo: &str) {
    let lowered = combo.trim().to_lowercase();
    if lowered.is_empty() {
        errors.push(format!("{context}: empty combo"));
        return;
    }

    // "Cmd++" binds the plus key itself.
    let (body, plus_key) = match lowered.strip_suffix("++") {
        Some(rest) => (rest, true),
        None => (lowered.as_str(), false),
    };
    let mut parts: Vec<&str> = body.split('+').map(str::trim).collect();
    if plus_key {
        parts.push("+");
    }

    let Some((key, modifiers)) = parts.split_last() else {
        errors.push(format!("{context}: empty combo"));
        return;
    };
    for part in modifiers {
        if !MODIFIERS.contains(part) {
            errors.push(format!("{context}: invalid modifier '{part}' in '{combo}'"));
        }
    }
    if key.is_empty() {
        errors.push(format!("{context}: missing key in '{combo}'"));
    } else if !modifiers.is_empty() && MODIFIERS.contains(key) {
        errors.push(format!("{context}: '{combo}' ends with a modifier"));
    }
}
