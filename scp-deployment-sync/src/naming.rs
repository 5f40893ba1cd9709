//! Derivation of policy names and descriptions from manifest entries.

use std::path::Path;

/// Capitalize every alphabetic run: first letter upper, the rest lower.
/// Non-alphabetic characters are kept and act as word boundaries, so
/// `"deny-root"` becomes `"Deny-Root"`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// Policy name derived from a policy file and its OU directory.
pub fn policy_name(file_name: &str, dir_name: &str) -> String {
    format!("{}-{}", title_case(&file_stem(file_name)), title_case(dir_name))
}

/// Description shown next to the policy in the Organizations console.
pub fn policy_description(file_name: &str, dir_name: &str) -> String {
    format!("{} SCP for {}", title_case(&file_stem(file_name)), title_case(dir_name))
}

fn file_stem(file_name: &str) -> String {
    Path::new(file_name).file_stem().map_or_else(
        || file_name.to_string(),
        |stem| stem.to_string_lossy().into_owned(),
    )
}
