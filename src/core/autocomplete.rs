//! Tab autocomplete for command names and path arguments.
//!
//! [`suggest`] computes candidates from the current input, working folder,
//! and command vocabulary; [`apply`] writes a chosen candidate back into the
//! input string. Both are pure; the session decides what to do with the
//! result (complete silently on a single match, echo the candidates on many).

use crate::models::FolderNode;

/// Commands whose first argument is a path.
pub const PATH_COMMANDS: &[&str] = &["ls", "cat", "cd"];

// =============================================================================
// Suggestions
// =============================================================================

/// Compute completion candidates for the current input.
///
/// Vocabulary order is preserved for command candidates; namespace display
/// order is preserved for path candidates. Matching is case-insensitive on
/// both sides; candidates keep their stored spelling.
pub fn suggest(input: &str, cwd: &FolderNode, command_names: &[&str]) -> Vec<String> {
    if input.trim().is_empty() {
        return command_names.iter().map(|s| s.to_string()).collect();
    }

    let tokens: Vec<&str> = input.split_whitespace().collect();
    let still_typing_command = tokens.len() == 1 && !ends_in_whitespace(input);

    if still_typing_command {
        let needle = tokens[0].to_lowercase();
        return command_names
            .iter()
            .filter(|name| name.to_lowercase().starts_with(&needle))
            .map(|s| s.to_string())
            .collect();
    }

    let command = tokens[0].to_lowercase();
    if !PATH_COMMANDS.contains(&command.as_str()) {
        return Vec::new();
    }

    let partial = tokens[1..].join(" ").to_lowercase();
    cwd.children
        .iter()
        .map(|child| child.name())
        .filter(|name| partial.is_empty() || name.to_lowercase().starts_with(&partial))
        .map(str::to_string)
        .collect()
}

/// Write a chosen candidate back into the input.
///
/// Completing the command word replaces it wholesale and appends a space;
/// completing a path replaces only the last token, with no trailing space.
pub fn apply(input: &str, chosen: &str) -> String {
    let tokens: Vec<&str> = input.split_whitespace().collect();

    if tokens.is_empty() || (tokens.len() == 1 && !ends_in_whitespace(input)) {
        return format!("{chosen} ");
    }

    let kept = if ends_in_whitespace(input) {
        // Trailing whitespace: the path token being completed is empty.
        &tokens[..]
    } else {
        &tokens[..tokens.len() - 1]
    };

    let mut parts: Vec<&str> = kept.to_vec();
    parts.push(chosen);
    parts.join(" ")
}

fn ends_in_whitespace(input: &str) -> bool {
    input.chars().next_back().is_some_and(char::is_whitespace)
}
