//! Application configuration.
//!
//! Centralizes the constants used throughout the application. Larger text
//! assets are loaded at compile time with `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Namespace content manifest.
pub const MANIFEST_JSON: &str = include_str!("../assets/manifest.json");

/// ASCII banner printed by the CLI frontend on startup.
pub const ASCII_BANNER: &str = include_str!("../assets/text/banner.txt");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name.
pub const APP_NAME: &str = "termfolio";

/// Root folder sentinel shown at the head of every breadcrumb.
pub const ROOT_NAME: &str = "~";

// =============================================================================
// Session Configuration
// =============================================================================

/// First welcome banner line, shown when a session mounts.
pub const WELCOME_HEADLINE: &str = "Welcome to my portfolio terminal!";

/// Second welcome banner line.
pub const WELCOME_HINT: &str = "Type 'help' to see available commands";

/// Maximum number of submitted lines kept for Up/Down recall.
pub const MAX_COMMAND_RECALL: usize = 100;

/// Long date format for the `date` command and generated content
/// (weekday, month day, year, time, zone).
pub const DATE_FORMAT: &str = "%A, %B %-d, %Y, %H:%M:%S %Z";

// =============================================================================
// Help Reference
// =============================================================================

/// Usage and description for every command, in vocabulary order.
pub const COMMAND_REFERENCE: &[(&str, &str)] = &[
    ("help", "show this reference"),
    ("ls [dir]", "list directory contents"),
    ("cat <file>", "print file contents"),
    ("cd <dir|..>", "change directory"),
    ("pwd", "print working directory"),
    ("echo <text>", "print text"),
    ("date", "show the current date and time"),
    ("tree [dir]", "show the directory tree"),
    ("whoami", "who runs this terminal"),
    ("history", "about the scrollback"),
    ("clear", "clear the terminal"),
];

// =============================================================================
// Profile
// =============================================================================

/// `whoami` headline.
pub const WHOAMI_ROLE: &str = "Full-Stack Developer & Security Engineer";

/// `whoami` tagline.
pub const WHOAMI_TAGLINE: &str = "Building digital experiences with code";
