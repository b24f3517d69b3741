use crate::shared::Result;
use std::path::Path;

/// Maximum number of file patterns to prevent DoS attacks
const MAX_FILE_PATTERNS: usize = 64;

/// Maximum length of a single file pattern to prevent DoS attacks
const MAX_PATTERN_LENGTH: usize = 255;

/// FilePatternMatcher - Extra inclusion patterns for manifest discovery
///
/// Lets callers point the collector at manifests that are not literally
/// named `go.mod` (e.g. `deploy/*.mod`). Patterns support the `*` wildcard
/// (zero or more characters) and are matched against the slash-separated
/// path relative to the scan root.
#[derive(Debug, Default)]
pub struct FilePatternMatcher {
    patterns: Vec<FilePattern>,
}

impl FilePatternMatcher {
    /// Creates a new FilePatternMatcher from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> MAX_FILE_PATTERNS)
    /// - Invalid pattern format (length, characters, wildcards only)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_FILE_PATTERNS {
            anyhow::bail!(
                "Too many file patterns: {} (maximum: {})",
                patterns.len(),
                MAX_FILE_PATTERNS
            );
        }

        let compiled = patterns
            .into_iter()
            .map(FilePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns: compiled })
    }

    /// Checks whether a path (relative to the scan root) matches any pattern
    pub fn matches(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let normalized = normalize(path);
        self.patterns.iter().any(|p| p.matcher.matches(&normalized))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.original.as_str())
    }
}

/// Joins path components with `/` regardless of platform
fn normalize(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// A single file pattern with its compiled matcher
#[derive(Debug)]
struct FilePattern {
    original: String,
    matcher: PatternMatcher,
}

impl FilePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;
        let matcher = compile_pattern(&pattern);
        Ok(Self {
            original: pattern,
            matcher,
        })
    }
}

/// Pattern matcher types for efficient matching
#[derive(Debug)]
enum PatternMatcher {
    /// Exact match: "tools/go.mod"
    Exact(String),
    /// Leading wildcard: "*.mod"
    Suffix(String),
    /// Trailing wildcard: "modules/*"
    Prefix(String),
    /// Surrounding wildcards: "*go.mod*"
    Contains(String),
    /// General case: "svc/*/go.*.mod"
    Multiple {
        parts: Vec<String>,
        anchored_start: bool,
        anchored_end: bool,
    },
}

impl PatternMatcher {
    fn matches(&self, path: &str) -> bool {
        match self {
            PatternMatcher::Exact(s) => path == s,
            PatternMatcher::Suffix(suffix) => path.ends_with(suffix),
            PatternMatcher::Prefix(prefix) => path.starts_with(prefix),
            PatternMatcher::Contains(middle) => path.contains(middle),
            PatternMatcher::Multiple {
                parts,
                anchored_start,
                anchored_end,
            } => match_parts(path, parts, *anchored_start, *anchored_end),
        }
    }
}

/// Matches wildcard-separated parts in order
fn match_parts(path: &str, parts: &[String], anchored_start: bool, anchored_end: bool) -> bool {
    let mut rest = path;

    for (i, part) in parts.iter().enumerate() {
        let is_first = i == 0;
        let is_last = i == parts.len() - 1;

        if is_first && anchored_start {
            match rest.strip_prefix(part.as_str()) {
                Some(r) => rest = r,
                None => return false,
            }
            if is_last && anchored_end {
                return rest.is_empty();
            }
            continue;
        }

        if is_last && anchored_end {
            return rest.ends_with(part.as_str());
        }

        match rest.find(part.as_str()) {
            Some(pos) => rest = &rest[pos + part.len()..],
            None => return false,
        }
    }

    true
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("File pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "File pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    for ch in pattern.chars() {
        if !is_valid_pattern_char(ch) {
            anyhow::bail!(
                "File pattern contains invalid character '{}' in pattern '{}'. \
                 Only alphanumeric, hyphens, underscores, dots, slashes, and asterisks (*) are allowed.",
                ch,
                pattern
            );
        }
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!("File pattern cannot contain only wildcards: '{}'", pattern);
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | '*' | '~' | '+' | '@')
}

fn compile_pattern(pattern: &str) -> PatternMatcher {
    let wildcard_count = pattern.matches('*').count();

    match wildcard_count {
        0 => PatternMatcher::Exact(pattern.to_string()),
        1 if pattern.starts_with('*') => PatternMatcher::Suffix(pattern[1..].to_string()),
        1 if pattern.ends_with('*') => {
            PatternMatcher::Prefix(pattern[..pattern.len() - 1].to_string())
        }
        2 if pattern.starts_with('*') && pattern.ends_with('*') => {
            PatternMatcher::Contains(pattern[1..pattern.len() - 1].to_string())
        }
        _ => PatternMatcher::Multiple {
            parts: pattern
                .split('*')
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .collect(),
            anchored_start: !pattern.starts_with('*'),
            anchored_end: !pattern.ends_with('*'),
        },
    }
}
