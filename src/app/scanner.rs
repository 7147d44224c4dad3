use crate::app::models::{HttpBlock, IncludeMatch, RuntimeConfig, ScanReport};
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

static HTTP_INLINE_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*http\s*\{").expect("valid regex"));
static HTTP_BARE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*http\s*$").expect("valid regex"));
static BRACE_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\{").expect("valid regex"));
static INCLUDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*include\s+([^;]+)\s*;\s*$").expect("valid regex"));

/// Checks whether a config's `http {}` block pulls in `<snippets_dir>/*.conf`.
pub struct Scanner {
    targets: [String; 2],
}

impl Scanner {
    pub fn new(config: &RuntimeConfig) -> Self {
        Self::with_root(&config.snippets_dir, &config.nginx_root)
    }

    /// Builds the absolute and root-relative target forms.
    pub fn with_root(snippets_dir: &str, nginx_root: &str) -> Self {
        let dir = snippets_dir.trim_end_matches('/');
        let root = format!("{}/", nginx_root.trim_end_matches('/'));
        let relative = dir.strip_prefix(root.as_str()).unwrap_or(dir);
        Self {
            targets: [format!("{}/*.conf", dir), format!("{}/*.conf", relative)],
        }
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Reads `path` permissively and scans it.
    pub fn scan_file(&self, path: &Path) -> Result<ScanReport> {
        let bytes = fs::read(path).context(format!("Failed to read nginx config {:?}", path))?;
        let content = String::from_utf8_lossy(&bytes);
        Ok(self.scan(&split_lines(&content)))
    }

    pub fn scan(&self, lines: &[&str]) -> ScanReport {
        let Some(block) = find_http_block(lines) else {
            log::debug!("no http block found");
            return ScanReport {
                block: None,
                matched: None,
            };
        };
        log::debug!(
            "http block spans lines {}..={}",
            block.start_line_index + 1,
            block.end_line_index + 1
        );

        let matched = lines[block.start_line_index..=block.end_line_index]
            .iter()
            .enumerate()
            .find_map(|(offset, raw)| {
                let path = parse_include_path(raw)?;
                log::debug!("include {:?} against {:?}", path, self.targets);
                self.targets.contains(&path).then(|| IncludeMatch {
                    line_index: block.start_line_index + offset,
                    path,
                })
            });

        ScanReport {
            block: Some(block),
            matched,
        }
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits on every line terminator, keeping it on its line. `\r\n` counts as one.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        let mut end = pos + c.len_utf8();
        if c == '\r' {
            if let Some(&(next, '\n')) = chars.peek() {
                end = next + 1;
                chars.next();
            }
        }
        lines.push(&text[start..end]);
        start = end;
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Everything before the first `#`, without the line terminator. Not quote-aware.
fn line_body(raw: &str) -> &str {
    strip_comment(raw).trim_end_matches(is_line_break)
}

/// Everything before the first `#`. Not quote-aware.
pub fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Locates the first `http` block, either `http {` or `http` followed by a `{` line.
pub fn find_http_block(lines: &[&str]) -> Option<HttpBlock> {
    let open = lines.iter().enumerate().find_map(|(index, raw)| {
        let line = line_body(raw);
        if HTTP_INLINE_OPEN.is_match(line) {
            return Some(index);
        }
        if HTTP_BARE.is_match(line) {
            let next = lines.get(index + 1)?;
            if BRACE_OPEN.is_match(line_body(next)) {
                return Some(index + 1);
            }
        }
        None
    })?;

    let mut depth: i64 = 0;
    for (index, raw) in lines.iter().enumerate().skip(open) {
        let line = strip_comment(raw);
        depth += line.matches('{').count() as i64;
        depth -= line.matches('}').count() as i64;
        if depth == 0 && index > open {
            return Some(HttpBlock {
                start_line_index: open,
                end_line_index: index,
            });
        }
    }

    log::warn!("http block opened on line {} never closes", open + 1);
    None
}

/// Path argument of an `include <path>;` line, quotes removed.
pub fn parse_include_path(line: &str) -> Option<String> {
    let captures = INCLUDE.captures(line_body(line))?;
    let path = unquote(&captures[1]);
    (!path.is_empty()).then(|| path.to_string())
}

fn unquote(value: &str) -> &str {
    let value = value.trim();
    ['"', '\'']
        .iter()
        .find_map(|&quote| {
            value
                .strip_prefix(quote)
                .and_then(|inner| inner.strip_suffix(quote))
        })
        .map(str::trim)
        .unwrap_or(value)
}
