use std::path::PathBuf;

/// Represents the final configuration after merging the settings file and CLI args.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub conf: PathBuf,
    pub snippets_dir: String,
    pub nginx_root: String,
    pub verbose: bool,
    pub explain: bool,
}

/// Span of lines forming the `http { ... }` block. Both indices are 0-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpBlock {
    pub start_line_index: usize,
    pub end_line_index: usize,
}

/// An include directive inside the http block that matched one of the targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeMatch {
    pub line_index: usize,
    pub path: String,
}

/// Everything learned from a single pass over a config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub block: Option<HttpBlock>,
    pub matched: Option<IncludeMatch>,
}

impl ScanReport {
    pub fn outcome(&self) -> Outcome {
        if self.matched.is_some() {
            Outcome::Included
        } else {
            Outcome::NotIncluded
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Included,
    NotIncluded,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Included => 0,
            Outcome::NotIncluded => 1,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Outcome::Included => "yes",
            Outcome::NotIncluded => "no",
        }
    }
}
