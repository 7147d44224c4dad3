use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Inspect nginx configs from provisioning scripts"
)]
pub struct Cli {
    /// Settings file (default: ~/.config/nginx_conf_utils/settings.toml)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Exit 0 if nginx.conf includes <snippets-dir>/*.conf inside http {}; else exit 1
    IncludesSnippets(IncludesSnippetsArgs),
}

#[derive(Args, Debug)]
pub struct IncludesSnippetsArgs {
    /// Path to nginx.conf (example: /etc/nginx/nginx.conf)
    #[arg(long)]
    pub conf: Option<PathBuf>,

    /// Snippets directory (example: /etc/nginx/conf.d)
    #[arg(long)]
    pub snippets_dir: Option<String>,

    /// Print yes/no
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the http block span and the matching include line
    #[arg(long)]
    pub explain: bool,
}
