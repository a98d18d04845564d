use crate::domain::model::DateBucket;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "trending")]
#[command(about = "Browse trending content of the press admin panel.")]
#[command(version)]
pub struct Cli {
    /// Date window to show
    #[arg(short = 'b', long, value_enum)]
    pub bucket: Option<DateBucket>,

    /// Load this many extra pages before printing
    #[arg(short = 'm', long, default_value_t = 0)]
    pub more: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Choose color theme
    #[arg(short = 'T', long)]
    pub theme: Option<String>,

    /// Override the admin API base URL
    #[arg(short = 'u', long)]
    pub base_url: Option<String>,

    /// Browse interactively
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,
}

/// One line of interactive input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Bucket(DateBucket),
    More,
    Refresh,
    Status,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "" => None,
            "more" | "+" | "n" => Some(Command::More),
            "refresh" | "r" => Some(Command::Refresh),
            "status" | "s" => Some(Command::Status),
            "help" | "h" | "?" => Some(Command::Help),
            "quit" | "q" | "exit" => Some(Command::Quit),
            other => other.parse::<DateBucket>().ok().map(Command::Bucket),
        }
    }
}

pub const HELP: &str = "commands: day | week | month | more | refresh | status | help | quit";
