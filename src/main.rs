// Main entry point
use clap::Parser;
use colored::Colorize;
use press_trending::application::trending::{Outcome, TrendingController};
use press_trending::domain::model::ViewState;
use press_trending::infrastructure::config::{
    generate_config_sample, get_config_path, load_config, Config, Logging,
};
use press_trending::interfaces::cli::{Cli, Command, HELP};
use press_trending::presentation::render::{render_json, render_view};
use press_trending::presentation::theme::Theme;
use press_trending::state::AppState;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.generate_config {
        generate_config_sample()?;
        return Ok(());
    }

    let mut config = load_config()?;
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    let state = AppState::new(config)?;

    if cli.status {
        print_status(&state);
        return Ok(());
    }

    let theme_name = cli.theme.as_deref().unwrap_or(state.config.theme.as_str());
    let theme = Theme::from_name(theme_name);

    let mut controller = state.controller(cli.bucket);
    controller.mount();

    if cli.interactive {
        return run_interactive(&mut controller, &state.config, &theme).await;
    }

    tokio::select! {
        _ = load_pages(&mut controller, cli.more) => {}
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nInterrupted");
            return Ok(());
        }
    }

    let view = controller.view();
    if cli.json {
        println!("{}", render_json(&view.items)?);
    } else {
        redraw(view, &state.config, &theme);
    }

    if view.last_error.is_some() {
        std::process::exit(1);
    }

    Ok(())
}

/// Settle the first page, then keep loading while more is likely
async fn load_pages(controller: &mut TrendingController, extra_pages: u32) {
    controller.settle().await;
    for _ in 0..extra_pages {
        let view = controller.view();
        if !view.has_more || view.last_error.is_some() {
            break;
        }
        controller.load_more();
        controller.settle().await;
    }
}

async fn run_interactive(
    controller: &mut TrendingController,
    config: &Config,
    theme: &Theme,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    redraw(controller.view(), config, theme);
    eprintln!("{}", HELP.dimmed());

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Command::parse(&line) {
                    Some(Command::Quit) => break,
                    Some(Command::Bucket(bucket)) => {
                        if !controller.set_date_bucket(bucket) {
                            continue;
                        }
                    }
                    Some(Command::More) => {
                        let view = controller.view();
                        if view.loading || !view.has_more {
                            eprintln!("{}", "Nothing more to load right now".yellow());
                            continue;
                        }
                        controller.load_more();
                    }
                    Some(Command::Refresh) => controller.refresh(),
                    Some(Command::Status) => {
                        print_controller_status(controller);
                        continue;
                    }
                    Some(Command::Help) | None => {
                        eprintln!("{}", HELP.dimmed());
                        continue;
                    }
                }
                redraw(controller.view(), config, theme);
            }
            Some(outcome) = controller.next_completion() => {
                if outcome == Outcome::Applied {
                    redraw(controller.view(), config, theme);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                eprintln!();
                break;
            }
        }
    }

    Ok(())
}

fn redraw(view: &ViewState, config: &Config, theme: &Theme) {
    if config.clear_screen {
        clear_screen();
    }
    print!("{}", render_view(view, theme, config.enable_emoji));
    std::io::Write::flush(&mut std::io::stdout()).ok();
}

/// Clear the terminal screen
fn clear_screen() {
    // ANSI escape sequence: clear screen and move cursor to top-left
    print!("\x1B[2J\x1B[1;1H");
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.to_ascii_uppercase().as_str() {
        "TRACE" => "trace",
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = logging.path.as_deref().filter(|p| !p.is_empty()) {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file)
            .with_ansi(false)
            .init();
        return Ok(());
    }

    // Log to stderr (default)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn print_status(state: &AppState) {
    let config = &state.config;
    println!("{}", "trending Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "Config: {}",
        get_config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found".to_string())
    );
    println!("Endpoint: {}", state.source.endpoint());
    println!("Timeout: {} ms", config.api.timeout_ms);
    println!("Default window: {}", config.trending.default_bucket);
    println!("Page size: {}", config.trending.page_size);
    println!("Cache capacity: {} entries", config.trending.cache_capacity);
}

fn print_controller_status(controller: &TrendingController) {
    let query = controller.query();
    eprintln!(
        "window={} page_size={} cached={} fetches={} pending={}",
        query.bucket,
        query.page_size,
        controller.cache_len(),
        controller.fetches_issued(),
        controller.has_pending()
    );
}
