// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Instant, MissedTickBehavior};

use crate::app_log;
use crate::core::{ConfigManager, ConfigOverrides, LeadsClient};
use crate::render::theme::pulse_frame;
use crate::render::{render_about, render_home, render_loading, render_state, Theme};
use crate::search::{FetchState, Navigation, QueryLauncher, Route, SearchSession};

#[derive(Parser)]
#[command(name = "talentbridge")]
#[command(about = "Describe the job you want and get matching leads from the web")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the lead aggregation backend
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Give up on a search after this many seconds (0 waits forever)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Path to a YAML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colours
    #[arg(long, global = true)]
    pub plain: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run one search and print the results
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        /// Print the backend response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Prompt for searches until :quit (the default)
    Interactive,
    /// List example queries
    Examples,
    /// About TalentBridge
    About,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_path: self.config.clone(),
            backend_url: self.backend_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::from_plain_flag(self.plain)
    }
}

/// A line typed at the interactive prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Quit,
    Home,
    Retry,
    /// 1-based number of an example query.
    Example(usize),
    Open(String),
    Query(String),
}

impl Input {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":quit" | ":q" | ":exit" => Input::Quit,
            ":home" => Input::Home,
            ":retry" | ":reload" => Input::Retry,
            other => {
                if let Some(target) = other.strip_prefix(":open ") {
                    Input::Open(target.trim().to_string())
                } else if let Some(number) = other.strip_prefix(":example ") {
                    // 0 names no example.
                    Input::Example(number.trim().parse().unwrap_or(0))
                } else {
                    // The query is forwarded untrimmed, as typed.
                    Input::Query(line.trim_end_matches(['\r', '\n']).to_string())
                }
            }
        }
    }
}

/// Run the selected command. Returns `false` when a one-shot search failed.
pub async fn handle_command(cli: Cli, config: ConfigManager) -> Result<bool> {
    let theme = cli.theme();

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Search { query, json } => run_search(&query.join(" "), json, &config, theme).await,
        Command::Interactive => {
            run_interactive(&config, theme).await?;
            Ok(true)
        }
        Command::Examples => {
            for (i, example) in QueryLauncher::new().examples().iter().enumerate() {
                println!("{}. {}", i + 1, example);
            }
            Ok(true)
        }
        Command::About => {
            println!("{}", render_about(theme));
            Ok(true)
        }
    }
}

async fn run_search(query: &str, json: bool, config: &ConfigManager, theme: Theme) -> Result<bool> {
    let route = QueryLauncher::new()
        .submit(query)
        .context("Search query must not be empty")?;

    let client = LeadsClient::new(config.backend_url.clone())?;
    let mut session = SearchSession::new(client, config.timeout);

    app_log!(info, "Navigating to {}", route);
    session.navigate(&route);
    if !json {
        println!("{}", render_loading(None, Duration::ZERO, theme));
    }

    let state = session.settled().await;
    match &state {
        FetchState::Success(results) if json => {
            let body = serde_json::to_string_pretty(&results.response)
                .context("Failed to serialize search response")?;
            println!("{}", body);
        }
        FetchState::Error { message, .. } if json => eprintln!("{}", message),
        _ => println!("{}", render_state(&state, None, theme)),
    }

    Ok(!matches!(state, FetchState::Error { .. }))
}

async fn run_interactive(config: &ConfigManager, theme: Theme) -> Result<()> {
    let launcher = QueryLauncher::new();
    let client = LeadsClient::new(config.backend_url.clone())?;
    let mut session = SearchSession::new(client, config.timeout);
    let mut updates = session.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut screen = Screen::default();
    let mut pulse = tokio::time::interval(PULSE_TICK);
    pulse.set_missed_tick_behavior(MissedTickBehavior::Skip);

    app_log!(info, "Interactive session against {}", session.backend_url());
    println!("{}", render_home(theme));
    prompt()?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    break;
                };

                match Input::parse(&line) {
                    Input::Quit => break,
                    Input::Home => {
                        screen.leave_results();
                        session.navigate(&Route::Home);
                    }
                    Input::Retry => {
                        if session.reload().is_none() {
                            println!("Nothing to retry.");
                            prompt()?;
                        }
                    }
                    Input::Open(target) => match Route::parse(&target) {
                        Some(route) => {
                            if let Navigation::Redirect(home) = session.navigate(&route) {
                                app_log!(info, "Redirected {} to {}", target, home);
                                screen.leave_results();
                            }
                        }
                        None => {
                            println!("Unknown route: {}", target);
                            prompt()?;
                        }
                    },
                    Input::Example(number) => match launcher.example(number) {
                        Some(route) => {
                            app_log!(info, "Navigating to example {}: {}", number, route);
                            session.navigate(&route);
                        }
                        None => {
                            println!("No example {}. Pick 1 to {}.", number, launcher.examples().len());
                            prompt()?;
                        }
                    },
                    Input::Query(text) => {
                        let route = match session.state().query() {
                            Some(current) => launcher.resubmit(current, &text),
                            None => launcher.submit(&text),
                        };
                        match route {
                            Some(route) => {
                                app_log!(info, "Navigating to {}", route);
                                session.navigate(&route);
                            }
                            None => prompt()?,
                        }
                    }
                }
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().state().clone();
                let now = Instant::now();
                screen.observe(&state, now);
                println!("{}", screen.render(&state, now, theme));
                prompt()?;
            }
            _ = pulse.tick(), if theme == Theme::Ansi && screen.is_loading() => {
                let frame = pulse_frame(theme, screen.loading_elapsed(Instant::now()));
                // Redraw the prompt line in place.
                print!("\r\x1b[2K{} › ", frame);
                std::io::stdout().flush().context("Failed to flush stdout")?;
            }
        }
    }

    Ok(())
}

/// How often the loading pulse is redrawn.
const PULSE_TICK: Duration = Duration::from_millis(200);

/// What the prompt remembers between state updates.
#[derive(Debug, Default)]
struct Screen {
    /// Location of the last successful search, shown while the next one loads.
    last_location: Option<String>,
    loading_since: Option<Instant>,
}

impl Screen {
    fn leave_results(&mut self) {
        self.last_location = None;
    }

    fn observe(&mut self, state: &FetchState, now: Instant) {
        match state {
            FetchState::Loading { .. } => self.loading_since = Some(now),
            FetchState::Success(results) => {
                self.last_location = results.response.intent.location().map(str::to_string);
                self.loading_since = None;
            }
            FetchState::Idle => {
                self.last_location = None;
                self.loading_since = None;
            }
            FetchState::Error { .. } => self.loading_since = None,
        }
    }

    fn is_loading(&self) -> bool {
        self.loading_since.is_some()
    }

    fn loading_elapsed(&self, now: Instant) -> Duration {
        self.loading_since
            .map(|since| now.saturating_duration_since(since))
            .unwrap_or_default()
    }

    fn render(&self, state: &FetchState, now: Instant, theme: Theme) -> String {
        match state {
            FetchState::Loading { .. } => {
                render_loading(self.last_location.as_deref(), self.loading_elapsed(now), theme)
            }
            _ => render_state(state, self.last_location.as_deref(), theme),
        }
    }
}

fn prompt() -> Result<()> {
    print!("\n› ");
    std::io::stdout().flush().context("Failed to flush stdout")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::EXAMPLE_QUERIES;
    use crate::types::{SearchIntent, SearchResponse, SearchResults, NOT_SPECIFIED};
    use chrono::Utc;

    #[test]
    fn test_input_parse() {
        assert_eq!(Input::parse(":quit\n"), Input::Quit);
        assert_eq!(Input::parse("  :home "), Input::Home);
        assert_eq!(Input::parse(":retry"), Input::Retry);
        assert_eq!(Input::parse(":example 2"), Input::Example(2));
        assert_eq!(Input::parse(":example two"), Input::Example(0));
        assert_eq!(
            Input::parse(":open /results?q=rust"),
            Input::Open("/results?q=rust".to_string())
        );
        assert_eq!(
            Input::parse("  rust developer \n"),
            Input::Query("  rust developer ".to_string())
        );
    }

    #[test]
    fn test_example_input_selects_only_listed_queries() {
        let launcher = QueryLauncher::new();
        let pick = |line: &str| match Input::parse(line) {
            Input::Example(number) => launcher.example(number),
            other => panic!("unexpected input {:?}", other),
        };

        assert_eq!(pick(":example 2"), Some(Route::results(EXAMPLE_QUERIES[1])));
        assert_eq!(pick(":example 9"), None);
        assert_eq!(pick(":example 0"), None);
        assert_eq!(pick(":example -1"), None);
        assert_eq!(Input::parse("2"), Input::Query("2".to_string()));
    }

    fn success_in(location: &str) -> FetchState {
        FetchState::Success(SearchResults {
            query: "web developer".into(),
            response: SearchResponse {
                intent: SearchIntent {
                    job_role: "Web Developer".into(),
                    location: location.into(),
                    experience_level: NOT_SPECIFIED.into(),
                    keywords: vec![],
                    search_query: "web developer".into(),
                },
                leads: vec![],
                total_results: 0,
            },
            fetched_at: Utc::now(),
        })
    }

    fn loading(query: &str) -> FetchState {
        FetchState::Loading {
            query: query.into(),
        }
    }

    #[test]
    fn test_loading_subtitle_reuses_last_location() {
        let mut screen = Screen::default();
        let now = Instant::now();

        screen.observe(&success_in("Karachi"), now);
        screen.observe(&loading("designer"), now);
        let view = screen.render(&loading("designer"), now, Theme::Plain);
        assert!(view.contains("Scouting the web for opportunities in Karachi..."));
    }

    #[test]
    fn test_going_home_forgets_last_location() {
        let now = Instant::now();

        let mut via_home = Screen::default();
        via_home.observe(&success_in("Karachi"), now);
        via_home.leave_results();
        via_home.observe(&FetchState::Idle, now);

        let mut via_redirect = Screen::default();
        via_redirect.observe(&success_in("Karachi"), now);
        via_redirect.leave_results();

        for mut screen in [via_home, via_redirect] {
            screen.observe(&loading("rust"), now);
            let view = screen.render(&loading("rust"), now, Theme::Plain);
            assert!(view.contains("Searching across job boards and company pages..."));
            assert!(!view.contains("Karachi"));
        }
    }

    #[test]
    fn test_loading_pulse_advances_with_time() {
        let mut screen = Screen::default();
        let start = Instant::now();
        screen.observe(&loading("rust"), start);

        assert!(screen.is_loading());
        let later = start + Duration::from_millis(700);
        assert_eq!(screen.loading_elapsed(later), Duration::from_millis(700));
        assert_ne!(
            screen.render(&loading("rust"), start, Theme::Plain),
            screen.render(&loading("rust"), later, Theme::Plain)
        );

        screen.observe(&success_in("Lahore"), later);
        assert!(!screen.is_loading());
        assert_eq!(screen.loading_elapsed(later), Duration::ZERO);
    }

    #[test]
    fn test_cli_parses_search_and_globals() {
        let cli = Cli::try_parse_from([
            "talentbridge",
            "--backend-url",
            "http://leads:8000",
            "search",
            "rust",
            "developer",
            "--json",
            "--plain",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Some(Command::Search {
                query: vec!["rust".into(), "developer".into()],
                json: true,
            })
        );
        assert_eq!(cli.theme(), Theme::Plain);
        assert_eq!(cli.overrides().backend_url.as_deref(), Some("http://leads:8000"));
    }

    #[test]
    fn test_cli_defaults_to_interactive() {
        let cli = Cli::try_parse_from(["talentbridge"]).unwrap();
        assert_eq!(cli.command, None);
        assert!(Cli::try_parse_from(["talentbridge", "search"]).is_err());
    }
}
