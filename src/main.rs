//! Command line entry point: build, preview and check the chapter site.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{
    Context,
    Result,
    bail,
};
use chapter_site::config::ConfigManager;
use chapter_site::output::SiteWriter;
use chapter_site::pages::Route;
use chapter_site::session::SiteSession;
use chapter_site::types::Language;
use chrono::Datelike;
use clap::{
    Parser,
    Subcommand,
};
use tracing_subscriber::EnvFilter;

/// Command line arguments.
#[derive(Parser)]
#[command(name = "chapter-site")]
#[command(version)]
#[command(about = "Bilingual site generator for a student organization chapter")]
struct Cli {
    /// Site root holding `.chapter-site.json`
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Command to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Render every page in every language into the output directory
    Build {
        /// Output directory (default: `outputDir` from the settings)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print one page
    Render {
        /// Site path, e.g. `/events/3`
        #[arg(value_name = "PATH", default_value = "/")]
        path: String,

        /// Render in this language without persisting it
        #[arg(short, long)]
        language: Option<Language>,
    },

    /// Show the active language, or set and persist it
    Language {
        #[arg(value_name = "CODE")]
        code: Option<String>,
    },

    /// Report missing translations, unresolved images and duplicate ids
    Check,
}

/// Sets up logging, opens the site and runs the command.
#[tokio::main]
async fn main() -> Result<()> {
    let (writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .init();

    let cli = Cli::parse();
    let mut config = ConfigManager::new(cli.root.clone());
    let mut session = SiteSession::open(&mut config, chrono::Local::now().year())
        .with_context(|| format!("Failed to open site at {}", cli.root.display()))?;

    match cli.command {
        Commands::Build { out } => build(&mut session, &config, out).await,
        Commands::Render { path, language } => render(&mut session, &path, language),
        Commands::Language { code } => language(&mut session, code.as_deref()),
        Commands::Check => check(&session),
    }
}

/// Renders every route in every language and writes the output directory.
async fn build(
    session: &mut SiteSession,
    config: &ConfigManager,
    out: Option<PathBuf>,
) -> Result<()> {
    let out_dir = out.unwrap_or_else(|| config.output_dir());
    let concurrency = session.settings().build.effective_concurrency();

    let mut pages = Vec::new();
    for language in Language::ALL {
        pages.extend(session.render_all_in(language));
    }

    let writer = SiteWriter::new(out_dir, concurrency);
    let summary = writer
        .write_site(&pages, session.images(), session.active_language())
        .await
        .with_context(|| format!("Failed to write site to {}", writer.out_dir().display()))?;

    tracing::info!(
        pages = summary.pages,
        assets = summary.assets,
        out_dir = %writer.out_dir().display(),
        "Build finished"
    );
    Ok(())
}

/// Prints the page at `path`.
fn render(session: &mut SiteSession, path: &str, language: Option<Language>) -> Result<()> {
    let route = Route::parse(path);
    let page = match language {
        Some(language) => session.render_in(&route, language),
        None => session.render(&route),
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(page.html.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}

/// Prints or sets the active language.
fn language(session: &mut SiteSession, code: Option<&str>) -> Result<()> {
    let mut stdout = std::io::stdout().lock();

    let Some(code) = code else {
        writeln!(stdout, "{}", session.active_language())?;
        return Ok(());
    };

    match session.set_language(code) {
        Some(language) => writeln!(stdout, "{language}")?,
        None => bail!(
            "Unsupported language '{code}'; keeping '{}'",
            session.active_language()
        ),
    }
    Ok(())
}

/// Prints the diagnostics and fails when any is an error.
fn check(session: &SiteSession) -> Result<()> {
    let diagnostics = session.diagnostics();
    let mut stdout = std::io::stdout().lock();
    for diagnostic in &diagnostics {
        writeln!(stdout, "{diagnostic}")?;
    }

    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    if errors > 0 {
        bail!("{errors} error(s) found");
    }
    writeln!(stdout, "{} warning(s), no errors", diagnostics.len())?;
    Ok(())
}
