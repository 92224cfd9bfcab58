//! Entry point for the `release-tools` command line interface.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{
    Args,
    Parser,
    Subcommand,
};
use release_tools::config::{
    ConfigManager,
    ToolSettings,
};
use release_tools::release::{
    bump_version,
    create_blog_post,
};
use release_tools::sync::{
    find_missing_translations,
    run_sync,
    write_missing_reports,
    write_sync_summary,
};
use tracing_subscriber::EnvFilter;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "release-tools", version, about = "Translation sync and release helpers")]
struct Cli {
    /// Project root; relative paths in the configuration resolve against it
    #[arg(long, global = true, default_value = ".")]
    workspace: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
enum Command {
    /// Extract translation keys, rewrite the reference dictionary and prune locale files
    Sync {
        /// Dictionary paths
        #[command(flatten)]
        paths: DictionaryPaths,

        /// Source tree to scan
        #[arg(long)]
        source_root: Option<String>,

        /// Write an empty reference dictionary when no keys are found
        #[arg(long)]
        allow_empty: bool,
    },
    /// List reference keys each locale file does not translate yet
    Missing {
        /// Dictionary paths
        #[command(flatten)]
        paths: DictionaryPaths,
    },
    /// Set the version name, increment the build number and copy the changelog
    Bump {
        /// New version name, e.g. 1.4.2
        version: String,
        /// Changelog text file
        changelog: PathBuf,
    },
    /// Write the release announcement blog post
    BlogPost {
        /// Released version name
        version: String,
        /// Changelog text file
        changelog: PathBuf,
        /// Publish date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

/// Dictionary path overrides shared by `sync` and `missing`
#[derive(Args, Debug, Default)]
struct DictionaryPaths {
    /// Reference dictionary file
    #[arg(long)]
    reference: Option<String>,

    /// Directory holding the locale files
    #[arg(long)]
    locale_dir: Option<String>,
}

impl DictionaryPaths {
    /// 指定されたパスで設定を上書きする
    fn apply(self, settings: &mut ToolSettings) {
        if let Some(reference) = self.reference {
            settings.i18n.reference_file = reference;
        }
        if let Some(locale_dir) = self.locale_dir {
            settings.i18n.locale_dir = locale_dir;
        }
    }
}

/// ログ出力の初期化（標準エラー出力、`RUST_LOG` 優先）
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// コマンドライン引数で設定を上書きし、再検証する
fn apply_overrides(config: &mut ConfigManager, command: &mut Command) -> release_tools::Result<()> {
    let mut settings = config.get_settings().clone();
    match command {
        Command::Sync { paths, source_root, allow_empty } => {
            std::mem::take(paths).apply(&mut settings);
            if let Some(source_root) = source_root.take() {
                settings.i18n.source_root = source_root;
            }
            if *allow_empty {
                settings.i18n.allow_empty = true;
            }
        }
        Command::Missing { paths } => std::mem::take(paths).apply(&mut settings),
        Command::Bump { .. } | Command::BlogPost { .. } => return Ok(()),
    }
    config.update_settings(settings)?;
    Ok(())
}

/// サブコマンドを実行し、結果を標準出力に書く
fn run(cli: Cli) -> release_tools::Result<()> {
    let Cli { workspace, command: mut command, .. } = cli;

    let mut config = ConfigManager::new(workspace);
    config.load_settings()?;
    apply_overrides(&mut config, &mut command)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Sync { .. } => {
            let summary = run_sync(&config)?;
            write_sync_summary(&mut out, &summary)?;
        }
        Command::Missing { .. } => {
            let reports = find_missing_translations(&config)?;
            write_missing_reports(&mut out, &reports)?;
        }
        Command::Bump { version, changelog } => {
            let bump = bump_version(&config, &version, &changelog)?;
            writeln!(out, "Version bumped: {} -> {}", bump.previous, bump.current)?;
        }
        Command::BlogPost { version, changelog, date } => {
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let post = create_blog_post(&config, &version, &changelog, date)?;
            writeln!(out, "Blog post created: {}", post.path.display())?;
        }
    }

    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
