use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use autoversion::analyzer::BumpClassifier;
use autoversion::cli::{self, AutoversionArgs, BumpOutcome};
use autoversion::config::{self, Config};
use autoversion::domain::{BumpCategory, Version};
use autoversion::git::{self, Backend, VersionControl};
use autoversion::package::PythonPackage;
use autoversion::ui;

#[derive(clap::Parser)]
#[command(
    name = "autoversion",
    version,
    about = "Compute the next version of a package from gitmoji commit messages"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug)"
    )]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct AnalysisArgs {
    #[arg(help = "Path to the package you want autoversion")]
    src: PathBuf,

    #[arg(
        long,
        help = "Default to a patch bump when no commit carries a recognized emoji"
    )]
    no_strict: bool,

    #[arg(long, help = "Tag prefix of the package releases [default: <package name>-]")]
    tag_prefix: Option<String>,

    #[arg(long, value_enum, help = "Git backend [default: from config, git2]")]
    backend: Option<Backend>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the bump category (major, minor, patch or empty) since the last release
    Bump {
        #[command(flatten)]
        analysis: AnalysisArgs,
    },
    /// Print the next version of the package
    Next {
        #[command(flatten)]
        analysis: AnalysisArgs,

        #[arg(
            long = "version",
            visible_alias = "current",
            value_name = "X.Y.Z",
            help = "Current package version; read from the package declaration if omitted"
        )]
        current: Option<String>,

        #[arg(long, help = "Write the new version into the package declaration")]
        write: bool,
    },
    /// Write a version into the package's __version__ declaration
    Update {
        #[arg(help = "Path to the package directory")]
        src: PathBuf,

        #[arg(help = "New version string")]
        version: String,
    },
    /// Apply a bump category to a version string
    Apply {
        version: String,

        #[arg(help = "major, minor, patch or none")]
        bump: String,
    },
}

fn main() {
    let args = Args::parse();
    ui::logging::init(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Commands::Apply { version, bump } => {
            let next = autoversion::apply_bump(&version, &bump)?;
            println!("{}", next);
        }
        Commands::Update { src, version } => {
            let config = config::load_config(args.config.as_deref())?;
            let version = Version::parse(&version)?;
            let package = PythonPackage::open(&src, &config.package.init_file)?;
            package.write_version(&version)?;
            ui::display_success(&format!(
                "Successfully updated version to {} in {}",
                version,
                package.init_file().display()
            ));
        }
        Commands::Bump { analysis } => {
            let config = config::load_config(args.config.as_deref())?;
            let session = Session::new(&analysis, &config)?;
            let outcome = cli::determine_bump(&session.vcs, &session.classifier, &session.workflow)?;
            session.report(&outcome);
            println!("{}", bump_output(outcome.bump));
        }
        Commands::Next {
            analysis,
            current,
            write,
        } => {
            let config = config::load_config(args.config.as_deref())?;
            let package = PythonPackage::open(&analysis.src, &config.package.init_file)?;
            let current = match current {
                Some(raw) => Version::parse(&raw)?,
                None => package.read_version()?,
            };

            let session = Session::new(&analysis, &config)?;
            let outcome = cli::determine_next_version(
                &session.vcs,
                &session.classifier,
                &session.workflow,
                current,
            )?;
            session.report(&outcome.analysis);
            ui::display_bump_transition(&outcome.current, &outcome.next, outcome.analysis.bump);

            if write {
                package.write_version(&outcome.next)?;
                ui::display_success(&format!(
                    "Wrote {} to {}",
                    outcome.next,
                    package.init_file().display()
                ));
            }
            println!("{}", outcome.next);
        }
    }

    Ok(())
}

/// Everything a bump analysis needs, resolved from CLI flags and config
struct Session {
    vcs: Box<dyn VersionControl>,
    classifier: BumpClassifier,
    workflow: AutoversionArgs,
}

impl Session {
    fn new(analysis: &AnalysisArgs, config: &Config) -> Result<Self> {
        let classifier = BumpClassifier::new(config.taxonomy.to_taxonomy()?);
        let backend = analysis.backend.unwrap_or(config.behavior.backend);
        let vcs = git::open_backend(backend, Path::new("."))?;

        let workflow = AutoversionArgs {
            src: analysis.src.clone(),
            tag_prefix: analysis.tag_prefix.clone(),
            strict: config.behavior.strict && !analysis.no_strict,
        };

        Ok(Session {
            vcs,
            classifier,
            workflow,
        })
    }

    fn report(&self, outcome: &BumpOutcome) {
        ui::display_commit_analysis(
            &outcome.commits,
            &self.classifier,
            &self.workflow.src,
            &outcome.boundary,
        );
        for warning in &outcome.warnings {
            ui::display_boundary_warning(warning);
        }
        ui::display_status(&format!("Found version bump = {}", outcome.bump));
    }
}

/// The scripts this replaces printed an empty line when there was nothing to bump
fn bump_output(bump: BumpCategory) -> &'static str {
    match bump {
        BumpCategory::None => "",
        other => other.as_str(),
    }
}
