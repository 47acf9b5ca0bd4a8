//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Folio: portfolio works → static pages, plus the scroll and slug helpers
/// the site front end relies on
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: folio.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "folio.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Whether the command cannot run without a config file.
    pub const fn requires_config(&self) -> bool {
        matches!(
            self.command,
            Commands::Render { .. } | Commands::Validate { .. }
        )
    }

    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a default folio.toml in the current directory
    #[command(visible_alias = "i")]
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Render work pages from a CMS export
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// Replay scroll progress samples through the active-work tracker
    Scroll {
        #[command(flatten)]
        args: ScrollArgs,
    },

    /// Print the slug derived from each title
    Slug {
        /// Titles to slugify
        #[arg(required = true, value_name = "TITLE")]
        titles: Vec<String>,
    },

    /// Check works against the collection's field constraints
    #[command(visible_alias = "v")]
    Validate {
        #[command(flatten)]
        args: ValidateArgs,
    },
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Works export to read (overrides `works.source`)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub source: Option<PathBuf>,

    /// Output directory (overrides `works.output`)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Print rendered records as JSON instead of writing pages
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long, requires = "json")]
    pub pretty: bool,

    /// Render every work regardless of `works.statuses`
    #[arg(short, long)]
    pub all: bool,
}

/// Scroll command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ScrollArgs {
    /// Number of works in the section
    #[arg(short = 'n', long, conflicts_with = "works", required_unless_present = "works")]
    pub count: Option<usize>,

    /// Take the work count (and titles) from a works export
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub works: Option<PathBuf>,

    /// Print every sample, not only index changes
    #[arg(short, long)]
    pub all: bool,

    /// Bucket count (overrides `scroll.bucket_count`)
    #[arg(long)]
    pub buckets: Option<usize>,

    /// Bucket offset (overrides `scroll.index_offset`)
    #[arg(long)]
    pub offset: Option<f64>,

    /// Cap on active works (overrides `scroll.max_items`)
    #[arg(long)]
    pub max_items: Option<usize>,

    /// Read samples as the element's top offset in px (needs --viewport)
    #[arg(long, value_name = "PX", requires = "viewport")]
    pub height: Option<f64>,

    /// Viewport height in px (needs --height)
    #[arg(long, value_name = "PX", requires = "height")]
    pub viewport: Option<f64>,

    /// Scroll range used to turn offsets into progress
    #[arg(long, value_enum, default_value_t = RangePreset::Contain)]
    pub range: RangePreset,

    /// Scroll progress samples, nominally in [0, 1]
    #[arg(required = true, value_name = "PROGRESS", allow_negative_numbers = true)]
    pub samples: Vec<f64>,
}

/// Named scroll ranges, as used by the site's sections.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangePreset {
    /// Section top at viewport top → section bottom at viewport bottom
    #[default]
    Contain,
    /// Section top at viewport center → section bottom at viewport center
    Center,
    /// Element enters at the bottom → leaves at the top
    EnterExit,
}

/// Validate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Works export to read (overrides `works.source`)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub source: Option<PathBuf>,

    /// Report problems without failing
    #[arg(long, short = 'w')]
    pub warn_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from(["folio", "render", "-s", "export.json", "--json"]).unwrap();
        assert!(cli.requires_config());
        let Commands::Render { args } = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.source, Some(PathBuf::from("export.json")));
        assert!(args.json);
        assert!(!args.all);
    }

    #[test]
    fn test_parse_scroll_negative_samples() {
        let cli = Cli::try_parse_from(["folio", "scroll", "-n", "5", "-0.5", "0.21", "1.5"]).unwrap();
        assert!(!cli.requires_config());
        let Commands::Scroll { args } = cli.command else {
            panic!("expected scroll");
        };
        assert_eq!(args.count, Some(5));
        assert_eq!(args.samples, vec![-0.5, 0.21, 1.5]);
    }

    #[test]
    fn test_scroll_needs_count_or_works() {
        assert!(Cli::try_parse_from(["folio", "scroll", "0.5"]).is_err());
        assert!(
            Cli::try_parse_from(["folio", "scroll", "-n", "3", "-w", "works.json", "0.5"]).is_err()
        );
        assert!(Cli::try_parse_from(["folio", "scroll", "-w", "works.json", "0.5"]).is_ok());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "slug", "Hello World", "-v", "-C", "site.toml"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
    }

    #[test]
    fn test_parse_scroll_geometry() {
        let cli = Cli::try_parse_from([
            "folio", "scroll", "-n", "4", "--height", "3000", "--viewport", "800",
            "--range", "enter-exit", "0", "-1200",
        ])
        .unwrap();
        let Commands::Scroll { args } = cli.command else {
            panic!("expected scroll");
        };
        assert_eq!(args.range, RangePreset::EnterExit);
        assert_eq!(args.samples, vec![0.0, -1200.0]);

        assert!(Cli::try_parse_from(["folio", "scroll", "-n", "4", "--height", "3000", "0"]).is_err());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
