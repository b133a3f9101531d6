//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, eyre};
use selkit_objects::{Circle, Rectangle, Shape, from_json, to_json, to_json_pretty};
use selkit_selector::{Combinator, RecipeFile, Selector};
use selkit_shared::{AppConfig, init_config, load_config};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// selkit: validated CSS selector building and shape objects.
#[derive(Parser)]
#[command(
    name = "selkit",
    version,
    about = "Build validated CSS selector strings and encode/decode shape objects.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Build CSS selectors.
    Selector {
        #[command(subcommand)]
        action: SelectorAction,
    },

    /// Print a rectangle as JSON along with its area.
    Rect {
        #[arg(long)]
        width: u32,

        #[arg(long)]
        height: u32,
    },

    /// Decode a shape from JSON and print its area.
    Shape {
        /// Shape type to decode into.
        kind: ShapeKind,

        /// JSON object, e.g. '{"radius":10}'.
        json: String,
    },

    /// Configuration management.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Selector subcommands.
#[derive(Subcommand)]
pub(crate) enum SelectorAction {
    /// Build one compound selector from flags (applied in canonical order).
    Compound {
        #[arg(long)]
        element: Option<String>,

        #[arg(long)]
        id: Option<String>,

        /// Class name (repeatable).
        #[arg(long = "class")]
        classes: Vec<String>,

        /// Attribute expression without brackets (repeatable).
        #[arg(long = "attr")]
        attrs: Vec<String>,

        /// Pseudo-class without the colon (repeatable).
        #[arg(long = "pseudo-class")]
        pseudo_classes: Vec<String>,

        #[arg(long)]
        pseudo_element: Option<String>,
    },

    /// Render every selector in a JSON or TOML recipe file.
    Recipe {
        /// Path to the recipe file (`.toml` or `.json`).
        file: PathBuf,

        /// Override the configured default combinator: ' ', '>', '+' or '~'.
        #[arg(long)]
        combinator: Option<Combinator>,
    },
}

/// Shapes the `shape` command can decode.
#[derive(Clone, Debug, ValueEnum)]
pub(crate) enum ShapeKind {
    Rectangle,
    Circle,
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Target prefix shared by the binary and every `selkit_*` library crate.
const LOG_TARGET: &str = "selkit";

/// Default filter directive for a `-v` count.
fn default_filter(verbose: u8) -> String {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    format!("{LOG_TARGET}={level}")
}

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(cli.verbose)));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Selector { action } => match action {
            SelectorAction::Compound {
                element,
                id,
                classes,
                attrs,
                pseudo_classes,
                pseudo_element,
            } => cmd_compound(
                element.as_deref(),
                id.as_deref(),
                &classes,
                &attrs,
                &pseudo_classes,
                pseudo_element.as_deref(),
            ),
            SelectorAction::Recipe { file, combinator } => {
                cmd_recipe(&file, combinator)
            }
        },
        Command::Rect { width, height } => cmd_rect(width, height),
        Command::Shape { kind, json } => cmd_shape(&kind, &json),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_compound(
    element: Option<&str>,
    id: Option<&str>,
    classes: &[String],
    attrs: &[String],
    pseudo_classes: &[String],
    pseudo_element: Option<&str>,
) -> Result<()> {
    let selector = build_compound(element, id, classes, attrs, pseudo_classes, pseudo_element)?;
    if selector.is_empty() {
        return Err(eyre!("nothing to build: pass at least one selector part"));
    }

    info!(fragments = selector.len(), "built compound selector");
    println!("{selector}");
    Ok(())
}

fn build_compound(
    element: Option<&str>,
    id: Option<&str>,
    classes: &[String],
    attrs: &[String],
    pseudo_classes: &[String],
    pseudo_element: Option<&str>,
) -> selkit_shared::Result<Selector> {
    let mut sel = Selector::new();
    if let Some(element) = element {
        sel = sel.element(element)?;
    }
    if let Some(id) = id {
        sel = sel.id(id)?;
    }
    for class in classes {
        sel = sel.class(class)?;
    }
    for attr in attrs {
        sel = sel.attr(attr)?;
    }
    for pseudo in pseudo_classes {
        sel = sel.pseudo_class(pseudo)?;
    }
    if let Some(pseudo) = pseudo_element {
        sel = sel.pseudo_element(pseudo)?;
    }
    Ok(sel)
}

fn cmd_recipe(file: &Path, combinator: Option<Combinator>) -> Result<()> {
    let config = load_config()?;
    let default_combinator =
        combinator.map_or(config.defaults.combinator.as_str(), |c| c.as_str());

    let recipes = RecipeFile::load(file)?;
    info!(
        file = %file.display(),
        count = recipes.selectors.len(),
        "rendering recipes"
    );

    for (name, selector) in recipes.render(default_combinator)? {
        println!("{name}: {selector}");
    }
    Ok(())
}

fn cmd_rect(width: u32, height: u32) -> Result<()> {
    let config = load_config()?;
    let rect = Rectangle::new(width, height);

    let json = if config.output.pretty_json {
        to_json_pretty(&rect)?
    } else {
        to_json(&rect)?
    };
    println!("{json}");
    println!("area: {}", rect.area());
    Ok(())
}

fn cmd_shape(kind: &ShapeKind, json: &str) -> Result<()> {
    let shape: Box<dyn Shape> = match kind {
        ShapeKind::Rectangle => Box::new(from_json::<Rectangle>(json)?),
        ShapeKind::Circle => Box::new(from_json::<Circle>(json)?),
    };

    info!(shape = shape.name(), "decoded shape");
    println!("{}: area {}", shape.name(), shape.area());
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
