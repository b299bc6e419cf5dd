//! Animotion CLI
//!
//! Generate keyframe-animation and gradient CSS from config files, print
//! built-in presets, and manage the persisted history.

mod config;
mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use animotion_css::{
    find_preset, random_gradient_config, AnimationConfig, BuiltinPreset, GradientConfig,
};
use animotion_store::{
    AnimationStore, FileStorage, GradientStore, HistoryItem, HistoryPolicy,
    PersistentAnimationHistory, PersistentGradientHistory, PersistentHistory, Storage,
};

use config::AnimotionConfig;

#[derive(Parser)]
#[command(name = "animotion")]
#[command(about = "CSS keyframe animation and gradient generator", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (defaults to ./animotion.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the CSS for an animation config file (JSON or TOML)
    Generate {
        file: PathBuf,

        /// Record the result in the animation history
        #[arg(long)]
        save: bool,
    },

    /// Print the `background:` declaration for a gradient config file
    Gradient {
        #[arg(required_unless_present = "random")]
        file: Option<PathBuf>,

        /// Generate a random gradient instead of reading a file
        #[arg(long, conflicts_with = "file")]
        random: bool,

        /// Record the result in the gradient history
        #[arg(long)]
        save: bool,
    },

    /// List the built-in presets
    Presets,

    /// Print the CSS of a built-in preset
    Preset {
        id: String,

        /// Record the result in the animation history
        #[arg(long)]
        save: bool,
    },

    /// Inspect or edit the saved history
    History {
        /// Operate on the gradient history instead of the animation history
        #[arg(long, global = true)]
        gradient: bool,

        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List entries, newest first
    List,
    /// Print the CSS of an entry
    Show { id: String },
    /// Delete an entry
    Remove { id: String },
    /// Delete every entry
    Clear,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "animotion_cli={level},animotion_store={level},animotion_css={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<AnimotionConfig> {
    match path {
        Some(path) => AnimotionConfig::load_from_file(path),
        None => {
            let cwd = std::env::current_dir().context("Failed to read working directory")?;
            AnimotionConfig::load_from_dir(&cwd)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate { file, save } => {
            let animation: AnimationConfig = render::read_config_file(&file)?;
            let store = AnimationStore::with_config(animation);
            print_animation(&store, &config, save)
        }
        Commands::Gradient { file, random, save } => {
            let gradient = match file {
                Some(file) if !random => render::read_config_file::<GradientConfig>(&file)?,
                _ => random_gradient_config(),
            };
            let store = GradientStore::with_config(gradient);
            println!("{}", store.full_css());

            if save {
                let mut history = open_gradient_history(&config)?;
                let added =
                    history.add_item(None, store.config().clone(), store.css().to_string())?;
                if added {
                    info!("Saved to gradient history ({} entries)", history.len());
                } else {
                    info!("Gradient already in history");
                }
            }
            Ok(())
        }
        Commands::Presets => {
            for preset in BuiltinPreset::all() {
                println!("{:<14} {}", preset.id(), preset.name());
            }
            Ok(())
        }
        Commands::Preset { id, save } => {
            let Some(preset) = find_preset(&id) else {
                bail!("Unknown preset {:?}. Run `animotion presets` to list them.", id);
            };
            let mut store = AnimationStore::new();
            store.load_preset(&preset);
            print_animation(&store, &config, save)
        }
        Commands::History { gradient, action } => {
            if gradient {
                let mut history = open_gradient_history(&config)?;
                run_history_action(&mut history, action)
            } else {
                let mut history = open_animation_history(&config)?;
                run_history_action(&mut history, action)
            }
        }
    }
}

fn print_animation(store: &AnimationStore, config: &AnimotionConfig, save: bool) -> Result<()> {
    let css = render::animation_css(store.config(), &config.output.selector);
    println!("{css}");

    if save {
        let mut history = open_animation_history(config)?;
        save_animation(&mut history, store.config(), css)?;
    }
    Ok(())
}

/// Record the printed CSS alongside the config it came from
fn save_animation<S: Storage>(
    history: &mut PersistentAnimationHistory<S>,
    config: &AnimationConfig,
    css: String,
) -> Result<()> {
    history.add_item(Some(config.name.clone()), config.clone(), css)?;
    info!("Saved to animation history ({} entries)", history.len());
    Ok(())
}

fn open_animation_history(
    config: &AnimotionConfig,
) -> Result<PersistentAnimationHistory<FileStorage>> {
    let dir = config.data_dir()?;
    PersistentAnimationHistory::open(FileStorage::new(&dir))
        .with_context(|| format!("Failed to open animation history in {}", dir.display()))
}

fn open_gradient_history(
    config: &AnimotionConfig,
) -> Result<PersistentGradientHistory<FileStorage>> {
    let dir = config.data_dir()?;
    PersistentGradientHistory::open(FileStorage::new(&dir))
        .with_context(|| format!("Failed to open gradient history in {}", dir.display()))
}

fn run_history_action<P: HistoryPolicy>(
    history: &mut PersistentHistory<P, FileStorage>,
    action: HistoryAction,
) -> Result<()> {
    match action {
        HistoryAction::List => {
            if history.is_empty() {
                info!("History is empty");
            }
            for item in history.items() {
                println!("{}", render::history_line(item));
            }
        }
        HistoryAction::Show { id } => {
            let item: &HistoryItem<P::Config> = history
                .get(&id)
                .with_context(|| format!("No history entry {id:?}"))?;
            println!("{}", item.css);
        }
        HistoryAction::Remove { id } => {
            if !history.remove_item(&id)? {
                bail!("No history entry {:?}", id);
            }
            info!("Removed {}", id);
        }
        HistoryAction::Clear => {
            let count = history.len();
            history.clear_all()?;
            info!("Cleared {} entries", count);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use animotion_css::default_animation_config;
    use animotion_store::MemoryStorage;
    use pretty_assertions::assert_eq;

    #[test]
    fn saved_css_matches_custom_selector_output() {
        let config = default_animation_config();
        let printed = render::animation_css(&config, "#hero");

        let mut history = PersistentAnimationHistory::open(MemoryStorage::new()).unwrap();
        save_animation(&mut history, &config, printed.clone()).unwrap();

        let item = &history.items()[0];
        assert_eq!(item.css, printed);
        assert!(item.css.contains("#hero {"));
        assert_eq!(item.name.as_deref(), Some("myAnimation"));

        let reopened = PersistentAnimationHistory::open(history.into_storage()).unwrap();
        assert_eq!(reopened.items()[0].css, printed);
    }
}
