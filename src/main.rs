use clap::{Parser, Subcommand};
use emoji_organizer::menu::Action;
use emoji_organizer::organizer::Organizer;
use emoji_organizer::{config, output};
use std::io::{self, Write};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "emoji-organizer")]
#[command(about = "Rename emoji images to unique 6-digit ids and write a download manifest")]
#[command(long_about = "\
Rename emoji images to unique 6-digit ids and write a download manifest

Each subdirectory of the base directory is a category. Images (jpg, jpeg,
png, gif, webp) whose name is not exactly six digits are renamed to a fresh
id that is unique across all categories. The manifest lists every image
with its category and download URL.

  emoji/
  ├── organizer.toml        # Optional config (base_url, msg, manifest_file)
  ├── cats/
  │   ├── 123456.jpg        # Canonical, left alone
  │   └── happy-cat.png     # Renamed to <id>.png
  └── mengling.json         # Manifest, overwritten on every run

Run without a command for an interactive menu.")]
#[command(version = version_string())]
struct Cli {
    /// Base directory containing the category folders
    #[arg(long, default_value = ".", global = true)]
    base_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Rename non-canonical image files
    Rename,
    /// Write the manifest from the files currently on disk
    Manifest,
    /// Rename, then write the manifest
    Organize,
    /// Print a stock organizer.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let action = match cli.command {
        Some(Command::Rename) => Action::Rename,
        Some(Command::Manifest) => Action::Manifest,
        Some(Command::Organize) => Action::Organize,
        Some(Command::GenConfig) => {
            print!("{}", config::stock_config_toml());
            return Ok(());
        }
        None => match prompt_action()? {
            Some(action) => action,
            None => return Ok(()),
        },
    };

    let mut organizer = Organizer::open(&cli.base_dir)?;
    match action {
        Action::Rename => {
            println!("{}", output::format_rename_start(organizer.base_dir()));
            let count = organizer.rename_files_with(output::print_rename)?;
            println!("{}", output::format_rename_summary(count));
        }
        Action::Manifest => {
            println!("{}", output::format_manifest_start());
            let count = organizer.generate_json()?;
            println!(
                "{}",
                output::format_manifest_summary(&organizer.config().manifest_file, count)
            );
        }
        Action::Organize => {
            println!("{}", output::format_rename_start(organizer.base_dir()));
            let summary = organizer.organize_all_with(output::print_rename)?;
            output::print_organize_summary(&summary);
        }
    }

    Ok(())
}

/// Show the menu and read one choice from stdin.
///
/// Returns `Ok(None)` after reporting an invalid choice; EOF counts as one.
fn prompt_action() -> io::Result<Option<Action>> {
    output::print_menu();
    print!("{}", output::format_menu_prompt());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let action = Action::from_choice(&input);
    if action.is_none() {
        println!("{}", output::format_invalid_choice(&input));
    }
    Ok(action)
}
