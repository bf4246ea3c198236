use anyhow::Result;
use clap::{Parser, Subcommand};

use promptr::config::{self, Config};
use promptr::context::{self, PromptContext};
use promptr::palette::Palette;
use promptr::{prompt, shell};

#[derive(Parser)]
#[command(name = "promptr", version, about = "Classic informative shell prompt")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Output shell init script
    Init {
        /// Shell to generate init script for (fish, bash, zsh)
        shell: String,
    },
    /// Render the prompt for the current shell state
    Prompt {
        /// Exit statuses of the last pipeline, one per stage
        #[arg(long, num_args = 0..)]
        pipestatus: Vec<i32>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Init { shell }) => {
            let script = shell::get_init_script(&shell)?;
            print!("{script}");
        }
        Some(Command::Prompt { pipestatus }) => render_prompt(pipestatus),
        None => render_prompt(Vec::new()),
    }

    Ok(())
}

fn render_prompt(pipestatus: Vec<i32>) {
    // The hook reads the prompt through a command substitution, never a tty.
    console::set_colors_enabled(true);

    let config = config::load_config().unwrap_or_else(|err| {
        log::warn!("ignoring unreadable config: {err:#}");
        Config::default()
    });
    let palette = Palette::from_config(&config.colors);
    let ctx = PromptContext::gather(pipestatus, config.pwd_dir_length(), context::superuser);
    print!("{}", prompt::render(&ctx, &palette));
}
