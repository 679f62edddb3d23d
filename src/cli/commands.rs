use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::console::Console;
use crate::indexer::{IndexError, generate_posts_list};
use crate::render::{HtmlRenderer, TextRenderer};
use crate::tui::run_console;
use crate::utils::{get_site_root, init_logging};

#[derive(Parser)]
#[command(name = "redshift-site")]
#[command(version = "0.1.0")]
#[command(
    about = "Build the blog post manifest and drive the site's command console",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Regenerate blog/posts-list.json from blog/posts (the default)
    Posts,
    /// Open the interactive console in the terminal
    Console,
    /// Run console commands non-interactively and print the transcript
    Exec {
        /// Command lines to run, in order (quote lines containing spaces)
        commands: Vec<String>,
        /// Print the transcript as HTML markup instead of plain text
        #[arg(long)]
        html: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Posts) | None => {
            init_logging();
            build_posts()?;
        }
        Some(Commands::Console) => {
            run_console()?;
        }
        Some(Commands::Exec { commands, html }) => {
            init_logging();
            exec_commands(commands, *html);
        }
    }

    Ok(())
}

fn build_posts() -> Result<()> {
    let site_root = get_site_root()?;
    debug!("Site root: {}", site_root.display());

    match generate_posts_list(&site_root) {
        Ok(summary) => {
            println!(
                "Successfully generated {} with {} posts",
                summary.manifest_path.display(),
                summary.post_count
            );
            Ok(())
        }
        // A missing posts directory is reported but is not a failure
        Err(err) => match err.downcast_ref::<IndexError>() {
            Some(index_err) => {
                eprintln!("{}", index_err);
                Ok(())
            }
            None => Err(err),
        },
    }
}

fn exec_commands(commands: &[String], html: bool) {
    if html {
        let mut console = Console::new(HtmlRenderer::new());
        for line in commands {
            console.run_line(line);
        }
        println!("{}", console.target().html());
    } else {
        let mut console = Console::new(TextRenderer::new());
        for line in commands {
            console.run_line(line);
        }
        println!("{}", console.target().to_text());
    }
}
