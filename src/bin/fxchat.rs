#[path = "fxchat-cli/args.rs"]
mod args;
#[path = "fxchat-cli/logging.rs"]
mod logging;
#[path = "fxchat-cli/shell.rs"]
mod shell;

use clap::Parser;
use fxchat::config::load_config;
use fxchat::Assistant;

use args::CliArgs;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let mut loaded = load_config(args.config.clone())?;
    if let Some(model) = args.model {
        loaded.config.model = model;
    }
    let _logger = logging::init_logging(&loaded.config.logging, &loaded.paths)?;
    logging::log_startup(&loaded);

    let assistant = Assistant::from_config(&loaded.config)?;
    match args.prompt {
        Some(prompt) => {
            let answer = assistant.respond(&prompt).await?;
            println!("{answer}");
            Ok(())
        }
        None => shell::run(&assistant).await,
    }
}
