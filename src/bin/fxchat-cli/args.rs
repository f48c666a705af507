use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fxchat",
    about = "Chat with a currency conversion assistant backed by live exchange rates"
)]
pub struct CliArgs {
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
    #[arg(long, short = 'm')]
    pub model: Option<String>,
    /// Answer a single request and exit
    #[arg(long, short = 'p')]
    pub prompt: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_shot_prompt() {
        let args =
            CliArgs::parse_from(["fxchat", "--model", "gpt-4o-mini", "-p", "10 USD to EUR"]);
        assert_eq!(args.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(args.prompt.as_deref(), Some("10 USD to EUR"));
        assert!(args.config.is_none());
    }
}
