use std::io::Write;

use tokio::io::{self, AsyncBufReadExt, BufReader};

use fxchat::Assistant;

const BANNER: &str = "💬 Currency ChatBot (Frankfurter edition). Type 'exit' to quit.";
const PROMPT: &str = "You: ";
const GOODBYE: &str = "👋 Goodbye!";

/// Reads requests from stdin until `exit` or end of input.
pub async fn run(assistant: &Assistant) -> anyhow::Result<()> {
    println!("{BANNER}");
    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        print!("{PROMPT}");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        if is_exit(&line) {
            println!("{GOODBYE}");
            break;
        }
        match assistant.respond(&line).await {
            Ok(answer) => println!("Assistant: {answer}"),
            Err(err) => {
                log::error!("exchange failed: {err}");
                println!("⚠️ Error: {err}");
            }
        }
    }
    Ok(())
}

fn is_exit(line: &str) -> bool {
    line.to_lowercase() == "exit"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_is_case_insensitive() {
        assert!(is_exit("exit"));
        assert!(is_exit("EXIT"));
        assert!(is_exit("eXiT"));
    }

    #[test]
    fn padded_exit_is_sent_to_the_assistant() {
        assert!(!is_exit(" exit"));
        assert!(!is_exit("Exit "));
    }

    #[test]
    fn other_input_is_not_exit() {
        assert!(!is_exit("exit now"));
        assert!(!is_exit(""));
        assert!(!is_exit("convert 10 USD to EUR"));
    }
}
