//! Yijing CLI - Ask the oracle from the terminal
//!
//! Talks to a running yijing-server, or casts hexagrams offline.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Input;

use api::{ChatResponse, OracleClient};
use config::Config;
use yijing::{draw, resolve, DivinationResult, DrawNumbers};

#[derive(Parser)]
#[command(name = "yijing")]
#[command(about = "Yijing CLI - 易經占卜 from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Server URL (overrides config)
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the oracle a question
    Ask {
        /// The question
        question: String,
        /// Three numbers to cast with (comma-separated, e.g. "123,456,789")
        #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true, conflicts_with = "draw")]
        numbers: Option<Vec<i64>>,
        /// Draw the three sticks interactively
        #[arg(short, long)]
        draw: bool,
    },

    /// Cast a hexagram locally, without interpretation
    Cast {
        /// Three numbers (comma-separated); drawn at random if omitted
        #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
        numbers: Option<Vec<i64>>,
    },

    /// Check server status
    Health,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the server URL
    SetUrl {
        /// e.g. http://localhost:5001
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ask { question, numbers, draw } => {
            cmd_ask(cli.url, question, numbers, draw).await
        }
        Commands::Cast { numbers } => cmd_cast(numbers),
        Commands::Health => cmd_health(cli.url).await,
        Commands::Config { action } => cmd_config(action.unwrap_or(ConfigAction::Show)),
    }
}

fn client(url: Option<String>) -> Result<OracleClient> {
    let base_url = match url {
        Some(url) => url,
        None => Config::load()?.base_url,
    };
    Ok(OracleClient::new(&base_url))
}

fn to_array(numbers: Vec<i64>) -> Result<[i64; 3]> {
    let count = numbers.len();
    numbers
        .try_into()
        .map_err(|_| anyhow::anyhow!("Expected exactly 3 numbers, got {}", count))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_ask(
    url: Option<String>,
    question: String,
    numbers: Option<Vec<i64>>,
    interactive: bool,
) -> Result<()> {
    if question.is_empty() {
        bail!("Question cannot be empty");
    }

    let numbers = match numbers {
        Some(numbers) => Some(to_array(numbers)?),
        None if interactive => Some(draw_sticks(&question)?),
        None => None,
    };

    let client = client(url)?;
    let reply = client.chat(&question, numbers).await?;
    print_reply(&reply);

    Ok(())
}

/// Shake the stick container three times, one number per shake
fn draw_sticks(question: &str) -> Result<[i64; 3]> {
    println!("{}", "🔮 請誠心搖籤三次".bold());
    println!("   {}", format!("心中默念：{}", question).dimmed());

    let drawn = draw();
    for (i, number) in drawn.0.iter().enumerate() {
        let _: String = Input::new()
            .with_prompt(format!("☯ 按 Enter 搖籤 ({}/3)", i + 1))
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;
        println!("   第{}籤: {}", i + 1, number.to_string().yellow().bold());
    }

    Ok(drawn.0)
}

fn cmd_cast(numbers: Option<Vec<i64>>) -> Result<()> {
    let numbers = match numbers {
        Some(numbers) => DrawNumbers::from(to_array(numbers)?),
        None => draw(),
    };

    print_reading(&resolve(numbers));
    Ok(())
}

async fn cmd_health(url: Option<String>) -> Result<()> {
    let client = client(url)?;
    let health = client.health().await?;

    let openai = if health.openai == "enabled" {
        health.openai.green()
    } else {
        health.openai.yellow()
    };
    println!("{} status: {}  openai: {}", "✓".green(), health.status, openai);

    Ok(())
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        ConfigAction::Show => {
            println!("{}", "Configuration:".bold());
            println!("  Config file: {:?}", Config::config_path()?);
            println!("  Server URL:  {}", config.base_url.cyan());
        }
        ConfigAction::SetUrl { url } => {
            config.set_base_url(&url)?;
            config.save()?;
            println!("{} Server URL set to {}", "✓".green(), config.base_url);
        }
    }

    Ok(())
}

// ============================================
// Output
// ============================================

fn print_reply(reply: &ChatResponse) {
    if let Some(hexagram) = &reply.hexagram_data {
        println!(
            "{} 第 {} 卦 {} [{}]",
            "☯".cyan(),
            hexagram.num,
            hexagram.name.bold(),
            fortune_colored(&hexagram.fortune)
        );
        println!("  {}\n", hexagram.meaning.dimmed());
    } else {
        println!("{}", format!("[{}]", reply.intent).dimmed());
    }
    println!("{}", reply.response);
}

fn print_reading(result: &DivinationResult) {
    let hexagram = result.hexagram;
    println!("{} {}", "起卦數字:".dimmed(), result.numbers);
    println!(
        "{} 第 {} 卦 {} [{}]",
        "☯".cyan(),
        hexagram.number,
        hexagram.name.bold(),
        fortune_colored(hexagram.fortune)
    );
    println!(
        "  上卦: {} {} ({})",
        result.upper.name, result.upper.symbol, result.upper.element
    );
    println!(
        "  下卦: {} {} ({})",
        result.lower.name, result.lower.symbol, result.lower.element
    );
    println!("  卦義: {}", hexagram.meaning);
    println!("  動爻: 第 {} 爻", result.changing_line);
}

fn fortune_colored(fortune: &str) -> colored::ColoredString {
    match fortune {
        "大吉" | "上上" | "吉" => fortune.green(),
        "中上" | "中平" => fortune.yellow(),
        _ => fortune.red(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_flag_parses_three_values() {
        let cli = Cli::try_parse_from(["yijing", "ask", "占卜", "--numbers", "123,456,789"]).unwrap();
        match cli.command {
            Commands::Ask { numbers, draw, .. } => {
                assert_eq!(numbers, Some(vec![123, 456, 789]));
                assert!(!draw);
            }
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn test_numbers_conflict_with_draw() {
        assert!(
            Cli::try_parse_from(["yijing", "ask", "q", "-n", "1,2,3", "--draw"]).is_err()
        );
    }

    #[test]
    fn test_to_array_requires_three() {
        assert_eq!(to_array(vec![1, 2, 3]).unwrap(), [1, 2, 3]);
        assert!(to_array(vec![1, 2]).is_err());
    }

    #[test]
    fn test_config_defaults_to_show() {
        let cli = Cli::try_parse_from(["yijing", "config"]).unwrap();
        assert!(matches!(cli.command, Commands::Config { action: None }));
    }
}
