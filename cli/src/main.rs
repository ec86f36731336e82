use clap::{Parser, Subcommand};
use serde_json::json;

#[derive(Parser)]
#[command(
    name = "whistle",
    version,
    about = "Whistle CLI — turn coaching instructions into structured workout assignments"
)]
struct Cli {
    /// API base URL
    #[arg(long, env = "WHISTLE_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpret an instruction locally, without the API
    Parse {
        /// The coaching instruction, e.g. "Alex needs an easy 10k tomorrow"
        text: String,
        /// Reference date for relative expressions (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Check API health
    Health,
}

fn exit_error(message: &str) -> ! {
    let err = json!({
        "error": "cli_error",
        "message": message
    });
    eprintln!("{}", serde_json::to_string_pretty(&err).unwrap());
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { text, date, pretty } => parse(&text, date.as_deref(), pretty),
        Commands::Health => health(&cli.api_url).await,
    };

    if let Err(e) = result {
        exit_error(&e.to_string());
    }
}

fn parse(text: &str, date: Option<&str>, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let reference = match date {
        Some(date) => chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| format!("Invalid --date (expected YYYY-MM-DD): {e}"))?,
        None => chrono::Local::now().date_naive(),
    };

    let result = whistle_core::interpret(text, reference);

    let output = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{output}");

    if !result.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

async fn health(api_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let resp = reqwest::Client::new()
        .get(format!("{api_url}/health"))
        .send()
        .await?;
    let body: serde_json::Value = resp.json().await?;
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
