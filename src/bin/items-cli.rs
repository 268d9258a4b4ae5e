use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "items-cli")]
#[command(about = "Command-line client for the Simple Items API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the root greeting
    Root,
    /// Check service health
    Health,
    /// Look up an item by ID
    GetItem {
        item_id: String,
        /// Optional search text
        #[arg(long)]
        q: Option<String>,
    },
    /// Create an item
    CreateItem {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        tax: Option<f64>,
    },
    /// Print the OpenAPI document
    Openapi,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Root => client.get(format!("{}/", base)).send().await?,
        Commands::Health => client.get(format!("{}/health", base)).send().await?,
        Commands::GetItem { item_id, q } => {
            let mut req = client.get(format!("{}/items/{}", base, item_id));
            if let Some(q) = q {
                req = req.query(&[("q", q)]);
            }
            req.send().await?
        }
        Commands::CreateItem {
            name,
            price,
            description,
            tax,
        } => {
            let item = json!({
                "name": name,
                "description": description,
                "price": price,
                "tax": tax,
            });
            client
                .post(format!("{}/items/", base))
                .json(&item)
                .send()
                .await?
        }
        Commands::Openapi => client.get(format!("{}/openapi.json", base)).send().await?,
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let json: Value = res.json().await?;

    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        eprintln!("{}", serde_json::to_string_pretty(&json)?);
        std::process::exit(1);
    }

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
