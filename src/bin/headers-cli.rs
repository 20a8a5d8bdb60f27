//! Management CLI for the header settings service.

use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;
use std::collections::HashMap;

use header_settings::editor::FormSpec;
use header_settings::headers::HeaderName;

#[derive(Parser)]
#[command(name = "headers-cli")]
#[command(about = "Management CLI for the header settings service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8081")]
    url: String,

    #[arg(short, long, default_value = "CHANGE_ME_IN_PRODUCTION")]
    key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service status
    Status,
    /// Show the full settings form (sections, values, hints)
    Show,
    /// Print the stored value of one header
    Get { header: HeaderName },
    /// Set one header value, keeping all others as stored
    Set { header: HeaderName, value: String },
    /// Clear one header value, keeping all others as stored
    Clear { header: HeaderName },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", cli.key))?,
    );

    match cli.command {
        Commands::Status => {
            let res = client
                .get(format!("{}/admin/status", cli.url))
                .headers(headers)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Show => {
            let res = client
                .get(format!("{}/admin/headers", cli.url))
                .headers(headers)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Get { header } => {
            let spec = fetch_form(&client, &cli.url, &headers).await?;
            match spec.field(header) {
                Some(field) => println!("{}", field.value),
                None => eprintln!("Error: form has no field for {}", header),
            }
        }
        Commands::Set { header, value } => {
            submit_with(&client, &cli.url, &headers, header, value).await?;
        }
        Commands::Clear { header } => {
            submit_with(&client, &cli.url, &headers, header, String::new()).await?;
        }
    }

    Ok(())
}

async fn fetch_form(
    client: &reqwest::Client,
    url: &str,
    headers: &HeaderMap,
) -> Result<FormSpec, Box<dyn std::error::Error>> {
    let res = client
        .get(format!("{}/admin/headers", url))
        .headers(headers.clone())
        .send()
        .await?;
    let status = res.status();
    if !status.is_success() {
        return Err(format!("Admin API returned status {}", status).into());
    }
    Ok(res.json().await?)
}

/// Read-modify-write submit: the API always overwrites every header, so the
/// CLI re-sends the currently stored values with one of them changed.
async fn submit_with(
    client: &reqwest::Client,
    url: &str,
    headers: &HeaderMap,
    header: HeaderName,
    value: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let spec = fetch_form(client, url, headers).await?;

    let mut values: HashMap<HeaderName, String> = HashMap::new();
    for section in &spec.sections {
        for field in &section.fields {
            values.insert(field.name, field.value.clone());
        }
    }
    values.insert(header, value);

    let res = client
        .put(format!("{}/admin/headers", url))
        .headers(headers.clone())
        .json(&values)
        .send()
        .await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: Admin API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
