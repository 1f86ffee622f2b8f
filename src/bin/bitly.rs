//! bit.ly API CLI binary.
//!
//! A command-line interface for interacting with the bit.ly API.

use bitlyapi::cli::{params_from_pairs, split_link, Cli, Command};
use bitlyapi::{BitlyClient, HistoryQuery, MetricsQuery, PrettyPrint, Response};
use chrono::DateTime;
use clap::Parser;
use serde::Serialize;
use serde_json::Value;
use std::process::ExitCode;
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut client = match BitlyClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set BITLY_ACCESS_TOKEN (or BITLY_CLIENT_ID and BITLY_CLIENT_SECRET)");
            return ExitCode::FAILURE;
        }
    };

    match run(&mut client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &mut BitlyClient, cli: Cli) -> bitlyapi::Result<()> {
    let json = cli.json;
    match cli.command {
        Command::Shorten { url, domain } => {
            let link = client.shorten(&url, domain.as_deref()).await?;
            output_single(&link, json)?;
        }
        Command::Expand { link } => {
            let (short_url, hash) = split_link(&link);
            let expanded = client.expand(short_url, hash).await?;
            output_single(&expanded, json)?;
        }
        Command::Info { link } => {
            let (short_url, hash) = split_link(&link);
            let info = client.info(short_url, hash, None).await?;
            output_single(&info, json)?;
        }
        Command::Clicks {
            link,
            unit,
            units,
            limit,
        } => {
            let query = MetricsQuery {
                unit: Some(unit.into()),
                units: Some(units),
                limit,
                ..Default::default()
            };
            let clicks = client.link_clicks(&link, &query).await?;
            output_rows(&clicks, json, ClickRow::from_value)?;
        }
        Command::UserInfo => {
            let info = client.user_info(None, None).await?;
            output_single(&info, json)?;
        }
        Command::History { limit, offset } => {
            let query = HistoryQuery {
                limit,
                offset,
                ..Default::default()
            };
            let history = client.user_link_history(&query).await?;
            output_rows(&history, json, HistoryRow::from_value)?;
        }
        Command::AuthUrl {
            redirect_uri,
            state,
        } => {
            let url = client.authorize_url(&redirect_uri, state.as_deref())?;
            println!("{url}");
        }
        Command::Exchange { code, redirect_uri } => {
            let token = client
                .exchange_authorization_code(&code, &redirect_uri)
                .await?;
            println!("{token}");
        }
        Command::Call {
            endpoint,
            params,
            post,
            raw,
        } => {
            let params = params_from_pairs(&params);
            match client.call(&endpoint, Some(params), post, !raw).await? {
                Response::Json(data) => output_single(&data, json)?,
                Response::Raw(body) => println!("{body}"),
            }
        }
    }
    Ok(())
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> bitlyapi::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_rows<R, F>(data: &Value, json: bool, to_row: F) -> bitlyapi::Result<()>
where
    R: Tabled,
    F: Fn(&Value) -> R,
{
    if json {
        println!("{}", serde_json::to_string_pretty(data)?);
    } else {
        let rows: Vec<R> = data
            .as_array()
            .map(|items| items.iter().map(to_row).collect())
            .unwrap_or_default();
        println!("{}", Table::new(rows));
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct ClickRow {
    date: String,
    clicks: i64,
}

impl ClickRow {
    fn from_value(v: &Value) -> Self {
        Self {
            date: v["dt"].as_i64().map(format_ts).unwrap_or_default(),
            clicks: v["clicks"].as_i64().unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct HistoryRow {
    link: String,
    #[tabled(rename = "long url")]
    long_url: String,
    title: String,
    created: String,
}

impl HistoryRow {
    fn from_value(v: &Value) -> Self {
        let text = |key: &str| v[key].as_str().unwrap_or_default().to_string();
        Self {
            link: text("link"),
            long_url: text("long_url"),
            title: text("title"),
            created: v["created_at"].as_i64().map(format_ts).unwrap_or_default(),
        }
    }
}

fn format_ts(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| secs.to_string())
}
