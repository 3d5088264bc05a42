use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{bail, Context};
use kelp_schema::{AliasConfig, SchemaStore};
use kelp_server::{app, AppState};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!(
        "kelp-server {version}\n\nUsage:\n  kelp-server [--addr <ip:port>] [--site <dir>] [--data <dir>] [--alias <trigger=Class>]\n",
        version = env!("CARGO_PKG_VERSION")
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--version" || arg == "-V") {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut addr: SocketAddr = "127.0.0.1:8080".parse().expect("default address parses");
    let mut site_dir = PathBuf::from("site");
    let mut data_dir = PathBuf::from("data");
    let mut aliases = AliasConfig::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--addr" => {
                let value = iter.next().context("`--addr` expects a socket address")?;
                addr = value
                    .parse()
                    .with_context(|| format!("invalid listen address `{value}`"))?;
            }
            "--site" => {
                site_dir = PathBuf::from(iter.next().context("`--site` expects a directory")?);
            }
            "--data" => {
                data_dir = PathBuf::from(iter.next().context("`--data` expects a directory")?);
            }
            "--alias" => {
                let value = iter.next().context("`--alias` expects `trigger=Class`")?;
                let Some((trigger, class)) = value.split_once('=') else {
                    bail!("`--alias` expects `trigger=Class`, got `{value}`");
                };
                aliases = aliases.alias(trigger, class);
            }
            other => bail!("unknown argument `{other}`"),
        }
    }

    // A partial schema must never serve; abort before binding the socket.
    let schema = SchemaStore::load(&data_dir, &aliases)
        .with_context(|| format!("loading API schema from `{}`", data_dir.display()))?;

    let state = AppState::new(schema, site_dir);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(target: "kelp.server", %addr, "serving editor site");
    axum::serve(listener, app(state))
        .await
        .context("server loop failed")?;
    Ok(())
}
