mod config;
mod error;
mod routes;

use std::io::IsTerminal;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use config::{Command, Config, OutputFormat};
use error::AppError;
use routes::format::{RouteFields, RouteList};
use routes::lookup::RouteEngine;
use routes::{generator, loader, Destination, Route, RoutingTable};

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    // Logs go to stderr, stdout carries only program output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.as_str().to_lowercase()))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
    if let Some(path) = &config.source {
        tracing::info!("Loaded configuration from: {}", path.display());
    }

    let result = match &config.command {
        Command::Show => show(&config),
        Command::Create { random } => create(&config, *random),
        Command::Lookup { network, mask } => lookup(&config, network, mask),
    };

    if let Err(e) = &result {
        if let Some(app_err) = e.downcast_ref::<AppError>() {
            tracing::error!(decode = app_err.is_decode(), "{}", app_err.user_message());
        }
    }
    result
}

fn show(config: &Config) -> anyhow::Result<()> {
    let table = loader::load_file(&config.data_file)?;
    print_routes(loader::routes(&table), config.format)?;

    let first = loader::first_route(&table)?;
    println!("Destination of the first route is: {}", loader::dest(first));
    Ok(())
}

fn create(config: &Config, random: usize) -> anyhow::Result<()> {
    let table = generator::sample_table(random, &mut rand::thread_rng());
    loader::save_file(&table, &config.data_file)?;
    print_routes(loader::routes(&table), config.format)
}

fn lookup(config: &Config, network: &str, mask: &str) -> anyhow::Result<()> {
    let table: RoutingTable = loader::load_file(&config.data_file)?;
    let query = Destination {
        network: network.to_string(),
        mask: mask.to_string(),
    };

    let route = RouteEngine::new(&table).lookup(&query);
    print_route(&route, config.format)
}

fn print_routes(routes: &[Route], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{}", RouteList(routes)),
        OutputFormat::Json => {
            let json = serde_json::to_string(routes).context("Failed to render routes as JSON")?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn print_route(route: &Route, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{}", RouteFields(route)),
        OutputFormat::Json => {
            let json = serde_json::to_string(route).context("Failed to render route as JSON")?;
            println!("{}", json);
        }
    }
    Ok(())
}
