#![forbid(unsafe_code)]

mod cli;
mod config;
mod constants;
mod layout;
mod render;
mod x11_utils;

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use anyhow::{Context, Result};
use clap::Parser;
use signal_hook::consts::{SIGINT, SIGTERM};
use tracing::{Level as TraceLevel, info};
use tracing_subscriber::FmtSubscriber;
use x11rb::connection::Connection;

use cli::Cli;
use x11_utils::{CachedAtoms, DockWindow};

fn main() -> Result<()> {
    // Parse log level from environment variable
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        std::process::exit(1);
    });

    let strip_config = cli.strip_config();
    let highlights = cli.highlight_set();
    info!("config={:?} highlights={:?}", strip_config, highlights);

    let (conn, screen_num) = x11rb::connect(cli.display.as_deref()).with_context(|| {
        format!(
            "unable to open display {}",
            cli.display.as_deref().unwrap_or("(default)")
        )
    })?;
    let screen = &conn.setup().roots[screen_num];
    info!(
        "successfully connected to x11: screen={screen_num}, dimensions={}x{}",
        screen.width_in_pixels, screen.height_in_pixels
    );

    // Pre-cache atoms once at startup (eliminates roundtrip overhead)
    let atoms = CachedAtoms::new(&conn)?;

    let dock = DockWindow::create(&conn, screen, &atoms, &strip_config)?;
    info!(
        axis_length = dock.axis_length,
        hour_tick = layout::hour_tick(dock.axis_length),
        "strip window mapped"
    );

    // Signals only flip the flag; the loop owns all teardown
    let shutdown = Arc::new(AtomicBool::new(false));
    for signal in [SIGINT, SIGTERM] {
        signal_hook::flag::register(signal, Arc::clone(&shutdown))
            .context("Failed to register signal handler")?;
    }

    render::run(&dock, &strip_config, &highlights, &shutdown)?;

    // Signal-initiated exit: drop the connection and leave with 0
    info!("shutting down");
    drop(dock);
    drop(conn);
    Ok(())
}
