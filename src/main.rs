//! Phone Input - terminal driver
//!
//! Reads widget commands from stdin, one per line, and prints the widget view
//! as JSON to stdout after every change. Logs go to stderr.
//!
//! Commands: `toggle`, `list`, `outside`, `search <text>`, `select <REGION>`,
//! `type <text>`, `submit`, `quit`.

use anyhow::Result;
use phone_input::{run_widget, Config, CountryCatalog, MetricsTracker, PhoneInputWidget, WidgetEvent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, watch};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only, stdout carries the views)
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let catalog = match CountryCatalog::load(config.countries_file.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load country dataset: {}", e);
            return Err(e.into());
        }
    };
    info!("Loaded {} countries", catalog.len());

    let metrics = MetricsTracker::new();
    let mut widget = PhoneInputWidget::new(catalog, &config).with_metrics(metrics.clone());
    widget.on_select(|selection| {
        info!("Selected dial code {}", selection.dial_code_str());
    });

    let (event_tx, event_rx) = mpsc::channel(32);
    let (view_tx, mut view_rx) = watch::channel(widget.view());

    let widget_task = tokio::spawn(run_widget(widget, event_rx, view_tx));

    let printer = tokio::spawn(async move {
        while view_rx.changed().await.is_ok() {
            let view = view_rx.borrow_and_update().clone();
            match serde_json::to_string(&view) {
                Ok(json) => println!("{}", json),
                Err(e) => error!("Failed to serialize view: {}", e),
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().eq_ignore_ascii_case("quit") {
            break;
        }

        match line.parse::<WidgetEvent>() {
            Ok(event) => event_tx.send(event).await?,
            Err(e) => warn!("{}", e),
        }
    }

    // Closing the channel stops the widget loop
    drop(event_tx);
    let widget = widget_task.await?;
    printer.await?;

    if let Some(err) = widget.validator().last_error() {
        info!("Last validation error: {}", err);
    }
    info!("{}", metrics.summary());
    Ok(())
}
