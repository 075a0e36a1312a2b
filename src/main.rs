//! HTTPS switcher.
//!
//! ```text
//!   plain request ──▶ serve ──▶ secure? localhost? ──no──▶ 302 Location: https://site/path
//!                                       │
//!                                      yes ──▶ 200 OK
//!
//!   CGI wrapper   ──▶ cgi   ──▶ Status/Location headers on stdout, exit code 3 = halted
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use axum::http::{HeaderValue, StatusCode};
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use https_switcher::config::{self, validation::is_redirect_status, AppConfig};
use https_switcher::http::{server::shutdown_signal, HttpServer};
use https_switcher::observability::{logging, metrics};
use https_switcher::{Flow, RequestContext, SslSwitcher};

/// Exit code of `cgi` when the redirect halted the request.
const EXIT_HALTED: u8 = 3;

#[derive(Parser)]
#[command(name = "https-switcher")]
#[command(about = "Redirect plain HTTP requests to the HTTPS version of a website", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a redirect server
    Serve {
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Secure website URL (overrides the config file)
        #[arg(short, long)]
        url: Option<String>,

        /// Bind address (overrides the config file)
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Evaluate the CGI environment of this process
    Cgi {
        /// Secure website URL
        #[arg(short, long)]
        url: String,

        /// Keep going after emitting the redirect
        #[arg(long)]
        no_exit: bool,

        /// Status code of the redirect
        #[arg(long, default_value_t = 302)]
        status: u16,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config: config_path, url, bind } => {
            let app_config = config::load_config(config_path.as_deref(), |c| {
                if let Some(url) = url {
                    c.switcher.website_url = url;
                }
                if let Some(bind) = bind {
                    c.listener.bind_address = bind;
                }
            })?;

            logging::init_logging(&app_config.observability.log_level);
            serve(app_config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Cgi { url, no_exit, status } => {
            logging::init_logging("warn");
            cgi(url, !no_exit, status)
        }
    }
}

async fn serve(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        website_url = %config.switcher.website_url,
        exit = config.switcher.exit,
        redirect_status = config.switcher.redirect_status,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    HttpServer::new(config).run(listener, shutdown_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn cgi(url: String, exit: bool, status: u16) -> Result<ExitCode, Box<dyn std::error::Error>> {
    if !is_redirect_status(status) {
        return Err(format!("{status} is not a redirect status").into());
    }
    let status = StatusCode::from_u16(status)?;

    let ctx = RequestContext::from_process_env();
    let mut switcher = SslSwitcher::new(url);
    switcher.set_exit_enabled(exit);

    let mut location: Option<String> = None;
    let flow = switcher.switch(&ctx, &mut location);

    if let Some(location) = location {
        if let Err(e) = HeaderValue::from_str(&location) {
            tracing::error!(location = %location, error = %e, "Redirect target is not a valid header value");
            return Ok(ExitCode::SUCCESS);
        }

        match flow {
            Flow::Halt => print!(
                "Status: {} {}\r\nLocation: {}\r\n\r\n",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Redirect"),
                location
            ),
            // The guarded program still writes its own headers.
            Flow::Continue => print!("Location: {}\r\n", location),
        }
    }

    Ok(match flow {
        Flow::Halt => ExitCode::from(EXIT_HALTED),
        Flow::Continue => ExitCode::SUCCESS,
    })
}
