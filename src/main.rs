use clap::Parser;
use cli::{Args, Command, ServeArgs};
use std::process::ExitCode;

mod app_context;
mod cli;
mod client;
mod health;
mod http;
mod logging;
mod resize;
mod ui;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init();

    match args.command {
        Command::Serve(serve_args) => match serve(serve_args).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                tracing::error!("Server stopped: {}", err);
                ExitCode::FAILURE
            }
        },
        Command::Resize(resize_args) => match client::cli::run(&resize_args).await {
            Ok(path) => {
                println!("{}", path.display());
                ExitCode::SUCCESS
            }
            Err(err) => {
                tracing::error!("Resize failed: {}", err);
                ExitCode::FAILURE
            }
        },
    }
}

async fn serve(args: ServeArgs) -> std::io::Result<()> {
    let app_context = app_context::init();
    let router = http::router::new(&args, app_context);

    let listener = tokio::net::TcpListener::bind(args.listen_address).await?;
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(listener, router).await
}
