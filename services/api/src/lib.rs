mod cli;
mod infra;
mod listing;
mod routes;
mod server;

use intern_match::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
