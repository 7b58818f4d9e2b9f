use lambda_runtime::{service_fn, Error};

mod config;
mod handler;
mod logging;

use config::LogConfig;
use handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init(&LogConfig::from_env());

    let func = service_fn(function_handler);
    lambda_runtime::run(func).await?;
    Ok(())
}
