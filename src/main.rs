use anyhow::{Context, Result};
use clap::Parser;
use ext_api_mock::{
    rest::RestApi,
    utils::{
        conf::Conf,
        logger::{setup_tracing, TracingMode},
    },
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = None)]
    pub config_file: Option<String>,

    #[arg(long)]
    pub port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Conf::new(args.config_file, args.port).context("reading config file")?;

    setup_tracing(match config.log_format.as_str() {
        "json" => TracingMode::Json,
        _ => TracingMode::Full,
    })?;

    info!("Starting mock server with config: {:?}", config);

    let mut server = RestApi::new(config.addr());
    server.serve().await
}
