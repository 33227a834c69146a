//! `evatr`: confirm a foreign EU VAT ID with the BZSt eVatR service.
//!
//! ```text
//! evatr --own DE115235681 --check CZ00177041
//! evatr --own DE115235681 --check CZ00177041 --company "ŠKODA AUTO a.s." --city "Mlada Boleslav"
//! ```

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use evatr::client::{ClientConfig, EVATR_URL, EvatrClient};
use evatr::core::{CheckRequest, CheckRequestBuilder, EvatrError};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "evatr",
    version,
    about = "Confirm a foreign EU VAT ID with the BZSt eVatR service",
    after_help = "Example: evatr --own DE115235681 --check CZ00177041"
)]
struct Cli {
    /// Own German VAT ID, e.g. "DE115235681"
    #[arg(long)]
    own: String,

    /// Foreign VAT ID to check, e.g. "CZ00177041"
    #[arg(long)]
    check: String,

    /// (qualified) Company name with legal form; needs --city, otherwise a
    /// simple check is sent
    #[arg(long)]
    company: Option<String>,

    /// (qualified) City; needs --company, otherwise a simple check is sent
    #[arg(long)]
    city: Option<String>,

    /// (qualified, optional) Zip code
    #[arg(long)]
    zip: Option<String>,

    /// (qualified, optional) Street
    #[arg(long)]
    street: Option<String>,

    /// (qualified) Request an official confirmation letter by mail
    #[arg(long)]
    print: bool,

    /// Include the raw XML response in the output
    #[arg(long)]
    raw_xml: bool,

    /// eVatR endpoint
    #[arg(long, env = "EVATR_BASE_URL", default_value = EVATR_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Log filter, e.g. "debug" or "evatr=trace"
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn request(&self) -> Result<CheckRequest, EvatrError> {
        let mut builder =
            CheckRequestBuilder::new(&self.own, &self.check).include_raw_xml(self.raw_xml);
        if let (Some(company), Some(city)) = (&self.company, &self.city) {
            builder = builder.company_name(company).city(city).print(self.print);
            if let Some(zip) = &self.zip {
                builder = builder.zip(zip);
            }
            if let Some(street) = &self.street {
                builder = builder.street(street);
            }
        }
        builder.build()
    }

    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout),
            ..ClientConfig::with_base_url(&self.base_url)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(&cli.log_level) {
        eprintln!("warning: {e}");
    }

    match run(&cli).await {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let request = cli.request()?;
    let client = EvatrClient::with_config(cli.client_config())?;
    let result = client.check(&request).await?;
    Ok(serde_json::to_string_pretty(&result)?)
}

fn init_tracing(log_level: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_new(log_level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()?;
    Ok(())
}
