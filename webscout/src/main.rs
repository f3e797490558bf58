mod args;

use args::{Args, Command, ScanAction};
use clap::Parser;
use webscout_api_client::WebscoutApiClient;
use webscout_api_schema::crawl::CrawlRequest;
use webscout_api_schema::project::CreateProjectRequest;
use webscout_config_file::WebscoutConfigToml;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(args).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let base_url = resolve_base_url(&args)?;
    log::debug!("using backend at {}", base_url);
    let client = WebscoutApiClient::new(base_url);

    let out = match args.command {
        Command::Tree { project } => serde_json::to_value(client.fetch_tree(&project).await?)?,
        Command::Dashboard { initials } => {
            serde_json::to_value(client.dashboard(&initials).await?)?
        }
        Command::Folders => serde_json::to_value(client.folders().await?)?,
        Command::Create {
            project_name,
            description,
            machine_ip,
            status,
            lead_analyst_initials,
            locked,
        } => serde_json::to_value(
            client
                .create_project(CreateProjectRequest {
                    project_name,
                    description,
                    machine_ip,
                    status,
                    lead_analyst_initials,
                    locked,
                })
                .await?,
        )?,
        Command::Delete { project } => client.delete_project(&project).await?,
        Command::Restore { project } => client.restore_project(&project).await?,
        Command::Lock { project, initials } => {
            serde_json::to_value(client.lock_project(&project, &initials).await?)?
        }
        Command::Unlock { project, initials } => {
            serde_json::to_value(client.unlock_project(&project, &initials).await?)?
        }
        Command::Login { initials } => client.check_login(&initials).await?,
        Command::Export { project } => serde_json::to_value(client.export_project(&project).await?)?,
        Command::ValidateUrl { url } => serde_json::to_value(
            client
                .validate_url(&CrawlRequest {
                    url,
                    ..Default::default()
                })
                .await?,
        )?,
        Command::Crawler { action } => serde_json::to_value(match action {
            ScanAction::Stop => client.stop_crawler().await?,
            ScanAction::Pause => client.pause_crawler().await?,
            ScanAction::Resume => client.resume_crawler().await?,
        })?,
        Command::Fuzzer { action } => serde_json::to_value(match action {
            ScanAction::Stop => client.stop_fuzzer().await?,
            ScanAction::Pause => client.pause_fuzzer().await?,
            ScanAction::Resume => client.resume_fuzzer().await?,
        })?,
    };

    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn resolve_base_url(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(base_url) = &args.base_url {
        return Ok(base_url.clone());
    }
    if let Some(path) = &args.config {
        let raw = std::fs::read_to_string(path)?;
        let config: WebscoutConfigToml = toml::from_str(&raw)?;
        if let Some(base_url) = config.base_url {
            return Ok(base_url);
        }
    }
    Ok(DEFAULT_BASE_URL.to_string())
}
