use std::path::PathBuf;
use std::sync::Arc;

use eyre::Result;

use tracheo_app::{config, intake, outbox::Outbox};
use tracheo_storage::fs::FileStore;
use tracheo_wizard::controller::WizardController;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = config::load_or_default()?;
    init_tracing(config.log_json);

    let answers_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .ok_or_else(|| eyre::eyre!("usage: tracheo-intake <answers.json>"))?;
    let answers = intake::load_answers(&answers_path)?;

    let store = Arc::new(FileStore::new(&config.data_dir));
    tracing::info!(data_dir = %store.root().display(), "starting intake");

    let mut wizard =
        WizardController::mount(&config.wizard, store.clone(), Arc::new(Outbox::new(store))).await;
    let record_id = intake::run(&mut wizard, &answers).await?;

    println!("{record_id}");
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
