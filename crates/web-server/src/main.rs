// Entry point when running `cargo run -p web-server`.
// Loads the settings, sets up logging and hands over to `run_server`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = configuration::load_config()?;
    let _guard = configuration::init_tracing(&settings.log)?;
    web_server::run_server(&settings).await
}
