use mimalloc::MiMalloc;
use sql_session::Config;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.redacted_url(),
        loglevel = %cfg.loglevel,
        init_schema = cfg.init_schema
    );

    let mut stdout = std::io::stdout().lock();
    match sql_session::run(&cfg, &mut stdout).await {
        Ok(report) => {
            info!(users = report.users.len(), "session finished");
            Ok(())
        }
        Err(e) => {
            error!(kind = ?e.kind(), error = %e, "session failed");
            Err(e.into())
        }
    }
}
