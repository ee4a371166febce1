pub mod utility;

pub use paygate_primitives::error::ApiError;

use crate::utility::logging::setup_logging;
use crate::utility::tasks::{DemoInputs, load_env, run_demo};
use eyre::Report;
use paygate_core::app_state::AppState;
use paygate_primitives::models::app_config::AppConfig;
use tracing::{info, warn};

pub async fn run() -> Result<(), Report> {
    // 1. load environment variables
    load_env();

    // 2. initialize logging first (so we can log everything else)
    setup_logging();

    info!("Starting paygate walkthrough...");

    // 3. load configuration
    let config = AppConfig::from_env()?;
    let inputs = DemoInputs::from_env()?;

    // 4. build the gateway client
    let state = AppState::new(config)?;

    // 5. exercise every operation
    let failures = run_demo(&state, &inputs).await;

    if failures > 0 {
        warn!(failures, "Walkthrough finished with failed steps");
    } else {
        info!("Walkthrough finished");
    }
    Ok(())
}
