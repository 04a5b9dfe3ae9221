use bandit_testbed::config::AppConfig;
use bandit_testbed::environment::Environment;
use bandit_testbed::errors::AppError;
use bandit_testbed::output;
use bandit_testbed::testbed::Testbed;

use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let environment = Environment::new(
        config.testbed.arms,
        config.testbed.stationary,
        config.testbed.seed,
    )?;
    let agent = config.agent.into_agent(config.testbed.arms);

    let mut testbed = Testbed::new(environment, agent);
    let summaries = testbed.run_test(config.testbed.steps, config.testbed.runs)?;

    output::write_summaries(&config.output.path, config.output.format, &summaries)?;
    Ok(())
}
