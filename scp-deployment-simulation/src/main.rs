//! CLI for running a single policy simulation scenario, used by the
//! acceptance-test stage of the pipeline.

use anyhow::Context;
use aws_config::BehaviorVersion;
use clap::Parser;
use scp_deployment_simulation::{verify, AwsPolicySimulator, Decision, SimulationCheck};

#[derive(Parser, Debug)]
#[command(
    name = "scp-simulate",
    about = "Simulate an IAM action for a principal and check the decision"
)]
struct Args {
    /// ARN of the principal whose policies are simulated
    #[arg(long)]
    policy_source_arn: String,

    /// Action to simulate, as "service:Action"
    #[arg(long)]
    action: String,

    /// Expected outcome: "allowed" or "denied"
    #[arg(long)]
    expect: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let expected: Decision = args.expect.parse()?;

    let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    let simulator = AwsPolicySimulator::new(aws_sdk_iam::Client::new(&config));

    let check = SimulationCheck {
        policy_source_arn: args.policy_source_arn,
        action_name: args.action,
        expected,
    };

    verify(&simulator, &check)
        .await
        .with_context(|| format!("simulation check for '{}' failed", check.action_name))?;

    println!("{}: {} as expected", check.action_name, expected);
    Ok(())
}
