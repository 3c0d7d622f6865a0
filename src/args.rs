use std::path::PathBuf;

use alloy::{primitives::Address, transports::http::reqwest::Url};
use clap::{Args, Parser, Subcommand, ValueEnum};
use eyre::OptionExt;
use sned_deploy::{
    DeploymentParameters, DeploymentStrategy, DirectStrategy, NetworkRegistry, NetworkStrategy,
};

pub const DEFAULT_RPC_URL: &str = "https://arb1.arbitrum.io/rpc";

#[derive(Debug, Parser)]
#[command(name = "sned-deploy", version, about = "Deploy the SnedPayment contract")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve constructor arguments and deploy SnedPayment.
    Deploy(DeployArgs),
    /// Print the resolved module without sending anything.
    Resolve(TargetArgs),
    /// List the networks with a known router and bridge.
    Networks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    /// Router and bridge addresses are passed on the command line.
    Direct,
    /// Router, bridge and bridge chain code come from the network table.
    Network,
}

#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Target chain id. `--network` takes precedence.
    #[arg(long, env = "NETWORK_ID", allow_negative_numbers = true)]
    pub network_id: Option<i64>,

    /// Target network by name, e.g. `arbitrum`.
    #[arg(long)]
    pub network: Option<String>,

    /// Owner of the deployed contract.
    #[arg(long, env = "OWNER")]
    pub owner: Option<Address>,

    #[arg(long, value_enum, default_value_t = StrategyKind::Network)]
    pub strategy: StrategyKind,

    /// Swap router, direct strategy only.
    #[arg(long)]
    pub swap_router: Option<Address>,

    /// Wormhole bridge, direct strategy only.
    #[arg(long)]
    pub wormhole_bridge: Option<Address>,
}

impl TargetArgs {
    pub fn strategy(&self, registry: NetworkRegistry) -> Box<dyn DeploymentStrategy> {
        match self.strategy {
            StrategyKind::Direct => Box::new(DirectStrategy),
            StrategyKind::Network => Box::new(NetworkStrategy::new(registry)),
        }
    }

    pub fn parameters(&self, registry: &NetworkRegistry) -> eyre::Result<DeploymentParameters> {
        let network_id = match &self.network {
            Some(name) => {
                let network = registry
                    .lookup_by_name(name)
                    .ok_or_eyre(format!("unknown network name: {name}"))?;
                Some(i64::try_from(network.chain_id)?)
            }
            None => self.network_id,
        };

        Ok(DeploymentParameters {
            network_id,
            owner: self.owner,
            swap_router: self.swap_router,
            wormhole_bridge: self.wormhole_bridge,
        })
    }
}

#[derive(Debug, Args)]
pub struct DeployArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    #[arg(long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: Url,

    /// Deployer key, not needed with `--local`.
    #[arg(long, env = "DEPLOYMENT_WALLET_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// Directory holding `SnedPayment.sol/SnedPayment.json`.
    #[arg(long, default_value = "artifacts/contracts")]
    pub artifacts: PathBuf,

    /// Deploy to a throwaway anvil node running the target chain id.
    #[arg(long)]
    pub local: bool,
}
