use std::{path::Path, process::ExitCode};

use alloy::{
    network::EthereumWallet,
    node_bindings::Anvil,
    providers::ProviderBuilder,
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use clap::Parser;
use eyre::OptionExt;
use sned_deploy::{
    deploy_module, prepare, AlloyEngine, DeploymentOutcome, ModuleDescriptor, NetworkRegistry,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use args::{Cli, Command, DeployArgs, TargetArgs};

mod args;

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let cli = Cli::parse();
    match run(cli.command).await {
        Ok(code) => code,
        Err(err) => {
            error!("{err:?}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> eyre::Result<ExitCode> {
    let registry = NetworkRegistry::builtin();

    match command {
        Command::Networks => {
            for network in registry.iter() {
                println!(
                    "{} ({}): router {}, bridge {}, bridge chain code {}",
                    network.name,
                    network.chain_id,
                    network.swap_router,
                    network.bridge,
                    network.bridge_chain_code
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Resolve(target) => {
            let module = resolve(&target, registry)?;
            println!("module: {}", module.id());
            for parameter in module.parameters() {
                match &parameter.default {
                    Some(default) => println!("  {} = {} (default)", parameter.name, default),
                    None => println!("  {} (required)", parameter.name),
                }
            }
            println!("{}: {}", module.step().contract, module.step().args);
            Ok(ExitCode::SUCCESS)
        }
        Command::Deploy(args) => deploy(args, registry).await,
    }
}

fn resolve(target: &TargetArgs, registry: NetworkRegistry) -> eyre::Result<ModuleDescriptor> {
    let params = target.parameters(&registry)?;
    let strategy = target.strategy(registry);
    Ok(prepare(strategy.as_ref(), &params)?)
}

async fn deploy(args: DeployArgs, registry: NetworkRegistry) -> eyre::Result<ExitCode> {
    let chain_id = args.target.parameters(&registry)?.chain_id();
    // Nothing touches the network until the arguments resolve.
    let module = resolve(&args.target, registry)?;

    let outcome = if args.local {
        let mut anvil = Anvil::new();
        if let Some(chain_id) = chain_id {
            anvil = anvil.chain_id(chain_id);
        }
        let anvil = anvil.try_spawn()?;
        let signer: PrivateKeySigner = anvil.keys()[0].clone().into();
        send(anvil.endpoint_url(), signer, &args.artifacts, chain_id, &module).await?
    } else {
        let key = args
            .private_key
            .ok_or_eyre("no deployer key, pass --private-key or set DEPLOYMENT_WALLET_KEY")?;
        let signer: PrivateKeySigner = key.trim().parse()?;
        send(args.rpc_url, signer, &args.artifacts, chain_id, &module).await?
    };

    match outcome {
        DeploymentOutcome::Deployed(address) => {
            println!("{} deployed at: {}", module.step().contract, address);
            Ok(ExitCode::SUCCESS)
        }
        DeploymentOutcome::MissingAddress { export } => {
            error!(%export, "deployment failed or contract address not available");
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn send(
    rpc_url: Url,
    signer: PrivateKeySigner,
    artifacts: &Path,
    chain_id: Option<u64>,
    module: &ModuleDescriptor,
) -> eyre::Result<DeploymentOutcome> {
    info!(deployer = %signer.address(), %rpc_url, "deploying {}", module.id());

    let wallet = EthereumWallet::from(signer);
    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(wallet)
        .on_http(rpc_url);

    let engine = AlloyEngine::new(&provider, artifacts).expect_chain(chain_id);
    Ok(deploy_module(&engine, module).await?)
}
