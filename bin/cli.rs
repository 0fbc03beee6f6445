use dex_facade_contracts::facade::dex_facade::{DexFacade, DexFacadeInitArgs};
use dex_facade_contracts::mocks::factory::MockFactory;
use dex_facade_contracts::mocks::pair::{MockPair, MockPairInitArgs};
use dex_facade_contracts::mocks::router::{MockRouter, MockRouterInitArgs};
use dex_facade_contracts::token::{LpToken, LpTokenInitArgs};
use odra::host::{HostEnv, NoArgs};
use odra::prelude::{Address, Addressable};
use odra::schema::casper_contract_schema::NamedCLType;
use odra_cli::{
    deploy::DeployScript,
    scenario::{Args, Error, Scenario, ScenarioMetadata},
    CommandArg, ContractProvider, DeployedContractsContainer, DeployerExt, OdraCli,
};

/// Deploys a complete local stack: two demo tokens, the mock AMM
/// (factory, router, pair) and the facade wired on top of it.
pub struct DeployLocalStackScript;

impl DeployScript for DeployLocalStackScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer,
    ) -> Result<(), odra_cli::deploy::Error> {
        println!("==> Deploying demo tokens");
        let token_a = LpToken::load_or_deploy(
            &env,
            LpTokenInitArgs {
                name: String::from("Demo USD"),
                symbol: String::from("DUSD"),
            },
            container,
            600_000_000_000,
        )?;
        println!("Token A deployed at: {:?}", token_a.address());

        let token_b = LpToken::load_or_deploy(
            &env,
            LpTokenInitArgs {
                name: String::from("Demo DAI"),
                symbol: String::from("DDAI"),
            },
            container,
            600_000_000_000,
        )?;
        println!("Token B deployed at: {:?}", token_b.address());

        println!("==> Deploying mock AMM");
        let mut factory = MockFactory::load_or_deploy(&env, NoArgs, container, 500_000_000_000)?;
        println!("Factory deployed at: {:?}", factory.address());

        let router = MockRouter::load_or_deploy(
            &env,
            MockRouterInitArgs {
                factory: factory.address().clone(),
            },
            container,
            500_000_000_000,
        )?;
        println!("Router deployed at: {:?}", router.address());

        let pair = MockPair::load_or_deploy(
            &env,
            MockPairInitArgs {
                token_a: token_a.address().clone(),
                token_b: token_b.address().clone(),
                router: router.address().clone(),
            },
            container,
            600_000_000_000,
        )?;
        println!("Pair deployed at: {:?}", pair.address());

        env.set_gas(10_000_000_000);
        factory.register_pair(
            token_a.address().clone(),
            token_b.address().clone(),
            pair.address().clone(),
        );

        println!("==> Deploying DexFacade");
        let facade = DexFacade::load_or_deploy(
            &env,
            DexFacadeInitArgs {
                router: router.address().clone(),
                factory: factory.address().clone(),
            },
            container,
            600_000_000_000,
        )?;
        println!("DexFacade deployed at: {:?}", facade.address());

        Ok(())
    }
}

/// Scenario to resolve the pair address for two tokens through the facade.
pub struct PairAddressScenario;

impl Scenario for PairAddressScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![
            CommandArg::new("token_a", "Address of the first token", NamedCLType::Key),
            CommandArg::new("token_b", "Address of the second token", NamedCLType::Key),
        ]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args,
    ) -> Result<(), Error> {
        let facade = container.contract_ref::<DexFacade>(env)?;
        let token_a = args.get_single::<Address>("token_a")?;
        let token_b = args.get_single::<Address>("token_b")?;

        let pair = facade.try_get_pair_address(token_a, token_b);
        println!("Pair address: {:?}", pair);
        Ok(())
    }
}

impl ScenarioMetadata for PairAddressScenario {
    const NAME: &'static str = "pair-address";
    const DESCRIPTION: &'static str = "Resolves the canonical pair address for two tokens";
}

/// Scenario to print the facade's swap counter.
pub struct SwapCountScenario;

impl Scenario for SwapCountScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        _args: Args,
    ) -> Result<(), Error> {
        let facade = container.contract_ref::<DexFacade>(env)?;
        println!("Swaps executed: {}", facade.swap_counter());
        Ok(())
    }
}

impl ScenarioMetadata for SwapCountScenario {
    const NAME: &'static str = "swap-count";
    const DESCRIPTION: &'static str = "Prints the number of swaps executed through the facade";
}

pub fn main() {
    OdraCli::new()
        .about("CLI tool for the DexFacade smart contracts")
        // Deploy scripts
        .deploy(DeployLocalStackScript)
        // Contract references
        .contract::<DexFacade>()
        .contract::<MockFactory>()
        .contract::<MockRouter>()
        .contract::<MockPair>()
        .contract::<LpToken>()
        // Scenarios
        .scenario(PairAddressScenario)
        .scenario(SwapCountScenario)
        .build()
        .run();
}
