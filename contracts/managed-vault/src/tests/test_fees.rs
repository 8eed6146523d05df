mod test_managed_vault_fees {
    use cosmwasm_std::Uint128;
    use test_helpers::{
        definitions::{OWNER, MANAGER, NEW_MANAGER, NOT_WHITELISTED, STRANGER},
        misc::{get_response_attribute, get_response_event},
        token::{WAD, query_token_balance},
        contract::{query_pool_holdings, mock_whitelist_remove_manager}
    };

    use crate::{
        ContractError,
        event::format_vec_for_event,
        msg::{ExecuteMsg, QueryMsg, ManagerResponse},
        tests::helpers::{TestEnv, contract_error, percent}
    };


    fn initial_amounts() -> Vec<Uint128> {
        vec![Uint128::new(100) * WAD, Uint128::new(200) * WAD]
    }

    /// Fees after 1000 seconds at the default management fee (fee index 1e-7).
    fn fees_after_1000_seconds(holdings: &[Uint128]) -> Vec<Uint128> {
        holdings.iter()
            .map(|holding| *holding / Uint128::new(10000000))
            .collect()
    }

    fn manager_balances(env: &TestEnv, manager: &str) -> Vec<Uint128> {
        env.tokens.iter()
            .map(|token| query_token_balance(&env.app, token.clone(), manager.to_string()))
            .collect()
    }


    #[test]
    fn test_claim_manager_fees() {

        let mut env = TestEnv::initialize(2);
        let vault = env.deploy_initialized_vault(initial_amounts(), vec![percent(50), percent(50)]);

        env.advance_time(1000);

        let expected_fees = fees_after_1000_seconds(&initial_amounts());

        // Check the fee preview
        assert_eq!(env.query_values(&vault, &QueryMsg::ManagerFees {}), expected_fees);



        // Tested action: claim the fees
        let response = env.execute(MANAGER, &vault, &ExecuteMsg::ClaimManagerFees {}).unwrap();



        // Check the event
        let event = get_response_event(&response.events, "distribute-manager-fees").unwrap();
        assert_eq!(get_response_attribute::<String>(event.clone(), "manager").unwrap(), MANAGER.to_string());
        assert_eq!(
            get_response_attribute::<String>(event, "fees").unwrap(),
            format_vec_for_event(&expected_fees)
        );

        // Check the balances
        assert_eq!(manager_balances(&env, MANAGER), expected_fees);

        let expected_holdings: Vec<Uint128> = initial_amounts().iter()
            .zip(&expected_fees)
            .map(|(holding, fee)| *holding - *fee)
            .collect();
        assert_eq!(env.query_holdings(&vault), expected_holdings);
        assert_eq!(query_pool_holdings(&env.app, env.pool.clone()), expected_holdings);

        // Nothing more is owed
        assert_eq!(env.query_values(&vault, &QueryMsg::ManagerFees {}), vec![Uint128::zero(); 2]);

    }


    #[test]
    fn test_fees_charged_on_pool_balances() {

        let mut env = TestEnv::initialize(2);
        let vault = env.deploy_initialized_vault(initial_amounts(), vec![percent(50), percent(50)]);

        // Swap 10 of the first token for 5 of the second one
        env.mock_trade(
            vec![Uint128::new(10) * WAD, Uint128::zero()],
            vec![Uint128::zero(), Uint128::new(5) * WAD]
        );
        let pool_holdings = vec![Uint128::new(110) * WAD, Uint128::new(195) * WAD];

        env.advance_time(1000);

        let expected_fees = fees_after_1000_seconds(&pool_holdings);
        assert_eq!(env.query_values(&vault, &QueryMsg::ManagerFees {}), expected_fees);



        // Tested action: claim the fees after the trade
        env.execute(MANAGER, &vault, &ExecuteMsg::ClaimManagerFees {}).unwrap();



        assert_eq!(manager_balances(&env, MANAGER), expected_fees);

        let expected_holdings: Vec<Uint128> = pool_holdings.iter()
            .zip(&expected_fees)
            .map(|(holding, fee)| *holding - *fee)
            .collect();
        assert_eq!(env.query_holdings(&vault), expected_holdings);
        assert_eq!(query_pool_holdings(&env.app, env.pool.clone()), expected_holdings);

    }


    #[test]
    fn test_claim_manager_fees_twice() {

        let mut env = TestEnv::initialize(2);
        let vault = env.deploy_initialized_vault(initial_amounts(), vec![percent(50), percent(50)]);

        env.advance_time(1000);
        env.execute(MANAGER, &vault, &ExecuteMsg::ClaimManagerFees {}).unwrap();
        let first_fees = manager_balances(&env, MANAGER);



        // Tested action: claim again within the same block
        let response = env.execute(MANAGER, &vault, &ExecuteMsg::ClaimManagerFees {}).unwrap();



        assert!(get_response_event(&response.events, "distribute-manager-fees").is_none());
        assert_eq!(manager_balances(&env, MANAGER), first_fees);

    }


    #[test]
    fn test_claim_manager_fees_unauthorized() {

        let mut env = TestEnv::initialize(2);
        let vault = env.deploy_initialized_vault(initial_amounts(), vec![percent(50), percent(50)]);

        env.advance_time(1000);



        // Tested action: claim by the owner
        let result = env.execute(OWNER, &vault, &ExecuteMsg::ClaimManagerFees {});



        assert_eq!(contract_error(result), ContractError::CallerIsNotManager {});

    }


    #[test]
    fn test_set_manager_settles_fees() {

        let mut env = TestEnv::initialize(2);
        let vault = env.deploy_initialized_vault(initial_amounts(), vec![percent(50), percent(50)]);

        env.advance_time(1000);

        let outgoing_manager_fees = fees_after_1000_seconds(&initial_amounts());



        // Tested action: replace the manager
        let response = env.execute(
            OWNER,
            &vault,
            &ExecuteMsg::SetManager { new_manager: NEW_MANAGER.to_string() }
        ).unwrap();



        // Check the event
        let event = get_response_event(&response.events, "set-manager").unwrap();
        assert_eq!(get_response_attribute::<String>(event, "manager").unwrap(), NEW_MANAGER.to_string());

        assert_eq!(
            env.query::<ManagerResponse>(&vault, &QueryMsg::Manager {}).manager.as_str(),
            NEW_MANAGER
        );

        // The outgoing manager got the fees accrued until now
        assert_eq!(manager_balances(&env, MANAGER), outgoing_manager_fees);
        assert_eq!(manager_balances(&env, NEW_MANAGER), vec![Uint128::zero(); 2]);

        // From now on the fees go to the new manager
        let holdings = env.query_holdings(&vault);
        env.advance_time(1000);

        let result = env.execute(MANAGER, &vault, &ExecuteMsg::ClaimManagerFees {});
        assert_eq!(contract_error(result), ContractError::CallerIsNotManager {});

        env.execute(NEW_MANAGER, &vault, &ExecuteMsg::ClaimManagerFees {}).unwrap();
        assert_eq!(manager_balances(&env, NEW_MANAGER), fees_after_1000_seconds(&holdings));
        assert_eq!(manager_balances(&env, MANAGER), outgoing_manager_fees);

    }


    #[test]
    fn test_set_manager_before_initial_deposit() {

        let mut env = TestEnv::initialize(2);
        let vault = env.deploy_vault();



        // Tested action: replace the manager of an uninitialized vault
        env.execute(
            OWNER,
            &vault,
            &ExecuteMsg::SetManager { new_manager: NEW_MANAGER.to_string() }
        ).unwrap();



        assert_eq!(
            env.query::<ManagerResponse>(&vault, &QueryMsg::Manager {}).manager.as_str(),
            NEW_MANAGER
        );

    }


    #[test]
    fn test_set_manager_invalid() {

        let mut env = TestEnv::initialize(2);
        let vault = env.deploy_initialized_vault(initial_amounts(), vec![percent(50), percent(50)]);



        // Tested action 1: not whitelisted
        let result = env.execute(
            OWNER,
            &vault,
            &ExecuteMsg::SetManager { new_manager: NOT_WHITELISTED.to_string() }
        );

        assert_eq!(
            contract_error(result),
            ContractError::ManagerNotWhitelisted { manager: NOT_WHITELISTED.to_string() }
        );



        // Tested action 2: the owner
        let result = env.execute(
            OWNER,
            &vault,
            &ExecuteMsg::SetManager { new_manager: OWNER.to_string() }
        );

        assert_eq!(contract_error(result), ContractError::ManagerIsOwner {});



        // Tested action 3: empty address
        let result = env.execute(
            OWNER,
            &vault,
            &ExecuteMsg::SetManager { new_manager: "".to_string() }
        );

        assert_eq!(contract_error(result), ContractError::ZeroAddress {});



        // Tested action 4: removed from the whitelist
        mock_whitelist_remove_manager(&mut env.app, env.whitelist.clone(), NEW_MANAGER.to_string());

        let result = env.execute(
            OWNER,
            &vault,
            &ExecuteMsg::SetManager { new_manager: NEW_MANAGER.to_string() }
        );

        assert_eq!(
            contract_error(result),
            ContractError::ManagerNotWhitelisted { manager: NEW_MANAGER.to_string() }
        );



        // Tested action 5: set by a stranger
        let result = env.execute(
            STRANGER,
            &vault,
            &ExecuteMsg::SetManager { new_manager: MANAGER.to_string() }
        );

        assert_eq!(contract_error(result), ContractError::CallerIsNotOwner {});

    }


    #[test]
    fn test_no_fees_while_finalizing() {

        let mut env = TestEnv::initialize(2);
        let vault = env.deploy_initialized_vault(initial_amounts(), vec![percent(50), percent(50)]);

        env.advance_time(1000);



        // Tested action: initiate finalization (settles the fees due so far)
        env.execute(OWNER, &vault, &ExecuteMsg::InitiateFinalization {}).unwrap();



        let expected_fees = fees_after_1000_seconds(&initial_amounts());
        assert_eq!(manager_balances(&env, MANAGER), expected_fees);

        // No fees accrue afterwards
        env.advance_time(100000);
        assert_eq!(env.query_values(&vault, &QueryMsg::ManagerFees {}), vec![Uint128::zero(); 2]);

        let result = env.execute(MANAGER, &vault, &ExecuteMsg::ClaimManagerFees {});
        assert_eq!(contract_error(result), ContractError::VaultFinalizing {});

    }

}
