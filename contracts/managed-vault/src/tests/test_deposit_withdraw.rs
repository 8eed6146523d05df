mod test_managed_vault_deposit_withdraw {
    use std::str::FromStr;

    use cosmwasm_std::{Uint128, Event};
    use test_helpers::{
        definitions::{OWNER, MANAGER, STRANGER},
        misc::{get_response_attribute, get_response_event},
        token::{WAD, query_token_balance},
        contract::{query_pool_holdings, mock_set_validator_allowances}
    };

    use crate::{
        ContractError,
        event::format_vec_for_event,
        msg::ExecuteMsg,
        tests::helpers::{TestEnv, contract_error, percent}
    };


    fn initial_amounts() -> Vec<Uint128> {
        vec![Uint128::new(100) * WAD, Uint128::new(200) * WAD]
    }

    /// Read the fees paid out in a response from its `distribute-manager-fees` event.
    fn parse_fees(events: &[Event]) -> Vec<Uint128> {
        let event = get_response_event(events, "distribute-manager-fees").unwrap();
        get_response_attribute::<String>(event, "fees").unwrap()
            .split(", ")
            .map(|fee| Uint128::from_str(fee).unwrap())
            .collect()
    }


    #[test]
    fn test_deposit() {

        let mut env = TestEnv::initialize(2);
        let vault = env.deploy_initialized_vault(initial_amounts(), vec![percent(50), percent(50)]);

        let amounts = vec![Uint128::new(10) * WAD, Uint128::zero()];
        env.approve(&vault, &amounts);



        // Tested action: deposit
        let response = env.execute(
            OWNER,
            &vault,
            &ExecuteMsg::Deposit { amounts: env.token_values(&amounts) }
        ).unwrap();



        // Check the event
        let event = get_response_event(&response.events, "deposit").unwrap();
        assert_eq!(
            get_response_attribute::<String>(event, "amounts").unwrap(),
            format_vec_for_event(&amounts)
        );

        // No time has elapsed: no fees are charged
        assert!(get_response_event(&response.events, "distribute-manager-fees").is_none());

        // Check the holdings
        let expected_holdings = vec![Uint128::new(110) * WAD, Uint128::new(200) * WAD];
        assert_eq!(env.query_holdings(&vault), expected_holdings);
        assert_eq!(query_pool_holdings(&env.app, env.pool.clone()), expected_holdings);

        // Weights are unchanged
        assert_eq!(env.query_weights(&vault), vec![percent(50), percent(50)]);

    }


    #[test]
    fn test_deposit_settles_fees() {

        let mut env = TestEnv::initialize(2);
        let vault = env.deploy_initialized_vault(initial_amounts(), vec![percent(50), percent(50)]);

        let amounts = vec![Uint128::new(10) * WAD, Uint128::new(10) * WAD];
        env.approve(&vault, &amounts);

        env.advance_time(1000);



        // Tested action: deposit after some time
        let response = env.execute(
            OWNER,
            &vault,
            &ExecuteMsg::Deposit { amounts: env.token_values(&amounts) }
        ).unwrap();



        // Fee index: 1e-10 * 1000 = 1e-7
        let fees = vec![Uint128::new(100) * WAD / Uint128::new(10000000), Uint128::new(200) * WAD / Uint128::new(10000000)];

        let event = get_response_event(&response.events, "distribute-manager-fees").unwrap();
        assert_eq!(
            get_response_attribute::<String>(event, "fees").unwrap(),
            format_vec_for_event(&fees)
        );

        // The fees are deducted before the deposit is added
        let expected_holdings: Vec<Uint128> = initial_amounts().iter()
            .zip(&fees)
            .zip(&amounts)
            .map(|((holding, fee), amount)| *holding - *fee + *amount)
            .collect();
        assert_eq!(env.query_holdings(&vault), expected_holdings);

        // The manager has been paid
        env.tokens.iter()
            .zip(&fees)
            .for_each(|(token, fee)| {
                assert_eq!(query_token_balance(&env.app, token.clone(), MANAGER.to_string()), *fee);
            });

    }


    #[test]
    fn test_deposit_unauthorized() {

        let mut env = TestEnv::initialize(2);
        let vault = env.deploy_initialized_vault(initial_amounts(), vec![percent(50), percent(50)]);

        let amounts = vec![Uint128::new(10) * WAD, Uint128::new(10) * WAD];
        env.approve(&vault, &amounts);



        // Tested action: deposit by the manager
        let result = env.execute(
            MANAGER,
            &vault,
            &ExecuteMsg::Deposit { amounts: env.token_values(&amounts) }
        );



        assert_eq!(contract_error(result), ContractError::CallerIsNotOwner {});
        assert_eq!(env.query_holdings(&vault), initial_amounts());

    }


    #[test]
    fn test_withdraw() {

        let mut env = TestEnv::initialize(2);
        let vault = env.deploy_initialized_vault(initial_amounts(), vec![percent(50), percent(50)]);

        let owner_balances: Vec<Uint128> = env.tokens.iter()
            .map(|token| query_token_balance(&env.app, token.clone(), OWNER.to_string()))
            .collect();

        let amounts = vec![Uint128::new(40) * WAD, Uint128::new(200) * WAD];



        // Tested action: withdraw
        let response = env.execute(
            OWNER,
            &vault,
            &ExecuteMsg::Withdraw { amounts: env.token_values(&amounts) }
        ).unwrap();



        // Check the event
        let event = get_response_event(&response.events, "withdraw").unwrap();
        assert_eq!(
            get_response_attribute::<String>(event, "amounts").unwrap(),
            format_vec_for_event(&amounts)
        );

        // Check the holdings
        let expected_holdings = vec![Uint128::new(60) * WAD, Uint128::zero()];
        assert_eq!(env.query_holdings(&vault), expected_holdings);
        assert_eq!(query_pool_holdings(&env.app, env.pool.clone()), expected_holdings);

        // Check the owner received the tokens
        env.tokens.iter()
            .zip(&owner_balances)
            .zip(&amounts)
            .for_each(|((token, balance), amount)| {
                assert_eq!(
                    query_token_balance(&env.app, token.clone(), OWNER.to_string()),
                    *balance + *amount
                );
            });

    }


    #[test]
    fn test_withdraw_exceeding_holdings() {

        let mut env = TestEnv::initialize(2);
        let vault = env.deploy_initialized_vault(initial_amounts(), vec![percent(50), percent(50)]);

        let amounts = vec![Uint128::new(40) * WAD, Uint128::new(200) * WAD + Uint128::one()];



        // Tested action: withdraw more than held
        let result = env.execute(
            OWNER,
            &vault,
            &ExecuteMsg::Withdraw { amounts: env.token_values(&amounts) }
        );



        assert_eq!(
            contract_error(result),
            ContractError::AmountExceedsAvailable {
                token: env.tokens[1].to_string(),
                amount: amounts[1],
                available: Uint128::new(200) * WAD
            }
        );
        assert_eq!(env.query_holdings(&vault), initial_amounts());

    }


    #[test]
    fn test_withdraw_after_trades() {

        let mut env = TestEnv::initialize(2);
        let vault = env.deploy_initialized_vault(initial_amounts(), vec![percent(50), percent(50)]);

        // Swap 10 of the first token for 5 of the second one
        env.mock_trade(
            vec![Uint128::new(10) * WAD, Uint128::zero()],
            vec![Uint128::zero(), Uint128::new(5) * WAD]
        );



        // Tested action 1: withdraw the amounts originally deposited
        let result = env.execute(
            OWNER,
            &vault,
            &ExecuteMsg::Withdraw { amounts: env.token_values(&initial_amounts()) }
        );

        assert_eq!(
            contract_error(result),
            ContractError::AmountExceedsAvailable {
                token: env.tokens[1].to_string(),
                amount: Uint128::new(200) * WAD,
                available: Uint128::new(195) * WAD
            }
        );



        // Tested action 2: withdraw everything the pool holds
        let pool_holdings = vec![Uint128::new(110) * WAD, Uint128::new(195) * WAD];

        env.execute(
            OWNER,
            &vault,
            &ExecuteMsg::Withdraw { amounts: env.token_values(&pool_holdings) }
        ).unwrap();

        assert_eq!(env.query_holdings(&vault), vec![Uint128::zero(); 2]);
        assert_eq!(query_pool_holdings(&env.app, env.pool.clone()), vec![Uint128::zero(); 2]);

    }


    #[test]
    fn test_deposit_then_withdraw_only_costs_fees() {

        let mut env = TestEnv::initialize(2);
        let vault = env.deploy_initialized_vault(initial_amounts(), vec![percent(50), percent(50)]);

        let amounts = vec![Uint128::new(10) * WAD, Uint128::new(30) * WAD];
        env.approve(&vault, &amounts);

        env.advance_time(1000);



        // Tested action 1: deposit
        let response = env.execute(
            OWNER,
            &vault,
            &ExecuteMsg::Deposit { amounts: env.token_values(&amounts) }
        ).unwrap();

        let deposit_fees = parse_fees(&response.events);

        env.advance_time(500);



        // Tested action 2: withdraw the same amounts
        let response = env.execute(
            OWNER,
            &vault,
            &ExecuteMsg::Withdraw { amounts: env.token_values(&amounts) }
        ).unwrap();

        let withdraw_fees = parse_fees(&response.events);



        // Both fee settlements charged something
        assert!(deposit_fees.iter().all(|fee| !fee.is_zero()));
        assert!(withdraw_fees.iter().all(|fee| !fee.is_zero()));

        // The holdings only moved by the two fees
        let expected_holdings: Vec<Uint128> = initial_amounts().iter()
            .zip(deposit_fees.iter().zip(&withdraw_fees))
            .map(|(holding, (deposit_fee, withdraw_fee))| *holding - *deposit_fee - *withdraw_fee)
            .collect();

        assert_eq!(env.query_holdings(&vault), expected_holdings);
        assert_eq!(query_pool_holdings(&env.app, env.pool.clone()), expected_holdings);

        // The manager received exactly both fees
        env.tokens.iter()
            .zip(deposit_fees.iter().zip(&withdraw_fees))
            .for_each(|(token, (deposit_fee, withdraw_fee))| {
                assert_eq!(
                    query_token_balance(&env.app, token.clone(), MANAGER.to_string()),
                    *deposit_fee + *withdraw_fee
                );
            });

    }


    #[test]
    fn test_withdraw_exceeding_validator_allowance() {

        let mut env = TestEnv::initialize(2);
        let vault = env.deploy_initialized_vault(initial_amounts(), vec![percent(50), percent(50)]);

        mock_set_validator_allowances(
            &mut env.app,
            env.validator.clone(),
            Some(vec![Uint128::new(3), Uint128::new(5)])
        );



        // Tested action 1: withdraw more than allowed
        let result = env.execute(
            OWNER,
            &vault,
            &ExecuteMsg::Withdraw { amounts: env.token_values(&[Uint128::new(5), Uint128::new(15)]) }
        );

        assert_eq!(
            contract_error(result),
            ContractError::AmountExceedsAvailable {
                token: env.tokens[0].to_string(),
                amount: Uint128::new(5),
                available: Uint128::new(3)
            }
        );
        assert_eq!(env.query_holdings(&vault), initial_amounts());



        // Tested action 2: withdraw exactly the allowance
        env.execute(
            OWNER,
            &vault,
            &ExecuteMsg::Withdraw { amounts: env.token_values(&[Uint128::new(3), Uint128::new(5)]) }
        ).unwrap();

        assert_eq!(
            env.query_holdings(&vault),
            vec![Uint128::new(100) * WAD - Uint128::new(3), Uint128::new(200) * WAD - Uint128::new(5)]
        );

    }


    #[test]
    fn test_withdraw_invalid_validator_response() {

        let mut env = TestEnv::initialize(2);
        let vault = env.deploy_initialized_vault(initial_amounts(), vec![percent(50), percent(50)]);

        mock_set_validator_allowances(
            &mut env.app,
            env.validator.clone(),
            Some(vec![Uint128::new(3)])
        );



        // Tested action: withdraw with a malformed validator allowance
        let result = env.execute(
            OWNER,
            &vault,
            &ExecuteMsg::Withdraw { amounts: env.token_values(&[Uint128::new(1), Uint128::new(1)]) }
        );



        assert_eq!(
            contract_error(result),
            ContractError::InvalidValidatorResponse { expected: 2, actual: 1 }
        );

    }


    #[test]
    fn test_withdraw_unauthorized() {

        let mut env = TestEnv::initialize(2);
        let vault = env.deploy_initialized_vault(initial_amounts(), vec![percent(50), percent(50)]);



        // Tested action: withdraw by a stranger
        let result = env.execute(
            STRANGER,
            &vault,
            &ExecuteMsg::Withdraw { amounts: env.token_values(&[Uint128::new(1), Uint128::new(1)]) }
        );



        assert_eq!(contract_error(result), ContractError::CallerIsNotOwner {});

    }

}
