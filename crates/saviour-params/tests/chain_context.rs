//! Integration tests for network selection and the unit test mutators

use saviour_params::{ChainContext, ChainParams, CostQuery, NetworkId};
use std::sync::Arc;
use std::thread;

#[test]
fn test_selection_activates_requested_network() {
    for network in NetworkId::ALL {
        let ctx = ChainContext::select(network).unwrap();
        assert_eq!(ctx.active_network(), network);
        assert_eq!(ctx.active_params().network, network);
    }
}

#[test]
fn test_params_for_ignores_active_network() {
    let ctx = ChainContext::select(NetworkId::Regtest).unwrap();
    assert_eq!(ctx.params_for(NetworkId::Main).default_port, 31313);
    assert_eq!(ctx.params_for(NetworkId::Testnet).default_port, 31113);
    assert_eq!(ctx.params_for(NetworkId::Regtest).default_port, 21105);
    assert_eq!(ctx.params_for(NetworkId::UnitTest).default_port, 31107);
}

#[test]
fn test_unknown_network_fails_selection() {
    let result = "bitcoin".parse::<NetworkId>().and_then(ChainContext::select);
    assert!(result.is_err());
}

#[test]
fn test_production_cost_scenario() {
    let ctx = ChainContext::select(NetworkId::Main).unwrap();
    let params = ctx.active_params();

    assert_eq!(params.masternode_cost(50_000, CostQuery::Current), Some(5_000));
    assert_eq!(params.masternode_cost(48_961, CostQuery::Current), Some(1_000));
    assert_eq!(params.masternode_cost(100_000, CostQuery::Current), Some(25_000));

    let window = params.masternode_cost.grace_window();
    let expected = if 48_970 - window < 48_961 { Some(1_000) } else { None };
    assert_eq!(params.masternode_cost(48_970, CostQuery::Previous), expected);
}

#[test]
fn test_mutator_changes_only_one_field() {
    let mut ctx = ChainContext::select(NetworkId::UnitTest).unwrap();
    let before = ctx.active_params().clone();
    let others: Vec<ChainParams> = [NetworkId::Main, NetworkId::Testnet, NetworkId::Regtest]
        .into_iter()
        .map(|network| ctx.params_for(network).clone())
        .collect();

    ctx.modifiable_params().set_subsidy_halving_interval(150);

    let after = ctx.active_params().clone();
    assert_eq!(after.subsidy_halving_interval, 150);
    assert_eq!(
        ChainParams {
            subsidy_halving_interval: before.subsidy_halving_interval,
            ..after
        },
        before
    );

    for (network, original) in [NetworkId::Main, NetworkId::Testnet, NetworkId::Regtest]
        .into_iter()
        .zip(others)
    {
        assert_eq!(ctx.params_for(network), &original);
    }
}

#[test]
fn test_flag_mutators() {
    let mut ctx = ChainContext::select(NetworkId::UnitTest).unwrap();
    ctx.modifiable_params()
        .set_default_consistency_checks(false)
        .set_allow_min_difficulty_blocks(true)
        .set_skip_proof_of_work_check(false);

    let params = ctx.active_params();
    assert!(!params.default_consistency_checks);
    assert!(params.allow_min_difficulty_blocks);
    assert!(!params.skip_proof_of_work_check);
    assert!(ctx.params_for(NetworkId::Main).skip_proof_of_work_check);
}

#[test]
fn test_concurrent_readers() {
    let ctx = Arc::new(ChainContext::select(NetworkId::Main).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let ctx = Arc::clone(&ctx);
            thread::spawn(move || {
                let height = 48_000 + i * 1_000;
                ctx.active_params().masternode_cost(height, CostQuery::Current)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let cost = handle.join().unwrap();
        let expected = if 48_000 + i as i64 * 1_000 > 48_961 { 5_000 } else { 1_000 };
        assert_eq!(cost, Some(expected));
    }
}

#[test]
fn test_params_serialize_to_json() {
    let ctx = ChainContext::select(NetworkId::Testnet).unwrap();
    let json = serde_json::to_value(ctx.active_params()).unwrap();
    assert_eq!(json["network"], "testnet");
    assert_eq!(json["default_port"], 31113);
    assert_eq!(json["masternode_cost"]["steps"][1]["cost"], 100);
}
