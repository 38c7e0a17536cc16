use cosmwasm_std::{Addr, Uint128};
use cw_multi_test::{App, ContractWrapper, Executor};

use production_jobs::error::ContractError;
use production_jobs::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use production_jobs::state::{Job, JobStatus};

fn store_and_instantiate(app: &mut App, admin: &Addr) -> Addr {
    let code = ContractWrapper::new(
        production_jobs::contract::execute,
        production_jobs::contract::instantiate,
        production_jobs::contract::query,
    );
    let code_id = app.store_code(Box::new(code));
    app.instantiate_contract(
        code_id,
        admin.clone(),
        &InstantiateMsg {
            admin: Some(admin.to_string()),
        },
        &[],
        "production-jobs",
        None,
    )
    .unwrap()
}

fn query_job(app: &App, contract: &Addr, job_id: u64) -> Option<Job> {
    app.wrap()
        .query_wasm_smart(contract.clone(), &QueryMsg::Job { job_id })
        .unwrap()
}

#[test]
fn full_job_lifecycle() {
    let mut app = App::default();
    let admin = app.api().addr_make("admin");
    let maker = app.api().addr_make("manufacturer");
    let contract = store_and_instantiate(&mut app, &admin);

    let created_at = app.block_info().height;

    app.execute_contract(
        admin.clone(),
        contract.clone(),
        &ExecuteMsg::CreateJob {
            description: "Make widget".to_string(),
            deadline: 5,
            penalty: Uint128::new(100),
        },
        &[],
    )
    .unwrap();

    let job = query_job(&app, &contract, 0).unwrap();
    assert_eq!(job.status, JobStatus::Pending);
    assert_eq!(job.created_at, created_at);

    app.execute_contract(
        maker.clone(),
        contract.clone(),
        &ExecuteMsg::ClaimJob { job_id: 0 },
        &[],
    )
    .unwrap();

    // The chain moves on while the manufacturer works
    app.update_block(|block| block.height += 2);

    app.execute_contract(
        maker.clone(),
        contract.clone(),
        &ExecuteMsg::CompleteJob { job_id: 0 },
        &[],
    )
    .unwrap();

    let job = query_job(&app, &contract, 0).unwrap();
    assert_eq!(job.status, JobStatus::Completed);
    assert_eq!(job.assigned_to, Some(maker));
    assert_eq!(job.claimed_at, Some(created_at));
    assert_eq!(job.completed_at, Some(created_at + 2));
}

#[test]
fn late_completion_is_flagged() {
    let mut app = App::default();
    let admin = app.api().addr_make("admin");
    let maker = app.api().addr_make("manufacturer");
    let contract = store_and_instantiate(&mut app, &admin);

    app.execute_contract(
        admin.clone(),
        contract.clone(),
        &ExecuteMsg::CreateJob {
            description: "Late delivery".to_string(),
            deadline: 2,
            penalty: Uint128::new(80),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        maker.clone(),
        contract.clone(),
        &ExecuteMsg::ClaimJob { job_id: 0 },
        &[],
    )
    .unwrap();

    // One block past the deadline
    app.update_block(|block| block.height += 3);

    app.execute_contract(
        maker.clone(),
        contract.clone(),
        &ExecuteMsg::CompleteJob { job_id: 0 },
        &[],
    )
    .unwrap();

    let job = query_job(&app, &contract, 0).unwrap();
    assert_eq!(job.status, JobStatus::Late);
}

#[test]
fn strangers_cannot_post_or_finish_jobs() {
    let mut app = App::default();
    let admin = app.api().addr_make("admin");
    let maker = app.api().addr_make("manufacturer");
    let stranger = app.api().addr_make("stranger");
    let contract = store_and_instantiate(&mut app, &admin);

    let err: ContractError = app
        .execute_contract(
            stranger.clone(),
            contract.clone(),
            &ExecuteMsg::CreateJob {
                description: "Illegal job".to_string(),
                deadline: 5,
                penalty: Uint128::new(100),
            },
            &[],
        )
        .unwrap_err()
        .downcast()
        .unwrap();
    assert_eq!(err, ContractError::NotAuthorized);

    app.execute_contract(
        admin.clone(),
        contract.clone(),
        &ExecuteMsg::CreateJob {
            description: "Make widget".to_string(),
            deadline: 5,
            penalty: Uint128::new(100),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        maker.clone(),
        contract.clone(),
        &ExecuteMsg::ClaimJob { job_id: 0 },
        &[],
    )
    .unwrap();

    let err: ContractError = app
        .execute_contract(
            stranger.clone(),
            contract.clone(),
            &ExecuteMsg::CompleteJob { job_id: 0 },
            &[],
        )
        .unwrap_err()
        .downcast()
        .unwrap();
    assert_eq!(err, ContractError::JobNotYours);

    // The claim is still in place
    let job = query_job(&app, &contract, 0).unwrap();
    assert_eq!(job.status, JobStatus::Claimed);
    assert_eq!(job.assigned_to, Some(maker));
}
