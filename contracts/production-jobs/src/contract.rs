use cosmwasm_std::{
    ensure_eq, entry_point, to_json_binary, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Order,
    Response, StdResult, Uint128,
};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, JobsResponse, QueryMsg};
use crate::state::{Config, Job, JobStatus, CONFIG, JOBS, NEXT_JOB_ID};

const CONTRACT_NAME: &str = "crates.io:production-jobs";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = match msg.admin {
        Some(admin) => deps.api.addr_validate(&admin)?,
        None => info.sender,
    };
    let config = Config {
        admin: admin.clone(),
    };
    CONFIG.save(deps.storage, &config)?;
    NEXT_JOB_ID.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin))
}

// This no-op migrate implementation allows us to upgrade within the 0.1 series.
// No state changes expected.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: Empty) -> StdResult<Response> {
    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateJob {
            description,
            deadline,
            penalty,
        } => execute_create_job(deps, env, info, description, deadline, penalty),
        ExecuteMsg::ClaimJob { job_id } => execute_claim_job(deps, env, info, job_id),
        ExecuteMsg::CompleteJob { job_id } => execute_complete_job(deps, env, info, job_id),
    }
}

fn execute_create_job(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    description: String,
    deadline: u64,
    penalty: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_eq!(info.sender, config.admin, ContractError::NotAuthorized);

    // The ID moves forward on successful creations only, so rejected calls
    // do not leave holes in the sequence.
    let job_id = NEXT_JOB_ID.load(deps.storage)?;
    NEXT_JOB_ID.save(deps.storage, &(job_id + 1))?;

    let job = Job {
        creator: info.sender,
        description,
        deadline,
        penalty,
        assigned_to: None,
        status: JobStatus::Pending,
        created_at: env.block.height,
        claimed_at: None,
        completed_at: None,
    };
    JOBS.save(deps.storage, job_id, &job)?;

    Ok(Response::new()
        .add_attribute("action", "create_job")
        .add_attribute("job_id", job_id.to_string())
        .add_attribute("deadline_height", job.deadline_height().to_string()))
}

fn execute_claim_job(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    job_id: u64,
) -> Result<Response, ContractError> {
    let mut job = JOBS
        .may_load(deps.storage, job_id)?
        .ok_or(ContractError::JobNotFound)?;
    // Finished jobs are not claimable either, reported with the same error
    if job.status != JobStatus::Pending {
        return Err(ContractError::JobAlreadyClaimed);
    }

    job.status = JobStatus::Claimed;
    job.claimed_at = Some(env.block.height);
    job.assigned_to = Some(info.sender.clone());
    JOBS.save(deps.storage, job_id, &job)?;

    Ok(Response::new()
        .add_attribute("action", "claim_job")
        .add_attribute("job_id", job_id.to_string())
        .add_attribute("assigned_to", info.sender))
}

fn execute_complete_job(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    job_id: u64,
) -> Result<Response, ContractError> {
    let mut job = JOBS
        .may_load(deps.storage, job_id)?
        .ok_or(ContractError::JobNotFound)?;
    if job.status != JobStatus::Claimed {
        return Err(ContractError::JobNotClaimed);
    }
    // assigned_to is set whenever the status is claimed
    if job.assigned_to.as_ref() != Some(&info.sender) {
        return Err(ContractError::JobNotYours);
    }

    // Completing exactly at the deadline height is on time
    job.status = if env.block.height > job.deadline_height() {
        JobStatus::Late
    } else {
        JobStatus::Completed
    };
    job.completed_at = Some(env.block.height);
    JOBS.save(deps.storage, job_id, &job)?;

    Ok(Response::new()
        .add_attribute("action", "complete_job")
        .add_attribute("job_id", job_id.to_string())
        .add_attribute("status", job.status.as_str()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    let response = match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?)?,
        QueryMsg::IsAdmin { address } => to_json_binary(&query_is_admin(deps, address)?)?,
        QueryMsg::Job { job_id } => to_json_binary(&query_job(deps, job_id)?)?,
        QueryMsg::JobsAsc { start_after, limit } => {
            to_json_binary(&query_jobs(deps, start_after, limit, Order::Ascending)?)?
        }
        QueryMsg::JobsDesc { start_after, limit } => {
            to_json_binary(&query_jobs(deps, start_after, limit, Order::Descending)?)?
        }
    };
    Ok(response)
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config)
}

fn query_is_admin(deps: Deps, address: String) -> StdResult<bool> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config.admin.as_str() == address)
}

fn query_job(deps: Deps, job_id: u64) -> StdResult<Option<Job>> {
    let job = JOBS.may_load(deps.storage, job_id)?;
    Ok(job)
}

fn query_jobs(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
    order: Order,
) -> StdResult<JobsResponse> {
    let limit: usize = limit.unwrap_or(100) as usize;
    let (low_bound, top_bound) = match order {
        Order::Ascending => (start_after.map(Bound::exclusive), None),
        Order::Descending => (None, start_after.map(Bound::exclusive)),
    };

    let jobs: Vec<(u64, Job)> = JOBS
        .range(deps.storage, low_bound, top_bound, order)
        .take(limit)
        .collect::<StdResult<_>>()?;
    Ok(JobsResponse { jobs })
}
