use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use crate::state::{Config, Job};

#[cw_serde]
pub struct InstantiateMsg {
    /// Address allowed to post jobs. Defaults to the sender when unset.
    pub admin: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Post a new job. Only the admin can do this.
    CreateJob {
        description: String,
        /// Number of blocks after creation within which the job must be
        /// completed to count as on time.
        deadline: u64,
        /// Penalty amount for late delivery. Informational only.
        penalty: Uint128,
    },
    /// Claim a pending job. The sender becomes the assignee.
    ClaimJob { job_id: u64 },
    /// Complete a job previously claimed by the sender. Depending on the
    /// current block height the job ends up completed or late.
    CompleteJob { job_id: u64 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    /// Checks whether the given address is the job-posting admin
    #[returns(bool)]
    IsAdmin { address: String },
    /// Gets a single job. Returns null for unknown IDs.
    #[returns(Option<Job>)]
    Job { job_id: u64 },
    /// Gets jobs in ascending ID order (old to new)
    #[returns(JobsResponse)]
    JobsAsc {
        /// If set, only jobs with an ID greater than this value are returned
        start_after: Option<u64>,
        /// The max number of entries returned. If you set this too high, your query runs out of gas.
        /// When unset, an implementation defined default will be used.
        limit: Option<u32>,
    },
    /// Gets jobs in descending ID order (new to old)
    #[returns(JobsResponse)]
    JobsDesc {
        /// If set, only jobs with an ID lower than this value are returned
        start_after: Option<u64>,
        /// The max number of entries returned. If you set this too high, your query runs out of gas.
        /// When unset, an implementation defined default will be used.
        limit: Option<u32>,
    },
}

pub type ConfigResponse = Config;

#[cw_serde]
pub struct JobsResponse {
    pub jobs: Vec<(u64, Job)>,
}
