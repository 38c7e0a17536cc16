use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// The only address allowed to post new jobs. Fixed at instantiation.
    pub admin: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");

#[cw_serde]
pub enum JobStatus {
    /// Posted and open for any manufacturer to claim
    Pending,
    /// Claimed by a manufacturer, work in progress
    Claimed,
    /// Finished at or before the deadline height
    Completed,
    /// Finished after the deadline height
    Late,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Claimed => "claimed",
            JobStatus::Completed => "completed",
            JobStatus::Late => "late",
        }
    }
}

#[cw_serde]
pub struct Job {
    /// Address that posted the job. Always the admin.
    pub creator: Addr,
    /// Free-form description of the work. Not interpreted by the contract.
    pub description: String,
    /// Number of blocks after `created_at` within which the job can be
    /// completed on time.
    pub deadline: u64,
    /// Penalty amount associated with late delivery. Carried for clients,
    /// not enforced by the contract.
    pub penalty: Uint128,
    /// The manufacturer working on this job. Unset exactly while pending.
    pub assigned_to: Option<Addr>,
    pub status: JobStatus,
    /// Block height at which the job was posted.
    pub created_at: u64,
    /// Block height at which the job was claimed.
    pub claimed_at: Option<u64>,
    /// Block height at which the job was completed, on time or late.
    pub completed_at: Option<u64>,
}

impl Job {
    /// The last block height at which this job can still be completed on time.
    pub fn deadline_height(&self) -> u64 {
        self.created_at + self.deadline
    }
}

/// All jobs by primary ID.
pub const JOBS: Map<u64, Job> = Map::new("jobs");

/// The ID used for the next posted job. Starts at 0 and moves forward on
/// every successful creation. IDs are never reused, even for jobs that will
/// never be claimed.
pub const NEXT_JOB_ID: Item<u64> = Item::new("next_job_id");
