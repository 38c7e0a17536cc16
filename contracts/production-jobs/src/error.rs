use thiserror::Error;

use cosmwasm_std::StdError;

#[derive(Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Only the admin can post jobs")]
    NotAuthorized,

    #[error("No job exists under this ID")]
    JobNotFound,

    #[error("Job is not open for claiming anymore")]
    JobAlreadyClaimed,

    #[error("Job has not been claimed or is no longer in progress")]
    JobNotClaimed,

    #[error("Job is assigned to a different manufacturer")]
    JobNotYours,

    /// Reserved for an allow-list of manufacturer addresses. Never returned.
    #[error("Caller is not a registered manufacturer")]
    NotManufacturer,

    /// Reserved. Completing a finished job is reported as `JobNotClaimed`.
    #[error("Job has already been completed")]
    JobAlreadyCompleted,
}
