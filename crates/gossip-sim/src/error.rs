use gossip_core::GossipError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Registration is only valid before the first `run`; fleet membership
    /// is fixed once the simulation has started.
    #[error("cannot register a driver after the simulation has started")]
    AlreadyStarted,

    #[error(transparent)]
    Core(#[from] GossipError),
}

pub type SimResult<T> = Result<T, SimError>;
