use thiserror::Error;

pub mod todo;

#[cfg(test)]
pub mod test_util;

/// Failure reported by a driven port (an adapter the domain calls out to)
#[derive(Error, Debug)]
pub enum DrivenPortError {
    #[error("a communication failure occurred: {0}")]
    CommsFailure(#[from] anyhow::Error),
    #[error("the requested data does not exist")]
    DoesNotExist,
}
