use thiserror::Error;

pub(crate) mod abi;
pub mod vault;

#[cfg(test)]
mod tests;

#[derive(Error, Debug)]
pub enum Error {
  #[error("couldn't make call/send TX")]
  ConnectionError,
  #[error("couldn't deploy the fee vault")]
  DeploymentError,
  #[error("couldn't decode a log as a Withdrawal")]
  LogDecodeError,
  #[error("unrecognized withdrawal network discriminant")]
  InvalidWithdrawalNetwork,
}
