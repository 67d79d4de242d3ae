use std::sync::Arc;

use futures::{Stream, StreamExt, pin_mut};
use tokio::sync::{mpsc, oneshot};

use ethers_core::{
  types::{U256, H160, Log, Bytes, TransactionRequest},
  abi::{self as eth_abi, RawLog},
  utils::hex::FromHex,
};
use ethers_providers::{Middleware, Provider, Http};
use ethers_contract::{ContractCall, ContractFactory, EthLogDecode, LogMeta};

use crate::Error;
pub use crate::abi::fee_vault as abi;
use abi::{L1FEEVAULT_ABI, WithdrawalFilter};

/// Which network a vault's withdrawals are routed to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WithdrawalNetwork {
  L1,
  L2,
}

impl From<WithdrawalNetwork> for u8 {
  fn from(network: WithdrawalNetwork) -> u8 {
    match network {
      WithdrawalNetwork::L1 => 0,
      WithdrawalNetwork::L2 => 1,
    }
  }
}

impl TryFrom<u8> for WithdrawalNetwork {
  type Error = Error;
  fn try_from(network: u8) -> Result<WithdrawalNetwork, Error> {
    match network {
      0 => Ok(WithdrawalNetwork::L1),
      1 => Ok(WithdrawalNetwork::L2),
      _ => Err(Error::InvalidWithdrawalNetwork),
    }
  }
}

/// A withdrawal of accrued fees out of the vault, with the originating log's metadata.
#[derive(Clone, Debug)]
pub struct Withdrawal {
  pub value: U256,
  pub to: [u8; 20],
  pub from: [u8; 20],
  pub network: WithdrawalNetwork,
  pub meta: LogMeta,
}

impl Withdrawal {
  pub(crate) fn decode(event: WithdrawalFilter, meta: LogMeta) -> Result<Withdrawal, Error> {
    Ok(Withdrawal {
      value: event.value,
      to: event.to.0,
      from: event.from.0,
      network: WithdrawalNetwork::try_from(event.withdrawal_network)?,
      meta,
    })
  }
}

/// Relay decoded withdrawals from an event stream into the sink until the stream
/// ends/errors, the sink is closed, or the shutdown handle fires (or is dropped).
pub(crate) async fn relay_withdrawals<S, E>(
  stream: S,
  sink: mpsc::Sender<Withdrawal>,
  mut shutdown: oneshot::Receiver<()>,
) -> Result<(), Error>
where
  S: Stream<Item = Result<(WithdrawalFilter, LogMeta), E>>,
{
  pin_mut!(stream);
  loop {
    tokio::select! {
      _ = &mut shutdown => return Ok(()),
      item = stream.next() => match item {
        Some(Ok((event, meta))) => {
          let withdrawal = Withdrawal::decode(event, meta)?;
          if sink.send(withdrawal).await.is_err() {
            // The caller dropped their receiver, ending the watch
            return Ok(());
          }
        }
        Some(Err(_)) => {
          log::warn!("withdrawal event stream errored");
          return Err(Error::ConnectionError);
        }
        None => return Ok(()),
      },
    }
  }
}

/// A view for a deployed fee vault contract.
#[derive(Clone, Debug)]
pub struct FeeVault(Arc<Provider<Http>>, [u8; 20], abi::L1FeeVault<Provider<Http>>);
impl FeeVault {
  pub(crate) fn code() -> Vec<u8> {
    let bytecode = include_str!("../artifacts/L1FeeVault.bin");
    Bytes::from_hex(bytecode).expect("compiled-in L1FeeVault bytecode wasn't valid hex").to_vec()
  }

  /// The creation code for a vault with the specified configuration.
  pub fn init_code(
    recipient: [u8; 20],
    min_withdrawal_amount: U256,
    network: WithdrawalNetwork,
  ) -> Vec<u8> {
    let mut init_code = Self::code();
    // The constructor arguments are appended, ABI-encoded, after the bytecode
    init_code.extend(eth_abi::encode(&[
      eth_abi::Token::Address(H160(recipient)),
      eth_abi::Token::Uint(min_withdrawal_amount),
      eth_abi::Token::Uint(u8::from(network).into()),
    ]));
    init_code
  }

  /// Deploy a new fee vault with the specified configuration, returning its address.
  pub async fn deploy<M: Middleware>(
    client: Arc<M>,
    recipient: [u8; 20],
    min_withdrawal_amount: U256,
    network: WithdrawalNetwork,
  ) -> Result<[u8; 20], Error> {
    let factory = ContractFactory::new(L1FEEVAULT_ABI.clone(), Self::code().into(), client);
    let deployer = factory
      .deploy((H160(recipient), min_withdrawal_amount, u8::from(network)))
      .map_err(|_| Error::DeploymentError)?;
    let contract = deployer.send().await.map_err(|_| Error::DeploymentError)?;
    log::info!("deployed a fee vault to {:?}", contract.address());
    Ok(contract.address().0)
  }

  /// Construct a new view of the specified fee vault contract.
  ///
  /// This checks a contract is deployed at that address yet does not check the contract is
  /// actually a fee vault.
  pub async fn new(
    provider: Arc<Provider<Http>>,
    address: [u8; 20],
  ) -> Result<Option<Self>, Error> {
    let code = provider.get_code(H160(address), None).await.map_err(|_| Error::ConnectionError)?;
    // Contract has yet to be deployed
    if code.is_empty() {
      return Ok(None);
    }
    Ok(Some(Self(provider.clone(), address, abi::L1FeeVault::new(address, provider))))
  }

  /// Get the minimum balance which must accrue before a withdrawal can be triggered.
  pub async fn min_withdrawal_amount(&self) -> Result<U256, Error> {
    self.2.min_withdrawal_amount().call().await.map_err(|_| Error::ConnectionError)
  }

  /// Get the address the vault's withdrawals are sent to.
  pub async fn recipient(&self) -> Result<[u8; 20], Error> {
    self.2.recipient().call().await.map(|recipient| recipient.0).map_err(|_| Error::ConnectionError)
  }

  /// Get the network the vault's withdrawals are routed to.
  pub async fn withdrawal_network(&self) -> Result<WithdrawalNetwork, Error> {
    let network =
      self.2.withdrawal_network().call().await.map_err(|_| Error::ConnectionError)?;
    WithdrawalNetwork::try_from(network)
  }

  /// Get the total amount withdrawn from the vault over its lifetime.
  pub async fn total_processed(&self) -> Result<U256, Error> {
    self.2.total_processed().call().await.map_err(|_| Error::ConnectionError)
  }

  /// Get the vault's semantic version.
  pub async fn version(&self) -> Result<String, Error> {
    self.2.version().call().await.map_err(|_| Error::ConnectionError)
  }

  /// Trigger a withdrawal of the accrued fees to the recipient.
  pub fn withdraw(&self) -> ContractCall<Provider<Http>, ()> {
    // The L2 route sends a cross-domain message, which the L1 transfer doesn't
    self.2.withdraw().gas(400_000)
  }

  /// Prepare a transaction paying fees into the vault's receive function.
  pub fn fund(&self, value: U256) -> TransactionRequest {
    TransactionRequest::new().to(H160(self.1)).value(value)
  }

  /// Get the withdrawals which occurred within the specified blocks, inclusive.
  pub async fn withdrawals(
    &self,
    from_block: u64,
    to_block: u64,
  ) -> Result<Vec<Withdrawal>, Error> {
    let filter = self.2.withdrawal_filter().filter;
    let filter = filter.from_block(from_block).to_block(to_block);
    let logs = self.0.get_logs(&filter).await.map_err(|_| Error::ConnectionError)?;

    let mut withdrawals = vec![];
    for log in logs {
      // Double check the address which emitted this log
      if log.address.0 != self.1 {
        Err(Error::ConnectionError)?;
      }
      withdrawals.push(Self::parse_withdrawal(log)?);
    }
    Ok(withdrawals)
  }

  /// Watch for new withdrawals, relaying them into the sink as they occur.
  ///
  /// This returns once the upstream watch ends/errors, the sink is closed, or the
  /// shutdown handle fires (or is dropped). The installed filter is uninstalled on exit.
  pub async fn watch_withdrawals(
    &self,
    sink: mpsc::Sender<Withdrawal>,
    shutdown: oneshot::Receiver<()>,
  ) -> Result<(), Error> {
    let event = self.2.withdrawal_filter();
    let stream = event.stream_with_meta().await.map_err(|_| Error::ConnectionError)?;
    log::debug!("watching for withdrawals from {:?}", H160(self.1));
    relay_withdrawals(stream, sink, shutdown).await
  }

  /// Decode a raw log into a withdrawal.
  pub fn parse_withdrawal(log: Log) -> Result<Withdrawal, Error> {
    // LogMeta is only constructible for logs from canonical blocks
    if log.block_number.is_none() ||
      log.block_hash.is_none() ||
      log.transaction_hash.is_none() ||
      log.transaction_index.is_none() ||
      log.log_index.is_none()
    {
      Err(Error::LogDecodeError)?;
    }
    let meta = LogMeta::from(&log);
    let event =
      WithdrawalFilter::decode_log(&RawLog::from(log)).map_err(|_| Error::LogDecodeError)?;
    Withdrawal::decode(event, meta)
  }
}
