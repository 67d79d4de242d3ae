use futures::stream;
use tokio::sync::{mpsc, oneshot};

use ethers_core::{
  types::{U256, H160, H256, Log},
  abi::Token,
};
use ethers_contract::{EthEvent, LogMeta};

use crate::{
  Error,
  vault::{WithdrawalNetwork, FeeVault, relay_withdrawals},
  abi::fee_vault::WithdrawalFilter,
};

fn meta() -> LogMeta {
  LogMeta {
    address: H160([0x42; 20]),
    block_number: 1.into(),
    block_hash: H256::repeat_byte(1),
    transaction_hash: H256::repeat_byte(2),
    transaction_index: 0.into(),
    log_index: 0.into(),
  }
}

fn withdrawal_filter(network: u8) -> WithdrawalFilter {
  WithdrawalFilter {
    value: U256::from(2_000_000_000u64),
    to: H160([1; 20]),
    from: H160([2; 20]),
    withdrawal_network: network,
  }
}

fn withdrawal_log(network: u8) -> Log {
  Log {
    address: H160([0x42; 20]),
    topics: vec![WithdrawalFilter::signature()],
    data: ethers_core::abi::encode(&[
      Token::Uint(U256::from(2_000_000_000u64)),
      Token::Address(H160([1; 20])),
      Token::Address(H160([2; 20])),
      Token::Uint(network.into()),
    ])
    .into(),
    block_hash: Some(H256::repeat_byte(1)),
    block_number: Some(1.into()),
    transaction_hash: Some(H256::repeat_byte(2)),
    transaction_index: Some(0.into()),
    log_index: Some(0.into()),
    ..Default::default()
  }
}

#[test]
fn withdrawal_network_discriminants() {
  assert_eq!(WithdrawalNetwork::try_from(0).unwrap(), WithdrawalNetwork::L1);
  assert_eq!(WithdrawalNetwork::try_from(1).unwrap(), WithdrawalNetwork::L2);
  for network in 2 ..= u8::MAX {
    assert!(matches!(
      WithdrawalNetwork::try_from(network),
      Err(Error::InvalidWithdrawalNetwork)
    ));
  }

  assert_eq!(u8::from(WithdrawalNetwork::L1), 0);
  assert_eq!(u8::from(WithdrawalNetwork::L2), 1);
}

#[test]
fn init_code_appends_constructor_arguments() {
  let recipient = [3; 20];
  let min = U256::from(10_000_000_000_000_000u64);
  let init_code = FeeVault::init_code(recipient, min, WithdrawalNetwork::L2);

  let code = FeeVault::code();
  assert_eq!(init_code.len(), code.len() + (3 * 32));
  assert_eq!(&init_code[.. code.len()], code.as_slice());

  let args = &init_code[code.len() ..];
  // address, left-padded to a word
  assert_eq!(&args[12 .. 32], recipient.as_slice());
  let mut min_word = [0; 32];
  min.to_big_endian(&mut min_word);
  assert_eq!(&args[32 .. 64], min_word.as_slice());
  assert_eq!(args[95], u8::from(WithdrawalNetwork::L2));
}

#[test]
fn parse_withdrawal() {
  let withdrawal = FeeVault::parse_withdrawal(withdrawal_log(0)).unwrap();
  assert_eq!(withdrawal.value, U256::from(2_000_000_000u64));
  assert_eq!(withdrawal.to, [1; 20]);
  assert_eq!(withdrawal.from, [2; 20]);
  assert_eq!(withdrawal.network, WithdrawalNetwork::L1);
  assert_eq!(withdrawal.meta, meta());
}

#[test]
fn parse_withdrawal_rejects_malformed_logs() {
  // An unrecognized network discriminant
  assert!(matches!(
    FeeVault::parse_withdrawal(withdrawal_log(2)),
    Err(Error::InvalidWithdrawalNetwork)
  ));

  // A log with a different topic
  let mut log = withdrawal_log(0);
  log.topics = vec![H256::zero()];
  assert!(matches!(FeeVault::parse_withdrawal(log), Err(Error::LogDecodeError)));

  // A log from a pending block
  let mut log = withdrawal_log(0);
  log.block_number = None;
  assert!(matches!(FeeVault::parse_withdrawal(log), Err(Error::LogDecodeError)));
}

#[tokio::test]
async fn relay_forwards_withdrawals_in_order() {
  let (sink, mut withdrawals) = mpsc::channel(8);
  let (_shutdown_tx, shutdown_rx) = oneshot::channel();

  let stream = stream::iter(vec![
    Ok::<_, ()>((withdrawal_filter(0), meta())),
    Ok((withdrawal_filter(1), meta())),
  ]);
  relay_withdrawals(stream, sink, shutdown_rx).await.unwrap();

  assert_eq!(withdrawals.recv().await.unwrap().network, WithdrawalNetwork::L1);
  assert_eq!(withdrawals.recv().await.unwrap().network, WithdrawalNetwork::L2);
  // The sink was dropped on exit
  assert!(withdrawals.recv().await.is_none());
}

#[tokio::test]
async fn relay_terminates_on_stream_error() {
  let (sink, _withdrawals) = mpsc::channel(8);
  let (_shutdown_tx, shutdown_rx) = oneshot::channel();

  let stream = stream::iter(vec![Err::<(WithdrawalFilter, LogMeta), ()>(())]);
  assert!(matches!(
    relay_withdrawals(stream, sink, shutdown_rx).await,
    Err(Error::ConnectionError)
  ));
}

#[tokio::test]
async fn relay_terminates_on_undecodable_withdrawal() {
  let (sink, _withdrawals) = mpsc::channel(8);
  let (_shutdown_tx, shutdown_rx) = oneshot::channel();

  let stream = stream::iter(vec![Ok::<_, ()>((withdrawal_filter(9), meta()))]);
  assert!(matches!(
    relay_withdrawals(stream, sink, shutdown_rx).await,
    Err(Error::InvalidWithdrawalNetwork)
  ));
}

#[tokio::test]
async fn relay_terminates_on_shutdown() {
  let (sink, _withdrawals) = mpsc::channel(8);

  // An explicitly fired shutdown handle
  let (shutdown_tx, shutdown_rx) = oneshot::channel();
  shutdown_tx.send(()).unwrap();
  let stream = stream::pending::<Result<(WithdrawalFilter, LogMeta), ()>>();
  relay_withdrawals(stream, sink.clone(), shutdown_rx).await.unwrap();

  // A dropped shutdown handle also cancels the relay
  let (_, shutdown_rx) = oneshot::channel::<()>();
  let stream = stream::pending::<Result<(WithdrawalFilter, LogMeta), ()>>();
  relay_withdrawals(stream, sink, shutdown_rx).await.unwrap();
}

#[tokio::test]
async fn relay_terminates_on_closed_sink() {
  let (sink, withdrawals) = mpsc::channel(1);
  drop(withdrawals);
  let (_shutdown_tx, shutdown_rx) = oneshot::channel();

  let stream = stream::iter(vec![Ok::<_, ()>((withdrawal_filter(0), meta()))]);
  relay_withdrawals(stream, sink, shutdown_rx).await.unwrap();
}
