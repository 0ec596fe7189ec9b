//! Parameter and success-payload shapes for each wallet RPC method.
//!
//! These are plain data. Which shape belongs to which method is declared in
//! [`crate::registry`]. Fields the wallet may omit carry `#[serde(default)]`
//! so that older and newer wallet versions decode alike; `Option` parameters
//! are left out of the request when `None`.

use serde::{Deserialize, Serialize};

use crate::types::{
    AccountTag, AddressBookEntry, Destination, IncomingTransfer, KeyType, Payment,
    SignedKeyImage, SubaddressAccount, SubaddressBalance, SubaddressIndex, SubaddressInfo,
    TransferDescription, TransferEntry, TransferType, UriSpec,
};

/// Parameters of methods that take none. Sent as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyParams {}

/// Success payload of methods that return an empty object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyResult {}

/// `{"signature": ...}` payload shared by the proof and `sign` methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureResult {
    /// Signature string as returned by the wallet.
    pub signature: String,
}

/// `{"good": ...}` payload shared by the verification methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodResult {
    /// Whether the check passed.
    pub good: bool,
}

// ---- balances and addresses ----

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBalanceParams {
    /// Account to operate on.
    #[serde(default)]
    pub account_index: u32,
    /// Subaddresses to report.
    #[serde(default)]
    pub address_indices: Vec<u32>,
}

impl Default for GetBalanceParams {
    /// Account 0, primary address only.
    fn default() -> Self {
        Self {
            account_index: 0,
            address_indices: vec![0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBalanceResult {
    /// Total balance, atomic units.
    pub balance: u64,
    /// Spendable balance, atomic units.
    pub unlocked_balance: u64,
    /// Whether multisig info must be imported first.
    #[serde(default)]
    pub multisig_import_needed: bool,
    /// Balance of each subaddress that has one.
    #[serde(default)]
    pub per_subaddress: Vec<SubaddressBalance>,
    /// Blocks until the balance unlocks.
    #[serde(default)]
    pub blocks_to_unlock: u64,
    /// Seconds until the balance unlocks.
    #[serde(default)]
    pub time_to_unlock: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAddressParams {
    /// Account to operate on.
    #[serde(default)]
    pub account_index: u32,
    /// Subaddresses to return. All when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_index: Option<Vec<u32>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAddressResult {
    /// Primary address of the account.
    pub address: String,
    /// Subaddresses of the account.
    #[serde(default)]
    pub addresses: Vec<SubaddressInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAddressIndexParams {
    /// Standard, integrated or subaddress.
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAddressIndexResult {
    /// Account and subaddress of the address.
    pub index: SubaddressIndex,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAddressParams {
    /// Account to operate on.
    pub account_index: u32,
    /// Label for the new subaddress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAddressResult {
    /// The new subaddress.
    pub address: String,
    /// Subaddress index.
    pub address_index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelAddressParams {
    /// Subaddress to label.
    pub index: SubaddressIndex,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateAddressParams {
    /// Standard, integrated or subaddress.
    pub address: String,
    /// Accept addresses of any network.
    #[serde(default)]
    pub any_net_type: bool,
    /// Resolve OpenAlias names.
    #[serde(default)]
    pub allow_openalias: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateAddressResult {
    /// Whether the address parsed.
    pub valid: bool,
    /// Whether the address is integrated.
    #[serde(default)]
    pub integrated: bool,
    /// Whether the address is a subaddress.
    #[serde(default)]
    pub subaddress: bool,
    /// Network the address belongs to.
    #[serde(default)]
    pub nettype: String,
    /// Address resolved from an OpenAlias name.
    #[serde(default)]
    pub openalias_address: String,
}

// ---- accounts and tags ----

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAccountsParams {
    /// Only accounts carrying this tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAccountsResult {
    /// One entry per account.
    #[serde(default)]
    pub subaddress_accounts: Vec<SubaddressAccount>,
    /// Balance across all accounts.
    pub total_balance: u64,
    /// Spendable balance across all accounts.
    pub total_unlocked_balance: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccountParams {
    /// Label for the new account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccountResult {
    /// Account to operate on.
    pub account_index: u32,
    /// Primary address of the new account.
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelAccountParams {
    /// Account to operate on.
    pub account_index: u32,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAccountTagsResult {
    /// Every tag with its accounts.
    #[serde(default)]
    pub account_tags: Vec<AccountTag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagAccountsParams {
    pub tag: String,
    /// Account indices.
    pub accounts: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UntagAccountsParams {
    /// Account indices.
    pub accounts: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetAccountTagDescriptionParams {
    pub tag: String,
    /// Free-form description.
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetHeightResult {
    /// Blockchain height.
    pub height: u64,
}

// ---- transfers ----

/// Parameters of `transfer`.
///
/// [`TransferParams::new`] fills in the defaults the wallet CLI uses:
/// account 0, default priority, ring size 7 with mixin 0, and the
/// transaction key requested back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferParams {
    /// Recipients and amounts.
    pub destinations: Vec<Destination>,
    /// Account to operate on.
    #[serde(default)]
    pub account_index: u32,
    /// Restrict to these subaddresses of the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subaddr_indices: Option<Vec<u32>>,
    /// Fee priority, 0 (default) to 3.
    #[serde(default)]
    pub priority: u32,
    /// Number of decoys per input.
    #[serde(default)]
    pub mixin: u32,
    /// Ring size, including the real input.
    #[serde(default)]
    pub ring_size: u32,
    /// Blocks or timestamp before the outputs can be spent.
    #[serde(default)]
    pub unlock_time: u64,
    /// Return the transaction secret key.
    #[serde(default)]
    pub get_tx_key: bool,
    /// Build but do not broadcast.
    #[serde(default)]
    pub do_not_relay: bool,
    /// Return the raw transaction as hex.
    #[serde(default)]
    pub get_tx_hex: bool,
    /// Return the transaction metadata needed by `relay_tx`.
    #[serde(default)]
    pub get_tx_metadata: bool,
}

impl TransferParams {
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self {
            destinations,
            account_index: 0,
            subaddr_indices: None,
            priority: 0,
            mixin: 0,
            ring_size: 7,
            unlock_time: 0,
            get_tx_key: true,
            do_not_relay: false,
            get_tx_hex: false,
            get_tx_metadata: false,
        }
    }
}

/// Success payload of `transfer` and `sweep_single`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferResult {
    /// Amount sent, atomic units.
    pub amount: u64,
    /// Fee paid, atomic units.
    pub fee: u64,
    /// Transaction hash.
    pub tx_hash: String,
    /// Transaction secret key.
    #[serde(default)]
    pub tx_key: String,
    /// Raw transaction, hex.
    #[serde(default)]
    pub tx_blob: String,
    /// Transaction metadata for `relay_tx`.
    #[serde(default)]
    pub tx_metadata: String,
    /// Multisig transaction set, hex.
    #[serde(default)]
    pub multisig_txset: String,
    /// Set when the wallet cannot sign (view-only); feed to `sign_transfer`.
    #[serde(default)]
    pub unsigned_txset: String,
    /// Transaction weight in bytes.
    #[serde(default)]
    pub weight: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferSplitParams {
    /// Recipients and amounts.
    pub destinations: Vec<Destination>,
    /// Account to operate on.
    #[serde(default)]
    pub account_index: u32,
    /// Restrict to these subaddresses of the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subaddr_indices: Option<Vec<u32>>,
    /// Fee priority, 0 (default) to 3.
    #[serde(default)]
    pub priority: u32,
    /// Number of decoys per input.
    #[serde(default)]
    pub mixin: u32,
    /// Ring size, including the real input.
    #[serde(default)]
    pub ring_size: u32,
    /// Blocks or timestamp before the outputs can be spent.
    #[serde(default)]
    pub unlock_time: u64,
    /// Return the secret key of each transaction.
    #[serde(default)]
    pub get_tx_keys: bool,
    /// Build but do not broadcast.
    #[serde(default)]
    pub do_not_relay: bool,
    /// Return the raw transaction as hex.
    #[serde(default)]
    pub get_tx_hex: bool,
    /// Use the newer splitting algorithm.
    #[serde(default)]
    pub new_algorithm: bool,
    /// Return the transaction metadata needed by `relay_tx`.
    #[serde(default)]
    pub get_tx_metadata: bool,
}

impl TransferSplitParams {
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self {
            destinations,
            account_index: 0,
            subaddr_indices: None,
            priority: 0,
            mixin: 0,
            ring_size: 7,
            unlock_time: 0,
            get_tx_keys: true,
            do_not_relay: false,
            get_tx_hex: false,
            new_algorithm: false,
            get_tx_metadata: false,
        }
    }
}

/// Success payload of every method that may produce several transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiTransferResult {
    /// Hashes of the transactions, one per transaction.
    #[serde(default)]
    pub tx_hash_list: Vec<String>,
    /// Secret key of each transaction.
    #[serde(default)]
    pub tx_key_list: Vec<String>,
    /// Amount of each transaction.
    #[serde(default)]
    pub amount_list: Vec<u64>,
    /// Fee of each transaction.
    #[serde(default)]
    pub fee_list: Vec<u64>,
    /// Weight of each transaction.
    #[serde(default)]
    pub weight_list: Vec<u64>,
    /// Raw transaction of each transaction, hex.
    #[serde(default)]
    pub tx_blob_list: Vec<String>,
    /// Metadata of each transaction.
    #[serde(default)]
    pub tx_metadata_list: Vec<String>,
    /// Multisig transaction set, hex.
    #[serde(default)]
    pub multisig_txset: String,
    /// Unsigned transaction set, hex.
    #[serde(default)]
    pub unsigned_txset: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignTransferParams {
    /// Unsigned transaction set, hex.
    pub unsigned_txset: String,
    /// Also return the raw signed transactions.
    #[serde(default)]
    pub export_raw: bool,
}

impl SignTransferParams {
    pub fn new(unsigned_txset: impl Into<String>) -> Self {
        Self {
            unsigned_txset: unsigned_txset.into(),
            export_raw: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignTransferResult {
    /// Signed transaction set, hex.
    pub signed_txset: String,
    /// Hashes of the transactions, one per transaction.
    #[serde(default)]
    pub tx_hash_list: Vec<String>,
    /// Raw transactions, hex.
    #[serde(default)]
    pub tx_raw_list: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitTransferParams {
    /// Transaction data, hex.
    pub tx_data_hex: String,
}

impl SubmitTransferParams {
    pub fn new(tx_data_hex: impl Into<String>) -> Self {
        Self {
            tx_data_hex: tx_data_hex.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxHashListResult {
    /// Hashes of the transactions, one per transaction.
    pub tx_hash_list: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepDustParams {
    /// Return the secret key of each transaction.
    #[serde(default)]
    pub get_tx_keys: bool,
    /// Build but do not broadcast.
    #[serde(default)]
    pub do_not_relay: bool,
    /// Return the raw transaction as hex.
    #[serde(default)]
    pub get_tx_hex: bool,
    /// Return the transaction metadata needed by `relay_tx`.
    #[serde(default)]
    pub get_tx_metadata: bool,
}

impl Default for SweepDustParams {
    fn default() -> Self {
        Self {
            get_tx_keys: true,
            do_not_relay: false,
            get_tx_hex: false,
            get_tx_metadata: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepAllParams {
    /// Standard, integrated or subaddress.
    pub address: String,
    /// Account to operate on.
    #[serde(default)]
    pub account_index: u32,
    /// Restrict to these subaddresses of the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subaddr_indices: Option<Vec<u32>>,
    /// Fee priority, 0 (default) to 3.
    #[serde(default)]
    pub priority: u32,
    /// Number of decoys per input.
    #[serde(default)]
    pub mixin: u32,
    /// Ring size, including the real input.
    #[serde(default)]
    pub ring_size: u32,
    /// Blocks or timestamp before the outputs can be spent.
    #[serde(default)]
    pub unlock_time: u64,
    /// Return the secret key of each transaction.
    #[serde(default)]
    pub get_tx_keys: bool,
    /// Only sweep outputs below this amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub below_amount: Option<u64>,
    /// Build but do not broadcast.
    #[serde(default)]
    pub do_not_relay: bool,
    /// Return the raw transaction as hex.
    #[serde(default)]
    pub get_tx_hex: bool,
    /// Return the transaction metadata needed by `relay_tx`.
    #[serde(default)]
    pub get_tx_metadata: bool,
}

impl SweepAllParams {
    pub fn new(address: impl Into<String>, account_index: u32) -> Self {
        Self {
            address: address.into(),
            account_index,
            subaddr_indices: Some(vec![0]),
            priority: 0,
            mixin: 0,
            ring_size: 7,
            unlock_time: 0,
            get_tx_keys: true,
            below_amount: None,
            do_not_relay: false,
            get_tx_hex: false,
            get_tx_metadata: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepSingleParams {
    /// Standard, integrated or subaddress.
    pub address: String,
    /// Key image of the output to sweep.
    pub key_image: String,
    /// Fee priority, 0 (default) to 3.
    #[serde(default)]
    pub priority: u32,
    /// Ring size, including the real input.
    #[serde(default)]
    pub ring_size: u32,
    /// Blocks or timestamp before the outputs can be spent.
    #[serde(default)]
    pub unlock_time: u64,
    /// Return the transaction secret key.
    #[serde(default)]
    pub get_tx_key: bool,
    /// Build but do not broadcast.
    #[serde(default)]
    pub do_not_relay: bool,
    /// Return the raw transaction as hex.
    #[serde(default)]
    pub get_tx_hex: bool,
    /// Return the transaction metadata needed by `relay_tx`.
    #[serde(default)]
    pub get_tx_metadata: bool,
}

impl SweepSingleParams {
    pub fn new(address: impl Into<String>, key_image: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            key_image: key_image.into(),
            priority: 0,
            ring_size: 7,
            unlock_time: 0,
            get_tx_key: true,
            do_not_relay: false,
            get_tx_hex: false,
            get_tx_metadata: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayTxParams {
    /// Transaction metadata from a `do_not_relay` transfer.
    pub hex: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxHashResult {
    /// Transaction hash.
    pub tx_hash: String,
}

// ---- payments ----

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPaymentsParams {
    /// Payment id, hex.
    pub payment_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBulkPaymentsParams {
    /// Payment ids, hex.
    pub payment_ids: Vec<String>,
    /// Skip payments below this height.
    #[serde(default)]
    pub min_block_height: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentsResult {
    /// Matching incoming payments.
    #[serde(default)]
    pub payments: Vec<Payment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingTransfersParams {
    /// Which outputs to list.
    pub transfer_type: TransferType,
    /// Account to operate on.
    #[serde(default)]
    pub account_index: u32,
    /// Restrict to these subaddresses of the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subaddr_indices: Option<Vec<u32>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingTransfersResult {
    /// Outputs received by the wallet.
    #[serde(default)]
    pub transfers: Vec<IncomingTransfer>,
}

// ---- keys and integrated addresses ----

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryKeyParams {
    /// Which key to return.
    pub key_type: KeyType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryKeyResult {
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeIntegratedAddressParams {
    /// Address to integrate. The wallet's own when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_address: Option<String>,
    /// Payment id, hex. Random when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeIntegratedAddressResult {
    /// Integrated address.
    pub integrated_address: String,
    /// Payment id, hex.
    pub payment_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitIntegratedAddressParams {
    /// Integrated address.
    pub integrated_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitIntegratedAddressResult {
    /// Whether the address is a subaddress.
    #[serde(default)]
    pub is_subaddress: bool,
    /// Payment id, hex.
    pub payment_id: String,
    /// Standard address.
    pub standard_address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RescanBlockchainParams {
    /// Also forget spent-output state.
    #[serde(default)]
    pub hard: bool,
}

// ---- notes and attributes ----

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetTxNotesParams {
    /// Transaction ids, hex.
    pub txids: Vec<String>,
    /// Notes, one per txid.
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTxNotesParams {
    /// Transaction ids, hex.
    pub txids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTxNotesResult {
    /// Notes, one per txid.
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetAttributeParams {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAttributeParams {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAttributeResult {
    pub value: String,
}

// ---- proofs ----

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTxKeyParams {
    /// Transaction id, hex.
    pub txid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTxKeyResult {
    /// Transaction secret key.
    pub tx_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckTxKeyParams {
    /// Transaction id, hex.
    pub txid: String,
    /// Transaction secret key.
    pub tx_key: String,
    /// Standard, integrated or subaddress.
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckTxKeyResult {
    /// Blocks mined on top of the transaction.
    pub confirmations: u64,
    /// Whether the transaction is still in the pool.
    pub in_pool: bool,
    /// Amount received, atomic units.
    pub received: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTxProofParams {
    /// Transaction id, hex.
    pub txid: String,
    /// Standard, integrated or subaddress.
    pub address: String,
    /// Extra message bound into the proof.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckTxProofParams {
    /// Transaction id, hex.
    pub txid: String,
    /// Standard, integrated or subaddress.
    pub address: String,
    /// Signature string as returned by the wallet.
    pub signature: String,
    /// Extra message bound into the proof.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckTxProofResult {
    /// Whether the check passed.
    pub good: bool,
    /// Blocks mined on top of the transaction.
    #[serde(default)]
    pub confirmations: u64,
    /// Whether the transaction is still in the pool.
    #[serde(default)]
    pub in_pool: bool,
    /// Amount received, atomic units.
    #[serde(default)]
    pub received: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSpendProofParams {
    /// Transaction id, hex.
    pub txid: String,
    /// Extra message bound into the proof.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSpendProofParams {
    /// Transaction id, hex.
    pub txid: String,
    /// Signature string as returned by the wallet.
    pub signature: String,
    /// Extra message bound into the proof.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetReserveProofParams {
    /// Use the whole balance.
    pub all: bool,
    /// Account to operate on.
    #[serde(default)]
    pub account_index: u32,
    /// Amount to prove when `all` is false.
    #[serde(default)]
    pub amount: u64,
    /// Extra message bound into the proof.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReserveProofParams {
    /// Standard, integrated or subaddress.
    pub address: String,
    /// Signature string as returned by the wallet.
    pub signature: String,
    /// Extra message bound into the proof.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReserveProofResult {
    /// Whether the check passed.
    pub good: bool,
    /// Amount spent, atomic units.
    #[serde(default)]
    pub spent: u64,
    /// Total amount proven, atomic units.
    #[serde(default)]
    pub total: u64,
}

// ---- history ----

/// Parameters of `get_transfers`. Every category defaults to off, as on the
/// wire; [`GetTransfersParams::all`] asks for everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransfersParams {
    /// Include incoming transfers.
    #[serde(default, rename = "in")]
    pub incoming: bool,
    /// Include outgoing transfers.
    #[serde(default)]
    pub out: bool,
    /// Include pending transfers.
    #[serde(default)]
    pub pending: bool,
    /// Include failed transfers.
    #[serde(default)]
    pub failed: bool,
    /// Include transfers in the pool.
    #[serde(default)]
    pub pool: bool,
    /// Apply `min_height` and `max_height`.
    #[serde(default)]
    pub filter_by_height: bool,
    /// Lowest block height to include.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<u64>,
    /// Highest block height to include.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height: Option<u64>,
    /// Account to operate on.
    #[serde(default)]
    pub account_index: u32,
    /// Restrict to these subaddresses of the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subaddr_indices: Option<Vec<u32>>,
}

impl GetTransfersParams {
    pub fn all() -> Self {
        Self {
            incoming: true,
            out: true,
            pending: true,
            failed: true,
            pool: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransfersResult {
    /// Confirmed incoming transfers.
    #[serde(default, rename = "in")]
    pub incoming: Vec<TransferEntry>,
    /// Confirmed outgoing transfers.
    #[serde(default)]
    pub out: Vec<TransferEntry>,
    /// Outgoing transfers not yet mined.
    #[serde(default)]
    pub pending: Vec<TransferEntry>,
    /// Transfers that failed.
    #[serde(default)]
    pub failed: Vec<TransferEntry>,
    /// Incoming transfers in the pool.
    #[serde(default)]
    pub pool: Vec<TransferEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransferByTxidParams {
    /// Transaction id, hex.
    pub txid: String,
    /// Account to search. All when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_index: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransferByTxidResult {
    /// The transfer with the requested txid.
    pub transfer: TransferEntry,
    /// Every transfer of the txid, one per subaddress.
    #[serde(default)]
    pub transfers: Vec<TransferEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescribeTransferParams {
    /// Unsigned transaction set, hex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsigned_txset: Option<String>,
    /// Multisig transaction set, hex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multisig_txset: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescribeTransferResult {
    /// One description per transaction in the set.
    #[serde(default)]
    pub desc: Vec<TransferDescription>,
}

// ---- message signing ----

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignParams {
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyParams {
    pub data: String,
    /// Standard, integrated or subaddress.
    pub address: String,
    /// Signature string as returned by the wallet.
    pub signature: String,
}

// ---- outputs and key images ----

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportParams {
    /// Export everything, not only what changed since the last export.
    #[serde(default)]
    pub all: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOutputsResult {
    /// Exported outputs, hex.
    pub outputs_data_hex: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOutputsParams {
    /// Exported outputs, hex.
    pub outputs_data_hex: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOutputsResult {
    /// Number of outputs imported.
    pub num_imported: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportKeyImagesResult {
    /// Index of the first exported key image.
    #[serde(default)]
    pub offset: u64,
    /// Key images with their signatures.
    #[serde(default)]
    pub signed_key_images: Vec<SignedKeyImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportKeyImagesParams {
    /// Skip this many key images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    /// Key images with their signatures.
    pub signed_key_images: Vec<SignedKeyImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportKeyImagesResult {
    /// Height of the last imported key image.
    pub height: u64,
    /// Amount spent, atomic units.
    pub spent: u64,
    /// Amount not yet spent, atomic units.
    pub unspent: u64,
}

// ---- URIs and address book ----

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeUriParams {
    /// Standard, integrated or subaddress.
    pub address: String,
    /// Amount in atomic units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    /// Payment id, hex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    /// Name of the payee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
    /// Description shown to the payer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UriResult {
    /// `monero:` payment URI.
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseUriParams {
    /// `monero:` payment URI.
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseUriResult {
    /// `monero:` payment URI.
    pub uri: UriSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAddressBookParams {
    /// Indices to return. All when empty.
    #[serde(default)]
    pub entries: Vec<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAddressBookResult {
    /// Address book entries.
    #[serde(default)]
    pub entries: Vec<AddressBookEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAddressBookParams {
    /// Standard, integrated or subaddress.
    pub address: String,
    /// Payment id, hex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAddressBookResult {
    /// Index of the new entry.
    pub index: u32,
}

/// Each `set_*` flag says whether the matching field is replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditAddressBookParams {
    /// Index of the entry.
    pub index: u32,
    /// Replace the address.
    #[serde(default)]
    pub set_address: bool,
    /// New address, if `set_address`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Replace the description.
    #[serde(default)]
    pub set_description: bool,
    /// New description, if `set_description`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replace the payment id.
    #[serde(default)]
    pub set_payment_id: bool,
    /// New payment id, if `set_payment_id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAddressBookParams {
    /// Index of the entry.
    pub index: u32,
}

// ---- refresh and mining ----

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshParams {
    /// Block height to start refreshing from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_height: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshResult {
    /// Blocks scanned by this refresh.
    pub blocks_fetched: u64,
    /// Whether any output was found.
    pub received_money: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoRefreshParams {
    /// Turn background refresh on or off.
    #[serde(default)]
    pub enable: bool,
    /// Refresh period in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<u64>,
}

impl Default for AutoRefreshParams {
    fn default() -> Self {
        Self {
            enable: true,
            period: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartMiningParams {
    /// Mining threads.
    pub threads_count: u32,
    /// Mine only when the machine is idle.
    #[serde(default)]
    pub do_background_mining: bool,
    /// Mine even on battery power.
    #[serde(default)]
    pub ignore_battery: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetLanguagesResult {
    /// Seed languages in English.
    pub languages: Vec<String>,
    /// Seed languages in their own names.
    #[serde(default)]
    pub languages_local: Vec<String>,
}

// ---- wallet files ----

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWalletParams {
    /// Wallet file name inside the wallet directory.
    pub filename: String,
    /// Wallet password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Seed language.
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateFromKeysParams {
    /// Wallet file name inside the wallet directory.
    pub filename: String,
    /// Primary address of the wallet to restore.
    pub address: String,
    /// Private view key, hex.
    pub viewkey: String,
    /// Private spend key, hex. Omit for a view-only wallet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spendkey: Option<String>,
    /// Wallet password.
    pub password: String,
    /// Block height to start scanning from.
    #[serde(default)]
    pub restore_height: u64,
    /// Save the currently open wallet before switching.
    #[serde(default = "default_true")]
    pub autosave_current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletInfoResult {
    /// Primary address of the wallet.
    pub address: String,
    /// Status message from the wallet.
    #[serde(default)]
    pub info: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenWalletParams {
    /// Wallet file name inside the wallet directory.
    pub filename: String,
    /// Wallet password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreDeterministicWalletParams {
    /// Wallet file name inside the wallet directory.
    pub filename: String,
    /// Wallet password.
    pub password: String,
    /// Mnemonic seed words.
    pub seed: String,
    /// Block height to start scanning from.
    #[serde(default)]
    pub restore_height: u64,
    /// Seed language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Passphrase applied to the seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_offset: Option<String>,
    /// Save the currently open wallet before switching.
    #[serde(default = "default_true")]
    pub autosave_current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreDeterministicWalletResult {
    /// Primary address of the wallet.
    pub address: String,
    /// Status message from the wallet.
    #[serde(default)]
    pub info: String,
    /// Mnemonic seed words.
    #[serde(default)]
    pub seed: String,
    /// Whether the seed used a deprecated language.
    #[serde(default)]
    pub was_deprecated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeWalletPasswordParams {
    /// Current password.
    #[serde(default)]
    pub old_password: String,
    /// Password to set.
    #[serde(default)]
    pub new_password: String,
}

fn default_true() -> bool {
    true
}

// ---- multisig ----

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsMultisigResult {
    /// Whether the wallet is multisig.
    pub multisig: bool,
    /// Whether the wallet is ready to sign.
    #[serde(default)]
    pub ready: bool,
    /// Signatures required to spend.
    #[serde(default)]
    pub threshold: u32,
    /// Number of participants.
    #[serde(default)]
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultisigInfoResult {
    /// Multisig info strings.
    pub multisig_info: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeMultisigParams {
    /// Multisig info strings.
    pub multisig_info: Vec<String>,
    /// Signatures required to spend.
    pub threshold: u32,
    /// Wallet password.
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeMultisigResult {
    /// Multisig address.
    #[serde(default)]
    pub address: String,
    /// Multisig info strings.
    #[serde(default)]
    pub multisig_info: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportMultisigInfoResult {
    /// Multisig info to share with the other participants, hex.
    pub info: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportMultisigInfoParams {
    /// Multisig info from the other participants.
    pub info: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportMultisigInfoResult {
    /// Number of outputs signed with the new info.
    pub n_outputs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizeMultisigParams {
    /// Multisig info strings.
    pub multisig_info: Vec<String>,
    /// Wallet password.
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressResult {
    /// Multisig address.
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxDataHexParams {
    /// Transaction data, hex.
    pub tx_data_hex: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignMultisigResult {
    /// Transaction data, hex.
    pub tx_data_hex: String,
    /// Hashes of the transactions, one per transaction.
    #[serde(default)]
    pub tx_hash_list: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetVersionResult {
    /// RPC version, major in the upper 16 bits.
    pub version: u32,
    /// Whether this is a release build.
    #[serde(default)]
    pub release: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_balance_defaults_to_primary_address() {
        let value = serde_json::to_value(GetBalanceParams::default()).unwrap();
        assert_eq!(value, json!({"account_index": 0, "address_indices": [0]}));
    }

    #[test]
    fn transfer_params_keep_zero_and_false() {
        let params = TransferParams::new(vec![Destination::new("A", 100)]);
        let value = serde_json::to_value(&params).unwrap();

        assert_eq!(value["account_index"], json!(0));
        assert_eq!(value["priority"], json!(0));
        assert_eq!(value["do_not_relay"], json!(false));
        assert_eq!(value["ring_size"], json!(7));
        assert_eq!(value["get_tx_key"], json!(true));
        assert!(value.get("subaddr_indices").is_none());
    }

    #[test]
    fn get_transfers_uses_in_on_the_wire() {
        let value = serde_json::to_value(GetTransfersParams::all()).unwrap();
        assert_eq!(value["in"], json!(true));
        assert!(value.get("incoming").is_none());
    }

    #[test]
    fn empty_params_serialize_as_object() {
        assert_eq!(serde_json::to_value(EmptyParams {}).unwrap(), json!({}));
    }

    #[test]
    fn restore_wallet_defaults_autosave() {
        let params: RestoreDeterministicWalletParams = serde_json::from_value(json!({
            "filename": "w",
            "password": "",
            "seed": "abbey abbey"
        }))
        .unwrap();
        assert!(params.autosave_current);
        assert_eq!(params.restore_height, 0);
    }
}
