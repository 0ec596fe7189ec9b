//! Wire types shared by several wallet RPC methods.
//!
//! Amounts are always atomic units (piconero) as `u64`.

use serde::{Deserialize, Serialize};

/// Account (`major`) and subaddress (`minor`) index pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubaddressIndex {
    pub major: u32,
    pub minor: u32,
}

impl SubaddressIndex {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

/// A transfer recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub address: String,
    /// Amount in atomic units.
    pub amount: u64,
}

impl Destination {
    pub fn new(address: impl Into<String>, amount: u64) -> Self {
        Self {
            address: address.into(),
            amount,
        }
    }
}

/// Filter for `incoming_transfers`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferType {
    #[default]
    All,
    Available,
    Unavailable,
}

/// Key selector for `query_key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyType {
    Mnemonic,
    ViewKey,
    SpendKey,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubaddressBalance {
    #[serde(default)]
    pub account_index: u32,
    pub address_index: u32,
    pub address: String,
    pub balance: u64,
    pub unlocked_balance: u64,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub num_unspent_outputs: u64,
    #[serde(default)]
    pub blocks_to_unlock: u64,
    #[serde(default)]
    pub time_to_unlock: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubaddressInfo {
    pub address: String,
    #[serde(default)]
    pub label: String,
    pub address_index: u32,
    #[serde(default)]
    pub used: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubaddressAccount {
    pub account_index: u32,
    pub balance: u64,
    pub base_address: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub tag: String,
    pub unlocked_balance: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTag {
    pub tag: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub accounts: Vec<u32>,
}

/// A payment received with a payment id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: String,
    pub tx_hash: String,
    pub amount: u64,
    pub block_height: u64,
    #[serde(default)]
    pub unlock_time: u64,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub subaddr_index: SubaddressIndex,
    #[serde(default)]
    pub address: String,
}

/// An output owned by the wallet, as listed by `incoming_transfers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingTransfer {
    pub amount: u64,
    #[serde(default)]
    pub block_height: u64,
    #[serde(default)]
    pub frozen: bool,
    pub global_index: u64,
    #[serde(default)]
    pub key_image: String,
    #[serde(default)]
    pub pubkey: String,
    pub spent: bool,
    pub subaddr_index: SubaddressIndex,
    pub tx_hash: String,
    #[serde(default)]
    pub unlocked: bool,
}

/// One entry of the wallet's transfer history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferEntry {
    pub txid: String,
    #[serde(default)]
    pub address: String,
    pub amount: u64,
    #[serde(default)]
    pub amounts: Vec<u64>,
    #[serde(default)]
    pub confirmations: u64,
    #[serde(default)]
    pub destinations: Vec<Destination>,
    #[serde(default)]
    pub double_spend_seen: bool,
    #[serde(default)]
    pub fee: u64,
    #[serde(default)]
    pub height: u64,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub payment_id: String,
    #[serde(default)]
    pub subaddr_index: SubaddressIndex,
    #[serde(default)]
    pub subaddr_indices: Vec<SubaddressIndex>,
    #[serde(default)]
    pub suggested_confirmations_threshold: u64,
    #[serde(default)]
    pub timestamp: u64,
    /// `in`, `out`, `pending`, `failed`, `pool` or `block`.
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub unlock_time: u64,
}

/// Human-readable summary of an unsigned or multisig transaction set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferDescription {
    #[serde(default)]
    pub amount_in: u64,
    #[serde(default)]
    pub amount_out: u64,
    #[serde(default)]
    pub recipients: Vec<Destination>,
    #[serde(default)]
    pub change_address: String,
    #[serde(default)]
    pub change_amount: u64,
    #[serde(default)]
    pub fee: u64,
    #[serde(default)]
    pub payment_id: String,
    #[serde(default)]
    pub ring_size: u32,
    #[serde(default)]
    pub unlock_time: u64,
    #[serde(default)]
    pub dummy_outputs: u32,
    #[serde(default)]
    pub extra: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedKeyImage {
    pub key_image: String,
    pub signature: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBookEntry {
    pub address: String,
    #[serde(default)]
    pub description: String,
    pub index: u32,
    #[serde(default)]
    pub payment_id: String,
}

/// Components of a `monero:` payment URI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UriSpec {
    pub address: String,
    #[serde(default)]
    pub amount: u64,
    #[serde(default)]
    pub payment_id: String,
    #[serde(default)]
    pub recipient_name: String,
    #[serde(default)]
    pub tx_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn transfer_type_wire_names() {
        assert_eq!(serde_json::to_value(TransferType::All).unwrap(), json!("all"));
        assert_eq!(
            serde_json::to_value(TransferType::Unavailable).unwrap(),
            json!("unavailable")
        );
    }

    #[test]
    fn key_type_wire_names() {
        assert_eq!(serde_json::to_value(KeyType::ViewKey).unwrap(), json!("view_key"));
        assert_eq!(
            serde_json::from_value::<KeyType>(json!("mnemonic")).unwrap(),
            KeyType::Mnemonic
        );
    }

    #[test]
    fn transfer_entry_reads_type_field() {
        let entry: TransferEntry = serde_json::from_value(json!({
            "txid": "ab12",
            "amount": 1000,
            "type": "in",
            "subaddr_index": {"major": 0, "minor": 3}
        }))
        .unwrap();
        assert_eq!(entry.kind, "in");
        assert_eq!(entry.subaddr_index, SubaddressIndex::new(0, 3));
        assert!(entry.destinations.is_empty());
    }
}
