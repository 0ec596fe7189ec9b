//! The method registry.
//!
//! One table maps every supported wallet RPC method to its parameter shape
//! and its success-payload shape. From that table we generate:
//!
//! - [`Method`], the enumerable set of method names;
//! - [`Payload`], the sum of all success shapes;
//! - one zero-sized marker type per method implementing [`WalletMethod`],
//!   used for typed calls (`client.call::<GetBalance>(&params)`);
//! - the static [`MethodDescriptor`] table behind [`lookup`].
//!
//! Adding a method means adding one line to the table below plus its
//! param/result types in [`crate::methods`].

use serde::de::{self, DeserializeOwned, Unexpected};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::methods::*;

/// Static description of one RPC method.
pub struct MethodDescriptor {
    pub method: Method,
    /// Wire name, e.g. `get_balance`.
    pub name: &'static str,
    /// Rust name of the parameter shape.
    pub params_shape: &'static str,
    /// Rust name of the success-payload shape.
    pub result_shape: &'static str,
    /// Decode a `result` value into this method's payload.
    pub decode: fn(Value) -> Result<Payload, serde_json::Error>,
    /// Check that a params object fits this method's parameter shape.
    pub validate: fn(&Value) -> Result<(), serde_json::Error>,
}

impl std::fmt::Debug for MethodDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodDescriptor")
            .field("name", &self.name)
            .field("params_shape", &self.params_shape)
            .field("result_shape", &self.result_shape)
            .finish()
    }
}

/// A wallet RPC method known at compile time.
pub trait WalletMethod: Send + Sync + 'static {
    const METHOD: Method;
    type Params: Serialize + DeserializeOwned + Send + Sync;
    type Response: DeserializeOwned + Clone + Send + Sync + 'static;

    /// Wrap a decoded response in the [`Payload`] sum.
    fn wrap(response: Self::Response) -> Payload;

    /// Borrow this method's response out of a payload, if it is one.
    fn from_payload(payload: &Payload) -> Option<&Self::Response>;

    /// Take this method's response out of a payload, if it is one.
    fn into_response(payload: Payload) -> Option<Self::Response>;
}

/// Derived struct impls also accept a positional sequence, so `[7]` would
/// otherwise decode as `{"height": 7}`. Both sides of the wire are objects.
fn require_object(value: &Value) -> Result<(), serde_json::Error> {
    let unexpected = match value {
        Value::Object(_) => return Ok(()),
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
    };
    Err(de::Error::invalid_type(unexpected, &"a JSON object"))
}

fn decode_with<M: WalletMethod>(value: Value) -> Result<Payload, serde_json::Error> {
    require_object(&value)?;
    serde_json::from_value::<M::Response>(value).map(M::wrap)
}

fn validate_with<M: WalletMethod>(value: &Value) -> Result<(), serde_json::Error> {
    require_object(value)?;
    Deserialize::deserialize(value).map(|_: M::Params| ())
}

macro_rules! wallet_methods {
    ($( $variant:ident => $name:literal ($params:ty) -> $result:ty; )*) => {
        /// Every wallet RPC method this client supports.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Method {
            $( $variant, )*
        }

        impl Method {
            /// All methods, in registry order.
            pub const ALL: &'static [Method] = &[ $( Method::$variant, )* ];

            /// Parse a wire method name.
            pub fn parse_method(s: &str) -> Option<Self> {
                match s {
                    $( $name => Some(Method::$variant), )*
                    _ => None,
                }
            }

            /// The wire method name.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Method::$variant => $name, )*
                }
            }

            pub fn descriptor(&self) -> &'static MethodDescriptor {
                &REGISTRY[*self as usize]
            }
        }

        impl std::fmt::Display for Method {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        /// A decoded success payload, tagged with the method that produced it.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Payload {
            $( $variant($result), )*
        }

        impl Payload {
            pub fn method(&self) -> Method {
                match self {
                    $( Payload::$variant(_) => Method::$variant, )*
                }
            }

            /// Re-encode the payload as JSON.
            pub fn to_value(&self) -> Result<Value, serde_json::Error> {
                match self {
                    $( Payload::$variant(inner) => serde_json::to_value(inner), )*
                }
            }
        }

        $(
            #[doc = concat!("Marker for `", $name, "`.")]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $variant;

            impl WalletMethod for $variant {
                const METHOD: Method = Method::$variant;
                type Params = $params;
                type Response = $result;

                fn wrap(response: $result) -> Payload {
                    Payload::$variant(response)
                }

                #[allow(unreachable_patterns)]
                fn from_payload(payload: &Payload) -> Option<&$result> {
                    match payload {
                        Payload::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                #[allow(unreachable_patterns)]
                fn into_response(payload: Payload) -> Option<$result> {
                    match payload {
                        Payload::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*

        static REGISTRY: &[MethodDescriptor] = &[
            $(
                MethodDescriptor {
                    method: Method::$variant,
                    name: $name,
                    params_shape: stringify!($params),
                    result_shape: stringify!($result),
                    decode: decode_with::<$variant>,
                    validate: validate_with::<$variant>,
                },
            )*
        ];
    };
}

wallet_methods! {
    GetBalance => "get_balance" (GetBalanceParams) -> GetBalanceResult;
    GetAddress => "get_address" (GetAddressParams) -> GetAddressResult;
    GetAddressIndex => "get_address_index" (GetAddressIndexParams) -> GetAddressIndexResult;
    CreateAddress => "create_address" (CreateAddressParams) -> CreateAddressResult;
    LabelAddress => "label_address" (LabelAddressParams) -> EmptyResult;
    ValidateAddress => "validate_address" (ValidateAddressParams) -> ValidateAddressResult;
    GetAccounts => "get_accounts" (GetAccountsParams) -> GetAccountsResult;
    CreateAccount => "create_account" (CreateAccountParams) -> CreateAccountResult;
    LabelAccount => "label_account" (LabelAccountParams) -> EmptyResult;
    GetAccountTags => "get_account_tags" (EmptyParams) -> GetAccountTagsResult;
    TagAccounts => "tag_accounts" (TagAccountsParams) -> EmptyResult;
    UntagAccounts => "untag_accounts" (UntagAccountsParams) -> EmptyResult;
    SetAccountTagDescription => "set_account_tag_description" (SetAccountTagDescriptionParams) -> EmptyResult;
    GetHeight => "get_height" (EmptyParams) -> GetHeightResult;
    Transfer => "transfer" (TransferParams) -> TransferResult;
    TransferSplit => "transfer_split" (TransferSplitParams) -> MultiTransferResult;
    SignTransfer => "sign_transfer" (SignTransferParams) -> SignTransferResult;
    SubmitTransfer => "submit_transfer" (SubmitTransferParams) -> TxHashListResult;
    SweepDust => "sweep_dust" (SweepDustParams) -> MultiTransferResult;
    SweepAll => "sweep_all" (SweepAllParams) -> MultiTransferResult;
    SweepSingle => "sweep_single" (SweepSingleParams) -> TransferResult;
    RelayTx => "relay_tx" (RelayTxParams) -> TxHashResult;
    Store => "store" (EmptyParams) -> EmptyResult;
    GetPayments => "get_payments" (GetPaymentsParams) -> PaymentsResult;
    GetBulkPayments => "get_bulk_payments" (GetBulkPaymentsParams) -> PaymentsResult;
    IncomingTransfers => "incoming_transfers" (IncomingTransfersParams) -> IncomingTransfersResult;
    QueryKey => "query_key" (QueryKeyParams) -> QueryKeyResult;
    MakeIntegratedAddress => "make_integrated_address" (MakeIntegratedAddressParams) -> MakeIntegratedAddressResult;
    SplitIntegratedAddress => "split_integrated_address" (SplitIntegratedAddressParams) -> SplitIntegratedAddressResult;
    StopWallet => "stop_wallet" (EmptyParams) -> EmptyResult;
    RescanBlockchain => "rescan_blockchain" (RescanBlockchainParams) -> EmptyResult;
    SetTxNotes => "set_tx_notes" (SetTxNotesParams) -> EmptyResult;
    GetTxNotes => "get_tx_notes" (GetTxNotesParams) -> GetTxNotesResult;
    SetAttribute => "set_attribute" (SetAttributeParams) -> EmptyResult;
    GetAttribute => "get_attribute" (GetAttributeParams) -> GetAttributeResult;
    GetTxKey => "get_tx_key" (GetTxKeyParams) -> GetTxKeyResult;
    CheckTxKey => "check_tx_key" (CheckTxKeyParams) -> CheckTxKeyResult;
    GetTxProof => "get_tx_proof" (GetTxProofParams) -> SignatureResult;
    CheckTxProof => "check_tx_proof" (CheckTxProofParams) -> CheckTxProofResult;
    GetSpendProof => "get_spend_proof" (GetSpendProofParams) -> SignatureResult;
    CheckSpendProof => "check_spend_proof" (CheckSpendProofParams) -> GoodResult;
    GetReserveProof => "get_reserve_proof" (GetReserveProofParams) -> SignatureResult;
    CheckReserveProof => "check_reserve_proof" (CheckReserveProofParams) -> CheckReserveProofResult;
    GetTransfers => "get_transfers" (GetTransfersParams) -> GetTransfersResult;
    GetTransferByTxid => "get_transfer_by_txid" (GetTransferByTxidParams) -> GetTransferByTxidResult;
    DescribeTransfer => "describe_transfer" (DescribeTransferParams) -> DescribeTransferResult;
    Sign => "sign" (SignParams) -> SignatureResult;
    Verify => "verify" (VerifyParams) -> GoodResult;
    ExportOutputs => "export_outputs" (ExportParams) -> ExportOutputsResult;
    ImportOutputs => "import_outputs" (ImportOutputsParams) -> ImportOutputsResult;
    ExportKeyImages => "export_key_images" (ExportParams) -> ExportKeyImagesResult;
    ImportKeyImages => "import_key_images" (ImportKeyImagesParams) -> ImportKeyImagesResult;
    MakeUri => "make_uri" (MakeUriParams) -> UriResult;
    ParseUri => "parse_uri" (ParseUriParams) -> ParseUriResult;
    GetAddressBook => "get_address_book" (GetAddressBookParams) -> GetAddressBookResult;
    AddAddressBook => "add_address_book" (AddAddressBookParams) -> AddAddressBookResult;
    EditAddressBook => "edit_address_book" (EditAddressBookParams) -> EmptyResult;
    DeleteAddressBook => "delete_address_book" (DeleteAddressBookParams) -> EmptyResult;
    Refresh => "refresh" (RefreshParams) -> RefreshResult;
    AutoRefresh => "auto_refresh" (AutoRefreshParams) -> EmptyResult;
    RescanSpent => "rescan_spent" (EmptyParams) -> EmptyResult;
    StartMining => "start_mining" (StartMiningParams) -> EmptyResult;
    StopMining => "stop_mining" (EmptyParams) -> EmptyResult;
    GetLanguages => "get_languages" (EmptyParams) -> GetLanguagesResult;
    CreateWallet => "create_wallet" (CreateWalletParams) -> EmptyResult;
    GenerateFromKeys => "generate_from_keys" (GenerateFromKeysParams) -> WalletInfoResult;
    OpenWallet => "open_wallet" (OpenWalletParams) -> EmptyResult;
    RestoreDeterministicWallet => "restore_deterministic_wallet" (RestoreDeterministicWalletParams) -> RestoreDeterministicWalletResult;
    CloseWallet => "close_wallet" (EmptyParams) -> EmptyResult;
    ChangeWalletPassword => "change_wallet_password" (ChangeWalletPasswordParams) -> EmptyResult;
    IsMultisig => "is_multisig" (EmptyParams) -> IsMultisigResult;
    PrepareMultisig => "prepare_multisig" (EmptyParams) -> MultisigInfoResult;
    MakeMultisig => "make_multisig" (MakeMultisigParams) -> MakeMultisigResult;
    ExportMultisigInfo => "export_multisig_info" (EmptyParams) -> ExportMultisigInfoResult;
    ImportMultisigInfo => "import_multisig_info" (ImportMultisigInfoParams) -> ImportMultisigInfoResult;
    FinalizeMultisig => "finalize_multisig" (FinalizeMultisigParams) -> AddressResult;
    SignMultisig => "sign_multisig" (TxDataHexParams) -> SignMultisigResult;
    SubmitMultisig => "submit_multisig" (TxDataHexParams) -> TxHashListResult;
    GetVersion => "get_version" (EmptyParams) -> GetVersionResult;
}

/// Find the descriptor for a wire method name.
pub fn lookup(name: &str) -> Option<&'static MethodDescriptor> {
    Method::parse_method(name).map(|m| m.descriptor())
}

/// All descriptors, in registry order.
pub fn descriptors() -> &'static [MethodDescriptor] {
    REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn registry_matches_method_order() {
        assert_eq!(descriptors().len(), Method::ALL.len());
        for (i, method) in Method::ALL.iter().enumerate() {
            assert_eq!(descriptors()[i].method, *method);
            assert_eq!(method.descriptor().name, method.as_str());
        }
    }

    #[test]
    fn method_roundtrip() {
        for method in Method::ALL {
            let s = method.as_str();
            assert_eq!(
                Method::parse_method(s),
                Some(*method),
                "roundtrip failed for {:?}",
                method
            );
        }
        assert_eq!(Method::parse_method("unknown"), None);
        assert_eq!(Method::parse_method("GET_BALANCE"), None);
    }

    #[test]
    fn wire_names_are_unique() {
        let names: HashSet<&str> = Method::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(names.len(), Method::ALL.len());
    }

    #[test]
    fn lookup_finds_registered_names() {
        let d = lookup("get_balance").unwrap();
        assert_eq!(d.method, Method::GetBalance);
        assert_eq!(d.result_shape, "GetBalanceResult");
        assert!(lookup("get_ballance").is_none());
    }

    #[test]
    fn sweeps_use_their_own_names() {
        assert_eq!(Method::SweepAll.as_str(), "sweep_all");
        assert_eq!(Method::SweepSingle.as_str(), "sweep_single");
    }

    #[test]
    fn positional_results_are_rejected() {
        let height = Method::GetHeight.descriptor();
        let err = (height.decode)(json!([7])).unwrap_err();
        assert!(err.to_string().contains("a JSON object"), "{err}");
        assert!((Method::Store.descriptor().decode)(json!([])).is_err());
        assert!((Method::GetBalance.descriptor().decode)(json!([500, 500])).is_err());
        assert!((height.decode)(json!(7)).is_err());
    }

    #[test]
    fn positional_params_are_rejected() {
        let index = Method::GetAddressIndex.descriptor();
        assert!((index.validate)(&json!(["44AFF"])).is_err());
        assert!((index.validate)(&json!({"address": "44AFF"})).is_ok());
        assert!((Method::GetHeight.descriptor().validate)(&json!([])).is_err());
        assert!((Method::GetHeight.descriptor().validate)(&json!("x")).is_err());
    }

    #[test]
    fn descriptor_decodes_into_tagged_payload() {
        let payload = (Method::GetHeight.descriptor().decode)(json!({"height": 12})).unwrap();
        assert_eq!(payload.method(), Method::GetHeight);
        assert_eq!(
            GetHeight::from_payload(&payload),
            Some(&GetHeightResult { height: 12 })
        );
        assert!(GetBalance::from_payload(&payload).is_none());
    }

    #[test]
    fn descriptor_rejects_wrong_shape() {
        let decoded = (Method::GetHeight.descriptor().decode)(json!({"height": "tall"}));
        assert!(decoded.is_err());
    }

    #[test]
    fn validator_checks_params_shape() {
        let validate = Method::GetAddressIndex.descriptor().validate;
        assert!(validate(&json!({"address": "44AFFq5k"})).is_ok());
        assert!(validate(&json!({})).is_err());
        assert!(validate(&json!({"address": 5})).is_err());
    }

    #[test]
    fn no_param_methods_accept_empty_object() {
        for name in ["get_height", "store", "get_version", "is_multisig"] {
            let d = lookup(name).unwrap();
            assert!((d.validate)(&json!({})).is_ok(), "{name}");
        }
    }

    #[test]
    fn payload_reencodes() {
        let payload = Payload::GetBalance(GetBalanceResult {
            balance: 5,
            unlocked_balance: 4,
            multisig_import_needed: false,
            per_subaddress: vec![],
            blocks_to_unlock: 0,
            time_to_unlock: 0,
        });
        let value = payload.to_value().unwrap();
        assert_eq!(value["balance"], json!(5));
        assert_eq!(value["unlocked_balance"], json!(4));
    }
}
