//! Wire types for the mocked explorer endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transaction kinds the explorer reports. The canned data only ever
/// contains transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxType {
    #[serde(rename = "TRANSFER")]
    Transfer,
}

/// One transaction as the explorer returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct APITransaction {
    pub tx_hash: String,
    pub block_height: u64,
    pub tx_type: TxType,
    pub time_stamp: i64, // epoch milliseconds
    pub tx_fee: Decimal,
    pub tx_age: i64,
    pub code: i32, // 0 = success
    pub log: String,
    pub confirm_blocks: u64,
    pub memo: String,
    pub source: u32,
    pub sequence: u64,
    pub has_children: u8, // 0 or 1
    pub sub_txs_dto: APISubTxs,
}

/// Page of transfer legs nested under a multi-asset transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct APISubTxs {
    pub total_num: u32,
    pub page_size: u32,
    pub sub_tx_dto_list: Vec<APISubTx>,
}

/// One transfer leg of a multi-asset transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct APISubTx {
    pub hash: String,
    pub height: u64,
    #[serde(rename = "type")]
    pub tx_type: TxType,
    pub value: Decimal,
    pub asset: String,
    pub from_addr: String,
    pub to_addr: String,
    /// The explorer reports no fee on non-native asset legs.
    pub fee: Option<Decimal>,
}

/// What a lookup endpoint answers: the full record for a known key, `{}`
/// for everything else. Both are served with a 200, like the real
/// explorer does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TxLookupResponse {
    Found(Box<APITransaction>),
    Empty {},
}
