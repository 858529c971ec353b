//! Binance chain block-explorer mock, transaction lookup.
//!
//! Serves one multi-transfer transaction for a single known hash and an
//! empty object for every other query, mirroring what the real explorer
//! returns for unknown hashes.

use axum::{extract::Query, routing::get, Json, Router};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::model::{APISubTx, APISubTxs, APITransaction, TxLookupResponse, TxType};

/// Path template this fixture answers for.
pub const TX_PATH: &str = "/binance-explorer-api/v1/tx";

/// The only transaction hash the fixture recognizes (case-sensitive).
pub const KNOWN_TX_HASH: &str =
    "F53BB470A3B6B83977CFFE5D5F9937FB1CBB8785FBE818D9B38AD43F3ECD82BC";

/// Query parameters of the lookup endpoint. Anything besides `txHash` is
/// ignored.
#[derive(Debug, Default, Deserialize)]
pub struct TxQuery {
    #[serde(rename = "txHash")]
    pub tx_hash: Option<String>,
}

static KNOWN_TX: Lazy<APITransaction> = Lazy::new(|| APITransaction {
    tx_hash: KNOWN_TX_HASH.to_string(),
    block_height: 63280715,
    tx_type: TxType::Transfer,
    time_stamp: 1579688431580,
    tx_fee: Decimal::new(60, 5),
    tx_age: 2350509,
    code: 0,
    log: "Msg 0: ".to_string(),
    confirm_blocks: 5818526,
    memo: "Trust Wallet Redeem".to_string(),
    source: 0,
    sequence: 175,
    has_children: 1,
    sub_txs_dto: APISubTxs {
        total_num: 2,
        page_size: 15,
        sub_tx_dto_list: vec![
            APISubTx {
                hash: KNOWN_TX_HASH.to_string(),
                height: 63280715,
                tx_type: TxType::Transfer,
                value: Decimal::new(375, 5),
                asset: "BNB".to_string(),
                from_addr: "bnb1rhv98jcx2yu26shxedskttjzpkvsrz4nd226yv".to_string(),
                to_addr: "bnb1563k58pc3keeuwkhlrxwz7sdsetyn9l7gdnznp".to_string(),
                fee: Some(Decimal::new(60, 5)),
            },
            APISubTx {
                hash: KNOWN_TX_HASH.to_string(),
                height: 63280715,
                tx_type: TxType::Transfer,
                value: Decimal::new(100, 1),
                asset: "BUSD-BD1".to_string(),
                from_addr: "bnb1rhv98jcx2yu26shxedskttjzpkvsrz4nd226yv".to_string(),
                to_addr: "bnb1563k58pc3keeuwkhlrxwz7sdsetyn9l7gdnznp".to_string(),
                fee: None,
            },
        ],
    },
});

/// Pure lookup behind the endpoint: an exact match on the known hash
/// returns the canned record, anything else (including a missing
/// parameter) the empty object.
pub fn lookup(query: &TxQuery) -> TxLookupResponse {
    match query.tx_hash.as_deref() {
        Some(KNOWN_TX_HASH) => TxLookupResponse::Found(Box::new(KNOWN_TX.clone())),
        _ => TxLookupResponse::Empty {},
    }
}

async fn get_tx(Query(query): Query<TxQuery>) -> Json<TxLookupResponse> {
    let response = lookup(&query);
    debug!(
        "tx lookup for {:?}: {}",
        query.tx_hash,
        match response {
            TxLookupResponse::Found(_) => "hit",
            TxLookupResponse::Empty {} => "miss",
        }
    );
    Json(response)
}

pub fn routes() -> Router {
    Router::new().route(TX_PATH, get(get_tx))
}

#[cfg(test)]
mod test {
    use super::*;

    fn query_for(hash: &str) -> TxQuery {
        TxQuery {
            tx_hash: Some(hash.to_string()),
        }
    }

    #[test]
    fn test_known_hash_returns_the_canned_record() {
        let TxLookupResponse::Found(tx) = lookup(&query_for(KNOWN_TX_HASH)) else {
            panic!("expected a match for the known hash");
        };

        assert_eq!(tx.block_height, 63280715);
        assert_eq!(tx.tx_fee, Decimal::new(60, 5));
        assert_eq!(tx.sub_txs_dto.total_num, 2);
        assert_eq!(tx.sub_txs_dto.sub_tx_dto_list.len(), 2);
        assert_eq!(
            tx.sub_txs_dto.sub_tx_dto_list[0].value,
            Decimal::new(375, 5)
        );
        assert_eq!(tx.sub_txs_dto.sub_tx_dto_list[1].fee, None);
    }

    #[test]
    fn test_unknown_hash_returns_empty() {
        assert_eq!(lookup(&query_for("DEADBEEF")), TxLookupResponse::Empty {});
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert_eq!(
            lookup(&query_for(&KNOWN_TX_HASH.to_lowercase())),
            TxLookupResponse::Empty {}
        );
    }

    #[test]
    fn test_missing_hash_behaves_like_a_miss() {
        assert_eq!(lookup(&TxQuery::default()), TxLookupResponse::Empty {});
    }

    #[test]
    fn test_lookup_is_deterministic() {
        let query = query_for(KNOWN_TX_HASH);
        assert_eq!(lookup(&query), lookup(&query));
    }
}
