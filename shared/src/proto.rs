//! Protobuf messages of the account balance query response.
//!
//! Only the fields consumed by [`crate::balance::AccountBalance`] are
//! modelled. The response header (tag 1) and account id (tag 2) are skipped
//! as unknown fields when decoding.

use serde::Deserialize;

/// Unique identifier of a token.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenId {
    /// The shard number (nonnegative)
    #[prost(int64, tag = "1")]
    pub shard_num: i64,
    /// The realm number (nonnegative)
    #[prost(int64, tag = "2")]
    pub realm_num: i64,
    /// A nonnegative token number
    #[prost(int64, tag = "3")]
    pub token_num: i64,
}

/// Number of units of a token held by the account.
#[derive(Clone, PartialEq, Eq, ::prost::Message, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenBalance {
    #[prost(message, optional, tag = "1")]
    pub token_id: ::core::option::Option<TokenId>,
    /// Balance in the smallest denomination of the token
    #[prost(uint64, tag = "2")]
    pub balance: u64,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CryptoGetAccountBalanceResponse {
    /// Current balance in tinybars
    #[prost(uint64, tag = "3")]
    pub balance: u64,
    /// Token balances, in the order the network reported them
    #[prost(message, repeated, tag = "4")]
    pub token_balances: ::prost::alloc::vec::Vec<TokenBalance>,
}

#[cfg(test)]
mod tests {
    use prost::Message;

    use super::*;

    #[test]
    fn json_uses_camel_case_names() {
        let json = r#"{
            "balance": 5,
            "tokenBalances": [
                {
                    "tokenId": { "shardNum": 0, "realmNum": 0, "tokenNum": 7 },
                    "balance": 3
                },
                { "balance": 1 }
            ]
        }"#;

        let response: CryptoGetAccountBalanceResponse =
            serde_json::from_str(json).unwrap();

        assert_eq!(response.balance, 5);
        assert_eq!(response.token_balances.len(), 2);
        assert_eq!(
            response.token_balances[0].token_id,
            Some(TokenId {
                shard_num: 0,
                realm_num: 0,
                token_num: 7,
            })
        );
        assert_eq!(response.token_balances[1].token_id, None);
    }

    #[test]
    fn absent_json_fields_take_defaults() {
        let response: CryptoGetAccountBalanceResponse =
            serde_json::from_str("{}").unwrap();

        assert_eq!(response, CryptoGetAccountBalanceResponse::default());
    }

    #[test]
    fn skips_header_and_account_id() {
        // header (1) and accountID (2) as empty messages, balance (3) = 1
        let bytes = [0x0a, 0x00, 0x12, 0x00, 0x18, 0x01];

        let response = CryptoGetAccountBalanceResponse::decode(&bytes[..])
            .unwrap();

        assert_eq!(response.balance, 1);
        assert!(response.token_balances.is_empty());
    }
}
