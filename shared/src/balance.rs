use std::fmt::Display;

use indexmap::IndexMap;
use prost::Message;
use serde::Serialize;

use crate::error::DecodeError;
use crate::hbar::Hbar;
use crate::proto::CryptoGetAccountBalanceResponse;
use crate::token::TokenId;

/// Token unit counts, iterated in the order the network reported them.
pub type TokenBalances = IndexMap<TokenId, u64>;

/// Balance of an account: hbars plus the tokens it holds.
///
/// Equality compares token balances as a set of pairs, independent of
/// their order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountBalance {
    #[serde(rename = "tinybars")]
    hbars: Hbar,
    token_balances: TokenBalances,
}

impl AccountBalance {
    pub fn new(hbars: Hbar, token_balances: Option<TokenBalances>) -> Self {
        Self {
            hbars,
            token_balances: token_balances.unwrap_or_default(),
        }
    }

    /// Builds a balance from a decoded query response. A token reported
    /// more than once keeps its first position and its last value.
    pub fn from_proto(
        response: &CryptoGetAccountBalanceResponse,
    ) -> Result<Self, DecodeError> {
        let tinybars = i64::try_from(response.balance)
            .map_err(|_| DecodeError::BalanceOutOfRange(response.balance))?;
        let hbars = Hbar::from_tinybars(tinybars);

        let mut token_balances = TokenBalances::new();
        for token_balance in &response.token_balances {
            let token_id = token_balance
                .token_id
                .as_ref()
                .ok_or(DecodeError::MissingField("token_balances.token_id"))
                .and_then(TokenId::from_proto)?;

            if let Some(previous) =
                token_balances.insert(token_id, token_balance.balance)
            {
                tracing::debug!(
                    %token_id,
                    previous,
                    current = token_balance.balance,
                    "Duplicate token balance, keeping the latest"
                );
            }
        }

        Ok(Self::new(hbars, Some(token_balances)))
    }

    /// Decodes protobuf bytes of a query response.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let response = CryptoGetAccountBalanceResponse::decode(bytes)?;

        Self::from_proto(&response)
    }

    pub fn hbars(&self) -> Hbar {
        self.hbars
    }

    pub fn token_balances(&self) -> &TokenBalances {
        &self.token_balances
    }

    pub fn token_balance(&self, token_id: &TokenId) -> Option<u64> {
        self.token_balances.get(token_id).copied()
    }
}

impl From<Hbar> for AccountBalance {
    fn from(hbars: Hbar) -> Self {
        Self::new(hbars, None)
    }
}

impl TryFrom<CryptoGetAccountBalanceResponse> for AccountBalance {
    type Error = DecodeError;

    fn try_from(
        response: CryptoGetAccountBalanceResponse,
    ) -> Result<Self, Self::Error> {
        Self::from_proto(&response)
    }
}

impl Display for AccountBalance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HBAR Balance: {} hbars", self.hbars)?;

        if !self.token_balances.is_empty() {
            write!(f, "\nToken Balances:")?;
            for (token_id, balance) in &self.token_balances {
                write!(f, "\n - Token ID {}: {} units", token_id, balance)?;
            }
        }

        Ok(())
    }
}
