use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DecodeError;
use crate::proto;

/// Identifier of a token entity on a shard and realm of the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId {
    pub shard: u64,
    pub realm: u64,
    pub num: u64,
}

impl TokenId {
    pub const fn new(shard: u64, realm: u64, num: u64) -> Self {
        Self { shard, realm, num }
    }

    pub fn from_proto(token_id: &proto::TokenId) -> Result<Self, DecodeError> {
        Ok(Self {
            shard: entity_number("shard_num", token_id.shard_num)?,
            realm: entity_number("realm_num", token_id.realm_num)?,
            num: entity_number("token_num", token_id.token_num)?,
        })
    }
}

fn entity_number(field: &'static str, value: i64) -> Result<u64, DecodeError> {
    u64::try_from(value)
        .map_err(|_| DecodeError::NegativeEntityNumber { field, value })
}

impl TryFrom<&proto::TokenId> for TokenId {
    type Error = DecodeError;

    fn try_from(value: &proto::TokenId) -> Result<Self, Self::Error> {
        Self::from_proto(value)
    }
}

impl Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
    }
}

impl FromStr for TokenId {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DecodeError::InvalidTokenId(s.to_owned());

        let parts = s
            .split('.')
            .map(|part| part.parse::<u64>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        match parts.as_slice() {
            [shard, realm, num] => Ok(Self::new(*shard, *realm, *num)),
            _ => Err(invalid()),
        }
    }
}

impl Serialize for TokenId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TokenId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
