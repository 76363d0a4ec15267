use std::path::Path;

use anyhow::Context;
use shared::balance::AccountBalance;
use shared::proto::CryptoGetAccountBalanceResponse;

use crate::config::{InputFormat, OutputStyle};

pub fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path)
        .with_context(|| format!("Failed to read {}", path.display()))
}

pub fn decode_balance(
    bytes: &[u8],
    format: InputFormat,
) -> anyhow::Result<AccountBalance> {
    let balance = match format {
        InputFormat::Json => {
            let response: CryptoGetAccountBalanceResponse =
                serde_json::from_slice(bytes)
                    .context("Failed to parse balance response JSON")?;
            AccountBalance::from_proto(&response)
        }
        InputFormat::Protobuf => AccountBalance::from_bytes(bytes),
    }
    .context("Failed to decode account balance")?;

    tracing::debug!(
        hbars = %balance.hbars(),
        tokens = balance.token_balances().len(),
        "Decoded account balance"
    );

    Ok(balance)
}

pub fn render(
    balance: &AccountBalance,
    style: OutputStyle,
) -> anyhow::Result<String> {
    match style {
        OutputStyle::Human => Ok(balance.to_string()),
        OutputStyle::Debug => Ok(format!("{:?}", balance)),
        OutputStyle::Json => serde_json::to_string_pretty(balance)
            .context("Failed to serialize account balance"),
    }
}
