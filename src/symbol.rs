// =============================================================================
// Symbol Normalization
// =============================================================================
//
// Maps free-text user input ("btc", "Ethereum", "solusdt") onto the canonical
// USDT trading-pair symbol the market-data provider expects, and extracts the
// first recognizable symbol from a chat message with mention markup removed.
// =============================================================================

use anyhow::{bail, Result};

/// Resolve a well-known coin name or ticker to its USDT pair.
fn alias_to_pair(lower: &str) -> Option<&'static str> {
    let pair = match lower {
        "btc" | "bitcoin" => "BTCUSDT",
        "eth" | "ethereum" => "ETHUSDT",
        "bnb" => "BNBUSDT",
        "sol" | "solana" => "SOLUSDT",
        "ada" | "cardano" => "ADAUSDT",
        "xrp" | "ripple" => "XRPUSDT",
        "doge" | "dogecoin" => "DOGEUSDT",
        "avax" | "avalanche" => "AVAXUSDT",
        "dot" | "polkadot" => "DOTUSDT",
        "matic" | "polygon" => "MATICUSDT",
        "link" | "chainlink" => "LINKUSDT",
        "atom" | "cosmos" => "ATOMUSDT",
        "ltc" | "litecoin" => "LTCUSDT",
        "uni" | "uniswap" => "UNIUSDT",
        "algo" | "algorand" => "ALGOUSDT",
        "near" => "NEARUSDT",
        "ftm" | "fantom" => "FTMUSDT",
        "sand" | "sandbox" => "SANDUSDT",
        "mana" | "decentraland" => "MANAUSDT",
        "axs" | "axie" => "AXSUSDT",
        "gala" => "GALAUSDT",
        "enj" | "enjin" => "ENJUSDT",
        _ => return None,
    };
    Some(pair)
}

/// Normalize arbitrary user input to a canonical trading-pair symbol.
///
/// Rules, in order:
/// 1. Blank input is an error.
/// 2. Input already ending in `USDT` passes through uppercased.
/// 3. Known coin names and tickers map via the alias table.
/// 4. Anything else without `USDT` in it gets `USDT` appended.
/// 5. Remaining inputs (contain `USDT` mid-string) pass through uppercased.
pub fn normalize_symbol(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("symbol input is required");
    }

    let cleaned = trimmed.to_uppercase();
    if cleaned.ends_with("USDT") {
        return Ok(cleaned);
    }

    if let Some(pair) = alias_to_pair(&trimmed.to_lowercase()) {
        return Ok(pair.to_string());
    }

    if !cleaned.contains("USDT") {
        return Ok(format!("{cleaned}USDT"));
    }

    Ok(cleaned)
}

/// Extract the first normalizable symbol from a chat message.
///
/// Mention markup (`<@123>`, `<@!123>`) is stripped before tokenizing; the
/// first whitespace-separated token that normalizes wins. Returns `None` when
/// the message has no usable token.
pub fn parse_symbol_from_message(message: &str) -> Option<String> {
    let cleaned = strip_mentions(message);

    cleaned
        .split_whitespace()
        .find_map(|token| normalize_symbol(token).ok())
}

/// Remove `<@...>` mention spans from a message.
fn strip_mentions(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    let mut rest = message;

    while let Some(start) = rest.find("<@") {
        out.push_str(&rest[..start]);
        match rest[start..].find('>') {
            Some(end) => rest = &rest[start + end + 1..],
            None => {
                // Unterminated mention: keep the text as-is.
                out.push_str(&rest[start..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    // ---- normalize_symbol --------------------------------------------------

    #[test]
    fn aliases_resolve_to_pairs() {
        assert_eq!(normalize_symbol("btc").unwrap(), "BTCUSDT");
        assert_eq!(normalize_symbol("Bitcoin").unwrap(), "BTCUSDT");
        assert_eq!(normalize_symbol("ETHEREUM").unwrap(), "ETHUSDT");
        assert_eq!(normalize_symbol("sol").unwrap(), "SOLUSDT");
    }

    #[test]
    fn full_pairs_pass_through_uppercased() {
        assert_eq!(normalize_symbol("ETHUSDT").unwrap(), "ETHUSDT");
        assert_eq!(normalize_symbol("ethusdt").unwrap(), "ETHUSDT");
        assert_eq!(normalize_symbol("  btcusdt  ").unwrap(), "BTCUSDT");
    }

    #[test]
    fn unknown_tickers_get_usdt_appended() {
        assert_eq!(normalize_symbol("pepe").unwrap(), "PEPEUSDT");
        assert_eq!(normalize_symbol("ARB").unwrap(), "ARBUSDT");
    }

    #[test]
    fn blank_input_is_an_error() {
        assert!(normalize_symbol("").is_err());
        assert!(normalize_symbol("   ").is_err());
    }

    // ---- parse_symbol_from_message -------------------------------------------

    #[test]
    fn parses_first_token_after_stripping_mentions() {
        assert_eq!(
            parse_symbol_from_message("<@123456> btc please").as_deref(),
            Some("BTCUSDT")
        );
        assert_eq!(
            parse_symbol_from_message("<@!987> <@42> eth").as_deref(),
            Some("ETHUSDT")
        );
    }

    #[test]
    fn plain_message_parses_directly() {
        assert_eq!(
            parse_symbol_from_message("solusdt 1h").as_deref(),
            Some("SOLUSDT")
        );
    }

    #[test]
    fn empty_message_yields_none() {
        assert_eq!(parse_symbol_from_message(""), None);
        assert_eq!(parse_symbol_from_message("<@123>"), None);
    }

    #[test]
    fn unterminated_mention_is_kept_verbatim() {
        // "<@123" never closes; the token fails uppercase USDT rules but
        // still normalizes by appending USDT, matching the tokenizer rules.
        let parsed = parse_symbol_from_message("<@123");
        assert_eq!(parsed.as_deref(), Some("<@123USDT"));
    }
}
