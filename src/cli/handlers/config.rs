use crate::cli::{args::ConfigAction, config::max_size, global::GlobalArgs};
use sigilwire::{Alphabet, Scheme, Settings};

pub fn handle(
    action: Option<ConfigAction>,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    match action.unwrap_or(ConfigAction::Show { json: false }) {
        ConfigAction::Show { json } => handle_show(json, global, settings),
        ConfigAction::Alphabets { json } => handle_alphabets(json),
    }
}

fn handle_show(
    json: bool,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let scheme = settings.default_scheme();
    let encoding = settings.text_encoding();
    let limit = max_size(global, settings);

    if json {
        let output = serde_json::json!({
            "default_scheme": scheme,
            "text_encoding": encoding,
            "max_size": limit,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("default_scheme = {}", scheme);
    println!("text_encoding  = {}", encoding);
    println!("max_size       = {}", limit);
    Ok(())
}

fn handle_alphabets(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let tables: Vec<serde_json::Value> = Scheme::ALL
            .into_iter()
            .map(|scheme| {
                let alphabet = Alphabet::for_scheme(scheme);
                let symbols: Vec<serde_json::Value> = rows(alphabet)
                    .into_iter()
                    .map(|(digit, symbol)| {
                        serde_json::json!({
                            "digit": digit.to_string(),
                            "symbol": symbol,
                            "codepoints": codepoints(symbol),
                        })
                    })
                    .collect();
                serde_json::json!({
                    "scheme": scheme,
                    "size": alphabet.len(),
                    "symbols": symbols,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&tables)?);
        return Ok(());
    }

    for (i, scheme) in Scheme::ALL.into_iter().enumerate() {
        let alphabet = Alphabet::for_scheme(scheme);
        if i > 0 {
            println!();
        }
        println!("{} ({} symbols)", scheme, alphabet.len());
        for (digit, symbol) in rows(alphabet) {
            println!("  {}  {}  {}", digit, symbol, codepoints(symbol));
        }
    }
    Ok(())
}

/// (standard digit, symbol) pairs in value order, padding last.
fn rows(alphabet: &Alphabet) -> Vec<(char, &'static str)> {
    let mut rows: Vec<(char, &'static str)> = (0..alphabet.len())
        .filter_map(|value| {
            let value = value as u8;
            Some((alphabet.digit(value)?, alphabet.symbol(value)?))
        })
        .collect();
    if let Some(padding) = alphabet.padding() {
        rows.push(('=', padding));
    }
    rows
}

fn codepoints(symbol: &str) -> String {
    symbol
        .chars()
        .map(|c| format!("U+{:04X}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}
