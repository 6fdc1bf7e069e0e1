use tracing::warn;

use crate::error::ConvertError;

/// Reads the first `count` whitespace separated decimal values out of `data`.
///
/// Tokens past `count` are never converted, so trailing garbage after a
/// complete matrix is tolerated.
pub fn read<T>(data: &str, count: usize) -> Result<Vec<T>, ConvertError>
where
    T: std::str::FromStr,
    <T as std::str::FromStr>::Err: std::fmt::Display,
{
    let tokens = data.split_whitespace().collect::<Vec<_>>();
    if tokens.len() < count {
        return Err(ConvertError::format(&format!(
            "Expected {} weights in EDGE_WEIGHT_SECTION, found {}",
            count,
            tokens.len()
        )));
    }
    if tokens.len() > count {
        warn!(
            "Ignoring {} surplus token(s) in EDGE_WEIGHT_SECTION",
            tokens.len() - count
        );
    }

    tokens[..count]
        .iter()
        .map(|s| {
            s.parse::<T>().map_err(|e| {
                ConvertError::format(&format!("Failed to decode weight {:?}: {e}", s))
            })
        })
        .collect::<Result<Vec<_>, _>>()
}

pub fn read_dimension(value: &str) -> Result<usize, ConvertError> {
    let n = value
        .parse::<usize>()
        .map_err(|e| ConvertError::format(&format!("Failed to decode DIMENSION {:?}: {e}", value)))?;
    if n == 0 {
        return Err(ConvertError::format("DIMENSION must be at least 1"));
    }
    Ok(n)
}
