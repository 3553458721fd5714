use serde::Deserialize;

/// Parse JSON content embedded in the binary, naming the source in errors
pub fn parse_json_from_str<T>(contents: &str, source: &str) -> Result<T, String>
    where T: for<'de> Deserialize<'de>
{
    if contents.trim().is_empty() {
        return Err(format!("'{}' is empty", source));
    }

    serde_json
        ::from_str::<T>(contents)
        .map_err(|e| format!("Failed to parse JSON from '{}': {}", source, e))
}
