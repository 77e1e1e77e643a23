use crate::types::Data;

use super::error::ParseError;

/// Consume exactly one JSON object literal at the front of `rest`.
///
/// Returns the decoded map and the number of bytes consumed, which lands
/// immediately after the literal's closing brace even when values contain
/// braces, colons or escaped quotes inside strings. `offset` is the byte
/// position of `rest` within the original input, used for error reporting.
///
/// The decoded map preserves key declaration order (serde_json's
/// `preserve_order` feature), so payloads round-trip in source order.
pub(crate) fn consume_object(rest: &str, offset: usize) -> Result<(Data, usize), ParseError> {
    let mut stream = serde_json::Deserializer::from_str(rest).into_iter::<Data>();
    match stream.next() {
        Some(Ok(data)) => Ok((data, stream.byte_offset())),
        Some(Err(err)) => Err(ParseError::Json {
            offset,
            message: err.to_string(),
        }),
        None => Err(ParseError::Json {
            offset,
            message: "unexpected end of input".to_owned(),
        }),
    }
}
