/// Quote for a stock symbol.
///
/// The body is the upstream response exactly as received. This service
/// attaches no meaning to its fields and never re-encodes them: parsing and
/// re-serializing would reorder keys and reformat numbers in transit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub symbol: String,
    pub body: Vec<u8>,
}

impl Quote {
    pub fn new(symbol: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            symbol: symbol.into(),
            body: body.into(),
        }
    }
}
