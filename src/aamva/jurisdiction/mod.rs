//! Issuer identification numbers of U.S. jurisdictions.
use std::{collections::HashMap, io::Cursor};

use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown jurisdiction `{0}`")]
pub struct UnknownJurisdictionError(pub String);

#[derive(Deserialize)]
struct IssuerRecord {
    code: String,
    iin: u32,
}

lazy_static! {
    static ref ISSUERS: HashMap<String, u32> = {
        let cursor = Cursor::new(include_str!("issuers.csv"));
        let mut reader = csv::Reader::from_reader(cursor);
        reader
            .deserialize::<IssuerRecord>()
            .map(|result| {
                let record = result.expect("embedded issuer table is well-formed");
                (record.code, record.iin)
            })
            .collect()
    };
}

/// Returns the issuer identification number of the jurisdiction with the
/// given two-letter code. The code is case-insensitive.
pub fn issuer_id(code: &str) -> Result<u32, UnknownJurisdictionError> {
    if code.len() != 2 {
        return Err(UnknownJurisdictionError(code.to_owned()));
    }

    ISSUERS
        .get(&code.to_ascii_uppercase())
        .copied()
        .ok_or_else(|| UnknownJurisdictionError(code.to_owned()))
}

/// Two-letter codes of every known jurisdiction, sorted.
pub fn jurisdictions() -> Vec<&'static str> {
    let mut codes: Vec<_> = ISSUERS.keys().map(String::as_str).collect();
    codes.sort_unstable();
    codes
}
