use aamva_dlid_encoder::{DataElement, DlElement, FieldCollection, Subfile};

/// Values of the mandatory `DL` elements, in [`DlElement::MANDATORY`] order.
pub const MANDATORY_DL_FIELDS: [&str; 22] = [
    "F987654321",
    "SMITH",
    "N",
    "JOHN",
    "N",
    "NONE",
    "N",
    "C",
    "NONE",
    "NONE",
    "01012024",
    "04191988",
    "04192030",
    "1",
    "069 in",
    "BRO",
    "123 MAIN ST",
    "ANYVILLE",
    "UT",
    "841010000",
    "UTODOCDISCRIM",
    "USA",
];

pub fn dl_subfile() -> Subfile {
    let fields = FieldCollection::from_elements(
        DlElement::MANDATORY
            .into_iter()
            .zip(MANDATORY_DL_FIELDS)
            .map(|(e, v)| DataElement::standard(e, v).unwrap()),
    )
    .unwrap();

    Subfile::new("DL", fields).unwrap()
}

/// Jurisdiction-specific subfile with the given `(id, value)` elements.
pub fn jurisdiction_subfile(subfile_type: &str, elements: &[(&str, &str)]) -> Subfile {
    let fields = FieldCollection::from_elements(
        elements
            .iter()
            .map(|(id, value)| DataElement::new(*id, *id, *value).unwrap()),
    )
    .unwrap();

    Subfile::new(subfile_type, fields).unwrap()
}

pub fn assert_stream(bytes: &[u8], expected: &[u8]) {
    if bytes != expected {
        eprintln!("output:   {}", hex::encode(bytes));
        eprintln!("expected: {}", hex::encode(expected));
        panic!("invalid data stream")
    }
}
