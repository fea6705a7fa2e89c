pub mod dlid;
pub mod format;
pub mod jurisdiction;

pub use dlid::{
    DataElement, DlElement, Document, EncodeError, FieldCollection, FileBuilder, Header, Subfile,
};
pub use jurisdiction::{issuer_id, UnknownJurisdictionError};

#[cfg(test)]
mod tests {
    use super::{
        format::{eye_color_code, format_height, format_sex, format_zip},
        *,
    };

    /// Builds the `DL` subfile of a sample card from form input.
    #[test]
    fn card_from_form_input() {
        let mut fields = FieldCollection::new();
        for (element, value) in [
            (DlElement::CustomerFamilyName, "Smith".to_owned()),
            (DlElement::CustomerFirstName, "John".to_owned()),
            (DlElement::Sex, format_sex("male").to_owned()),
            (DlElement::Height, format_height("5", "9").unwrap()),
            (DlElement::EyeColor, eye_color_code("brown").to_owned()),
            (DlElement::AddressPostalCode, format_zip("84101").unwrap()),
        ] {
            fields
                .insert(DataElement::standard(element, value).unwrap())
                .unwrap();
        }

        let mut builder = FileBuilder::new(issuer_id("ut").unwrap(), 10, 0);
        builder.push(Subfile::new("DL", fields).unwrap());
        let bytes = builder.into_bytes().unwrap();

        let expected: &[u8] = b"@\n\x1e\rANSI 636040100001DL00310047\
            DCSSMITHDACJOHNDBC1DAU069 INDAYBRODAK841010000\r";
        assert_eq!(bytes, expected);
    }
}
