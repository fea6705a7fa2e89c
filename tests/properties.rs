use aamva_dlid_encoder::{
    aamva::dlid::pdf_417::{HEADER_SIZE, SUBFILE_DESIGNATOR_SIZE},
    DataElement, Document, FieldCollection, Header, Subfile,
};
use proptest::{collection::vec, prelude::*};

fn element_id() -> impl Strategy<Value = String> {
    "[A-Za-z]{3}"
}

fn value() -> impl Strategy<Value = String> {
    "[ -~]{0,40}"
}

fn fields() -> impl Strategy<Value = FieldCollection> {
    vec((element_id(), value()), 0..8).prop_map(|entries| {
        FieldCollection::from_elements(
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (id, v))| DataElement::new(format!("field{i}"), id, v).unwrap()),
        )
        .unwrap()
    })
}

fn subfile() -> impl Strategy<Value = Subfile> {
    ("[A-Z]{2}", fields()).prop_map(|(t, f)| Subfile::new(t, f).unwrap())
}

proptest! {
    #[test]
    fn element_text(id in element_id(), v in value()) {
        let element = DataElement::new("name", &id, &v).unwrap();
        let text = element.to_text();
        prop_assert_eq!(text.len(), 3 + v.len());
        prop_assert_eq!(text.clone(), text.to_ascii_uppercase());
        prop_assert!(text.starts_with(&id.to_ascii_uppercase()));
    }

    #[test]
    fn collection_serialization(fields in fields()) {
        let serialized = fields.serialize();
        let parts: Vec<String> = fields.iter().map(DataElement::to_text).collect();
        prop_assert_eq!(serialized.len(), parts.iter().map(String::len).sum::<usize>());
        prop_assert_eq!(serialized, parts.concat());
    }

    #[test]
    fn subfile_length_matches_block(subfile in subfile()) {
        let length = subfile.length().unwrap().to_u64() as usize;
        prop_assert_eq!(length, subfile.data_block().len());
    }

    #[test]
    fn offsets_chain(subfiles in vec(subfile(), 0..6)) {
        let header = Header::new(636014, 10, 0, subfiles.len() as u8).unwrap();
        let document = Document::new(&header, &subfiles).unwrap();
        let designators = document.designators().unwrap();

        if let Some(first) = designators.first() {
            prop_assert_eq!(
                first.offset.to_u64() as usize,
                HEADER_SIZE + SUBFILE_DESIGNATOR_SIZE * subfiles.len()
            );
        }

        for pair in designators.windows(2) {
            prop_assert_eq!(
                pair[1].offset.to_u64(),
                pair[0].offset.to_u64() + pair[0].length.to_u64()
            );
        }

        let bytes = document.assemble().unwrap();
        prop_assert_eq!(bytes.len(), document.byte_len());
    }
}
