use std::io;

use serde::{Deserialize, Serialize};

use super::{
    element::FieldCollection,
    types::{BoundsError, FileType, FormatError, F2N, F4N, F6N},
};

/// Size of the rendered [`Header`].
pub const HEADER_SIZE: usize = PREFIX.len() + 6 + 2 + 2 + 2;

/// Size of one [`SubfileDesignator`].
pub const SUBFILE_DESIGNATOR_SIZE: usize = 2 + 4 + 4;

pub const COMPLIANCE_INDICATOR: u8 = b'@';

pub const DATA_ELEMENT_SEPARATOR: u8 = b'\n';

pub const RECORD_SEPARATOR: u8 = 0x1e;

pub const SEGMENT_TERMINATOR: u8 = b'\r';

pub const FILE_TYPE: [u8; 5] = *b"ANSI ";

const PREFIX: [u8; 9] = [
    COMPLIANCE_INDICATOR,
    DATA_ELEMENT_SEPARATOR,
    RECORD_SEPARATOR,
    SEGMENT_TERMINATOR,
    FILE_TYPE[0],
    FILE_TYPE[1],
    FILE_TYPE[2],
    FILE_TYPE[3],
    FILE_TYPE[4],
];

/// Header parameters, as found in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderParams {
    pub iin: u32,
    pub aamva_version: u8,
    pub jurisdiction_version: u8,
    pub number_of_subfiles: u8,
}

/// File header.
///
/// Every numeric field is validated against its width on construction, so
/// rendering never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HeaderParams", into = "HeaderParams")]
pub struct Header {
    iin: F6N,
    aamva_version: F2N,
    jurisdiction_version: F2N,
    number_of_subfiles: F2N,
}

impl Header {
    pub fn new(
        iin: u32,
        aamva_version: u8,
        jurisdiction_version: u8,
        number_of_subfiles: u8,
    ) -> Result<Self, FormatError> {
        Ok(Self {
            iin: F6N::from_value(iin.into())
                .map_err(|e| e.for_field("issuer identification number"))?,
            aamva_version: F2N::from_value(aamva_version.into())
                .map_err(|e| e.for_field("AAMVA version"))?,
            jurisdiction_version: F2N::from_value(jurisdiction_version.into())
                .map_err(|e| e.for_field("jurisdiction version"))?,
            number_of_subfiles: F2N::from_value(number_of_subfiles.into())
                .map_err(|e| e.for_field("number of subfiles"))?,
        })
    }

    pub fn iin(&self) -> u32 {
        self.iin.to_u64() as u32
    }

    pub fn aamva_version(&self) -> u8 {
        self.aamva_version.to_u64() as u8
    }

    pub fn jurisdiction_version(&self) -> u8 {
        self.jurisdiction_version.to_u64() as u8
    }

    pub fn number_of_subfiles(&self) -> u8 {
        self.number_of_subfiles.to_u64() as u8
    }

    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut result = [0u8; HEADER_SIZE];
        let parts: [&[u8]; 5] = [
            &PREFIX,
            self.iin.as_bytes(),
            self.aamva_version.as_bytes(),
            self.jurisdiction_version.as_bytes(),
            self.number_of_subfiles.as_bytes(),
        ];

        let mut i = 0;
        for part in parts {
            result[i..i + part.len()].copy_from_slice(part);
            i += part.len();
        }

        result
    }
}

impl TryFrom<HeaderParams> for Header {
    type Error = FormatError;

    fn try_from(value: HeaderParams) -> Result<Self, Self::Error> {
        Self::new(
            value.iin,
            value.aamva_version,
            value.jurisdiction_version,
            value.number_of_subfiles,
        )
    }
}

impl From<Header> for HeaderParams {
    fn from(value: Header) -> Self {
        Self {
            iin: value.iin(),
            aamva_version: value.aamva_version(),
            jurisdiction_version: value.jurisdiction_version(),
            number_of_subfiles: value.number_of_subfiles(),
        }
    }
}

/// Subfile: a type tag and its data elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subfile {
    subfile_type: FileType,
    fields: FieldCollection,
}

impl Subfile {
    pub fn new(subfile_type: impl AsRef<[u8]>, fields: FieldCollection) -> Result<Self, FormatError> {
        Ok(Self {
            subfile_type: FileType::new(subfile_type).map_err(|e| e.with_field("subfile type"))?,
            fields,
        })
    }

    pub fn subfile_type(&self) -> &FileType {
        &self.subfile_type
    }

    pub fn fields(&self) -> &FieldCollection {
        &self.fields
    }

    /// Formats a byte offset for a subfile designator.
    pub fn offset(n: usize) -> Result<F4N, BoundsError> {
        F4N::from_value(n as u64)
    }

    /// Number of bytes of [`Self::data_block`].
    pub fn byte_len(&self) -> usize {
        self.fields.encoded_len() + 1
    }

    /// Formatted length of the data block, segment terminator included.
    pub fn length(&self) -> Result<F4N, BoundsError> {
        F4N::from_value(self.byte_len() as u64)
    }

    /// Serialized data elements followed by the segment terminator.
    pub fn data_block(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(self.byte_len());
        result.extend(self.fields.serialize().into_bytes());
        result.push(SEGMENT_TERMINATOR);
        result
    }
}

/// Subfile designator table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubfileDesignator {
    pub subfile_type: FileType,
    pub offset: F4N,
    pub length: F4N,
}

impl SubfileDesignator {
    pub fn encode(&self) -> [u8; SUBFILE_DESIGNATOR_SIZE] {
        let mut result = [0u8; SUBFILE_DESIGNATOR_SIZE];
        result[..2].copy_from_slice(self.subfile_type.as_bytes());
        result[2..6].copy_from_slice(self.offset.as_bytes());
        result[6..].copy_from_slice(self.length.as_bytes());
        result
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("header declares {declared} subfiles but {actual} were supplied")]
pub struct CountMismatchError {
    pub declared: u8,
    pub actual: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Bounds(#[from] BoundsError),

    #[error(transparent)]
    CountMismatch(#[from] CountMismatchError),
}

impl From<EncodeError> for io::Error {
    fn from(value: EncodeError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, value)
    }
}

/// Header and subfiles of one card, ready to be laid out.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    header: &'a Header,
    subfiles: &'a [Subfile],
}

impl<'a> Document<'a> {
    pub fn new(header: &'a Header, subfiles: &'a [Subfile]) -> Result<Self, CountMismatchError> {
        let declared = header.number_of_subfiles();
        if usize::from(declared) != subfiles.len() {
            return Err(CountMismatchError {
                declared,
                actual: subfiles.len(),
            });
        }

        Ok(Self { header, subfiles })
    }

    pub fn header(&self) -> &'a Header {
        self.header
    }

    pub fn subfiles(&self) -> &'a [Subfile] {
        self.subfiles
    }

    /// Computes the designator of every subfile.
    ///
    /// The first subfile starts right after the designator table, each
    /// following one right after its predecessor.
    pub fn designators(&self) -> Result<Vec<SubfileDesignator>, BoundsError> {
        let mut offset = HEADER_SIZE + SUBFILE_DESIGNATOR_SIZE * self.subfiles.len();
        let mut result = Vec::with_capacity(self.subfiles.len());

        for subfile in self.subfiles {
            result.push(SubfileDesignator {
                subfile_type: subfile.subfile_type,
                offset: Subfile::offset(offset)?,
                length: subfile.length()?,
            });
            offset += subfile.byte_len();
        }

        Ok(result)
    }

    /// Total size of the assembled stream.
    pub fn byte_len(&self) -> usize {
        HEADER_SIZE
            + SUBFILE_DESIGNATOR_SIZE * self.subfiles.len()
            + self.subfiles.iter().map(Subfile::byte_len).sum::<usize>()
    }

    pub fn assemble(&self) -> Result<Vec<u8>, EncodeError> {
        let designators = self.designators()?;

        let mut result = Vec::with_capacity(self.byte_len());
        result.extend(self.header.encode());

        for designator in &designators {
            result.extend(designator.encode());
        }

        for subfile in self.subfiles {
            result.extend(subfile.data_block());
        }

        tracing::debug!(
            target: "aamva::dlid",
            subfiles = self.subfiles.len(),
            bytes = result.len(),
            "assembled data stream"
        );

        Ok(result)
    }

    /// Writes the assembled stream.
    ///
    /// Nothing is written unless the whole stream could be laid out.
    pub fn write(&self, writer: &mut impl io::Write) -> io::Result<()> {
        let bytes = self.assemble()?;
        writer.write_all(&bytes)
    }
}

/// Collects subfiles and derives the header subfile count from them.
pub struct FileBuilder {
    iin: u32,
    aamva_version: u8,
    jurisdiction_version: u8,
    subfiles: Vec<Subfile>,
}

impl FileBuilder {
    pub fn new(iin: u32, aamva_version: u8, jurisdiction_version: u8) -> Self {
        Self {
            iin,
            aamva_version,
            jurisdiction_version,
            subfiles: Vec::new(),
        }
    }

    pub fn push(&mut self, subfile: Subfile) {
        self.subfiles.push(subfile);
    }

    pub fn header(&self) -> Result<Header, FormatError> {
        let count = u8::try_from(self.subfiles.len())
            .map_err(|_| FormatError::new("number of subfiles", self.subfiles.len().to_string()))?;

        Header::new(self.iin, self.aamva_version, self.jurisdiction_version, count)
    }

    pub fn into_bytes(self) -> Result<Vec<u8>, EncodeError> {
        let header = self.header()?;
        Document::new(&header, &self.subfiles)?.assemble()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aamva::dlid::DataElement;

    fn smith_john() -> Subfile {
        let fields = FieldCollection::from_elements([
            DataElement::new("LAST", "DAL", "SMITH").unwrap(),
            DataElement::new("FIRST", "DAC", "JOHN").unwrap(),
        ])
        .unwrap();

        Subfile::new("DL", fields).unwrap()
    }

    #[test]
    fn header_encoding() {
        let header = Header::new(636014, 10, 0, 1).unwrap();
        assert_eq!(&header.encode(), b"@\n\x1e\rANSI 636014100001");
        assert_eq!(HEADER_SIZE, 21);
    }

    #[test]
    fn header_fields_must_fit() {
        assert_eq!(
            Header::new(1_000_000, 10, 0, 1).unwrap_err().field(),
            "issuer identification number"
        );
        assert_eq!(
            Header::new(636014, 100, 0, 1).unwrap_err().field(),
            "AAMVA version"
        );
        assert_eq!(
            Header::new(636014, 10, 100, 1).unwrap_err().field(),
            "jurisdiction version"
        );
        assert_eq!(
            Header::new(636014, 10, 0, 100).unwrap_err().field(),
            "number of subfiles"
        );
    }

    #[test]
    fn subfile_length_and_block() {
        let subfile = smith_john();
        assert_eq!(subfile.length().unwrap().as_str(), "0016");
        assert_eq!(subfile.data_block(), b"DALSMITHDACJOHN\r");
    }

    #[test]
    fn subfile_type_must_be_two_letters() {
        let e = Subfile::new("D", FieldCollection::new()).unwrap_err();
        assert_eq!(e.field(), "subfile type");
        assert!(Subfile::new("D1", FieldCollection::new()).is_err());
    }

    #[test]
    fn offset_bounds() {
        assert_eq!(Subfile::offset(9999).unwrap().as_str(), "9999");
        assert_eq!(
            Subfile::offset(10000),
            Err(BoundsError {
                value: 10000,
                width: 4
            })
        );
    }

    #[test]
    fn length_bounds() {
        // 3 + 9996 + 1 = 10000
        let value = "X".repeat(9996);
        let fields =
            FieldCollection::from_elements([DataElement::new("BIG", "ZZA", value).unwrap()])
                .unwrap();
        let subfile = Subfile::new("ZZ", fields).unwrap();
        assert_eq!(
            subfile.length(),
            Err(BoundsError {
                value: 10000,
                width: 4
            })
        );
    }

    #[test]
    fn single_subfile_layout() {
        let header = Header::new(636014, 10, 0, 1).unwrap();
        let subfiles = [smith_john()];
        let document = Document::new(&header, &subfiles).unwrap();

        let designators = document.designators().unwrap();
        assert_eq!(designators.len(), 1);
        assert_eq!(designators[0].offset.to_u64(), 31);
        assert_eq!(designators[0].length.to_u64(), 16);

        let bytes = document.assemble().unwrap();
        assert_eq!(
            bytes,
            b"@\n\x1e\rANSI 636014100001DL00310016DALSMITHDACJOHN\r"
        );
        assert_eq!(bytes.len(), document.byte_len());
    }

    #[test]
    fn count_mismatch() {
        let header = Header::new(636014, 10, 0, 2).unwrap();
        let subfiles = [smith_john()];
        assert_eq!(
            Document::new(&header, &subfiles).unwrap_err(),
            CountMismatchError {
                declared: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn write_nothing_on_failure() {
        let value = "X".repeat(9996);
        let fields =
            FieldCollection::from_elements([DataElement::new("BIG", "ZZA", value).unwrap()])
                .unwrap();
        let header = Header::new(636014, 10, 0, 1).unwrap();
        let subfiles = [Subfile::new("ZZ", fields).unwrap()];
        let document = Document::new(&header, &subfiles).unwrap();

        let mut out = Vec::new();
        let e = document.write(&mut out).unwrap_err();
        assert_eq!(e.kind(), io::ErrorKind::InvalidData);
        assert!(out.is_empty());
    }

    #[test]
    fn builder_counts_subfiles() {
        let mut builder = FileBuilder::new(636014, 10, 0);
        builder.push(smith_john());
        assert_eq!(builder.header().unwrap().number_of_subfiles(), 1);

        let bytes = builder.into_bytes().unwrap();
        assert_eq!(&bytes[19..21], b"01");
    }
}
