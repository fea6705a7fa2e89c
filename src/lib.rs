//! This library encodes driver license and ID card data into the
//! [AAMVA DL/ID][aamva] data stream carried by the PDF417 barcode on the
//! back of North American cards.
//!
//! [aamva]: <https://www.aamva.org/identity/issuance-standards>
//!
//! Data elements are grouped into subfiles, and subfiles are laid out behind
//! a header and a designator table by a [`Document`]. The [`aamva::format`]
//! and [`aamva::jurisdiction`] modules turn form input into element values.
pub mod aamva;

pub use aamva::{
    dlid::{
        BoundsError, CountMismatchError, DataElement, DlElement, Document, DuplicateFieldError,
        EncodeError, FieldCollection, FileBuilder, FormatError, Header, HeaderParams, Subfile,
    },
    issuer_id, UnknownJurisdictionError,
};
