//! AAMVA DL/ID Card Design Standard data stream.
//!
//! See: <https://www.aamva.org/assets/best-practices,-guides,-standards,-manuals,-whitepapers/aamva-dl-id-card-design-standard-(2020)>
//!
//! A stream is laid out as a fixed header, a designator table giving the
//! type, offset and length of every subfile, then the subfile data blocks:
//!
//! ```text
//! @ LF RS CR "ANSI " IIN(6) version(2) jurisdiction version(2) count(2)
//! type(2) offset(4) length(4)    (once per subfile)
//! element ID(3) value ... CR     (once per subfile)
//! ```
mod macros;

pub(crate) use macros::*;

pub mod types;
pub use types::{BoundsError, ElementId, FileType, FormatError};

mod dl;
pub use dl::*;

mod element;
pub use element::*;

pub mod pdf_417;
pub use pdf_417::{
    CountMismatchError, Document, EncodeError, FileBuilder, Header, HeaderParams, Subfile,
    SubfileDesignator,
};
