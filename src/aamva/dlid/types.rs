use std::{fmt, marker::PhantomData, ops::Deref};

/// Value that does not meet the width or character set of its field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {value}")]
pub struct FormatError {
    field: &'static str,
    value: MaybeAscii,
}

impl FormatError {
    pub(crate) fn new(field: &'static str, value: impl AsRef<[u8]>) -> Self {
        Self {
            field,
            value: MaybeAscii(value.as_ref().to_owned()),
        }
    }

    pub(crate) fn with_field(self, field: &'static str) -> Self {
        Self { field, ..self }
    }

    /// Name of the field that was rejected.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Rejected input, as given.
    pub fn value(&self) -> &[u8] {
        &self.value.0
    }
}

#[derive(Clone, PartialEq, Eq)]
struct MaybeAscii(Vec<u8>);

impl fmt::Display for MaybeAscii {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.0) {
            Ok(s) if s.is_ascii() => write!(f, "{s:?}"),
            _ => write!(f, "{:?}", self.0),
        }
    }
}

impl fmt::Debug for MaybeAscii {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Integer that does not fit in its fixed number of decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{value} does not fit in {width} decimal digits")]
pub struct BoundsError {
    pub value: u64,
    pub width: usize,
}

impl BoundsError {
    pub(crate) fn for_field(self, field: &'static str) -> FormatError {
        FormatError::new(field, self.value.to_string())
    }
}

/// ASCII character class.
///
/// # Safety
///
/// The `contains` function must return `true` only for ASCII bytes.
pub unsafe trait CharClass {
    fn contains(c: u8) -> bool;

    fn contains_all(bytes: &[u8]) -> bool {
        bytes.iter().copied().all(Self::contains)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Alpha;

unsafe impl CharClass for Alpha {
    fn contains(c: u8) -> bool {
        c.is_ascii_alphabetic()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Numeric;

unsafe impl CharClass for Numeric {
    fn contains(c: u8) -> bool {
        c.is_ascii_digit()
    }
}

/// Printable ASCII, space included.
///
/// Excludes every control character, in particular the separators and the
/// segment terminator of the data stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Printable;

unsafe impl CharClass for Printable {
    fn contains(c: u8) -> bool {
        c == b' ' || c.is_ascii_graphic()
    }
}

/// Exactly `N` ASCII bytes of class `C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed<C: CharClass, const N: usize> {
    data: [u8; N],
    class: PhantomData<C>,
}

impl<C: CharClass, const N: usize> Fixed<C, N> {
    pub fn new(value: impl AsRef<[u8]>) -> Result<Self, FormatError> {
        let bytes = value.as_ref();
        if bytes.len() != N || !C::contains_all(bytes) {
            return Err(FormatError::new("fixed-width value", bytes));
        }

        let mut data = [0u8; N];
        data.copy_from_slice(bytes);

        Ok(Self {
            data,
            class: PhantomData,
        })
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.data
    }

    pub fn as_str(&self) -> &str {
        unsafe {
            // SAFETY: the character class `C` ensures that all bytes are in the
            //         ASCII range.
            std::str::from_utf8_unchecked(&self.data)
        }
    }
}

impl<const N: usize> Fixed<Numeric, N> {
    /// Largest value representable in `N` digits.
    pub const MAX: u64 = 10u64.pow(N as u32) - 1;

    /// Renders `value` as `N` zero-padded decimal digits.
    ///
    /// Values above [`Self::MAX`] are rejected, never truncated.
    pub fn from_value(value: u64) -> Result<Self, BoundsError> {
        if value > Self::MAX {
            return Err(BoundsError { value, width: N });
        }

        let mut data = [b'0'; N];
        let mut rest = value;
        for digit in data.iter_mut().rev() {
            *digit = b'0' + (rest % 10) as u8;
            rest /= 10;
        }

        Ok(Self {
            data,
            class: PhantomData,
        })
    }

    pub fn to_u64(&self) -> u64 {
        self.data
            .iter()
            .fold(0, |acc, d| acc * 10 + u64::from(d - b'0'))
    }
}

impl<C: CharClass, const N: usize> Deref for Fixed<C, N> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl<C: CharClass, const N: usize> fmt::Display for Fixed<C, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data element identifier, such as `DCS`.
pub type ElementId = Fixed<Alpha, 3>;

/// Subfile type, such as `DL`.
pub type FileType = Fixed<Alpha, 2>;

pub type F2N = Fixed<Numeric, 2>;
pub type F3N = Fixed<Numeric, 3>;
pub type F4N = Fixed<Numeric, 4>;
pub type F6N = Fixed<Numeric, 6>;
