use std::fmt;
use std::hash::Hash;

/// Internal identifier of one stored record.
///
/// Only used as the indirection between the namespace indexes and the
/// record store. 128 bits wide so randomly drawn ids don't collide in
/// practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u128);

impl RecordId {
    pub const fn from_u128(raw: u128) -> Self {
        RecordId(raw)
    }

    pub const fn as_u128(self) -> u128 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

/// Label of one facet of a composite key.
///
/// Usually a fieldless enum owned by the caller:
///
/// ```
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Id {
///     Primary,
///     Secondary,
/// }
/// ```
///
/// `&'static str` works too.
pub trait Namespace: Copy + Eq + Hash + fmt::Debug {}

impl<T: Copy + Eq + Hash + fmt::Debug> Namespace for T {}

/// Default raw key type: any hashable scalar.
///
/// Keys compare by kind first, then value: `Int(1)` and `Str("1")` are
/// different keys. All integer widths fold into `Int`, so `1u8` and `1i64`
/// are the same key. `Symbol` holds a static label and never equals a
/// `Str` with the same text. Floats have no `Eq`/`Hash` and are not keys.
///
/// Callers can use their own key type instead; it only has to be
/// `Eq + Hash + Clone`, and its `Eq`/`Hash` decide key identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RawKey {
    Int(i128),
    Str(String),
    Bool(bool),
    Symbol(&'static str),
}

impl RawKey {
    /// A symbolic key, distinct from any string key.
    pub const fn symbol(label: &'static str) -> Self {
        RawKey::Symbol(label)
    }
}

impl fmt::Display for RawKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawKey::Int(n) => write!(f, "{n}"),
            RawKey::Str(s) => write!(f, "{s:?}"),
            RawKey::Bool(b) => write!(f, "{b}"),
            RawKey::Symbol(s) => write!(f, "Symbol({s})"),
        }
    }
}

macro_rules! int_keys {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RawKey {
                fn from(n: $t) -> Self {
                    RawKey::Int(n as i128)
                }
            }
        )*
    };
}

int_keys!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<&str> for RawKey {
    fn from(s: &str) -> Self {
        RawKey::Str(s.to_owned())
    }
}

impl From<String> for RawKey {
    fn from(s: String) -> Self {
        RawKey::Str(s)
    }
}

impl From<&String> for RawKey {
    fn from(s: &String) -> Self {
        RawKey::Str(s.clone())
    }
}

impl From<bool> for RawKey {
    fn from(b: bool) -> Self {
        RawKey::Bool(b)
    }
}
