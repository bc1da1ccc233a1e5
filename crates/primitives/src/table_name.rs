use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;


/// Name of a table in the store.
///
/// Table names are limited to [`TableName::MAX_LEN`] bytes of ascii alphanumerics,
/// `-`, `_` and `.`. The name `default` is reserved by the storage engine.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct TableName {
    name: String
}


impl TableName {
    pub const MAX_LEN: usize = 64;

    const RESERVED: &'static str = "default";

    pub fn new(name: &str) -> Result<Self, &'static str> {
        if name.is_empty() {
            return Err("table name can't be empty")
        }

        if name.len() > Self::MAX_LEN {
            return Err("table name is too long")
        }

        if !name.as_bytes().iter().copied().all(Self::is_valid_byte) {
            return Err("only ascii alphanumeric, '-', '_' and '.' characters are allowed in table names")
        }

        if name == Self::RESERVED {
            return Err("'default' is a reserved table name")
        }

        Ok(Self {
            name: name.to_string()
        })
    }

    fn is_valid_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b'.'
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}


impl TryFrom<&str> for TableName {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}


impl FromStr for TableName {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}


impl AsRef<str> for TableName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}


impl Display for TableName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}


impl Debug for TableName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
