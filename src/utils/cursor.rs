use std::io::{BufRead, Cursor, Read};

use crate::{Error, Result};

pub trait EasyRead {
    fn read_until_checked(&mut self, byte: u8) -> Result<Vec<u8>>;
    fn read_exact_checked(&mut self, len: usize) -> Result<Vec<u8>>;
    fn is_exhausted(&self) -> bool;
}

impl<T: AsRef<[u8]>> EasyRead for Cursor<T> {
    /// Reads up to and including the first `byte` found, returning what came before it.
    ///
    /// Running out of data before finding `byte` is reported as a corrupt object, so callers can
    /// just use the `?` operator.
    fn read_until_checked(&mut self, byte: u8) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        BufRead::read_until(self, byte, &mut buf)?;
        if buf.pop() != Some(byte) {
            return Err(Error::corrupt(format!(
                "expected byte {:#04x} before end of data",
                byte
            )));
        }
        Ok(buf)
    }

    /// Reads exactly `len` bytes no matter their content.
    fn read_exact_checked(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0; len];
        self.read_exact(&mut buf).map_err(|_| {
            Error::corrupt(format!("expected {} more bytes before end of data", len))
        })?;
        Ok(buf)
    }

    fn is_exhausted(&self) -> bool {
        self.position() >= self.get_ref().as_ref().len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_until_checked() {
        let mut cursor = Cursor::new(b"100644 name\0rest".as_slice());
        assert_eq!(b"100644".to_vec(), cursor.read_until_checked(b' ').unwrap());
        assert_eq!(b"name".to_vec(), cursor.read_until_checked(b'\0').unwrap());
        assert!(cursor.read_until_checked(b'\0').is_err());
    }

    #[test]
    fn test_read_exact_checked() {
        let mut cursor = Cursor::new([0u8, 0, 32, 1].as_slice());
        assert_eq!(vec![0u8, 0, 32], cursor.read_exact_checked(3).unwrap());
        assert!(!cursor.is_exhausted());
        assert!(cursor.read_exact_checked(2).is_err());
    }
}
