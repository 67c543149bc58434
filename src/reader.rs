//! Line reader - splits an input stream into password records.
//!
//! Records end at `\n`, `\r` or NUL. An empty record ended by `\n` is a
//! blank password; empty records ended by `\r` or NUL are skipped. A
//! `\r\n` line ending therefore yields the record and then a blank
//! password.

use std::io::{BufRead, ErrorKind};

use secrecy::SecretSlice;

use crate::config::FIELD_CAPACITY;
use crate::error::Error;

pub struct PasswordReader<R> {
    inner: R,
    max_length: usize,
}

impl<R: BufRead> PasswordReader<R> {
    /// Creates a reader rejecting records longer than `max_length` bytes.
    pub fn new(inner: R, max_length: usize) -> Self {
        Self {
            inner,
            max_length,
        }
    }

    /// Reads the next record.
    ///
    /// Returns `Ok(None)` at end of stream.
    ///
    /// # Errors
    ///
    /// - [`Error::PasswordTooLong`] if the record exceeds the limit; the
    ///   rest of the record is consumed first, but only its first
    ///   `max(max_length, 255)` bytes are kept
    /// - [`Error::Io`] if the underlying reader fails
    pub fn next_password(&mut self) -> Result<Option<SecretSlice<u8>>, Error> {
        let keep = self.max_length.max(FIELD_CAPACITY - 1);
        let mut record = Vec::new();
        let mut length = 0usize;

        loop {
            let Some(byte) = self.next_byte()? else {
                return if length == 0 {
                    Ok(None)
                } else {
                    self.finish(record, length).map(Some)
                };
            };

            match byte {
                b'\n' => return self.finish(record, length).map(Some),
                b'\r' | 0 if length == 0 => continue,
                b'\r' | 0 => return self.finish(record, length).map(Some),
                _ => {
                    length = length.saturating_add(1);
                    if record.len() < keep {
                        record.push(byte);
                    }
                }
            }
        }
    }

    fn next_byte(&mut self) -> Result<Option<u8>, Error> {
        loop {
            let buf = match self.inner.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            let Some(&byte) = buf.first() else {
                return Ok(None);
            };
            self.inner.consume(1);
            return Ok(Some(byte));
        }
    }

    /// `record` holds the first bytes of a record of `length` bytes.
    fn finish(&self, record: Vec<u8>, length: usize) -> Result<SecretSlice<u8>, Error> {
        if length > self.max_length {
            #[cfg(feature = "tracing")]
            tracing::error!(length, limit = self.max_length, "password exceeds length limit");
            return Err(Error::PasswordTooLong {
                password: String::from_utf8_lossy(&record).into_owned(),
                length,
                limit: self.max_length,
            });
        }
        Ok(SecretSlice::from(record))
    }
}

impl<R: BufRead> Iterator for PasswordReader<R> {
    type Item = Result<SecretSlice<u8>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_password().transpose()
    }
}
