use std::io::BufRead;

use crate::error::ConvertError;

/// Line reader over a `BufRead` that remembers where it is.
///
/// Lines are raw bytes without their `\n` / `\r\n` terminator; BDF headers
/// routinely carry Latin-1 text, so nothing is decoded here.
pub struct LineCursor<R> {
    reader: R,
    buf: Vec<u8>,
    line_no: usize,
}

impl<R: BufRead> LineCursor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_no: 0,
        }
    }

    /// 1-based number of the line last returned, 0 before the first read.
    #[inline(always)]
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Next line, or `None` at end of input.
    pub fn next_line(&mut self) -> Result<Option<&[u8]>, ConvertError> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        let mut line = self.buf.as_slice();
        if let Some(s) = line.strip_suffix(b"\n") {
            line = s;
        }
        if let Some(s) = line.strip_suffix(b"\r") {
            line = s;
        }
        Ok(Some(line))
    }

    /// Next line; end of input is reported as [`ConvertError::Truncated`]
    /// with `rows_read` filled in by the caller's progress.
    pub fn expect_line(&mut self, rows_read: usize) -> Result<&[u8], ConvertError> {
        let line_no = self.line_no;
        match self.next_line()? {
            Some(line) => Ok(line),
            None => Err(ConvertError::Truncated {
                line: line_no,
                rows_read,
            }),
        }
    }
}
