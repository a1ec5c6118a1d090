use std::io::{BufRead, Write};

use super::{LineReader, ReadError, ReadOutcome};

const INITIAL_CAPACITY: usize = 1024;

/// Byte-level line reader for non-interactive input.
///
/// The line buffer starts at 1 KiB and doubles whenever it fills up. Growth
/// goes through `try_reserve`, so running out of memory surfaces as
/// [`ReadError::Alloc`] instead of aborting the shell.
pub struct StreamReader<R, W> {
    input: R,
    prompt_out: Option<W>,
    buffer: Vec<u8>,
}

impl<R: BufRead> StreamReader<R, std::io::Sink> {
    /// A reader that never prints a prompt.
    pub fn silent(input: R) -> Self {
        Self {
            input,
            prompt_out: None,
            buffer: Vec::new(),
        }
    }
}

impl<R: BufRead, W: Write> StreamReader<R, W> {
    pub fn with_prompt(input: R, prompt_out: W) -> Self {
        Self {
            input,
            prompt_out: Some(prompt_out),
            buffer: Vec::new(),
        }
    }

    fn grow(buffer: &mut Vec<u8>, needed: usize) -> Result<(), ReadError> {
        if buffer.capacity() - buffer.len() >= needed {
            return Ok(());
        }

        let mut target = buffer.capacity().max(INITIAL_CAPACITY);
        while target - buffer.len() < needed {
            target = target.checked_mul(2).ok_or(ReadError::Overflow)?;
        }
        buffer.try_reserve_exact(target - buffer.len())?;
        Ok(())
    }

    /// Reads up to and excluding the next `\n`. Returns `false` when end of
    /// input was reached before any byte was read.
    fn fill_line(&mut self) -> Result<bool, ReadError> {
        self.buffer.clear();
        let mut seen_any = false;

        loop {
            let available = match self.input.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if available.is_empty() {
                return Ok(seen_any);
            }
            seen_any = true;

            let (chunk, done) = match available.iter().position(|&b| b == b'\n') {
                Some(pos) => (&available[..pos], Some(pos + 1)),
                None => (available, None),
            };
            Self::grow(&mut self.buffer, chunk.len())?;
            self.buffer.extend_from_slice(chunk);

            match done {
                Some(consumed) => {
                    self.input.consume(consumed);
                    return Ok(true);
                }
                None => {
                    let consumed = chunk.len();
                    self.input.consume(consumed);
                }
            }
        }
    }

    #[cfg(test)]
    fn capacity(&self) -> usize {
        self.buffer.capacity()
    }
}

impl<R: BufRead, W: Write> LineReader for StreamReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ReadError> {
        if let Some(out) = self.prompt_out.as_mut() {
            out.write_all(prompt.as_bytes())?;
            out.flush()?;
        }

        if !self.fill_line()? {
            return Ok(ReadOutcome::Eof);
        }

        let line = std::str::from_utf8(&self.buffer).map_err(ReadError::InvalidUtf8)?;
        Ok(ReadOutcome::Line(line.to_string()))
    }
}
