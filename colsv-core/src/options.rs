use colsv_base::{err, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteMode {
    Always,
    Never,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteMethod {
    /// Prefix `"` and `\` with `\`.
    Escape,
    /// Double every `"`; leave `\` untouched.
    Double,
}

/// All knobs `write_table` understands. See spec §3.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    pub field_sep: u8,
    pub row_sep: RowSep,
    pub na_token: Vec<u8>,
    pub decimal_sep: u8,
    pub quote_mode: QuoteMode,
    pub quote_method: QuoteMethod,
    pub bool_as_int: bool,
    pub emit_row_index: bool,
    pub emit_header: bool,
    pub buffer_mib: usize,
    pub threads: usize,
    pub turbo: bool,
}

/// A 1- or 2-byte row terminator (commonly `\n` or `\r\n`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSep {
    bytes: [u8; 2],
    len: u8,
}

impl RowSep {
    pub fn new(bytes: &[u8]) -> Result<Self> {
        match bytes.len() {
            1 => Ok(RowSep {
                bytes: [bytes[0], 0],
                len: 1,
            }),
            2 => Ok(RowSep {
                bytes: [bytes[0], bytes[1]],
                len: 2,
            }),
            _ => Err(err("row_sep must be 1 or 2 bytes")),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            field_sep: b',',
            row_sep: RowSep::new(b"\n").expect("\\n is a valid row_sep"),
            na_token: Vec::new(),
            decimal_sep: b'.',
            quote_mode: QuoteMode::Auto,
            quote_method: QuoteMethod::Escape,
            bool_as_int: false,
            emit_row_index: false,
            emit_header: false,
            buffer_mib: 8,
            threads: 1,
            turbo: true,
        }
    }
}

impl WriteOptions {
    /// Pre-parallel validation (spec §7 item 5). Must be called, and pass,
    /// before any worker thread is spawned.
    pub fn validate(&self) -> Result<()> {
        if !(1..=1024).contains(&self.buffer_mib) {
            return Err(err(format!(
                "buffer_mib={} outside [1,1024]",
                self.buffer_mib
            )));
        }
        if self.decimal_sep == self.field_sep {
            return Err(err("decimal_sep must differ from field_sep"));
        }
        if self.threads == 0 {
            return Err(err("threads must be at least 1"));
        }
        Ok(())
    }

    /// Upper bound on bytes a single field can expand to when quoted
    /// (spec §4.C: `2 * len(s) + 2`, every byte quote-sensitive).
    pub(crate) fn quoted_reserve(&self, len: usize) -> usize {
        2 * len + 2
    }
}
