use log::{debug, warn};
use std::fs;
use std::path::Path;

pub const UNDECODABLE_SENTINEL: &str = "Could not read file - encoding issues";

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Windows-1252 code points for bytes 0x80..=0x9F. `None` marks bytes the
/// code page leaves undefined.
const CP1252_HIGH: [Option<char>; 32] = [
    Some('€'), None, Some('‚'), Some('ƒ'), Some('„'), Some('…'), Some('†'), Some('‡'),
    Some('ˆ'), Some('‰'), Some('Š'), Some('‹'), Some('Œ'), None, Some('Ž'), None,
    None, Some('‘'), Some('’'), Some('“'), Some('”'), Some('•'), Some('–'), Some('—'),
    Some('˜'), Some('™'), Some('š'), Some('›'), Some('œ'), None, Some('ž'), Some('Ÿ'),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8Sig,
    Utf8,
    Latin1,
    Windows1252,
    Iso8859_1,
}

impl Encoding {
    /// Fallback order used for every file of a run.
    pub const DEFAULT_ORDER: [Encoding; 5] = [
        Encoding::Utf8Sig,
        Encoding::Utf8,
        Encoding::Latin1,
        Encoding::Windows1252,
        Encoding::Iso8859_1,
    ];

    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Encoding::Utf8Sig => {
                let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                std::str::from_utf8(body).ok().map(str::to_owned)
            }
            Encoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            Encoding::Latin1 | Encoding::Iso8859_1 => {
                Some(bytes.iter().map(|&b| char::from(b)).collect())
            }
            Encoding::Windows1252 => bytes
                .iter()
                .map(|&b| match b {
                    0x80..=0x9F => CP1252_HIGH[usize::from(b - 0x80)],
                    _ => Some(char::from(b)),
                })
                .collect(),
        }
    }
}

/// Reads files as text, converting every failure into inline sentinel text.
#[derive(Debug, Clone)]
pub struct TextReader {
    encodings: Vec<Encoding>,
}

impl Default for TextReader {
    fn default() -> Self {
        Self::new(Encoding::DEFAULT_ORDER.to_vec())
    }
}

impl TextReader {
    pub fn new(encodings: Vec<Encoding>) -> Self {
        Self { encodings }
    }

    pub fn read(&self, path: &Path) -> String {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!("Error reading {}: {}", path.display(), err);
                return format!("Error reading file: {}", err);
            }
        };

        for encoding in &self.encodings {
            if let Some(text) = encoding.decode(&bytes) {
                debug!(
                    "Decoded {} ({} bytes) as {:?}",
                    path.display(),
                    bytes.len(),
                    encoding
                );
                return text;
            }
        }

        warn!("No supported encoding could decode {}", path.display());
        UNDECODABLE_SENTINEL.to_string()
    }
}

pub fn read_file_safely(path: &Path) -> String {
    TextReader::default().read(path)
}
