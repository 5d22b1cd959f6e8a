// fixibake-core/tests/common/mod.rs
//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

/// General-purpose flag bit 11: the entry name is UTF-8.
pub const UTF8_NAME_FLAG: u16 = 1 << 11;

/// Builds a stored (uncompressed) ZIP archive with empty entries.
///
/// Names are written as raw bytes and the UTF-8 flag is left clear, the way
/// legacy archivers wrote Shift_JIS or GBK names.
pub fn zip_with_raw_names(names: &[Vec<u8>]) -> Vec<u8> {
    let entries: Vec<(Vec<u8>, u16)> = names.iter().map(|name| (name.clone(), 0)).collect();
    zip_with_flagged_names(&entries)
}

/// Like [`zip_with_raw_names`], with explicit general-purpose flags per entry.
pub fn zip_with_flagged_names(entries: &[(Vec<u8>, u16)]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut central = Vec::new();

    for (name, flags) in entries {
        let offset = out.len() as u32;

        // Local file header
        out.extend_from_slice(&0x0403_4b50u32.to_le_bytes());
        out.extend_from_slice(&20u16.to_le_bytes()); // version needed
        out.extend_from_slice(&flags.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes()); // stored
        out.extend_from_slice(&0u16.to_le_bytes()); // mod time
        out.extend_from_slice(&0x0021u16.to_le_bytes()); // mod date, 1980-01-01
        out.extend_from_slice(&0u32.to_le_bytes()); // crc32 of no data
        out.extend_from_slice(&0u32.to_le_bytes()); // compressed size
        out.extend_from_slice(&0u32.to_le_bytes()); // uncompressed size
        out.extend_from_slice(&(name.len() as u16).to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes()); // extra length
        out.extend_from_slice(name);

        // Central directory header
        central.extend_from_slice(&0x0201_4b50u32.to_le_bytes());
        central.extend_from_slice(&20u16.to_le_bytes()); // version made by
        central.extend_from_slice(&20u16.to_le_bytes()); // version needed
        central.extend_from_slice(&flags.to_le_bytes());
        central.extend_from_slice(&0u16.to_le_bytes()); // stored
        central.extend_from_slice(&0u16.to_le_bytes());
        central.extend_from_slice(&0x0021u16.to_le_bytes());
        central.extend_from_slice(&0u32.to_le_bytes());
        central.extend_from_slice(&0u32.to_le_bytes());
        central.extend_from_slice(&0u32.to_le_bytes());
        central.extend_from_slice(&(name.len() as u16).to_le_bytes());
        central.extend_from_slice(&0u16.to_le_bytes()); // extra length
        central.extend_from_slice(&0u16.to_le_bytes()); // comment length
        central.extend_from_slice(&0u16.to_le_bytes()); // disk number
        central.extend_from_slice(&0u16.to_le_bytes()); // internal attributes
        central.extend_from_slice(&0u32.to_le_bytes()); // external attributes
        central.extend_from_slice(&offset.to_le_bytes());
        central.extend_from_slice(name);
    }

    let central_offset = out.len() as u32;
    out.extend_from_slice(&central);

    // End of central directory
    out.extend_from_slice(&0x0605_4b50u32.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    out.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    out.extend_from_slice(&(central.len() as u32).to_le_bytes());
    out.extend_from_slice(&central_offset.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes()); // comment length
    out
}

/// Encodes each name with `encoding`. Panics on unmappable characters.
pub fn encode_names(encoding: &'static encoding_rs::Encoding, names: &[&str]) -> Vec<Vec<u8>> {
    names
        .iter()
        .map(|name| {
            let (bytes, _, had_errors) = encoding.encode(name);
            assert!(!had_errors, "{} cannot encode {}", encoding.name(), name);
            bytes.into_owned()
        })
        .collect()
}

/// Writes `bytes` to a fresh temporary file.
pub fn temp_file_with(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(bytes).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
