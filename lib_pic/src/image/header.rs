use log::{debug, error};

use super::config::DimensionPolicy;
use super::format::{FormatError, Header, MAGIC_HEADER};
use crate::constants::HEADER_SIZE;

/// Reads and validates the 8 byte header at the start of `data`.
///
/// # Errors
/// - `FormatError::TruncatedInput` if `data` ends inside the header
/// - `FormatError::BadMagic` if the first four bytes are not `PIC\0`
/// - `FormatError::UnsupportedDimensions` if `policy` rejects the size
pub fn parse_header(data: &[u8], policy: &DimensionPolicy) -> Result<Header, FormatError> {
    let mut cursor = 0;

    // Check the magic number
    if data.len() < Header::MAGIC_SIZE {
        error!("Input ends after {} bytes, inside the magic number", data.len());
        return Err(truncated_header(data));
    }
    let magic = [data[0], data[1], data[2], data[3]];
    if magic != MAGIC_HEADER {
        error!("Invalid magic number {:02x?}", magic);
        return Err(FormatError::BadMagic { found: magic });
    }
    debug!("Magic number validated successfully");
    cursor += Header::MAGIC_SIZE;

    // Read columns and rows
    if data.len() < HEADER_SIZE {
        error!("Input ends after {} bytes, inside the dimensions", data.len());
        return Err(truncated_header(data));
    }
    let columns = read_u16_le(data, cursor)?;
    cursor += Header::DIMENSION_SIZE;
    let rows = read_u16_le(data, cursor)?;
    debug!("Image dimensions read: columns={} rows={}", columns, rows);

    if !policy.accepts(columns, rows) {
        error!(
            "Dimensions {}x{} rejected by policy {:?}",
            columns, rows, policy
        );
        return Err(FormatError::UnsupportedDimensions { columns, rows });
    }

    Ok(Header {
        magic,
        columns,
        rows,
    })
}

fn read_u16_le(data: &[u8], cursor: usize) -> Result<u16, FormatError> {
    let bytes: [u8; 2] = data
        .get(cursor..cursor + Header::DIMENSION_SIZE)
        .and_then(|slice| slice.try_into().ok())
        .ok_or_else(|| truncated_header(data))?;
    Ok(u16::from_le_bytes(bytes))
}

fn truncated_header(data: &[u8]) -> FormatError {
    FormatError::TruncatedInput {
        offset: data.len(),
        required: HEADER_SIZE,
        plane: None,
    }
}
