use crate::protocols::error::LayerError;

/// Bounds-checked view over one layer's input buffer.
///
/// All header decoders read through this type so truncation errors carry
/// the layer name and exact byte counts, and no parser ever indexes the
/// buffer directly.
pub struct HeaderReader<'a> {
    layer: &'static str,
    buffer: &'a [u8],
}

impl<'a> HeaderReader<'a> {
    pub fn new(layer: &'static str, buffer: &'a [u8]) -> Self {
        Self { layer, buffer }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), LayerError> {
        if self.buffer.len() < needed {
            return Err(LayerError::Truncated {
                layer: self.layer,
                needed,
                available: self.buffer.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, LayerError> {
        self.buffer
            .get(offset)
            .copied()
            .ok_or(LayerError::Truncated {
                layer: self.layer,
                needed: offset + 1,
                available: self.buffer.len(),
            })
    }

    pub fn read_u16_be(&self, range: std::ops::Range<usize>) -> Result<u16, LayerError> {
        let bytes: [u8; 2] = self.read_array(range.start)?;
        Ok(u16::from_be_bytes(bytes))
    }

    pub fn read_u32_be(&self, range: std::ops::Range<usize>) -> Result<u32, LayerError> {
        let bytes: [u8; 4] = self.read_array(range.start)?;
        Ok(u32::from_be_bytes(bytes))
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], LayerError> {
        self.buffer
            .get(range.clone())
            .ok_or(LayerError::Truncated {
                layer: self.layer,
                needed: range.end,
                available: self.buffer.len(),
            })
    }

    pub fn read_array<const N: usize>(&self, offset: usize) -> Result<[u8; N], LayerError> {
        let slice = self.read_slice(offset..offset + N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok(out)
    }

    /// Split the buffer after a validated header of `header_len` bytes,
    /// returning the remainder as the next layer's input.
    pub fn split_after_header(&self, header_len: usize) -> Result<&'a [u8], LayerError> {
        self.require_len(header_len)?;
        self.read_slice(header_len..self.buffer.len())
    }
}

#[cfg(test)]
mod tests {
    use super::HeaderReader;
    use crate::protocols::error::LayerError;

    #[test]
    fn require_len_reports_layer_and_counts() {
        let reader = HeaderReader::new("Ethernet", &[0u8; 3]);
        let err = reader.require_len(14).unwrap_err();
        assert_eq!(
            err,
            LayerError::Truncated {
                layer: "Ethernet",
                needed: 14,
                available: 3,
            }
        );
    }

    #[test]
    fn read_u16_be_reads_network_order() {
        let reader = HeaderReader::new("TCP", &[0x08, 0x00]);
        assert_eq!(reader.read_u16_be(0..2).unwrap(), 0x0800);
    }

    #[test]
    fn read_u32_be_reads_network_order() {
        let reader = HeaderReader::new("TCP", &[0x00, 0x00, 0x01, 0x02]);
        assert_eq!(reader.read_u32_be(0..4).unwrap(), 0x0102);
    }

    #[test]
    fn read_array_out_of_bounds_is_truncated() {
        let reader = HeaderReader::new("IP", &[1, 2, 3]);
        let err = reader.read_array::<4>(0).unwrap_err();
        assert!(matches!(err, LayerError::Truncated { needed: 4, .. }));
    }

    #[test]
    fn split_after_header_returns_remainder() {
        let reader = HeaderReader::new("TCP", &[1, 2, 3, 4, 5]);
        let rest = reader.split_after_header(3).unwrap();
        assert_eq!(rest, &[4, 5]);
    }

    #[test]
    fn split_after_header_exact_boundary_is_empty() {
        let reader = HeaderReader::new("TCP", &[1, 2, 3]);
        let rest = reader.split_after_header(3).unwrap();
        assert!(rest.is_empty());
    }
}
