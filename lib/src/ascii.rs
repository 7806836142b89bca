use crate::platform::PixelBuffer;
use crate::ramp::AsciiRamp;

/// Map every sample of a pixel buffer to a ramp character
///
/// Rows are visited top to bottom, cells left to right. Each row ends with
/// `\n`, including the last one.
///
/// # Arguments
/// * `buffer` - Resampled RGBA grid, one sample per output character
/// * `ramp` - Characters ordered darkest to lightest
///
/// # Returns
/// `buffer.height()` lines of `buffer.width()` characters each
pub fn map_to_ascii(buffer: &PixelBuffer, ramp: &AsciiRamp) -> String {
    let cells = buffer.width() as usize * buffer.height() as usize;
    let mut ascii = String::with_capacity(cells + buffer.height() as usize);

    for row in buffer.rows() {
        for px in row.chunks_exact(4) {
            ascii.push(ramp.char_for([px[0], px[1], px[2]]));
        }
        ascii.push('\n');
    }

    ascii
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_from(width: u32, height: u32, gray: &[u8]) -> PixelBuffer {
        let data = gray.iter().flat_map(|&g| [g, g, g, 255]).collect();
        PixelBuffer::from_raw(width, height, data).unwrap()
    }

    #[test]
    fn test_row_layout() {
        let ramp = AsciiRamp::new("@ ").unwrap();
        let buffer = buffer_from(3, 2, &[0, 255, 0, 255, 0, 255]);
        assert_eq!(map_to_ascii(&buffer, &ramp), "@ @\n @ \n");
    }

    #[test]
    fn test_every_line_has_width_chars() {
        let ramp = AsciiRamp::new("@%#*+=-:. ").unwrap();
        let gray: Vec<u8> = (0..35).map(|i| (i * 7) as u8).collect();
        let ascii = map_to_ascii(&buffer_from(7, 5, &gray), &ramp);

        assert!(ascii.ends_with('\n'));
        let lines: Vec<_> = ascii.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|line| line.chars().count() == 7));
    }

    #[test]
    fn test_multibyte_ramp_counts_chars() {
        let ramp = AsciiRamp::new("█ ").unwrap();
        let ascii = map_to_ascii(&buffer_from(2, 1, &[0, 0]), &ramp);
        assert_eq!(ascii, "██\n");
    }
}
