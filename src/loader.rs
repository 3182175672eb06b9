use crate::error::{Result, VmError};
use crate::memory::Memory;
use byteorder::{BigEndian, ReadBytesExt};
use std::fs::File;
use std::io::{BufReader, Read};

/// Loads an LC-3 object file from `path` into `memory`, returning the origin address it
/// declared. The object format is a big-endian origin word followed by big-endian program
/// words, with no header or symbol table.
pub fn load_file(path: &str, memory: &mut Memory) -> Result<u16> {
    let file = File::open(path).map_err(VmError::Io)?;
    load(BufReader::new(file), memory)
}

/// Loads an image from any reader, for use with in-memory object streams in tests.
///
/// A stream shorter than two bytes fails to produce an origin and surfaces as
/// [`VmError::Io`]. A trailing odd byte past the last full word is silently ignored.
pub fn load<R: Read>(mut reader: R, memory: &mut Memory) -> Result<u16> {
    let origin = reader.read_u16::<BigEndian>().map_err(VmError::Io)?;
    let mut address = origin;
    let mut count = 0u32;

    loop {
        match reader.read_u16::<BigEndian>() {
            Ok(word) => {
                memory.write(address, word);
                address = address.wrapping_add(1);
                count += 1;
            }
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(VmError::Io(e)),
        }
    }

    log::info!("loaded {} words at origin {:#06x}", count, origin);
    Ok(origin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_words_at_declared_origin() {
        let image: &[u8] = &[0x30, 0x00, 0x12, 0x34, 0x56, 0x78];
        let mut memory = Memory::new();

        let origin = load(image, &mut memory).unwrap();

        assert_eq!(origin, 0x3000);
        struct NoInput;
        impl crate::host::HostIo for NoInput {
            fn try_read_char(&mut self) -> Option<u8> {
                None
            }
            fn read_char_blocking(&mut self) -> u8 {
                0
            }
            fn write_bytes(&mut self, _bytes: &[u8]) {}
        }
        let mut host = NoInput;
        assert_eq!(memory.read(0x3000, &mut host), 0x1234);
        assert_eq!(memory.read(0x3001, &mut host), 0x5678);
        assert_eq!(memory.read(0x3002, &mut host), 0);
    }

    #[test]
    fn ignores_trailing_odd_byte() {
        let image: &[u8] = &[0x30, 0x00, 0x00, 0x01, 0xFF];
        let mut memory = Memory::new();

        let origin = load(image, &mut memory).unwrap();

        assert_eq!(origin, 0x3000);
    }

    #[test]
    fn rejects_stream_shorter_than_origin() {
        let image: &[u8] = &[0x30];
        let mut memory = Memory::new();

        assert!(load(image, &mut memory).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut memory = Memory::new();
        assert!(load_file("/nonexistent/path/to/program.obj", &mut memory).is_err());
    }
}
