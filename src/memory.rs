use byteorder::ByteOrder;

use crate::{constants, Endian};

/// Represents a memory storage unit with basic read and write operations.
pub trait Storage {
    /// Returns the total length of the storage in bytes.
    ///
    /// # Examples
    /// ```
    /// use brisc::{Memory, Storage};
    ///
    /// let memory = Memory::new(16);
    /// assert_eq!(memory.length(), 16);
    /// ```
    fn length(&self) -> u16;

    /// Checks whether the range `[address..address+length]` is addressable
    /// within the storage.
    ///
    /// # Examples
    /// ```
    /// use brisc::{Memory, Storage};
    ///
    /// let memory = Memory::new(16);
    /// assert_eq!(memory.check_range(4, 12), true);
    /// assert_eq!(memory.check_range(10, 20), false);
    /// ```
    fn check_range(&self, address: u16, length: u16) -> bool;

    /// Immutably borrows the slice at `[address..address+length]`.
    ///
    /// # Errors
    /// Returns an error if the range is not addressable.
    fn borrow_slice(&self, address: u16, length: u16) -> Result<&[u8], ()>;

    /// Mutably borrows the slice at `[address..address+length]`.
    ///
    /// # Errors
    /// Returns an error if the range is not addressable.
    fn borrow_slice_mut(&mut self, address: u16, length: u16) -> Result<&mut [u8], ()>;

    /// Reads the 16-bit value at the specified byte address.
    ///
    /// The conversion is always performed with the byte order defined by the
    /// [`Endian`](../type.Endian.html) type alias.
    ///
    /// # Errors
    /// Returns an error if the range `[address..address+2]` is not
    /// addressable.
    ///
    /// # Examples
    /// ```
    /// use brisc::{Memory, Storage};
    ///
    /// let memory = Memory::from(&[0x01, 0xA5, 0xFF, 0x00][..]);
    /// assert_eq!(memory.read_half(0), Ok(0x01A5));
    /// assert_eq!(memory.read_half(3), Err(()));
    /// ```
    fn read_half(&self, address: u16) -> Result<u16, ()> {
        Ok(Endian::read_u16(
            self.borrow_slice(address, constants::WORD_BYTES)?,
        ))
    }

    /// Writes a 16-bit value to the specified byte address.
    ///
    /// The conversion is always performed with the byte order defined by the
    /// [`Endian`](../type.Endian.html) type alias.
    ///
    /// # Errors
    /// Returns an error if the range `[address..address+2]` is not
    /// addressable.
    ///
    /// # Examples
    /// ```
    /// use brisc::{Memory, Storage};
    ///
    /// let mut memory = Memory::new(4);
    /// assert_eq!(memory.write_half(2, 0x01A5), Ok(()));
    /// assert_eq!(memory.data(), &[0x00, 0x00, 0x01, 0xA5][..]);
    /// assert_eq!(memory.write_half(3, 0x01A5), Err(()));
    /// ```
    fn write_half(&mut self, address: u16, value: u16) -> Result<(), ()> {
        Endian::write_u16(
            self.borrow_slice_mut(address, constants::WORD_BYTES)?,
            value,
        );
        Ok(())
    }
}

/// A contiguous, byte-addressable block of memory.
///
/// The processor owns two of these, each
/// [`MEMORY_BYTES`](constants/constant.MEMORY_BYTES.html) long: one for the
/// text image and one for the data image.
pub struct Memory {
    data: Vec<u8>,
}

impl Memory {
    /// Constructs a zeroed `Memory` of the specified `length`.
    pub fn new(length: u16) -> Memory {
        Memory {
            data: vec![0; length as usize],
        }
    }

    /// Returns the internal block of memory as an immutable slice.
    pub fn data(&self) -> &[u8] {
        &self.data[..]
    }

    /// Overwrites the start of the memory with `image` and zeroes the rest.
    /// The image must fit.
    pub fn load(&mut self, image: &[u8]) {
        for byte in self.data.iter_mut() {
            *byte = 0;
        }
        self.data[..image.len()].copy_from_slice(image);
    }
}

impl Storage for Memory {
    fn length(&self) -> u16 {
        self.data.len() as u16
    }

    fn check_range(&self, address: u16, length: u16) -> bool {
        // Promote to u32 so the end of the range cannot wrap.
        let len = self.data.len() as u32;
        u32::from(address) + u32::from(length) <= len
    }

    fn borrow_slice(&self, address: u16, length: u16) -> Result<&[u8], ()> {
        if self.check_range(address, length) {
            Ok(&self.data[address as usize..(address + length) as usize])
        } else {
            Err(())
        }
    }

    fn borrow_slice_mut(&mut self, address: u16, length: u16) -> Result<&mut [u8], ()> {
        if self.check_range(address, length) {
            Ok(&mut self.data[address as usize..(address + length) as usize])
        } else {
            Err(())
        }
    }
}

impl<'a> From<&'a [u8]> for Memory {
    fn from(s: &'a [u8]) -> Memory {
        Memory { data: Vec::from(s) }
    }
}
