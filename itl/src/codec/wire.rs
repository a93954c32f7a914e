//! Big-endian byte and word primitives the codec is built on
//!
//! All multi-byte values in the format are stored most significant byte
//! first. The `read_*`/`write_*` functions advance the underlying stream;
//! the `peek_*` variants leave its position untouched.

use std::{
    io::{Error, ErrorKind, Read, Result, Write},
    slice,
};
use system_interface::io::Peek;

pub fn read_byte<R>(mut reader: R) -> Result<u8>
where
    R: Read,
{
    let mut byte = 0;
    reader.read_exact(slice::from_mut(&mut byte))?;
    Ok(byte)
}

pub fn write_byte<W>(mut writer: W, value: u8) -> Result<()>
where
    W: Write,
{
    writer.write_all(slice::from_ref(&value))
}

pub fn read_u16<R>(mut reader: R) -> Result<u16>
where
    R: Read,
{
    let high = read_byte(&mut reader)?;
    let low = read_byte(&mut reader)?;
    Ok(u16::from(high) << 8 | u16::from(low))
}

pub fn write_u16<W>(mut writer: W, value: u16) -> Result<()>
where
    W: Write,
{
    write_byte(&mut writer, (value >> 8) as u8)?;
    write_byte(&mut writer, value as u8)
}

pub fn read_u32<R>(mut reader: R) -> Result<u32>
where
    R: Read,
{
    let high = read_u16(&mut reader)?;
    let low = read_u16(&mut reader)?;
    Ok(u32::from(high) << 16 | u32::from(low))
}

pub fn write_u32<W>(mut writer: W, value: u32) -> Result<()>
where
    W: Write,
{
    write_u16(&mut writer, (value >> 16) as u16)?;
    write_u16(&mut writer, value as u16)
}

pub fn peek_byte<R>(reader: R) -> Result<u8>
where
    R: Read + Peek,
{
    let mut bytes = [0; 1];
    peek_exact(reader, &mut bytes)?;
    Ok(bytes[0])
}

pub fn peek_u16<R>(reader: R) -> Result<u16>
where
    R: Read + Peek,
{
    let mut bytes = [0; 2];
    peek_exact(reader, &mut bytes)?;
    Ok(u16::from_be_bytes(bytes))
}

pub fn peek_u32<R>(reader: R) -> Result<u32>
where
    R: Read + Peek,
{
    let mut bytes = [0; 4];
    peek_exact(reader, &mut bytes)?;
    Ok(u32::from_be_bytes(bytes))
}

/// Fill `bytes` from the stream without advancing its position
fn peek_exact<R>(mut reader: R, bytes: &mut [u8]) -> Result<()>
where
    R: Read + Peek,
{
    if reader.peek(bytes)? < bytes.len() {
        return Err(Error::from(ErrorKind::UnexpectedEof));
    }

    Ok(())
}
