use zerocopy::byteorder::{self, LittleEndian};

use crate::{DecodeConfig, Error, Result, TypeRegistry, Value, cold_path};

/// Cursor over an encoded byte slice.
///
/// Besides the position, a reader carries the registry used to resolve type
/// tags, the decode configuration and the nesting depth of the tree that is
/// currently being decoded. A single reader can decode several consecutive
/// trees (see [`Tree::decode_from`](crate::Tree::decode_from)); a failure
/// leaves trees already returned untouched.
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
    registry: &'a TypeRegistry,
    config: DecodeConfig,
    depth: usize,
    truncated: bool,
}

macro_rules! read_fixed {
    ($($name:ident, $ty:ty, $wire:ident, $size:expr;)*) => {
        $(
            #[inline]
            pub fn $name(&mut self) -> Result<$ty> {
                let bytes: [u8; $size] = self.read_array()?;
                Ok(byteorder::$wire::<LittleEndian>::from_bytes(bytes).get())
            }
        )*
    };
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8], registry: &'a TypeRegistry) -> Self {
        Self::with_config(data, registry, DecodeConfig::default())
    }

    pub fn with_config(data: &'a [u8], registry: &'a TypeRegistry, config: DecodeConfig) -> Self {
        Self {
            data,
            pos: 0,
            registry,
            config,
            depth: 0,
            truncated: false,
        }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }

    /// Nesting level of the tree being decoded, `0` for a root tree.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    #[inline]
    pub fn registry(&self) -> &'a TypeRegistry {
        self.registry
    }

    /// Whether some tree was cut off at the depth limit.
    #[inline]
    pub fn was_truncated(&self) -> bool {
        self.truncated
    }

    /// Runs `f` one nesting level deeper.
    pub fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    pub fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            cold_path();
            return Err(Error::EndOfFile);
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    /// Any non-zero byte reads as `true`.
    #[inline]
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    read_fixed! {
        read_i32, i32, I32, 4;
        read_i64, i64, I64, 8;
        read_f32, f32, F32, 4;
        read_f64, f64, F64, 8;
    }

    /// Reads an `i32` length prefix and checks that `len * element_size`
    /// bytes are still available, so hostile counts never reach an allocator.
    pub fn read_count(&mut self, element_size: usize) -> Result<usize> {
        let len = self.read_i32()?;
        if len < 0 {
            cold_path();
            return Err(Error::InvalidLength(len as i64));
        }
        let len = len as usize;
        if len.saturating_mul(element_size.max(1)) > self.remaining() {
            cold_path();
            return Err(Error::EndOfFile);
        }
        Ok(len)
    }

    fn read_string_len(&mut self) -> Result<usize> {
        let mut value: u32 = 0;
        for shift in (0..35).step_by(7) {
            let byte = self.read_u8()?;
            value |= ((byte & 0x7F) as u32) << shift;
            if byte & 0x80 == 0 {
                if value > i32::MAX as u32 || (shift == 28 && byte > 0x0F) {
                    cold_path();
                    return Err(Error::InvalidLength(value as i64));
                }
                return Ok(value as usize);
            }
        }
        cold_path();
        Err(Error::InvalidLength(value as i64))
    }

    pub fn read_str(&mut self) -> Result<&'a str> {
        let len = self.read_string_len()?;
        Ok(std::str::from_utf8(self.take(len)?)?)
    }

    pub fn read_string(&mut self) -> Result<String> {
        self.read_str().map(str::to_owned)
    }

    fn skip_string(&mut self) -> Result<()> {
        let len = self.read_string_len()?;
        self.take(len).map(|_| ())
    }

    /// Consumes one encoded tree without materialising it.
    ///
    /// Uses an explicit stack so arbitrarily deep input cannot exhaust the
    /// call stack. Leaf values are still decoded (and dropped) through their
    /// registered factories so collaborator-defined kinds stay in sync.
    pub(crate) fn skip_tree(&mut self) -> Result<()> {
        if !self.truncated {
            self.truncated = true;
            tracing::warn!(
                depth = self.depth,
                max_depth = self.config.max_depth,
                "can't fully decode attribute tree, beyond depth limit"
            );
        }

        enum Frame {
            Tree,
            TreeArray(usize),
        }

        let mut stack = vec![Frame::Tree];
        while let Some(frame) = stack.last_mut() {
            match frame {
                Frame::TreeArray(0) => {
                    stack.pop();
                }
                Frame::TreeArray(remaining) => {
                    *remaining -= 1;
                    stack.push(Frame::Tree);
                }
                Frame::Tree => {
                    let tag = self.read_u8()?;
                    if tag == 0 {
                        stack.pop();
                        continue;
                    }
                    self.skip_string()?;
                    let factory = self.registry.resolve(tag)?;
                    let mut value = factory();
                    match value {
                        Value::Tree(_) => stack.push(Frame::Tree),
                        Value::TreeArray(_) => {
                            let count = self.read_count(1)?;
                            stack.push(Frame::TreeArray(count));
                        }
                        Value::ItemStack(_) => {
                            if !self.read_bool()? {
                                // class, id, stack size
                                self.take(12)?;
                                stack.push(Frame::Tree);
                            }
                        }
                        _ => value.decode_payload(self)?,
                    }
                }
            }
        }
        Ok(())
    }
}
