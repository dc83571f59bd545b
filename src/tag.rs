/// Wire type tags of the built-in value kinds.
///
/// Tag `0` is the tree terminator and never identifies a value. Tags past
/// [`Tag::BoolArray`] are free for collaborator-defined kinds registered
/// through [`register`](crate::register).
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Tag {
    End = 0,
    Int = 1,
    Long = 2,
    Double = 3,
    Float = 4,
    String = 5,
    Tree = 6,
    ItemStack = 7,
    Bytes = 8,
    Bool = 9,
    StringArray = 10,
    IntArray = 11,
    FloatArray = 12,
    DoubleArray = 13,
    TreeArray = 14,
    LongArray = 15,
    BoolArray = 16,
}

impl Tag {
    /// First tag not claimed by a built-in kind.
    pub const FIRST_CUSTOM: u8 = 17;

    pub const fn from_u8(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::End,
            1 => Self::Int,
            2 => Self::Long,
            3 => Self::Double,
            4 => Self::Float,
            5 => Self::String,
            6 => Self::Tree,
            7 => Self::ItemStack,
            8 => Self::Bytes,
            9 => Self::Bool,
            10 => Self::StringArray,
            11 => Self::IntArray,
            12 => Self::FloatArray,
            13 => Self::DoubleArray,
            14 => Self::TreeArray,
            15 => Self::LongArray,
            16 => Self::BoolArray,
            _ => return None,
        })
    }

    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::Int | Self::Long | Self::Double | Self::Float | Self::Bool
        )
    }

    pub const fn is_array(self) -> bool {
        matches!(
            self,
            Self::Bytes
                | Self::StringArray
                | Self::IntArray
                | Self::FloatArray
                | Self::DoubleArray
                | Self::LongArray
                | Self::BoolArray
        )
    }

    pub const fn is_composite(self) -> bool {
        matches!(self, Self::Tree | Self::ItemStack | Self::TreeArray)
    }

    /// Size in bytes of one fixed-width element, `None` for variable-width kinds.
    pub const fn element_size(self) -> Option<usize> {
        match self {
            Self::Int | Self::IntArray | Self::Float | Self::FloatArray => Some(4),
            Self::Long | Self::LongArray | Self::Double | Self::DoubleArray => Some(8),
            Self::Bool | Self::BoolArray | Self::Bytes => Some(1),
            _ => None,
        }
    }
}

impl From<Tag> for u8 {
    #[inline]
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}
