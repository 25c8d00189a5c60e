// Double to fixed-width integer conversions with ECMAScript semantics.
// Pure bit-pattern arithmetic: no allocation, no state, total over every
// f64 input including all NaN payloads.
pub(crate) mod convert;
pub(crate) mod double;

pub use convert::{
    to_int8, to_int16, to_int32, to_int64, to_int_width, to_integer, to_uint8, to_uint16, to_uint32, to_uint64, to_uint_width,
};
