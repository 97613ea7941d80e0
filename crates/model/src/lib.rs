//! Index-side vocabulary shared by the filter compiler and the search engine:
//! typed scalar values, term bytes, mangled field names, the numeric encoder
//! and the filter tree together with the sink that receives it.

pub mod error;
pub mod field;
pub mod filter;
pub mod numeric;
pub mod sink;
pub mod term;
pub mod value;

pub use error::{EncodingError, SinkError};
pub use field::FieldName;
pub use filter::{Bound, Bounds, Filter, PhraseTerm};
pub use numeric::NumericEncoder;
pub use sink::{Combinator, FilterBuilder, FilterSink};
pub use term::Term;
pub use value::{ScalarValue, ValueType};
