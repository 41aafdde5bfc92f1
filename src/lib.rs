pub mod args;
pub mod reed_solomon;
pub mod reporters;
pub mod scan;

pub use args::{build_cli, parse_args};
pub use reed_solomon::{
    DecodeError, DecodeResult, Gf16, Gf8, RsDecode16, RsDecode8, RsDecoder, SymbolError,
    Uncorrectable,
};
pub use scan::{ScanConfig, ScanMode, ScanResults};
