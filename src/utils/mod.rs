pub mod io_utils;
pub mod util;

pub use io_utils::{create_writer, output_path};
pub use util::{handle_error_and_exit, QcError, Result};
