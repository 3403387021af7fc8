//! Error handling and exit codes.

use zeck_core::constants::exit_codes;
use zeck_core::ZeckError;

/// Map an application error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ZeckError>()
        .map_or(exit_codes::ERROR_GENERIC, ZeckError::exit_code)
}
