// src/exit.rs
//! Process exit codes for `flycombi`.

use std::process::Termination;

use crate::error::NetworkError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum FlyCombiExit {
    /// Every command was read and answered.
    Success = 0,
    /// I/O or configuration failure.
    Error = 1,
    /// The airports or flights file is malformed.
    InvalidInput = 2,
}

impl FlyCombiExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Maps a failed run to its exit code.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<NetworkError>() {
            Some(NetworkError::Parse { .. }) => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for FlyCombiExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
