//! Terminal queries for hosts sizing the cell grid.
//!
//! # Safety
//! This module calls into libc for `isatty` and the `TIOCGWINSZ` ioctl.

#![allow(unsafe_code)]
#![allow(clippy::borrow_as_ptr)]

use std::io;
use std::os::unix::io::AsRawFd;

/// Check if the given file descriptor is a TTY.
#[must_use]
pub fn is_tty<F: AsRawFd>(fd: &F) -> bool {
    // SAFETY: isatty is safe to call with any fd
    unsafe { libc::isatty(fd.as_raw_fd()) == 1 }
}

/// Size of the terminal on stdout as `(columns, rows)`.
pub fn terminal_size() -> io::Result<(u16, u16)> {
    terminal_size_of(&io::stdout())
}

/// Size of the terminal behind `fd` as `(columns, rows)`.
///
/// Zero dimensions are reported as an error; a grid always has at least one
/// cell.
pub fn terminal_size_of<F: AsRawFd>(fd: &F) -> io::Result<(u16, u16)> {
    // SAFETY: winsize is plain old data; all-zero is a valid value.
    let mut size: libc::winsize = unsafe { std::mem::zeroed() };

    // SAFETY: TIOCGWINSZ writes into the winsize we pass and nothing else.
    let result = unsafe { libc::ioctl(fd.as_raw_fd(), libc::TIOCGWINSZ, &mut size) };

    if result == -1 {
        Err(io::Error::last_os_error())
    } else if size.ws_col == 0 || size.ws_row == 0 {
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "terminal reported zero dimensions",
        ))
    } else {
        Ok((size.ws_col, size.ws_row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_is_tty_does_not_panic() {
        let _ = is_tty(&io::stdin());
        let _ = is_tty(&io::stdout());
    }

    #[test]
    fn test_dev_null_is_not_tty() {
        let file = File::open("/dev/null").unwrap();
        assert!(!is_tty(&file));
        assert!(terminal_size_of(&file).is_err());
    }

    #[test]
    fn test_terminal_size_valid_dimensions() {
        if let Ok((cols, rows)) = terminal_size() {
            assert!(cols > 0);
            assert!(rows > 0);
        }
    }
}
