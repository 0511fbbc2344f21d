use std::fs::File;
use std::io::{Error, Result};
use std::os::fd::{AsRawFd, FromRawFd};

use super::Attr;

/// Maps the `-1` failure return of a libc call to `errno`.
fn cvt<T: Copy + PartialEq + From<i8>>(ret: T) -> Result<T> {
    if ret == T::from(-1) {
        Err(Error::last_os_error())
    } else {
        Ok(ret)
    }
}

pub fn perf_event_open(attr: &Attr, pid: i32, cpu: i32, group_fd: i32, flags: u64) -> Result<File> {
    let attr = attr as *const Attr;
    let fd = cvt(unsafe { libc::syscall(libc::SYS_perf_event_open, attr, pid, cpu, group_fd, flags) })?;
    // The kernel hands over a fresh descriptor that nothing else owns.
    Ok(unsafe { File::from_raw_fd(fd as _) })
}

pub fn ioctl(file: &File, op: u64) -> Result<i32> {
    cvt(unsafe { libc::ioctl(file.as_raw_fd(), op as _) })
}

pub fn read(file: &File, buf: &mut [u8]) -> Result<usize> {
    let n = cvt(unsafe { libc::read(file.as_raw_fd(), buf.as_mut_ptr().cast(), buf.len()) })?;
    Ok(n as usize)
}
