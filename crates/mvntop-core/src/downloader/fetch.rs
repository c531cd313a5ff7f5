//! Single-stream HTTP GET to a local file.
//!
//! Streams the response body into `<dest>.part` and renames to `dest` on
//! success, so a failed transfer never leaves a partial file under the
//! final name.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::error::FetchError;
use super::FetchOptions;

// Abort transfers that stall below 1 KiB/s for a minute.
const LOW_SPEED_LIMIT: u32 = 1024;
const LOW_SPEED_TIME: Duration = Duration::from_secs(60);

/// Downloads `url` with a single GET, streaming chunks to `dest`.
/// Returns the number of bytes written.
pub(super) fn fetch_to_file(url: &str, dest: &Path, opts: &FetchOptions) -> Result<u64, FetchError> {
    let part_path = part_path_for(dest)?;

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.transfer_timeout)?;
    easy.low_speed_limit(LOW_SPEED_LIMIT)?;
    easy.low_speed_time(LOW_SPEED_TIME)?;
    if let Some(sz) = opts.buffer_size {
        easy.buffer_size(sz)?;
    }

    let mut file = File::create(&part_path)?;
    let mut written: u64 = 0;
    let mut write_err: Option<io::Error> = None;

    let perform_result = {
        let mut transfer = easy.transfer();
        match transfer.write_function(|data| match file.write_all(data) {
            Ok(()) => {
                written += data.len() as u64;
                Ok(data.len())
            }
            Err(e) => {
                write_err = Some(e);
                Ok(0) // abort transfer
            }
        }) {
            Ok(()) => transfer.perform(),
            Err(e) => Err(e),
        }
    };

    if let Some(e) = write_err.take() {
        let _ = fs::remove_file(&part_path);
        return Err(FetchError::Storage(e));
    }
    if let Err(e) = perform_result {
        let _ = fs::remove_file(&part_path);
        return Err(FetchError::Curl(e));
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        let _ = fs::remove_file(&part_path);
        return Err(FetchError::Http(code));
    }

    file.sync_all()?;
    drop(file);
    fs::rename(&part_path, dest)?;
    Ok(written)
}

/// `<dest>.part`, next to the final path.
fn part_path_for(dest: &Path) -> Result<PathBuf, FetchError> {
    let name = dest
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            FetchError::Storage(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("destination has no usable filename: {}", dest.display()),
            ))
        })?;
    Ok(dest.with_file_name(format!("{name}.part")))
}
