//! Blocking HTTP GET over libcurl.
//!
//! Both functions run in the current thread; async callers wrap them in
//! `spawn_blocking`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use crate::config::CastbgConfig;
use crate::error::{Error, FetchError};

/// Curl settings shared by every request.
#[derive(Debug, Clone, Default)]
pub struct HttpOptions {
    pub user_agent: Option<String>,
    pub connect_timeout: Option<Duration>,
    pub max_redirections: Option<u32>,
}

impl From<&CastbgConfig> for HttpOptions {
    fn from(cfg: &CastbgConfig) -> Self {
        Self {
            user_agent: cfg.user_agent.clone(),
            connect_timeout: Some(Duration::from_secs(cfg.connect_timeout_secs)),
            max_redirections: Some(cfg.max_redirections),
        }
    }
}

fn new_easy(url: &str, opts: &HttpOptions) -> Result<curl::easy::Easy, curl::Error> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    if let Some(max) = opts.max_redirections {
        easy.max_redirections(max)?;
    }
    if let Some(timeout) = opts.connect_timeout {
        easy.connect_timeout(timeout)?;
    }
    if let Some(agent) = &opts.user_agent {
        easy.useragent(agent)?;
    }
    Ok(easy)
}

fn check_status(easy: &mut curl::easy::Easy, url: &str) -> Result<(), FetchError> {
    let status = easy.response_code()?;
    if !(200..300).contains(&status) {
        return Err(FetchError::Http {
            url: url.to_string(),
            status,
        });
    }
    Ok(())
}

/// GETs `url` and returns the whole body.
pub fn get_body(url: &str, opts: &HttpOptions) -> Result<Vec<u8>, FetchError> {
    let mut body = Vec::new();
    let mut easy = new_easy(url, opts)?;
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }
    check_status(&mut easy, url)?;
    Ok(body)
}

/// GETs `url` and streams the body into `dest` (created or truncated).
/// Returns the number of bytes written.
///
/// A non-2xx response leaves whatever body the server sent in `dest`.
pub fn get_to_file(url: &str, dest: &Path, opts: &HttpOptions) -> Result<u64, Error> {
    let file = File::create(dest).map_err(|e| Error::io(dest, e))?;
    let mut out = BufWriter::new(file);
    let mut written = 0u64;
    let mut write_err: Option<std::io::Error> = None;

    let mut easy = new_easy(url, opts).map_err(FetchError::from)?;
    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| match out.write_all(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    write_err = Some(e);
                    Ok(0) // abort transfer
                }
            })
            .map_err(FetchError::from)?;
        transfer.perform()
    };

    if let Some(e) = write_err {
        return Err(Error::io(dest, e));
    }
    performed.map_err(FetchError::from)?;
    out.flush().map_err(|e| Error::io(dest, e))?;
    check_status(&mut easy, url)?;
    Ok(written)
}
