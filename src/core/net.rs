// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only), with HTTP Basic credentials.

use std::{io::{Read, Write}, net::TcpStream, time::Duration};
use crate::params::{HOST, USER_AGENT};

#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

pub struct Response {
    pub status: u16,
    pub body: String,
}

/// One authenticated GET. CATe keeps no session state; the Authorization
/// header has to ride along on every request.
pub fn http_get(path: &str, creds: &Credentials) -> Result<Response, Box<dyn std::error::Error>> {
    let mut s = TcpStream::connect((HOST, 80))?;
    s.set_read_timeout(Some(Duration::from_secs(15)))?;
    s.set_write_timeout(Some(Duration::from_secs(15)))?;

    let auth = base64(format!("{}:{}", creds.username, creds.password).as_bytes());
    let req = format!(
        "GET {path} HTTP/1.0\r\nHost: {HOST}\r\nUser-Agent: {USER_AGENT}\r\nAuthorization: Basic {auth}\r\nConnection: close\r\n\r\n"
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status_line = resp.split("\r\n").next().unwrap_or("");
    let status = parse_status(status_line).ok_or("Malformed HTTP status line")?;
    let body_idx = resp.find("\r\n\r\n").ok_or("Malformed HTTP response")? + 4;
    Ok(Response { status, body: resp[body_idx..].to_string() })
}

/// GET that insists on a 200 and hands back the body.
pub fn fetch(path: &str, creds: &Credentials) -> Result<String, Box<dyn std::error::Error>> {
    let r = http_get(path, creds)?;
    match r.status {
        200 => Ok(r.body),
        401 => {
            loge!("Authentication failed (401) for {path}");
            Err("Authentication failed (401): check username/password".into())
        }
        status => {
            loge!("HTTP {status} for {path}");
            Err(format!("HTTP error {status} for {HOST}{path}").into())
        }
    }
}

fn parse_status(line: &str) -> Option<u16> {
    line.split_whitespace().nth(1)?.parse().ok()
}

const B64_TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

fn base64(input: &[u8]) -> String {
    let mut out = String::with_capacity(input.len().div_ceil(3) * 4);
    for chunk in input.chunks(3) {
        let b1 = chunk[0];
        let b2 = chunk.get(1).copied().unwrap_or(0);
        let b3 = chunk.get(2).copied().unwrap_or(0);
        let n = u32::from_be_bytes([0, b1, b2, b3]);
        out.push(B64_TABLE[(n >> 18) as usize & 63] as char);
        out.push(B64_TABLE[(n >> 12) as usize & 63] as char);
        out.push(if chunk.len() > 1 { B64_TABLE[(n >> 6) as usize & 63] as char } else { '=' });
        out.push(if chunk.len() > 2 { B64_TABLE[n as usize & 63] as char } else { '=' });
    }
    out
}
