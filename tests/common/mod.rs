//! Minimal canned HTTP backend for exercising the real client.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

pub enum Behaviour {
    Respond { status: &'static str, body: String },
    Hang,
}

pub struct CannedServer {
    pub url: String,
    pub requests: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl Drop for CannedServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub async fn serve(behaviour: Behaviour) -> CannedServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    let requests = Arc::new(Mutex::new(Vec::new()));
    let behaviour = Arc::new(behaviour);

    let seen = Arc::clone(&requests);
    let handle = tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            let seen = Arc::clone(&seen);
            let behaviour = Arc::clone(&behaviour);
            tokio::spawn(async move {
                let request = read_request(&mut stream).await.unwrap_or_default();
                seen.lock().unwrap().push(request);
                match behaviour.as_ref() {
                    Behaviour::Respond { status, body } => {
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status,
                            body.len(),
                            body
                        );
                        let _ = stream.write_all(response.as_bytes()).await;
                        let _ = stream.shutdown().await;
                    }
                    Behaviour::Hang => std::future::pending::<()>().await,
                }
            });
        }
    });

    CannedServer {
        url,
        requests,
        handle,
    }
}

/// Address with nothing listening on it.
pub async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

async fn read_request(stream: &mut TcpStream) -> std::io::Result<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_string();
            let content_length = head
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    if name.eq_ignore_ascii_case("content-length") {
                        value.trim().parse::<usize>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                break;
            }
        }
    }

    Ok(String::from_utf8_lossy(&buf).to_string())
}

pub fn search_body(titles: &[&str]) -> String {
    let leads: Vec<serde_json::Value> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            serde_json::json!({
                "title": title,
                "company": format!("Company {}", i),
                "description": "Remote friendly team",
                "url": format!("https://jobs.example.com/{}", i),
                "source": "Indeed",
                "confidence": 90 - (i as i64) * 15
            })
        })
        .collect();

    serde_json::json!({
        "intent": {
            "job_role": "Web Developer",
            "location": "Lahore",
            "experience_level": "Not Specified",
            "keywords": ["javascript", "react"],
            "search_query": "web developer lahore"
        },
        "leads": leads,
        "total_results": titles.len()
    })
    .to_string()
}
