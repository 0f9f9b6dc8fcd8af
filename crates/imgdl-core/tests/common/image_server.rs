//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed set of paths. Each route answers HEAD and GET with its own
//! status, so tests can simulate a 404 on the status check or a failure on the
//! body fetch. Every request is recorded as `"METHOD /path"`.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct Route {
    pub head_status: &'static str,
    pub get_status: &'static str,
    pub body: Vec<u8>,
    /// Sent as a `Location` header when set.
    pub location: Option<&'static str>,
}

impl Route {
    /// 200 for both HEAD and GET.
    pub fn ok(body: Vec<u8>) -> Self {
        Self {
            head_status: "200 OK",
            get_status: "200 OK",
            body,
            location: None,
        }
    }

    /// Same status for HEAD and GET, empty body.
    pub fn status(status: &'static str) -> Self {
        Self {
            head_status: status,
            get_status: status,
            body: Vec::new(),
            location: None,
        }
    }

    /// 301 to `to` for both HEAD and GET.
    pub fn redirect(to: &'static str) -> Self {
        Self {
            location: Some(to),
            ..Self::status("301 Moved Permanently")
        }
    }
}

pub struct ImageServer {
    base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ImageServer {
    /// Starts serving `routes` (keyed by path, e.g. "/cat.png") in a background
    /// thread. Unknown paths get 404. The server runs until the process exits.
    pub fn start(routes: Vec<(&str, Route)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let routes: Arc<HashMap<String, Route>> = Arc::new(
            routes
                .into_iter()
                .map(|(p, r)| (p.to_string(), r))
                .collect(),
        );
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                let log = Arc::clone(&log);
                thread::spawn(move || handle(stream, &routes, &log));
            }
        });
        Self {
            base: format!("http://127.0.0.1:{}", port),
            requests,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<String, Route>,
    log: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let path = parts.next().unwrap_or("").to_string();
    log.lock().unwrap().push(format!("{} {}", method, path));

    let missing = Route::status("404 Not Found");
    let route = routes.get(&path).unwrap_or(&missing);
    let (status, send_body) = if method.eq_ignore_ascii_case("HEAD") {
        (route.head_status, false)
    } else if method.eq_ignore_ascii_case("GET") {
        (route.get_status, true)
    } else {
        ("405 Method Not Allowed", false)
    };
    let location = route
        .location
        .map(|to| format!("Location: {}\r\n", to))
        .unwrap_or_default();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nContent-Type: image/png\r\n{}Connection: close\r\n\r\n",
        status,
        route.body.len(),
        location
    );
    let _ = stream.write_all(response.as_bytes());
    if send_body {
        let _ = stream.write_all(&route.body);
    }
}
