//! `reqwest`-backed client for the `/foods` REST resource.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use url::Url;

use super::error::{ApiError, Result};
use super::FoodsApi;
use crate::constants;
use crate::state::{Dish, DishId, NewDish};

/// Blocking HTTP client bound to one backend base URL.
pub struct HttpFoodsApi {
    client: Client,
    base_url: Url,
}

impl HttpFoodsApi {
    /// Builds a client for `base_url`.
    ///
    /// `timeout` of `None` lets requests wait indefinitely.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed or cannot carry a path,
    /// or if the TLS backend fails to initialise.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("{}/{}", constants::APP_NAME, constants::APP_VERSION))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// `{base}/foods` or `{base}/foods/{id}`, keeping any base path.
    fn endpoint(&self, id: Option<DishId>) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in `new`
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(constants::FOODS_RESOURCE);
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
        }
        url
    }
}

/// Non-2xx responses are failures; the body is not inspected.
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Http(status.as_u16()))
    }
}

impl FoodsApi for HttpFoodsApi {
    fn list(&self) -> Result<Vec<Dish>> {
        let response = self.client.get(self.endpoint(None)).send()?;
        Ok(check_status(response)?.json()?)
    }

    fn create(&self, dish: &NewDish) -> Result<Dish> {
        let response = self.client.post(self.endpoint(None)).json(dish).send()?;
        Ok(check_status(response)?.json()?)
    }

    fn update(&self, id: DishId, dish: &Dish) -> Result<Dish> {
        let response = self.client.put(self.endpoint(Some(id))).json(dish).send()?;
        Ok(check_status(response)?.json()?)
    }

    fn delete(&self, id: DishId) -> Result<()> {
        let response = self.client.delete(self.endpoint(Some(id))).send()?;
        check_status(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::sync::mpsc::{self, Receiver};
    use std::thread;

    const PIZZA_JSON: &str = r#"{"id":7,"name":"Pizza","description":"Cheese","price":"19.90","available":true,"image":"http://x/img.png"}"#;

    /// Answers exactly one request with `status` and `body`, handing back the
    /// raw request text it received.
    fn serve_once(status: &'static str, body: &'static str) -> (String, Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            let _ = tx.send(request);
        });

        (base_url, rx)
    }

    /// Reads headers, then as many body bytes as `Content-Length` announces.
    fn read_request(stream: &mut TcpStream) -> String {
        let mut raw = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&raw);
            if let Some(end) = text.find("\r\n\r\n") {
                let body_len = text[..end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if raw.len() >= end + 4 + body_len {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&raw).into_owned()
    }

    fn received(rx: &Receiver<String>) -> String {
        rx.recv_timeout(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_on_bare_host() {
        let api = HttpFoodsApi::new("http://localhost:3333", None).unwrap();
        assert_eq!(api.endpoint(None).as_str(), "http://localhost:3333/foods");
        assert_eq!(
            api.endpoint(Some(12)).as_str(),
            "http://localhost:3333/foods/12"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let api = HttpFoodsApi::new("https://example.com/api/", None).unwrap();
        assert_eq!(api.endpoint(None).as_str(), "https://example.com/api/foods");

        let api = HttpFoodsApi::new("https://example.com/api", None).unwrap();
        assert_eq!(
            api.endpoint(Some(3)).as_str(),
            "https://example.com/api/foods/3"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = HttpFoodsApi::new("not a url", None);
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl(_))));

        let result = HttpFoodsApi::new("mailto:chef@example.com", None);
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_unreachable_backend_is_network_error() {
        // grab a free port, then release it so nothing is listening there
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let api = HttpFoodsApi::new(
            &format!("http://127.0.0.1:{port}"),
            Some(Duration::from_secs(2)),
        )
        .unwrap();
        assert!(matches!(api.list(), Err(ApiError::Network(_))));
    }

    #[test]
    fn test_server_error_status_is_http_error() {
        let (base_url, rx) = serve_once("500 Internal Server Error", "{}");
        let api = HttpFoodsApi::new(&base_url, Some(Duration::from_secs(5))).unwrap();

        assert!(matches!(api.list(), Err(ApiError::Http(500))));
        assert!(received(&rx).starts_with("GET /foods HTTP/1.1"));
    }

    #[test]
    fn test_create_posts_available_dish_and_decodes_reply() {
        let (base_url, rx) = serve_once("201 Created", PIZZA_JSON);
        let api = HttpFoodsApi::new(&base_url, Some(Duration::from_secs(5))).unwrap();

        let dish = api
            .create(&NewDish::from(crate::state::DishInput {
                name: "Pizza".to_string(),
                description: "Cheese".to_string(),
                price: "19.90".to_string(),
                image: "http://x/img.png".to_string(),
            }))
            .unwrap();

        assert_eq!(dish.id, 7);
        assert_eq!(dish.name, "Pizza");
        assert!(dish.available);

        let request = received(&rx);
        assert!(request.starts_with("POST /foods HTTP/1.1"));
        assert!(request.contains(r#""available":true"#));
        assert!(request.contains(r#""name":"Pizza""#));
    }

    #[test]
    fn test_update_puts_full_record_to_item_path() {
        let (base_url, rx) = serve_once("200 OK", PIZZA_JSON);
        let api = HttpFoodsApi::new(&base_url, Some(Duration::from_secs(5))).unwrap();
        let sent = Dish {
            id: 7,
            name: "Pizza".to_string(),
            description: "Cheese".to_string(),
            price: "19.90".to_string(),
            available: true,
            image: "http://x/img.png".to_string(),
        };

        assert_eq!(api.update(7, &sent).unwrap(), sent);

        let request = received(&rx);
        assert!(request.starts_with("PUT /foods/7 HTTP/1.1"));
        assert!(request.contains(r#""price":"19.90""#));
    }

    #[test]
    fn test_delete_missing_is_http_404() {
        let (base_url, rx) = serve_once("404 Not Found", "{}");
        let api = HttpFoodsApi::new(&base_url, Some(Duration::from_secs(5))).unwrap();

        assert!(matches!(api.delete(3), Err(ApiError::Http(404))));
        assert!(received(&rx).starts_with("DELETE /foods/3 HTTP/1.1"));
    }
}
