//! Shared HTTP helpers for the calls and gifts behaviour suites.

use actix_web::http::{Method, header};
use awc::Client;
use serde_json::Value;

use crate::harness::SharedWorld;
use crate::harness::with_world_async;

pub(crate) struct JsonRequest<'a> {
    pub(crate) include_cookie: bool,
    pub(crate) method: Method,
    pub(crate) path: &'a str,
    pub(crate) payload: Option<Value>,
}

impl<'a> JsonRequest<'a> {
    /// Authenticated request without a body.
    pub(crate) fn authenticated(method: Method, path: &'a str) -> Self {
        Self {
            include_cookie: true,
            method,
            path,
            payload: None,
        }
    }

    pub(crate) fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

fn session_cookie(world: &SharedWorld) -> String {
    world
        .borrow()
        .session_cookie
        .clone()
        .expect("session cookie")
        .split(';')
        .next()
        .expect("cookie pair")
        .to_owned()
}

pub(crate) fn login_and_store_cookie(world: &SharedWorld) {
    let (status, cookie_header) = with_world_async(world, |base_url| async move {
        let response = Client::default()
            .post(format!("{base_url}/api/v1/login"))
            .send_json(&serde_json::json!({
                "username": "admin",
                "password": "password"
            }))
            .await
            .expect("login request");

        let status = response.status().as_u16();
        let cookie_header = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_owned());
        (status, cookie_header)
    });

    assert_eq!(status, 200, "fixture login should succeed");
    let mut ctx = world.borrow_mut();
    ctx.session_cookie = cookie_header;
    ctx.last_status = None;
    ctx.last_body = None;
}

pub(crate) fn perform_json_request(world: &SharedWorld, request: JsonRequest<'_>) {
    let cookie = request.include_cookie.then(|| session_cookie(world));
    let (status, body) = with_world_async(world, |base_url| async move {
        let mut builder =
            Client::default().request(request.method, format!("{base_url}{}", request.path));
        if let Some(cookie) = cookie {
            builder = builder.insert_header((header::COOKIE, cookie));
        }
        let mut response = match request.payload {
            Some(payload) => builder.send_json(&payload).await.expect("json request"),
            None => builder.send().await.expect("request"),
        };
        let status = response.status().as_u16();
        let body = response.body().await.expect("body");
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).expect("json body")
        };
        (status, json)
    });

    let mut ctx = world.borrow_mut();
    ctx.last_status = Some(status);
    ctx.last_body = Some(body);
}

pub(crate) fn last_status(world: &SharedWorld) -> u16 {
    world.borrow().last_status.expect("response status")
}

pub(crate) fn last_body(world: &SharedWorld) -> Value {
    world.borrow().last_body.clone().expect("response body")
}
