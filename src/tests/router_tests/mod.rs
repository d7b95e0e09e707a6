mod course_tests;
mod subject_tests;

use crate::router::{handle, AppContext};
use astra::{Body, Request, Response};
use std::io::Read;

pub fn get(ctx: &AppContext, uri: &str) -> Result<Response, crate::errors::ServerError> {
    let mut req = Request::new(Body::empty());
    *req.uri_mut() = uri.parse().unwrap();
    handle(req, ctx)
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}
