use astra::{Body, ResponseBuilder};
use maud::Markup;

use crate::errors::ServerError;
use crate::responses::ResultResp;

pub fn html_response(markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// Post/redirect/get: mutations answer with a 303 see-other.
pub fn redirect_response(location: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(303)
        .header("Location", location)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

pub fn css_response(css: &'static str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/css; charset=utf-8")
        .body(Body::from(css))
        .map_err(|_| ServerError::InternalError)
}
