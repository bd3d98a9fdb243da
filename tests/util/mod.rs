//! Shared helpers for handler integration tests.

use axum::{
    body::{to_bytes, Body},
    extract::{rejection::FormRejection, FromRequest},
    http::{
        header::{CONTENT_TYPE, LOCATION},
        Request,
    },
    response::{IntoResponse, Response},
    Form,
};
use serde::de::DeserializeOwned;
use tower_sessions::Session;
use wayfarer::{
    model::catalog::{CityForm, StateForm},
    server::model::{db::UserModel, session::user::SessionUserId},
};

/// Binds a user to the session as if they had logged in
pub async fn login_as(session: &Session, user: &UserModel) {
    SessionUserId::bind(session, user.id).await.unwrap();
}

pub fn state_form(name: &str, description: &str, image_reference: &str) -> StateForm {
    StateForm {
        name: name.to_string(),
        description: description.to_string(),
        image_reference: image_reference.to_string(),
    }
}

pub fn city_form(name: &str) -> CityForm {
    CityForm {
        name: name.to_string(),
        description: format!("About {}", name),
        image_reference: format!("{}.png", name.to_lowercase()),
        details: Some(format!("Visiting {}", name)),
    }
}

/// Decodes a urlencoded body the way the router would before handing it to a handler
pub async fn submitted<T: DeserializeOwned>(body: &'static str) -> Result<Form<T>, FormRejection> {
    let req = Request::builder()
        .method("POST")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();

    Form::<T>::from_request(req, &()).await
}

/// Redirect target of a response, panics when there is none
pub fn location(resp: &Response) -> String {
    resp.headers()
        .get(LOCATION)
        .expect("response should be a redirect")
        .to_str()
        .unwrap()
        .to_string()
}

/// Converts a handler result into its response
pub fn respond(result: impl IntoResponse) -> Response {
    result.into_response()
}

/// Parses a page response body as JSON
pub async fn json_body(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
