use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Method, Status};
use rocket::{options, routes, Request, Response, Route};

const ALLOWED_METHODS: &str = "DELETE, GET, HEAD, OPTIONS, PATCH, POST, PUT";
const PREFLIGHT_MAX_AGE_SECS: &str = "600";

/// Adds CORS headers to every response whose request carries an allowed `Origin`.
pub struct Cors {
    allowed_origins: Vec<String>,
}

impl Cors {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Cors { allowed_origins }
    }

    fn allows(&self, origin: &str) -> bool {
        self.allowed_origins
            .iter()
            .any(|allowed| allowed == "*" || allowed == origin)
    }
}

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let origin = match request.headers().get_one("Origin") {
            Some(origin) if self.allows(origin) => origin.to_string(),
            _ => return,
        };

        // credentials are allowed, so the origin is echoed instead of "*"
        response.set_header(Header::new("Access-Control-Allow-Origin", origin));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
        response.set_header(Header::new("Vary", "Origin"));

        if request.method() == Method::Options {
            response.set_header(Header::new("Access-Control-Allow-Methods", ALLOWED_METHODS));
            if let Some(headers) = request.headers().get_one("Access-Control-Request-Headers") {
                response.set_header(Header::new(
                    "Access-Control-Allow-Headers",
                    headers.to_string(),
                ));
            }
            response.set_header(Header::new("Access-Control-Max-Age", PREFLIGHT_MAX_AGE_SECS));
        }
    }
}

#[options("/<_..>")]
pub fn preflight() -> Status {
    Status::Ok
}

pub fn cors_routes() -> Vec<Route> {
    routes![preflight]
}
