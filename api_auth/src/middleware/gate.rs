use std::{future::Future, pin::Pin, sync::Arc};

use actix_session::SessionExt;
use actix_web::{
    Error, HttpResponse,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures::future::{Ready, ok};

/// Boolean gate in front of the store operations: either a session cookie
/// carries a logged-in user or the request is turned away with 401. There is
/// no finer-grained permission model.
pub struct SessionGate;

impl SessionGate {
    pub fn new() -> Self {
        SessionGate
    }
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Transform = SessionGateService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(SessionGateService {
            service: Arc::new(service),
        })
    }
}

pub struct SessionGateService<S> {
    service: Arc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // only gate paths under "/api/secured"
        if !req.path().contains("/api/secured") {
            let fut = self.service.call(req);
            return Box::pin(async move { fut.await.map(|res| res.map_into_boxed_body()) });
        }

        let logged_in = matches!(req.get_session().get::<String>("user"), Ok(Some(_)));
        let srv = Arc::clone(&self.service);

        Box::pin(async move {
            if logged_in {
                srv.call(req).await.map(|res| res.map_into_boxed_body())
            } else {
                let response = HttpResponse::Unauthorized()
                    .json(serde_json::json!({"error": "Not logged in"}))
                    .map_into_boxed_body();
                Ok(req.into_response(response))
            }
        })
    }
}
