use actix_web::web::{self};

pub mod routes {
    pub mod customer;
    pub mod metric;
    pub mod plan;
}

mod services {
    pub(crate) mod customer;
    pub(crate) mod metric;
    pub(crate) mod plan;
}

mod dtos {
    pub(crate) mod customer;
    pub(crate) mod plan;
}

pub fn mount_plans() -> actix_web::Scope {
    web::scope("/plans")
        .service(routes::plan::get_plans)
        .service(routes::plan::post_plan)
        .service(routes::plan::put_plan)
        .service(routes::plan::delete_plan)
}

pub fn mount_customers() -> actix_web::Scope {
    web::scope("/customers")
        .service(routes::customer::get_customers)
        .service(routes::customer::post_customer)
        .service(routes::customer::post_subscribe)
}

pub fn mount_metrics() -> actix_web::Scope {
    web::scope("/metrics").service(routes::metric::get_dashboard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test, web::Data};
    use chrono::{Duration, Utc};
    use std::sync::Arc;
    use store::BillingStore;
    use store::models::customer::Customer;
    use store::models::plan::Plan;

    async fn spawn_app(
        store: Arc<BillingStore>,
    ) -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        test::init_service(
            App::new()
                .app_data(Data::new(store))
                .service(mount_plans())
                .service(mount_customers())
                .service(mount_metrics()),
        )
        .await
    }

    #[actix_web::test]
    async fn starter_signup_flow_ends_in_trial() {
        let store = store::setup(false);
        let app = spawn_app(store).await;

        // create the Starter plan
        let req = test::TestRequest::post()
            .uri("/plans")
            .set_json(serde_json::json!({
                "name": "Starter",
                "interval": "monthly",
                "basePrice": 29,
                "freeTrialDays": 14
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 201);
        let plan: Plan = test::read_body_json(res).await;
        assert_eq!(plan.name, "Starter");

        // create the customer
        let req = test::TestRequest::post()
            .uri("/customers")
            .set_json(serde_json::json!({
                "email": "a@b.com",
                "companyName": "Acme"
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 201);
        let customer: Customer = test::read_body_json(res).await;

        // subscribe
        let before = Utc::now();
        let req = test::TestRequest::post()
            .uri(&format!("/customers/{}/subscribe", customer.id))
            .set_json(serde_json::json!({ "planId": plan.id }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 200);
        let subscribed: Customer = test::read_body_json(res).await;
        let after = Utc::now();

        assert_eq!(subscribed.status.as_str(), "trialing");
        assert_eq!(
            subscribed.current_plan.as_ref().map(|p| p.name.as_str()),
            Some("Starter")
        );
        let trial_ends_at = subscribed.trial_ends_at.unwrap();
        assert!(trial_ends_at >= before + Duration::days(14));
        assert!(trial_ends_at <= after + Duration::days(14));
    }

    #[actix_web::test]
    async fn subscribe_to_unknown_plan_is_404() {
        let store = store::setup(false);
        let app = spawn_app(store.clone()).await;

        let customer = store.customers().create(store::dtos::customer::NewCustomer {
            email: "a@b.com".to_string(),
            company_name: "Acme".to_string(),
        });

        let req = test::TestRequest::post()
            .uri(&format!("/customers/{}/subscribe", customer.id))
            .set_json(serde_json::json!({ "planId": uuid::Uuid::new_v4() }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 404);
    }

    #[actix_web::test]
    async fn invalid_plan_payload_is_rejected() {
        let store = store::setup(false);
        let app = spawn_app(store.clone()).await;

        let req = test::TestRequest::post()
            .uri("/plans")
            .set_json(serde_json::json!({
                "name": "",
                "interval": "monthly",
                "basePrice": 29,
                "freeTrialDays": 14
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 400);
        assert!(store.plans().list().is_empty());
    }

    #[actix_web::test]
    async fn update_touches_only_supplied_fields() {
        let store = store::setup(false);
        let app = spawn_app(store.clone()).await;

        let plan = store.plans().create(store::dtos::plan::NewPlan {
            name: "Starter".to_string(),
            interval: store::models::plan::PlanInterval::Monthly,
            base_price: 29.0,
            usage_rate: Some(0.1),
            free_trial_days: 14,
        });

        let req = test::TestRequest::put()
            .uri(&format!("/plans/{}", plan.id))
            .set_json(serde_json::json!({ "basePrice": 39 }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 200);
        let updated: Plan = test::read_body_json(res).await;
        assert_eq!(updated.base_price, 39.0);
        assert_eq!(updated.name, "Starter");
        assert_eq!(updated.free_trial_days, 14);
    }

    #[actix_web::test]
    async fn dashboard_reflects_store_contents() {
        let store = store::setup(true);
        let app = spawn_app(store.clone()).await;

        let req = test::TestRequest::get().uri("/metrics").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 200);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["totalCustomers"], 2);
        assert_eq!(body["totalPlans"], 3);
        // only the Acme customer is plain active, on the $99 Professional plan
        assert_eq!(body["activeCustomers"], 1);
        assert_eq!(body["mrr"], 99.0);
    }
}
