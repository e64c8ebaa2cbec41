use actix_web::{delete, get, post, put, web, HttpResponse};
use shared::{Gym, GymId, PersonId, PersonPayload};
use tracing::info;

use crate::error::ApiError;
use crate::store::Store;

type Response = Result<HttpResponse, ApiError>;

// ---- Gyms ("/api/gyms*") ----

#[get("/gyms")]
async fn list_gyms(store: web::Data<Store>) -> Response {
    Ok(HttpResponse::Ok().json(store.gyms()?))
}

#[get("/gyms/{id}")]
async fn get_gym(store: web::Data<Store>, id: web::Path<GymId>) -> Response {
    let id = id.into_inner();
    match store.gym(id)? {
        Some(gym) => Ok(HttpResponse::Ok().json(gym)),
        None => Err(ApiError::gym_not_found(id)),
    }
}

#[post("/gyms")]
async fn create_gym(store: web::Data<Store>, body: web::Json<Gym>) -> Response {
    let gym = store.create_gym(body.into_inner())?;
    info!(id = ?gym.id, kind = %gym.kind, "gym created");
    Ok(HttpResponse::Ok().json(gym))
}

#[put("/gyms/{id}")]
async fn update_gym(
    store: web::Data<Store>,
    id: web::Path<GymId>,
    body: web::Json<Gym>,
) -> Response {
    let gym = store.update_gym(id.into_inner(), body.into_inner())?;
    info!(id = ?gym.id, "gym updated");
    Ok(HttpResponse::Ok().json(gym))
}

#[delete("/gyms/{id}")]
async fn delete_gym(store: web::Data<Store>, id: web::Path<GymId>) -> Response {
    let id = id.into_inner();
    store.delete_gym(id)?;
    info!(id, "gym deleted");
    Ok(HttpResponse::NoContent().finish())
}

// ---- Persons ("/api/persons*") ----

#[get("/persons")]
async fn list_people(store: web::Data<Store>) -> Response {
    Ok(HttpResponse::Ok().json(store.people()?))
}

#[get("/persons/{id}")]
async fn get_person(store: web::Data<Store>, id: web::Path<PersonId>) -> Response {
    Ok(HttpResponse::Ok().json(store.person(id.into_inner())?))
}

#[post("/persons")]
async fn create_person(store: web::Data<Store>, body: web::Json<PersonPayload>) -> Response {
    let person = store.create_person(body.into_inner())?;
    info!(id = ?person.id, "client created");
    Ok(HttpResponse::Ok().json(person))
}

#[put("/persons/{id}")]
async fn update_person(
    store: web::Data<Store>,
    id: web::Path<PersonId>,
    body: web::Json<PersonPayload>,
) -> Response {
    let person = store.update_person(id.into_inner(), body.into_inner())?;
    info!(id = ?person.id, "client updated");
    Ok(HttpResponse::Ok().json(person))
}

#[put("/persons/{person_id}/gym/{gym_id}")]
async fn assign_gym(store: web::Data<Store>, path: web::Path<(PersonId, GymId)>) -> Response {
    let (person_id, gym_id) = path.into_inner();
    let person = store.assign_gym(person_id, gym_id)?;
    info!(person = person_id, gym = gym_id, "gym assigned");
    Ok(HttpResponse::Ok().json(person))
}

#[delete("/persons/{id}")]
async fn delete_person(store: web::Data<Store>, id: web::Path<PersonId>) -> Response {
    let id = id.into_inner();
    store.delete_person(id)?;
    info!(id, "client deleted");
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_gyms)
        .service(get_gym)
        .service(create_gym)
        .service(update_gym)
        .service(delete_gym)
        .service(list_people)
        .service(get_person)
        .service(create_person)
        .service(update_person)
        .service(assign_gym)
        .service(delete_person);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::json;
    use shared::Person;

    macro_rules! app {
        ($dir:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(Store::open($dir.path()).unwrap()))
                    .service(web::scope("/api").configure(configure)),
            )
            .await
        };
    }

    #[actix_rt::test]
    async fn gym_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let app = app!(dir);

        let req = test::TestRequest::post()
            .uri("/api/gyms")
            .set_json(json!({"type": "Yoga", "number": "", "address": ""}))
            .to_request();
        let created: Gym = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created.id, Some(1));
        assert_eq!(created.kind, "Yoga");

        let req = test::TestRequest::put()
            .uri("/api/gyms/1")
            .set_json(json!({"type": "Yoga", "number": "B2", "address": "Main St"}))
            .to_request();
        let updated: Gym = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.number, "B2");

        let req = test::TestRequest::get().uri("/api/gyms").to_request();
        let gyms: Vec<Gym> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(gyms, vec![updated]);

        let req = test::TestRequest::delete().uri("/api/gyms/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::delete().uri("/api/gyms/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_rt::test]
    async fn blank_name_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let app = app!(dir);

        let req = test::TestRequest::post()
            .uri("/api/persons")
            .set_json(json!({"name": "  ", "phoneNumber": "555"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_rt::test]
    async fn create_then_assign_then_update() {
        let dir = tempfile::tempdir().unwrap();
        let app = app!(dir);

        let req = test::TestRequest::post()
            .uri("/api/gyms")
            .set_json(json!({"type": "Pool", "number": "A1", "address": "Main St"}))
            .to_request();
        let pool: Gym = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/persons")
            .set_json(json!({"name": "A", "phoneNumber": "555"}))
            .to_request();
        let person: Person = test::call_and_read_body_json(&app, req).await;
        assert_eq!(person.id, Some(1));
        assert_eq!(person.gym, None);

        let req = test::TestRequest::put().uri("/api/persons/1/gym/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/persons").to_request();
        let people: Vec<Person> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(people[0].gym, Some(pool));

        let req = test::TestRequest::put()
            .uri("/api/persons/1")
            .set_json(json!({"name": "A", "phoneNumber": "556"}))
            .to_request();
        let updated: Person = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.phone_number, "556");
        assert_eq!(updated.gym, None);
    }

    #[actix_rt::test]
    async fn assigning_unknown_gym_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let app = app!(dir);

        let req = test::TestRequest::post()
            .uri("/api/persons")
            .set_json(json!({"name": "A", "phoneNumber": ""}))
            .to_request();
        let _: Person = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::put().uri("/api/persons/1/gym/9").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::put().uri("/api/persons/7/gym/9").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_rt::test]
    async fn deleted_gym_reads_back_as_no_gym() {
        let dir = tempfile::tempdir().unwrap();
        let app = app!(dir);

        let req = test::TestRequest::post()
            .uri("/api/gyms")
            .set_json(json!({"type": "Pool", "number": "", "address": ""}))
            .to_request();
        let _: Gym = test::call_and_read_body_json(&app, req).await;
        let req = test::TestRequest::post()
            .uri("/api/persons")
            .set_json(json!({"name": "A", "phoneNumber": ""}))
            .to_request();
        let _: Person = test::call_and_read_body_json(&app, req).await;
        let req = test::TestRequest::put().uri("/api/persons/1/gym/1").to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::delete().uri("/api/gyms/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri("/api/persons/1").to_request();
        let person: Person = test::call_and_read_body_json(&app, req).await;
        assert_eq!(person.gym, None);
    }
}
