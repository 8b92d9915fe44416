use actix_web::web;

use crate::middleware::auth::AuthMiddleware;

pub mod bookings;
pub mod login;
pub mod sponsors;

// Only known admin resources sit behind the session check, so unknown paths still 404.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/login", web::post().to(login::login))
            .service(
                web::resource("/session")
                    .wrap(AuthMiddleware)
                    .route(web::get().to(login::session)),
            )
            .service(
                web::resource("/summary")
                    .wrap(AuthMiddleware)
                    .route(web::get().to(bookings::summary)),
            )
            .service(
                web::resource("/bookings")
                    .wrap(AuthMiddleware)
                    .route(web::get().to(bookings::list_bookings)),
            )
            .service(
                web::resource("/bookings/{id}/status")
                    .wrap(AuthMiddleware)
                    .route(web::put().to(bookings::update_status)),
            )
            .service(
                web::resource("/sponsors")
                    .wrap(AuthMiddleware)
                    .route(web::get().to(sponsors::list_sponsors)),
            )
            .service(
                web::resource("/sponsors/{id}/toggle")
                    .wrap(AuthMiddleware)
                    .route(web::post().to(sponsors::toggle_sponsor)),
            ),
    );
}
