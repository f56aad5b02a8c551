// Route exports
pub mod briefs;
pub mod matching;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matching::configure)
            .configure(briefs::configure),
    );
}
