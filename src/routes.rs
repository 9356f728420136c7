use crate::actix_web::web::{delete, get, patch, post, resource, scope, ServiceConfig};
use crate::core::ports::repository::Manager;
use crate::core::storer::FileStorer;
use crate::handlers;
use crate::middlewares::jwt::AdminJwt;

/// Registers every route. `/experiences/highlight` must stay ahead of `/experiences/{id}`.
pub fn configure<M, F>(cfg: &mut ServiceConfig, secret: Vec<u8>)
where
    M: Manager + 'static,
    F: FileStorer + 'static,
{
    cfg.service(
        scope("experiences")
            .route("", get().to(handlers::experience::list::<M>))
            .route("", post().to(handlers::experience::submit::<M>))
            .route("highlight", get().to(handlers::experience::highlight::<M>))
            .route("{id}", get().to(handlers::experience::detail::<M>)),
    )
    .service(
        scope("testimonials")
            .route("", get().to(handlers::testimonial::list::<M>))
            .route("", post().to(handlers::testimonial::submit::<M>))
            .route("slides", get().to(handlers::testimonial::slides::<M>)),
    )
    .service(
        scope("notices")
            .route("active", get().to(handlers::notice::active::<M>))
            .route("{slug}", get().to(handlers::notice::by_slug::<M>)),
    )
    .service(
        scope("blog")
            .route("", get().to(handlers::blog::list::<M>))
            .route("{slug}", get().to(handlers::blog::read::<M>))
            .route("{slug}/likes", post().to(handlers::blog::like::<M>)),
    )
    .service(
        scope("elections")
            .route("", get().to(handlers::election::list::<M>))
            .route("current", get().to(handlers::election::current::<M>))
            .route("{id}", get().to(handlers::election::detail::<M>))
            .route("{id}/votes", post().to(handlers::election::vote::<M>))
            .route("{id}/ballots/{voter}", get().to(handlers::election::ballot::<M>)),
    )
    .service(
        scope("content")
            .route("faqs", get().to(handlers::content::faqs))
            .route("timeline", get().to(handlers::content::timeline)),
    )
    .service(
        scope("admin")
            .service(resource("login").route(post().to(handlers::login)))
            .service(resource("logout").route(post().to(handlers::logout)))
            .service(
                scope("")
                    .wrap(AdminJwt::new(secret))
                    .route("session", get().to(handlers::session))
                    .service(
                        scope("experiences")
                            .route("", get().to(handlers::experience::admin_list::<M>))
                            .route("{id}", delete().to(handlers::experience::delete::<M>)),
                    )
                    .service(
                        scope("testimonials")
                            .route("", get().to(handlers::testimonial::admin_list::<M>))
                            .route("{id}", delete().to(handlers::testimonial::delete::<M>)),
                    )
                    .service(
                        scope("notices")
                            .route("", get().to(handlers::notice::list::<M>))
                            .route("", post().to(handlers::notice::create::<M>))
                            .route("{id}", patch().to(handlers::notice::set_active::<M>))
                            .route("{id}", delete().to(handlers::notice::delete::<M>)),
                    )
                    .service(
                        scope("blog")
                            .route("", post().to(handlers::blog::create::<M>))
                            .route("{id}", delete().to(handlers::blog::delete::<M>)),
                    )
                    .service(
                        scope("elections")
                            .route("", post().to(handlers::election::create::<M>))
                            .route("{id}/candidates", post().to(handlers::election::add_candidate::<M>)),
                    )
                    .route("uploads", post().to(handlers::upload::create::<F>)),
            ),
    );
}
