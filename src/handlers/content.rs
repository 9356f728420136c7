use crate::actix_web::web::Json;
use crate::core::content::{self, Faq, TimelineStep, FAQS};

pub async fn faqs() -> Json<&'static [Faq]> {
    Json(&FAQS)
}

pub async fn timeline() -> Json<Vec<TimelineStep>> {
    Json(content::timeline())
}
