use crate::serde::Serialize;

#[derive(Debug, Serialize)]
pub struct List<T> {
    list: Vec<T>,
    total: i64,
}

impl<T> List<T> {
    pub fn new(list: Vec<T>, total: i64) -> Self {
        List { list, total }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub id: i32,
}

/// A public record together with the submitter's private contact address, for moderators only.
#[derive(Debug, Serialize)]
pub struct WithContact<T> {
    #[serde(flatten)]
    pub record: T,
    pub email: String,
}
