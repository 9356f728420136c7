use std::path::Path;

use crate::actix_multipart::Multipart;
use crate::actix_web::web::{block, BytesMut, Data, Json};
use crate::context::AdminInfo;
use crate::core::storer::FileStorer;
use crate::error::Error;
use crate::futures_util::TryStreamExt;
use crate::serde::Serialize;

pub static UPLOAD_URL_PREFIX: &str = "/uploads";
pub const MAX_FILE_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct Uploaded {
    pub name: String,
    pub url: String,
}

pub async fn create<F: FileStorer + 'static>(admin: AdminInfo, mut payload: Multipart, storer: Data<F>) -> Result<Json<Vec<Uploaded>>, Error> {
    let mut uploaded = Vec::new();
    while let Some(mut field) = payload.try_next().await? {
        let extension = field
            .content_disposition()
            .get_filename()
            .and_then(|f| Path::new(f).extension())
            .and_then(|e| e.to_str())
            .map(str::to_owned);
        let mut content = BytesMut::new();
        while let Some(chunk) = field.try_next().await? {
            if content.len() + chunk.len() > MAX_FILE_BYTES {
                return Err(Error::PayloadTooLarge(MAX_FILE_BYTES));
            }
            content.extend_from_slice(&chunk);
        }
        if content.is_empty() {
            continue;
        }
        let storer = storer.clone();
        let name = block(move || storer.write(content.freeze(), extension.as_deref())).await??;
        uploaded.push(Uploaded {
            url: format!("{}/{}", UPLOAD_URL_PREFIX, name),
            name,
        });
    }
    if uploaded.is_empty() {
        return Err(Error::InvalidInput("no file in request".into()));
    }
    log::info!("{} uploaded {} file(s)", admin.email, uploaded.len());
    Ok(Json(uploaded))
}
