pub mod storers {
    pub mod local;
}

pub mod tokener {
    pub mod jwt;
}
