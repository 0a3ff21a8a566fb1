pub mod db;
mod errors;

pub mod favorite {
    pub mod repository;
}
pub mod ingredient {
    pub mod entity;
    pub mod repository;
}
pub mod recipe {
    pub mod entity;
    pub mod repository;
}
pub mod shopping_cart {
    pub mod entity;
    pub mod repository;
}
pub mod subscription {
    pub mod repository;
}
pub mod tag {
    pub mod entity;
    pub mod repository;
}
pub mod user {
    pub mod entity;
    pub mod repository;
}
