pub mod application {
    pub mod favorite {
        pub mod add;
        pub mod remove;
    }
    pub mod ingredient {
        pub mod get_all;
        pub mod get_by_id;
    }
    pub mod recipe {
        pub mod details;
        pub mod get_all;
        pub mod get_by_id;
    }
    pub mod shopping_cart {
        pub mod add;
        pub mod aggregate;
        pub mod download;
        pub mod remove;
    }
    pub mod subscription {
        pub mod get_all;
        pub mod subscribe;
        pub mod unsubscribe;
    }
    pub mod tag {
        pub mod get_all;
        pub mod get_by_id;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod favorite {
        pub mod errors;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod remove;
        }
    }
    pub mod ingredient {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
        }
    }
    pub mod recipe {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
        }
    }
    pub mod shopping_cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod shopping_list;
        pub mod use_cases {
            pub mod add;
            pub mod aggregate;
            pub mod download;
            pub mod remove;
        }
    }
    pub mod subscription {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod subscribe;
            pub mod unsubscribe;
        }
    }
    pub mod tag {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
        }
    }
    pub mod user {
        pub mod model;
        pub mod repository;
    }
}
